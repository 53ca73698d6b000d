//! File capability manager - picks, permission-checked reads and scoped writes.
//!
//! ## Concurrency
//!
//! Operations run on a single cooperative task and suspend at dialogs,
//! permission prompts and stream I/O. Writes to the same slot are not
//! serialized: two concurrent `write_to_slot` calls on one slot finish in an
//! undefined order with undefined final content. Callers keep per-slot calls
//! sequential. The manager only guarantees that a write started against an
//! acquisition that is re-picked mid-flight fails with
//! [`FileError::CapabilityInvalidated`] instead of writing through the new
//! handle.

use crate::constants::SCOPED_WRITE_WARN_MS;
use crate::files::error::{FileError, FileResult};
use crate::files::options::PickerOptions;
use crate::files::permission::verify_permission;
use crate::files::platform::{AccessMode, FileHandle, FilePicker};
use crate::files::slots::{
    Capability, CapabilityId, CapabilityTable, SlotId, SlotPhase, SlotSnapshot,
};
use crate::perf::ScopedTimer;
use std::io;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Name and full content of a file the user opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenedFile {
    pub name: String,
    pub content: String,
}

pub struct FileCapabilityManager {
    picker: Arc<dyn FilePicker>,
    table: Arc<CapabilityTable>,
}

/// Acquisition a write is bound to, re-checked after each suspension.
#[derive(Clone, Copy)]
struct WriteTarget<'a> {
    slot: &'a SlotId,
    id: CapabilityId,
}

impl FileCapabilityManager {
    pub fn new(picker: Arc<dyn FilePicker>, table: Arc<CapabilityTable>) -> Self {
        Self { picker, table }
    }

    pub fn table(&self) -> &Arc<CapabilityTable> {
        &self.table
    }

    // ==================== Picking ====================

    /// Let the user choose an existing file and read it in full.
    ///
    /// Does not touch the slot table.
    pub async fn pick_for_open(&self, options: &PickerOptions) -> FileResult<OpenedFile> {
        let handles = self
            .picker
            .show_open_picker(options)
            .await
            .map_err(FileError::Picker)?
            .ok_or(FileError::UserCancelled)?;
        let handle = handles.into_iter().next().ok_or(FileError::UserCancelled)?;

        let name = handle.name().to_string();
        let content = handle
            .read_text()
            .await
            .map_err(|source| FileError::ReadError {
                name: name.clone(),
                source,
            })?;

        info!(file = %name, bytes = content.len(), "opened file");
        Ok(OpenedFile { name, content })
    }

    /// Let the user choose a save destination and bind it to `slot`.
    ///
    /// A previous acquisition of `slot` is invalidated. Permission is left
    /// unknown until the first write.
    pub async fn pick_for_save(
        &self,
        slot: impl Into<SlotId>,
        options: &PickerOptions,
    ) -> FileResult<Capability> {
        let slot = slot.into();
        let handle = self.show_save_picker(options).await?;
        let name = handle.name().to_string();
        let id = self.table.install(&slot, handle);

        info!(%slot, file = %name, "save destination chosen");
        Ok(Capability::new(slot, id, name))
    }

    async fn show_save_picker(&self, options: &PickerOptions) -> FileResult<Arc<dyn FileHandle>> {
        if !self.picker.supports_save_picker() {
            return Err(FileError::Unsupported("save dialogs"));
        }
        self.picker
            .show_save_picker(options)
            .await
            .map_err(FileError::Picker)?
            .ok_or(FileError::UserCancelled)
    }

    // ==================== Writing ====================

    /// Write `content` through whatever is currently bound to `slot`.
    pub async fn write_to_slot(&self, slot: &SlotId, content: &str) -> FileResult<()> {
        let snapshot = self.snapshot(slot)?;
        self.write_snapshot(slot, snapshot, content).await
    }

    /// Write `content` through an owned capability.
    ///
    /// Fails with `CapabilityInvalidated` if the slot has been re-picked or
    /// released since `capability` was acquired.
    pub async fn write(&self, capability: &Capability, content: &str) -> FileResult<()> {
        let slot = capability.slot();
        let snapshot = match self.table.snapshot(slot) {
            Some(snapshot) if snapshot.id == capability.id() => snapshot,
            _ => {
                warn!(%slot, "write through stale capability");
                return Err(FileError::CapabilityInvalidated { slot: slot.clone() });
            }
        };
        self.write_snapshot(slot, snapshot, content).await
    }

    async fn write_snapshot(
        &self,
        slot: &SlotId,
        snapshot: SlotSnapshot,
        content: &str,
    ) -> FileResult<()> {
        let target = WriteTarget {
            slot,
            id: snapshot.id,
        };
        let handle = snapshot.handle.as_ref();

        self.ensure_write_permission(target, &snapshot).await?;
        scoped_write(handle, content, || self.check_current(target)).await?;

        self.table.set_phase(slot, snapshot.id, SlotPhase::Written);
        info!(%slot, file = handle.name(), bytes = content.len(), "wrote file");
        Ok(())
    }

    /// Query, then request if needed. Runs before every write: a grant cached
    /// from an earlier write may have been revoked by the platform since.
    ///
    /// The slot phase records the outcome. On an I/O failure the slot goes
    /// back to the phase it had before the check.
    async fn ensure_write_permission(
        &self,
        target: WriteTarget<'_>,
        snapshot: &SlotSnapshot,
    ) -> FileResult<()> {
        let handle = snapshot.handle.as_ref();
        self.table.set_phase(target.slot, target.id, SlotPhase::Verifying);

        let granted = match verify_permission(handle, AccessMode::ReadWrite).await {
            Ok(granted) => granted,
            Err(source) => {
                self.table.set_phase(target.slot, target.id, snapshot.phase);
                error!(
                    slot = %target.slot,
                    file = handle.name(),
                    error = %source,
                    "permission check failed"
                );
                return Err(FileError::WriteError {
                    name: handle.name().to_string(),
                    source,
                });
            }
        };

        self.check_current(target)?;

        if granted {
            self.table.set_phase(target.slot, target.id, SlotPhase::Granted);
            Ok(())
        } else {
            self.table.set_phase(target.slot, target.id, SlotPhase::Denied);
            warn!(slot = %target.slot, file = handle.name(), "write permission denied");
            Err(FileError::PermissionDenied {
                name: handle.name().to_string(),
            })
        }
    }

    fn check_current(&self, target: WriteTarget<'_>) -> FileResult<()> {
        if self.table.is_current(target.slot, target.id) {
            Ok(())
        } else {
            warn!(slot = %target.slot, "capability replaced during write");
            Err(FileError::CapabilityInvalidated {
                slot: target.slot.clone(),
            })
        }
    }

    fn snapshot(&self, slot: &SlotId) -> FileResult<SlotSnapshot> {
        self.table.snapshot(slot).ok_or_else(|| {
            warn!(%slot, "no capability for slot");
            FileError::NoCapability { slot: slot.clone() }
        })
    }

    // ==================== Reading ====================

    /// Read the full text of the file bound to `slot`.
    ///
    /// Read permission is verified on every call and does not change the slot
    /// phase.
    pub async fn read_slot(&self, slot: &SlotId) -> FileResult<String> {
        let snapshot = self.snapshot(slot)?;
        let handle = snapshot.handle.as_ref();
        let name = handle.name().to_string();
        let read_err = |source: io::Error| FileError::ReadError {
            name: name.clone(),
            source,
        };

        let granted = verify_permission(handle, AccessMode::Read)
            .await
            .map_err(read_err)?;
        if !granted {
            warn!(%slot, file = %name, "read permission denied");
            return Err(FileError::PermissionDenied { name: name.clone() });
        }

        let content = handle.read_text().await.map_err(read_err)?;
        debug!(%slot, file = %name, bytes = content.len(), "read slot");
        Ok(content)
    }

    // ==================== Composites ====================

    /// Pick a destination and write to it in one go, without keeping the
    /// handle in any slot. Returns the chosen file's name.
    pub async fn pick_and_save(&self, options: &PickerOptions, content: &str) -> FileResult<String> {
        let handle = self.show_save_picker(options).await?;
        let name = handle.name().to_string();

        let granted = verify_permission(handle.as_ref(), AccessMode::ReadWrite)
            .await
            .map_err(|source| FileError::WriteError {
                name: name.clone(),
                source,
            })?;
        if !granted {
            warn!(file = %name, "write permission denied");
            return Err(FileError::PermissionDenied { name });
        }

        scoped_write(handle.as_ref(), content, || Ok(())).await?;
        info!(file = %name, bytes = content.len(), "saved file");
        Ok(name)
    }

    /// Save `content` through a save dialog, then let the user open a file.
    ///
    /// Two independent dialogs, not a transaction. A failed save skips the
    /// open dialog.
    pub async fn save_then_reopen(
        &self,
        save_options: &PickerOptions,
        open_options: &PickerOptions,
        content: &str,
    ) -> FileResult<OpenedFile> {
        self.pick_and_save(save_options, content).await?;
        self.pick_for_open(open_options).await
    }

    /// Drop whatever is bound to `slot`.
    pub fn release(&self, slot: &SlotId) -> bool {
        self.table.release(slot)
    }
}

/// Open a stream, write `content`, close. The stream is released on every path.
///
/// `still_current` runs after the write and before the commit; if it fails
/// the stream is aborted and its error returned.
async fn scoped_write<F>(handle: &dyn FileHandle, content: &str, still_current: F) -> FileResult<()>
where
    F: Fn() -> FileResult<()>,
{
    let _timer = ScopedTimer::new("scoped_write", SCOPED_WRITE_WARN_MS);
    let name = handle.name();
    let write_err = |source: io::Error| {
        error!(file = name, error = %source, "write failed");
        FileError::WriteError {
            name: name.to_string(),
            source,
        }
    };

    let mut stream = handle.create_writable().await.map_err(write_err)?;

    let outcome = match stream.write(content).await {
        Ok(()) => still_current(),
        Err(source) => Err(write_err(source)),
    };

    match outcome {
        Ok(()) => stream.close().await.map_err(write_err),
        Err(err) => {
            if let Err(abort_err) = stream.abort().await {
                warn!(file = name, error = %abort_err, "abort after failed write also failed");
            }
            Err(err)
        }
    }
}
