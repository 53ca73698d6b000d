//! The capability slot table.
//!
//! A session owns one [`CapabilityTable`] and shares it with the file manager.
//! Each slot holds at most one live handle. Installing a new handle for a slot
//! invalidates the previous acquisition: its [`CapabilityId`] stops being
//! current, and writes that started against it fail instead of going through
//! the new handle.
//!
//! ## Slot Phases
//!
//! ```text
//! Empty -> Picked               (save dialog completed)
//! Picked -> Verifying           (write requested)
//! Verifying -> Granted | Denied (permission answered)
//! Verifying -> previous phase   (permission check failed with an I/O error)
//! Granted -> Written            (scoped write closed successfully)
//! Denied | Written -> Verifying (every write queries again)
//! ```
//!
//! The phase records the last permission outcome; it never lets a write skip
//! the query.
//!
//! The lock is never held across an await; callers work on a [`SlotSnapshot`]
//! and re-check [`CapabilityTable::is_current`] after each suspension.

use crate::files::platform::FileHandle;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

/// Caller-chosen name of a slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotId(String);

impl SlotId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SlotId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SlotId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Identity of one acquisition of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CapabilityId(Uuid);

impl CapabilityId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for CapabilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Cached outcome of the last permission check on a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionStatus {
    Unknown,
    Granted,
    Denied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotPhase {
    Empty,
    Picked,
    Verifying,
    Granted,
    Denied,
    Written,
}

impl SlotPhase {
    pub fn permission(&self) -> PermissionStatus {
        match self {
            SlotPhase::Granted | SlotPhase::Written => PermissionStatus::Granted,
            SlotPhase::Denied => PermissionStatus::Denied,
            SlotPhase::Empty | SlotPhase::Picked | SlotPhase::Verifying => {
                PermissionStatus::Unknown
            }
        }
    }
}

/// An exclusively owned acquisition of a slot, returned by a save pick.
///
/// Not `Clone`: the holder is the slot's single writer. The capability goes
/// stale once the slot is re-picked or released.
#[derive(Debug, PartialEq, Eq)]
pub struct Capability {
    slot: SlotId,
    id: CapabilityId,
    name: String,
}

impl Capability {
    pub(crate) fn new(slot: SlotId, id: CapabilityId, name: String) -> Self {
        Self { slot, id, name }
    }

    pub fn slot(&self) -> &SlotId {
        &self.slot
    }

    pub fn id(&self) -> CapabilityId {
        self.id
    }

    /// Display name of the chosen file.
    pub fn name(&self) -> &str {
        &self.name
    }
}

struct SlotEntry {
    id: CapabilityId,
    handle: Arc<dyn FileHandle>,
    phase: SlotPhase,
}

/// Point-in-time copy of a slot, safe to hold across awaits.
#[derive(Clone)]
pub struct SlotSnapshot {
    pub id: CapabilityId,
    pub handle: Arc<dyn FileHandle>,
    pub phase: SlotPhase,
}

impl fmt::Debug for SlotSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotSnapshot")
            .field("id", &self.id)
            .field("file", &self.handle.name())
            .field("phase", &self.phase)
            .finish()
    }
}

#[derive(Default)]
pub struct CapabilityTable {
    slots: Mutex<HashMap<SlotId, SlotEntry>>,
}

impl CapabilityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `handle` to `slot`, invalidating whatever was there.
    ///
    /// Returns the id of the new acquisition.
    pub fn install(&self, slot: &SlotId, handle: Arc<dyn FileHandle>) -> CapabilityId {
        let id = CapabilityId::generate();
        let file = handle.name().to_string();
        let previous = self.slots.lock().insert(
            slot.clone(),
            SlotEntry {
                id,
                handle,
                phase: SlotPhase::Picked,
            },
        );

        if let Some(old) = previous {
            warn!(
                %slot,
                old_file = old.handle.name(),
                new_file = %file,
                "capability invalidated by re-pick"
            );
        } else {
            debug!(%slot, %file, "capability installed");
        }
        id
    }

    pub fn snapshot(&self, slot: &SlotId) -> Option<SlotSnapshot> {
        self.slots.lock().get(slot).map(|entry| SlotSnapshot {
            id: entry.id,
            handle: Arc::clone(&entry.handle),
            phase: entry.phase,
        })
    }

    /// True if `id` is still the live acquisition of `slot`.
    pub fn is_current(&self, slot: &SlotId, id: CapabilityId) -> bool {
        self.slots
            .lock()
            .get(slot)
            .is_some_and(|entry| entry.id == id)
    }

    /// Move the slot to `phase` if `id` is still current. Returns false otherwise.
    pub fn set_phase(&self, slot: &SlotId, id: CapabilityId, phase: SlotPhase) -> bool {
        let mut slots = self.slots.lock();
        match slots.get_mut(slot) {
            Some(entry) if entry.id == id => {
                debug!(%slot, from = ?entry.phase, to = ?phase, "slot phase");
                entry.phase = phase;
                true
            }
            _ => false,
        }
    }

    pub fn phase(&self, slot: &SlotId) -> SlotPhase {
        self.slots
            .lock()
            .get(slot)
            .map_or(SlotPhase::Empty, |entry| entry.phase)
    }

    pub fn permission(&self, slot: &SlotId) -> PermissionStatus {
        self.phase(slot).permission()
    }

    /// Display name of the file bound to `slot`.
    pub fn file_name(&self, slot: &SlotId) -> Option<String> {
        self.slots
            .lock()
            .get(slot)
            .map(|entry| entry.handle.name().to_string())
    }

    /// Drop the slot. Outstanding capabilities for it become stale.
    pub fn release(&self, slot: &SlotId) -> bool {
        let removed = self.slots.lock().remove(slot).is_some();
        if removed {
            debug!(%slot, "capability released");
        }
        removed
    }

    pub fn contains(&self, slot: &SlotId) -> bool {
        self.slots.lock().contains_key(slot)
    }

    pub fn len(&self) -> usize {
        self.slots.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.lock().is_empty()
    }

    /// Slot ids in sorted order.
    pub fn slot_ids(&self) -> Vec<SlotId> {
        let mut ids: Vec<SlotId> = self.slots.lock().keys().cloned().collect();
        ids.sort();
        ids
    }
}
