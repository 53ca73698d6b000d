//! A session: one surface, one controller, one capability table.
//!
//! The session owns the pointer bridge and the file manager and is the
//! boundary the host calls into for file actions. Every boundary operation
//! converts a failure into exactly one [`Notice`] for the controller and
//! reports success or failure to the caller; nothing is retried.

use crate::controller::SessionController;
use crate::files::{
    Capability, CapabilityTable, FileCapabilityManager, FileError, FilePicker, PickerOptions,
    SlotId,
};
use crate::input::{PointerBridge, Surface};
use crate::notifications::{Notice, NoticeLevel};
use crate::settings::BridgeSettings;
use std::sync::Arc;
use tracing::{error, info, warn};

pub struct Session<S: Surface> {
    controller: Arc<dyn SessionController>,
    pointer: PointerBridge<S>,
    files: FileCapabilityManager,
    settings: BridgeSettings,
}

impl<S: Surface> Session<S> {
    pub fn new(
        surface: S,
        controller: Arc<dyn SessionController>,
        picker: Arc<dyn FilePicker>,
        settings: BridgeSettings,
    ) -> Self {
        let table = Arc::new(CapabilityTable::new());
        Self {
            pointer: PointerBridge::new(surface, Arc::clone(&controller)),
            files: FileCapabilityManager::new(picker, table),
            controller,
            settings,
        }
    }

    pub fn pointer(&self) -> &PointerBridge<S> {
        &self.pointer
    }

    /// The bridge, for routing raw device events.
    pub fn pointer_mut(&mut self) -> &mut PointerBridge<S> {
        &mut self.pointer
    }

    pub fn files(&self) -> &FileCapabilityManager {
        &self.files
    }

    pub fn capabilities(&self) -> &Arc<CapabilityTable> {
        self.files.table()
    }

    pub fn settings(&self) -> &BridgeSettings {
        &self.settings
    }

    // ==================== Boundary Operations ====================

    /// Open dialog with the configured options; sends the content to the
    /// controller. Returns the file name.
    pub async fn load_file(&self) -> Option<String> {
        match self.files.pick_for_open(&self.settings.open_picker).await {
            Ok(opened) => {
                self.controller.file_loaded(&opened.content);
                Some(opened.name)
            }
            Err(e) => self.fail("load_file", e),
        }
    }

    /// Save dialog with the configured options, then write `content`.
    pub async fn save_file(&self, content: &str) -> bool {
        match self.files.pick_and_save(&self.settings.save_picker, content).await {
            Ok(_) => true,
            Err(e) => self.fail("save_file", e).unwrap_or(false),
        }
    }

    /// Save dialog with caller-supplied JSON options, then write `content`.
    pub async fn pick_and_save_file(&self, options_json: &str, content: &str) -> bool {
        let result = match PickerOptions::from_json(options_json) {
            Ok(options) => self.files.pick_and_save(&options, content).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(_) => true,
            Err(e) => self.fail("pick_and_save_file", e).unwrap_or(false),
        }
    }

    /// Save dialog bound to `slot`; tells the controller the chosen name.
    pub async fn pick_save_file(
        &self,
        slot: impl Into<SlotId>,
        options_json: &str,
    ) -> Option<Capability> {
        let slot = slot.into();
        let result = match PickerOptions::from_json(options_json) {
            Ok(options) => self.files.pick_for_save(slot.clone(), &options).await,
            Err(e) => Err(e),
        };
        match result {
            Ok(capability) => {
                self.controller.file_name_set(&slot, capability.name());
                Some(capability)
            }
            Err(e) => self.fail("pick_save_file", e),
        }
    }

    /// Write `content` through the capability bound to `slot`.
    pub async fn write_file(&self, slot: &SlotId, content: &str) -> bool {
        match self.files.write_to_slot(slot, content).await {
            Ok(()) => true,
            Err(e) => self.fail("write_file", e).unwrap_or(false),
        }
    }

    /// Save `content`, then open a file and send its content to the controller.
    pub async fn save_then_load_file(&self, content: &str) -> bool {
        let result = self
            .files
            .save_then_reopen(&self.settings.save_picker, &self.settings.open_picker, content)
            .await;
        match result {
            Ok(opened) => {
                self.controller.file_loaded(&opened.content);
                true
            }
            Err(e) => self.fail("save_then_load_file", e).unwrap_or(false),
        }
    }

    /// Log `err` and hand its notice to the controller.
    fn fail<T>(&self, operation: &'static str, err: FileError) -> Option<T> {
        let notice = Notice::from_file_error(&err);
        match notice.level {
            NoticeLevel::Info => info!(operation = operation, "{err}"),
            NoticeLevel::Warning => warn!(operation = operation, "{err}"),
            NoticeLevel::Error => error!(operation = operation, error = ?err, "{err}"),
        }
        self.controller.notify(notice);
        None
    }
}
