//! File capability handling.
//!
//! Mediates user consent for file access: shows open/save dialogs through a
//! [`FilePicker`], keeps at most one live write capability per caller-named
//! slot in a [`CapabilityTable`], and performs permission-checked reads and
//! scoped writes.
//!
//! ## Error Handling
//!
//! All operations return `FileResult<T>`. Common errors include:
//! - `UserCancelled`: a dialog was dismissed
//! - `PermissionDenied`: the user declined access
//! - `NoCapability`: nothing was picked for the slot
//! - `CapabilityInvalidated`: the slot was re-picked while a write was pending

mod error;
mod local;
mod manager;
mod options;
mod permission;
mod platform;
mod slots;

pub use error::*;
pub use local::LocalFileHandle;
pub use manager::{FileCapabilityManager, OpenedFile};
pub use options::{Accept, FileTypeFilter, PickerOptions};
pub use permission::verify_permission;
pub use platform::{AccessMode, FileHandle, FilePicker, PermissionState, WritableStream};
pub use slots::{
    Capability, CapabilityId, CapabilityTable, PermissionStatus, SlotId, SlotPhase, SlotSnapshot,
};
