//! Error types for file capability operations.

use crate::files::slots::SlotId;
use std::io;
use thiserror::Error;

/// Failures of picker, permission and I/O operations.
///
/// Cancellation is an ordinary variant: a dismissed dialog is an expected
/// outcome that callers have to handle apart from I/O failure.
#[derive(Error, Debug)]
pub enum FileError {
    /// The user dismissed a picker dialog
    #[error("File selection was cancelled")]
    UserCancelled,

    /// The user declined read or write access
    #[error("Permission to access \"{name}\" was denied")]
    PermissionDenied { name: String },

    /// Reading content failed after a handle was obtained
    #[error("Could not read \"{name}\": {source}")]
    ReadError {
        name: String,
        #[source]
        source: io::Error,
    },

    /// Opening, writing or closing the write stream failed
    #[error("Could not write \"{name}\": {source}")]
    WriteError {
        name: String,
        #[source]
        source: io::Error,
    },

    /// Write or read attempted on a slot nothing was picked for
    #[error("No file has been chosen for \"{slot}\"")]
    NoCapability { slot: SlotId },

    /// The slot was re-picked or released after this capability was acquired
    #[error("The file chosen for \"{slot}\" has been replaced")]
    CapabilityInvalidated { slot: SlotId },

    /// The platform cannot show the requested dialog
    #[error("This platform does not support {0}")]
    Unsupported(&'static str),

    /// Picker options could not be parsed
    #[error("Invalid picker options: {0}")]
    InvalidOptions(#[from] serde_json::Error),

    /// The picker itself failed (as opposed to being dismissed)
    #[error("File dialog failed: {0}")]
    Picker(#[source] io::Error),
}

impl FileError {
    /// Returns true for outcomes caused by the user rather than the system.
    pub fn is_user_decision(&self) -> bool {
        matches!(self, Self::UserCancelled | Self::PermissionDenied { .. })
    }
}

/// Result type alias for file capability operations
pub type FileResult<T> = Result<T, FileError>;
