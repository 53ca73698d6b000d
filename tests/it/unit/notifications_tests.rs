//! Unit tests for notifications module.

use canvas_bridge::files::{FileError, SlotId};
use canvas_bridge::{Notice, NoticeLevel};
use std::io;

#[test]
fn test_notice_creation() {
    let notice = Notice::error("Test message");
    assert_eq!(notice.message, "Test message");
    assert_eq!(notice.level, NoticeLevel::Error);
}

#[test]
fn test_notice_display_has_icon() {
    assert_eq!(Notice::info("Saved").to_string(), "ℹ Saved");
    assert_eq!(Notice::warning("Careful").to_string(), "⚠ Careful");
    assert_eq!(Notice::error("Broken").to_string(), "✗ Broken");
}

#[test]
fn test_cancellation_is_informational() {
    let notice = Notice::from_file_error(&FileError::UserCancelled);
    assert_eq!(notice.level, NoticeLevel::Info);
    assert_eq!(notice.message, "File selection was cancelled");
}

#[test]
fn test_missing_capability_is_a_warning() {
    let err = FileError::NoCapability {
        slot: SlotId::from("doc"),
    };
    let notice = Notice::from_file_error(&err);
    assert_eq!(notice.level, NoticeLevel::Warning);
    assert_eq!(notice.message, "No file has been chosen for \"doc\"");
}

#[test]
fn test_io_failures_are_errors() {
    let errors = [
        FileError::PermissionDenied {
            name: "a.json".to_string(),
        },
        FileError::WriteError {
            name: "a.json".to_string(),
            source: io::Error::other("disk full"),
        },
        FileError::CapabilityInvalidated {
            slot: SlotId::from("doc"),
        },
        FileError::Unsupported("save dialogs"),
    ];

    for err in &errors {
        assert_eq!(Notice::from_file_error(err).level, NoticeLevel::Error, "{err}");
    }
}
