//! Platform seams: file dialogs, file handles and write streams.
//!
//! Every method that may wait on the user or on I/O is async. Implementations
//! exist for browser hosts (outside this crate), for local paths
//! ([`crate::files::LocalFileHandle`]) and as scripted fakes in
//! [`crate::testing`].

use crate::files::options::PickerOptions;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::io;
use std::sync::Arc;

/// Access level a permission query or request is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessMode {
    Read,
    ReadWrite,
}

/// Platform answer to a permission query or request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionState {
    Granted,
    Denied,
    /// Not decided yet; a request would prompt the user
    Prompt,
}

/// An opaque, user-granted reference to one file.
#[async_trait]
pub trait FileHandle: Send + Sync {
    /// Display name of the file (no directory part).
    fn name(&self) -> &str;

    /// Current permission state. Never prompts.
    async fn query_permission(&self, mode: AccessMode) -> io::Result<PermissionState>;

    /// Ask for permission, prompting the user if it is not decided yet.
    async fn request_permission(&self, mode: AccessMode) -> io::Result<PermissionState>;

    /// Full text content of the file.
    async fn read_text(&self) -> io::Result<String>;

    /// Open a stream that replaces the file's content when closed.
    async fn create_writable(&self) -> io::Result<Box<dyn WritableStream>>;
}

/// A write stream obtained from [`FileHandle::create_writable`].
///
/// Exactly one of `close` or `abort` must be called to release it.
#[async_trait]
pub trait WritableStream: Send {
    async fn write(&mut self, data: &str) -> io::Result<()>;

    /// Commit written data and release the stream.
    async fn close(self: Box<Self>) -> io::Result<()>;

    /// Discard written data and release the stream.
    async fn abort(self: Box<Self>) -> io::Result<()>;
}

/// User-facing file dialogs.
///
/// `Ok(None)` means the user dismissed the dialog. `Err` is reserved for the
/// dialog itself failing.
#[async_trait]
pub trait FilePicker: Send + Sync {
    async fn show_open_picker(
        &self,
        options: &PickerOptions,
    ) -> io::Result<Option<Vec<Arc<dyn FileHandle>>>>;

    async fn show_save_picker(
        &self,
        options: &PickerOptions,
    ) -> io::Result<Option<Arc<dyn FileHandle>>>;

    /// Whether save dialogs are available on this platform.
    fn supports_save_picker(&self) -> bool {
        true
    }
}
