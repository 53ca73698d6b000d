//! File handles over local filesystem paths.
//!
//! Used by hosts that resolve dialogs to paths themselves. Writes go to a
//! temporary file next to the target and replace it on close, so an aborted
//! or failed write leaves the previous content untouched.

use crate::files::platform::{AccessMode, FileHandle, PermissionState, WritableStream};
use async_trait::async_trait;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct LocalFileHandle {
    path: PathBuf,
    name: String,
}

impl LocalFileHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// The filesystem decides; there is nobody to prompt.
    fn current_permission(&self, mode: AccessMode) -> PermissionState {
        match fs::metadata(&self.path) {
            Ok(meta) => match mode {
                AccessMode::Read => PermissionState::Granted,
                AccessMode::ReadWrite if meta.permissions().readonly() => PermissionState::Denied,
                AccessMode::ReadWrite => PermissionState::Granted,
            },
            // A save target may not exist yet; writing needs its directory.
            Err(_) => match mode {
                AccessMode::Read => PermissionState::Denied,
                AccessMode::ReadWrite if self.parent_dir().is_dir() => PermissionState::Granted,
                AccessMode::ReadWrite => PermissionState::Denied,
            },
        }
    }
}

#[async_trait]
impl FileHandle for LocalFileHandle {
    fn name(&self) -> &str {
        &self.name
    }

    async fn query_permission(&self, mode: AccessMode) -> io::Result<PermissionState> {
        Ok(self.current_permission(mode))
    }

    async fn request_permission(&self, mode: AccessMode) -> io::Result<PermissionState> {
        Ok(self.current_permission(mode))
    }

    async fn read_text(&self) -> io::Result<String> {
        fs::read_to_string(&self.path)
    }

    async fn create_writable(&self) -> io::Result<Box<dyn WritableStream>> {
        let tmp = NamedTempFile::new_in(self.parent_dir())?;
        debug!(target_path = %self.path.display(), tmp = %tmp.path().display(), "opened write stream");
        Ok(Box::new(LocalWritable {
            tmp,
            target: self.path.clone(),
        }))
    }
}

struct LocalWritable {
    tmp: NamedTempFile,
    target: PathBuf,
}

#[async_trait]
impl WritableStream for LocalWritable {
    async fn write(&mut self, data: &str) -> io::Result<()> {
        self.tmp.write_all(data.as_bytes())
    }

    async fn close(self: Box<Self>) -> io::Result<()> {
        let LocalWritable { tmp, target } = *self;
        tmp.as_file().sync_all()?;
        tmp.persist(&target).map_err(|e| e.error)?;
        Ok(())
    }

    async fn abort(self: Box<Self>) -> io::Result<()> {
        self.tmp.close()
    }
}
