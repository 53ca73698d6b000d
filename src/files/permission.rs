//! Two-step permission check: query, then request only if needed.
//!
//! The steps stay separate. Requesting on a handle that is already granted
//! can prompt the user again on some platforms.

use crate::files::platform::{AccessMode, FileHandle, PermissionState};
use std::io;
use tracing::debug;

/// Returns true if `mode` access to `handle` is granted, prompting at most once.
pub async fn verify_permission(handle: &dyn FileHandle, mode: AccessMode) -> io::Result<bool> {
    if handle.query_permission(mode).await? == PermissionState::Granted {
        return Ok(true);
    }

    debug!(file = handle.name(), ?mode, "requesting permission");
    let answer = handle.request_permission(mode).await?;
    Ok(answer == PermissionState::Granted)
}
