//! Pointer normalization errors.

use thiserror::Error;

/// Raised when a raw event cannot be normalized.
///
/// These indicate a host bug, so the bridge hands them back to the caller
/// instead of turning them into user notifications.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerError {
    #[error("pointer event has no {0} coordinate")]
    MissingCoordinate(&'static str),
}

pub type PointerResult<T> = Result<T, PointerError>;
