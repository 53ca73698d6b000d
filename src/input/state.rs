//! Drag state machine for a single surface.
//!
//! ## State Transitions
//!
//! ```text
//! Idle     -> Dragging   (press)
//! Dragging -> Dragging   (move, updates current)
//! Dragging -> Idle       (release, or pointer leaving the window)
//! ```
//!
//! `Idle` is the "no drag" sentinel: there is no start or current position to
//! read, which keeps a stale position from ever being reported.

use crate::types::SurfacePoint;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No press is outstanding
    #[default]
    Idle,

    /// Between a press and its matching release
    Dragging {
        /// Surface-local position of the press
        start: SurfacePoint,
        /// Last reported surface-local position
        current: SurfacePoint,
    },
}

impl DragState {
    /// Returns true between a press and its release
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn start_position(&self) -> Option<SurfacePoint> {
        match self {
            Self::Dragging { start, .. } => Some(*start),
            Self::Idle => None,
        }
    }

    pub fn current_position(&self) -> Option<SurfacePoint> {
        match self {
            Self::Dragging { current, .. } => Some(*current),
            Self::Idle => None,
        }
    }

    /// Begin a drag at `start`, replacing any drag in progress.
    pub fn start(&mut self, start: SurfacePoint) {
        *self = Self::Dragging {
            start,
            current: start,
        };
    }

    /// Record a new current position. No effect while idle.
    pub fn set_current(&mut self, point: SurfacePoint) {
        if let Self::Dragging { current, .. } = self {
            *current = point;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
