//! Pointer input handling for a drawable surface.
//!
//! The bridge turns raw device events into the small vocabulary the remote
//! session controller understands: `pressed`, `dragged`, `released`,
//! `clicked` and `double_clicked`, each carrying surface-local coordinates.
//!
//! ## Modules
//!
//! - `state` - Drag state machine
//! - `coords` - Client to surface coordinate conversion
//! - `bridge` - The `PointerBridge` struct and surface queries
//! - `mouse_down` - Press handling (drag start)
//! - `drag` - Move handling and out-of-band drag termination
//! - `mouse_up` - Release handling (drag end)
//! - `click` - Click and double-click handling

mod bridge;
mod click;
pub mod coords;
mod drag;
mod error;
mod mouse_down;
mod mouse_up;
mod state;
mod surface;

pub use bridge::PointerBridge;
pub use error::{PointerError, PointerResult};
pub use state::DragState;
pub use surface::Surface;
