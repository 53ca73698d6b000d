//! Move handling during a drag.
//!
//! Moves arrive at device rate, most of them plain hover. Only moves between
//! a press and its release reach the controller.

use crate::constants::POINTER_HANDLER_WARN_MS;
use crate::input::bridge::PointerBridge;
use crate::input::error::PointerResult;
use crate::input::surface::Surface;
use crate::profile_scope;
use crate::types::{PointerEvent, RawPointerEvent};
use tracing::debug;

impl<S: Surface> PointerBridge<S> {
    /// Handle a move: emit `dragged` if a drag is active, otherwise nothing.
    pub fn on_move(&mut self, event: &RawPointerEvent) -> PointerResult<()> {
        // Guard first: a stray move after an out-of-band release must not
        // touch the surface or the controller.
        if !self.drag.is_active() {
            return Ok(());
        }

        profile_scope!("pointer_move", POINTER_HANDLER_WARN_MS);

        let point = self.surface_point(event)?;
        self.drag.set_current(point);
        self.send(PointerEvent::dragged(point));
        Ok(())
    }

    /// The pointer left the window mid-drag. Ends the drag without emitting.
    pub fn on_pointer_leave(&mut self) {
        if self.drag.is_active() {
            debug!("drag ended out of band");
        }
        self.drag.reset();
    }
}
