//! Press handling - starts a drag.

use crate::input::bridge::PointerBridge;
use crate::input::error::PointerResult;
use crate::input::surface::Surface;
use crate::profile_scope;
use crate::types::{PointerEvent, RawPointerEvent};

impl<S: Surface> PointerBridge<S> {
    /// Handle a press: start a drag at the pressed point, then emit `pressed`.
    ///
    /// A press during an active drag restarts the drag from the new point.
    pub fn on_press(&mut self, event: &RawPointerEvent) -> PointerResult<()> {
        profile_scope!("pointer_press");

        let point = self.surface_point(event)?;
        self.drag.start(point);
        self.send(PointerEvent::pressed(point));
        Ok(())
    }
}
