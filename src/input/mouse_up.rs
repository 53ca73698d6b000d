//! Release handling - ends a drag.

use crate::input::bridge::PointerBridge;
use crate::input::error::PointerResult;
use crate::input::surface::Surface;
use crate::profile_scope;
use crate::types::{PointerEvent, RawPointerEvent};

impl<S: Surface> PointerBridge<S> {
    /// Handle a release: emit `released` if a drag is active.
    ///
    /// The drag state is reset on every path, including when the release
    /// point cannot be computed.
    pub fn on_release(&mut self, event: &RawPointerEvent) -> PointerResult<()> {
        if !self.drag.is_active() {
            return Ok(());
        }

        profile_scope!("pointer_release");

        let result = self
            .surface_point(event)
            .map(|point| self.send(PointerEvent::released(point)));
        self.drag.reset();
        result
    }
}
