//! Click and double-click handling. Independent of drag state.

use crate::input::bridge::PointerBridge;
use crate::input::error::PointerResult;
use crate::input::surface::Surface;
use crate::types::{PointerEvent, RawPointerEvent};

impl<S: Surface> PointerBridge<S> {
    pub fn on_click(&mut self, event: &RawPointerEvent) -> PointerResult<()> {
        let point = self.surface_point(event)?;
        self.send(PointerEvent::clicked(point));
        Ok(())
    }

    pub fn on_double_click(&mut self, event: &RawPointerEvent) -> PointerResult<()> {
        let point = self.surface_point(event)?;
        self.send(PointerEvent::double_clicked(point));
        Ok(())
    }
}
