//! The pointer bridge for one surface.

use crate::controller::SessionController;
use crate::input::coords::CoordinateConverter;
use crate::input::error::PointerResult;
use crate::input::state::DragState;
use crate::input::surface::Surface;
use crate::types::{PointerEvent, RawPointerEvent, SurfacePoint};
use std::sync::Arc;
use tracing::debug;

/// Forwards normalized pointer events from a surface to a controller.
///
/// Owns the drag state of its surface exclusively. Handlers are called by the
/// host in device order; see `mouse_down`, `drag`, `mouse_up` and `click`.
pub struct PointerBridge<S: Surface> {
    pub(super) surface: S,
    pub(super) controller: Arc<dyn SessionController>,
    pub(super) drag: DragState,
}

impl<S: Surface> PointerBridge<S> {
    pub fn new(surface: S, controller: Arc<dyn SessionController>) -> Self {
        Self {
            surface,
            controller,
            drag: DragState::default(),
        }
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Client width of the surface, queried live.
    pub fn client_width(&self) -> f64 {
        self.surface.client_width()
    }

    /// Client height of the surface, queried live.
    pub fn client_height(&self) -> f64 {
        self.surface.client_height()
    }

    /// Normalize `event` against the surface's current bounding rectangle.
    pub fn surface_point(&self, event: &RawPointerEvent) -> PointerResult<SurfacePoint> {
        let rect = self.surface.bounding_rect();
        CoordinateConverter::client_to_surface(event, &rect)
    }

    pub(super) fn send(&self, event: PointerEvent) {
        debug!(event = event.name(), x = event.point().x, y = event.point().y, "pointer event");
        self.controller.emit(event);
    }
}
