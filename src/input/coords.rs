//! Conversion from client (viewport) coordinates to surface-local coordinates.
//!
//! The bounding rectangle is passed in per call. Callers re-query it from the
//! surface for every event since the surface can scroll or resize in between.

use crate::input::error::PointerError;
use crate::types::{RawPointerEvent, SurfacePoint, SurfaceRect};

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a raw device event to a point relative to `rect`'s top-left.
    #[inline]
    pub fn client_to_surface(
        event: &RawPointerEvent,
        rect: &SurfaceRect,
    ) -> Result<SurfacePoint, PointerError> {
        let x = event.client_x.ok_or(PointerError::MissingCoordinate("x"))?;
        let y = event.client_y.ok_or(PointerError::MissingCoordinate("y"))?;
        Ok(SurfacePoint::new(x - rect.left, y - rect.top))
    }
}
