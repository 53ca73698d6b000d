//! The drawable surface the bridge listens on.

use crate::types::SurfaceRect;

/// A rectangular, resizable region that receives pointer input.
///
/// The host owns event subscription and calls the bridge's `on_*` handlers;
/// the bridge only needs geometry queries from the surface.
pub trait Surface: Send + Sync {
    /// Current bounding rectangle in client coordinates. Queried per event.
    fn bounding_rect(&self) -> SurfaceRect;

    fn client_width(&self) -> f64;

    fn client_height(&self) -> f64;
}
