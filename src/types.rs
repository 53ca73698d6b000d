//! Core value types shared by the pointer bridge and the session layer.
//!
//! Everything here is plain data: surface geometry, raw device events as the
//! host delivers them, and the normalized event vocabulary sent to the remote
//! session controller.

use serde::{Deserialize, Serialize};

/// A point in surface-local coordinates (origin at the surface's top-left).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfacePoint {
    pub x: f64,
    pub y: f64,
}

impl SurfacePoint {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bounding rectangle of a surface in client (viewport) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// A raw pointer event as delivered by the host.
///
/// Coordinates are optional because hosts can hand over synthetic or partially
/// populated events. Normalizing such an event fails instead of guessing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RawPointerEvent {
    pub client_x: Option<f64>,
    pub client_y: Option<f64>,
}

impl RawPointerEvent {
    /// Event at the given client coordinates.
    pub fn at(client_x: f64, client_y: f64) -> Self {
        Self {
            client_x: Some(client_x),
            client_y: Some(client_y),
        }
    }
}

/// Normalized pointer events forwarded to the session controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointerEvent {
    Pressed { x: f64, y: f64 },
    Dragged { x: f64, y: f64 },
    Released { x: f64, y: f64 },
    Clicked { x: f64, y: f64 },
    DoubleClicked { x: f64, y: f64 },
}

impl PointerEvent {
    pub fn pressed(p: SurfacePoint) -> Self {
        Self::Pressed { x: p.x, y: p.y }
    }

    pub fn dragged(p: SurfacePoint) -> Self {
        Self::Dragged { x: p.x, y: p.y }
    }

    pub fn released(p: SurfacePoint) -> Self {
        Self::Released { x: p.x, y: p.y }
    }

    pub fn clicked(p: SurfacePoint) -> Self {
        Self::Clicked { x: p.x, y: p.y }
    }

    pub fn double_clicked(p: SurfacePoint) -> Self {
        Self::DoubleClicked { x: p.x, y: p.y }
    }

    /// Surface-local position carried by the event.
    pub fn point(&self) -> SurfacePoint {
        match *self {
            Self::Pressed { x, y }
            | Self::Dragged { x, y }
            | Self::Released { x, y }
            | Self::Clicked { x, y }
            | Self::DoubleClicked { x, y } => SurfacePoint::new(x, y),
        }
    }

    /// Stable name of the event, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pressed { .. } => "pressed",
            Self::Dragged { .. } => "dragged",
            Self::Released { .. } => "released",
            Self::Clicked { .. } => "clicked",
            Self::DoubleClicked { .. } => "double_clicked",
        }
    }
}
