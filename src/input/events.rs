//! Pointer event types and surface-local coordinate sampling.

use crate::util::Point;

/// Input source that produced a pointer notification.
///
/// Mouse and touch gestures are handled identically; the tag exists so hosts
/// can route both kinds of notification through the same surface without
/// losing provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    /// Mouse press/drag/release
    Mouse,
    /// Touch-equivalent contact on a touch screen
    Touch,
}

/// Coordinate space the event's position is expressed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerPosition {
    /// Already relative to the surface's top-left corner.
    Local(Point),
    /// Relative to the page; hosts that cannot report surface-relative
    /// offsets fall back to page coordinates, which must be normalized
    /// against the surface origin.
    Page(Point),
}

/// A raw pointer notification from the host environment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub source: PointerSource,
    pub position: PointerPosition,
}

impl PointerEvent {
    /// Mouse event with surface-local coordinates.
    pub fn mouse(x: f64, y: f64) -> Self {
        Self {
            source: PointerSource::Mouse,
            position: PointerPosition::Local(Point::new(x, y)),
        }
    }

    /// Touch event with surface-local coordinates.
    pub fn touch(x: f64, y: f64) -> Self {
        Self {
            source: PointerSource::Touch,
            position: PointerPosition::Local(Point::new(x, y)),
        }
    }

    /// Resolves the event to a surface-local point.
    ///
    /// `origin` is the page-space position of the surface's top-left corner;
    /// it only matters for [`PointerPosition::Page`] events.
    pub fn surface_local(&self, origin: Point) -> Point {
        match self.position {
            PointerPosition::Local(p) => p,
            PointerPosition::Page(p) => Point::new(p.x - origin.x, p.y - origin.y),
        }
    }
}
