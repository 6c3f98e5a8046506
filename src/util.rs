//! Geometry helpers for pointer smoothing.

use serde::{Deserialize, Serialize};

/// A point in surface-local floating-point coordinates.
///
/// Plain value type with no identity beyond its coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a point from raw coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the midpoint between this point and `other`.
    ///
    /// Used as the rendered endpoint of each smoothing segment: ending a
    /// segment halfway between consecutive raw samples damps pointer jitter
    /// while keeping the curve continuous.
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Componentwise average of three points.
///
/// Produces the recorded (as opposed to rendered) coordinate of a smoothing
/// step; see [`crate::input::Smoother`].
pub fn average3(a: Point, b: Point, c: Point) -> Point {
    Point::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0)
}
