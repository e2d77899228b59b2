//! Grid snapping.
//!
//! Only item positions are snapped, and only at the moment of placement.
//! Sizes come from templates and are already whole multiples of the grid.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use crate::camera::Point;
use crate::consts::GRID_SIZE;

/// Round a scene coordinate to the nearest grid line.
#[must_use]
pub fn snap(value: f64) -> f64 {
    (value / GRID_SIZE).round() * GRID_SIZE
}

/// Snap both axes of a scene point independently.
#[must_use]
pub fn snap_point(p: Point) -> Point {
    Point::new(snap(p.x), snap(p.y))
}

/// Whether `value` already lies on a grid line.
#[must_use]
pub fn is_aligned(value: f64) -> bool {
    value.is_finite() && value % GRID_SIZE == 0.0
}

/// Whether both axes of `p` lie on grid lines.
#[must_use]
pub fn is_point_aligned(p: Point) -> bool {
    is_aligned(p.x) && is_aligned(p.y)
}
