//! View transform between screen space and scene space.
//!
//! `scene = (screen - pan) / zoom` and its inverse `screen = scene * zoom + pan`.
//! Zoom is anchored at the scene origin: changing it never moves `pan`.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_ZOOM, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP};

/// A point in either screen or scene space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pan/zoom state for the infinite canvas.
///
/// `pan_x` / `pan_y` are in screen pixels and unbounded.
/// `zoom` is a scale factor kept within [`ZOOM_MIN`, `ZOOM_MAX`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: DEFAULT_ZOOM }
    }
}

impl Camera {
    /// Convert a screen-space point to scene coordinates.
    #[must_use]
    pub fn screen_to_scene(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.pan_x) / self.zoom,
            y: (screen.y - self.pan_y) / self.zoom,
        }
    }

    /// Convert a scene-space point to screen coordinates.
    #[must_use]
    pub fn scene_to_screen(&self, scene: Point) -> Point {
        Point {
            x: scene.x * self.zoom + self.pan_x,
            y: scene.y * self.zoom + self.pan_y,
        }
    }

    /// Convert a screen-space distance to a scene-space distance.
    #[must_use]
    pub fn screen_dist_to_scene(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }

    /// Current pan offset as a point.
    #[must_use]
    pub fn pan(&self) -> Point {
        Point::new(self.pan_x, self.pan_y)
    }

    /// Move the pan offset by a screen-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Replace the pan offset outright.
    pub fn set_pan(&mut self, pan: Point) {
        self.pan_x = pan.x;
        self.pan_y = pan.y;
    }

    /// Increase zoom by one step, saturating at [`ZOOM_MAX`].
    pub fn zoom_in(&mut self) {
        self.zoom = step_zoom(self.zoom, ZOOM_STEP);
    }

    /// Decrease zoom by one step, saturating at [`ZOOM_MIN`].
    pub fn zoom_out(&mut self) {
        self.zoom = step_zoom(self.zoom, -ZOOM_STEP);
    }
}

/// Apply a zoom step, rounding to one decimal so repeated steps do not
/// accumulate binary drift, then clamp to the allowed range.
fn step_zoom(zoom: f64, delta: f64) -> f64 {
    let next = ((zoom + delta) * 10.0).round() / 10.0;
    next.clamp(ZOOM_MIN, ZOOM_MAX)
}
