//! Rendering: turns editor state into a flat display list.
//!
//! The host owns the actual drawing surface. This module only decides what
//! to draw and where, in screen pixels, so hosts stay free of transform math.
//! It reads editor state and never mutates it.
//!
//! Draw order is grid first, then items bottom to top.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::camera::{Camera, Point};
use crate::consts::GRID_SIZE;
use crate::engine::Editor;
use crate::scene::{ItemId, PlacedItem};

/// One primitive for the host to draw, in screen space.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    GridLine { from: Point, to: Point },
    Item(ItemQuad),
}

/// Screen-space footprint of a placed item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemQuad {
    pub id: ItemId,
    /// Top-left corner of the footprint box.
    pub origin: Point,
    pub width: f64,
    pub height: f64,
    /// Clockwise rotation of the item's contents, in degrees. The box itself
    /// is already sized for the rotated footprint.
    pub rotation_deg: u16,
    pub fill: &'static str,
    pub label: String,
    pub selected: bool,
}

/// Build the display list for the current editor state.
#[must_use]
pub fn frame(editor: &Editor) -> Vec<DrawCommand> {
    let mut commands = Vec::new();

    if editor.view.show_grid {
        grid_lines(&editor.camera, editor.viewport_width, editor.viewport_height, &mut commands);
    }

    let selected = editor.scene.selected();
    for item in editor.scene.items() {
        commands.push(DrawCommand::Item(item_quad(&editor.camera, item, selected == Some(item.id))));
    }

    commands
}

fn item_quad(camera: &Camera, item: &PlacedItem, selected: bool) -> ItemQuad {
    ItemQuad {
        id: item.id,
        origin: camera.scene_to_screen(item.position),
        width: item.size.width * camera.zoom,
        height: item.size.height * camera.zoom,
        rotation_deg: item.rotation.degrees(),
        fill: item.kind.template().color,
        label: item.label.clone(),
        selected,
    }
}

/// Vertical then horizontal grid lines spanning the visible viewport.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn grid_lines(camera: &Camera, viewport_w: f64, viewport_h: f64, out: &mut Vec<DrawCommand>) {
    if viewport_w <= 0.0 || viewport_h <= 0.0 {
        return;
    }

    let top_left = camera.screen_to_scene(Point::new(0.0, 0.0));
    let bottom_right = camera.screen_to_scene(Point::new(viewport_w, viewport_h));

    let first_col = (top_left.x / GRID_SIZE).ceil() as i64;
    let last_col = (bottom_right.x / GRID_SIZE).floor() as i64;
    for col in first_col..=last_col {
        let x = col as f64 * GRID_SIZE;
        out.push(DrawCommand::GridLine {
            from: camera.scene_to_screen(Point::new(x, top_left.y)),
            to: camera.scene_to_screen(Point::new(x, bottom_right.y)),
        });
    }

    let first_row = (top_left.y / GRID_SIZE).ceil() as i64;
    let last_row = (bottom_right.y / GRID_SIZE).floor() as i64;
    for row in first_row..=last_row {
        let y = row as f64 * GRID_SIZE;
        out.push(DrawCommand::GridLine {
            from: camera.scene_to_screen(Point::new(top_left.x, y)),
            to: camera.scene_to_screen(Point::new(bottom_right.x, y)),
        });
    }
}
