#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::Point;
use crate::scene::{ItemId, Scene};

/// Return the topmost item whose footprint contains `scene_pt`, if any.
///
/// Items later in the scene are drawn on top, so the search runs back to front.
#[must_use]
pub fn hit_test(scene_pt: Point, scene: &Scene) -> Option<ItemId> {
    scene.items().iter().rev().find(|item| item.contains(scene_pt)).map(|item| item.id)
}
