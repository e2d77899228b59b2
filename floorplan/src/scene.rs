//! Scene model: placed items, their order, and the current selection.
//!
//! Items live in a `Vec` whose order is the z-order: later items draw on top
//! and win hit tests. The scene owns at most one selected id. Every mutation
//! is synchronous and either applies fully or is a no-op; none of them fail.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::camera::Point;
use crate::error::FloorplanError;
use crate::grid;
use crate::template::ItemKind;

/// Unique identifier for a placed item. Time-ordered, never reused.
pub type ItemId = Uuid;

/// Width and height in scene units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The same footprint turned a quarter turn.
    #[must_use]
    pub fn swapped(self) -> Self {
        Self { width: self.height, height: self.width }
    }
}

/// Clockwise rotation in quarter turns. Serialized as integer degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// The next quarter turn clockwise, wrapping 270 back to 0.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Deg0 => Self::Deg90,
            Self::Deg90 => Self::Deg180,
            Self::Deg180 => Self::Deg270,
            Self::Deg270 => Self::Deg0,
        }
    }

    #[must_use]
    pub fn degrees(self) -> u16 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }
}

impl From<Rotation> for u16 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}

impl TryFrom<u16> for Rotation {
    type Error = FloorplanError;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Self::Deg0),
            90 => Ok(Self::Deg90),
            180 => Ok(Self::Deg180),
            270 => Ok(Self::Deg270),
            other => Err(FloorplanError::InvalidRotation(other)),
        }
    }
}

/// One item on the canvas. This is also the record handed to save sinks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedItem {
    /// Assigned at creation.
    pub id: ItemId,
    /// Catalogue entry this item was placed from.
    #[serde(rename = "type")]
    pub kind: ItemKind,
    /// Top-left corner of the footprint in scene units. Grid-aligned for
    /// every item placed through [`Scene::add_item`].
    pub position: Point,
    /// Footprint in scene units, already swapped for odd quarter turns.
    pub size: Size,
    pub rotation: Rotation,
    pub label: String,
}

impl PlacedItem {
    /// Build a fresh item from its template at a snapped position.
    #[must_use]
    pub fn from_template(kind: ItemKind, scene_pos: Point) -> Self {
        let template = kind.template();
        Self {
            id: Uuid::now_v7(),
            kind,
            position: grid::snap_point(scene_pos),
            size: template.size(),
            rotation: Rotation::Deg0,
            label: template.default_label.to_owned(),
        }
    }

    /// Whether `p` lies inside the footprint box, edges included.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.position.x
            && p.x <= self.position.x + self.size.width
            && p.y >= self.position.y
            && p.y <= self.position.y + self.size.height
    }
}

/// Ordered collection of placed items plus the single-item selection.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    items: Vec<PlacedItem>,
    selected: Option<ItemId>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all items with seed data, kept exactly as given.
    ///
    /// Seed positions are not re-snapped. Misaligned records are reported so
    /// hosts can spot data that did not come from this editor.
    pub fn load_seed(&mut self, items: Vec<PlacedItem>) {
        for item in &items {
            if !grid::is_point_aligned(item.position) {
                warn!(id = %item.id, x = item.position.x, y = item.position.y, "seed item is not grid-aligned");
            }
        }
        debug!(count = items.len(), "scene seeded");
        self.items = items;
        self.selected = None;
    }

    // --- Mutations ---

    /// Place a new item of `kind` at the grid cell nearest `scene_pos` and
    /// put it on top of the z-order.
    pub fn add_item(&mut self, kind: ItemKind, scene_pos: Point) -> &PlacedItem {
        let item = PlacedItem::from_template(kind, scene_pos);
        debug!(id = %item.id, %kind, x = item.position.x, y = item.position.y, "item added");
        self.items.push(item);
        &self.items[self.items.len() - 1]
    }

    /// Select `id`, or clear the selection if `id` is already selected.
    ///
    /// Returns `false` when `id` is not in the scene; the selection is then
    /// left untouched.
    pub fn select_item(&mut self, id: ItemId) -> bool {
        if self.selected == Some(id) {
            self.selected = None;
            return true;
        }
        if self.get(&id).is_none() {
            return false;
        }
        self.selected = Some(id);
        true
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Replace the label of `id`. No-op when nothing is selected or `id` is
    /// unknown. Returns whether a label changed.
    pub fn update_label(&mut self, id: &ItemId, text: &str) -> bool {
        if self.selected.is_none() {
            return false;
        }
        let Some(item) = self.get_mut(id) else {
            return false;
        };
        item.label = text.to_owned();
        true
    }

    /// Turn the selected item a quarter turn clockwise and swap its width and
    /// height. Four calls restore the original rotation and size.
    pub fn rotate_selected(&mut self) -> Option<&PlacedItem> {
        let id = self.selected?;
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.rotation = item.rotation.next();
        item.size = item.size.swapped();
        debug!(%id, rotation = item.rotation.degrees(), "item rotated");
        Some(&*item)
    }

    /// Remove the selected item and clear the selection.
    pub fn delete_selected(&mut self) -> Option<PlacedItem> {
        let id = self.selected.take()?;
        let index = self.items.iter().position(|item| item.id == id)?;
        debug!(%id, "item deleted");
        Some(self.items.remove(index))
    }

    // --- Queries ---

    /// Snapshot of every item in z-order, for the persistence hand-off.
    #[must_use]
    pub fn export_items(&self) -> Vec<PlacedItem> {
        self.items.clone()
    }

    /// Items in z-order (bottom first).
    #[must_use]
    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&PlacedItem> {
        self.items.iter().find(|item| item.id == *id)
    }

    fn get_mut(&mut self, id: &ItemId) -> Option<&mut PlacedItem> {
        self.items.iter_mut().find(|item| item.id == *id)
    }

    /// The currently selected item id, if any.
    #[must_use]
    pub fn selected(&self) -> Option<ItemId> {
        self.selected
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
