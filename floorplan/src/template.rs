//! Item catalogue: the closed set of placeable stable items and their
//! default footprints.
//!
//! Footprints are stored in grid units. The scene multiplies them by
//! [`GRID_SIZE`] when an item is placed, so changing the grid size rescales
//! every template without touching this table.

#[cfg(test)]
#[path = "template_test.rs"]
mod template_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::GRID_SIZE;
use crate::error::FloorplanError;
use crate::scene::Size;

/// The kind of a placed stable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemKind {
    /// A single box stall.
    SingleStall,
    /// Two stalls side by side, wider than tall.
    DoubleHorizontal,
    /// Two stalls stacked, taller than wide.
    DoubleVertical,
    /// Feed or bedding storage.
    Storage,
    /// Tack room.
    TackRoom,
}

/// Default footprint and display metadata for an item kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemTemplate {
    /// Footprint width in grid units.
    pub width_units: u32,
    /// Footprint height in grid units.
    pub height_units: u32,
    /// Label given to freshly placed items.
    pub default_label: &'static str,
    /// Fill color as a CSS color string.
    pub color: &'static str,
}

impl ItemTemplate {
    /// Footprint in scene units.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width_units) * GRID_SIZE, f64::from(self.height_units) * GRID_SIZE)
    }
}

const SINGLE_STALL: ItemTemplate =
    ItemTemplate { width_units: 3, height_units: 3, default_label: "Single Stall", color: "#8B5A2B" };
const DOUBLE_HORIZONTAL: ItemTemplate =
    ItemTemplate { width_units: 6, height_units: 3, default_label: "Double Stall", color: "#A0522D" };
const DOUBLE_VERTICAL: ItemTemplate =
    ItemTemplate { width_units: 3, height_units: 6, default_label: "Double Stall", color: "#A0522D" };
const STORAGE: ItemTemplate =
    ItemTemplate { width_units: 4, height_units: 4, default_label: "Storage", color: "#6B7B8C" };
const TACK_ROOM: ItemTemplate =
    ItemTemplate { width_units: 4, height_units: 3, default_label: "Tack Room", color: "#4F7942" };

impl ItemKind {
    /// Every kind, in palette order.
    pub const ALL: [ItemKind; 5] =
        [Self::SingleStall, Self::DoubleHorizontal, Self::DoubleVertical, Self::Storage, Self::TackRoom];

    /// Look up the template for this kind.
    #[must_use]
    pub fn template(self) -> &'static ItemTemplate {
        match self {
            Self::SingleStall => &SINGLE_STALL,
            Self::DoubleHorizontal => &DOUBLE_HORIZONTAL,
            Self::DoubleVertical => &DOUBLE_VERTICAL,
            Self::Storage => &STORAGE,
            Self::TackRoom => &TACK_ROOM,
        }
    }

    /// The wire name carried by drag payloads and saved records.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SingleStall => "single-stall",
            Self::DoubleHorizontal => "double-horizontal",
            Self::DoubleVertical => "double-vertical",
            Self::Storage => "storage",
            Self::TackRoom => "tack-room",
        }
    }
}

/// Total lookup over the catalogue.
#[must_use]
pub fn lookup(kind: ItemKind) -> &'static ItemTemplate {
    kind.template()
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = FloorplanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| FloorplanError::UnknownItemKind(s.to_owned()))
    }
}
