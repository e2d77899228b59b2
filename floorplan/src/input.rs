//! Input model: modifier keys, mouse buttons, editor events, and the pan
//! state machine.
//!
//! `EditorEvent` is everything a host can feed the editor, from raw pointer
//! traffic to discrete toolbar actions. `InputState` is the gesture tracked
//! between pointer-down and pointer-up; the only gesture this editor has is
//! panning, so the machine has exactly two states.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::template::ItemKind;

/// Keyboard modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    /// Alt / Option key. Held with the primary button, it turns a press on
    /// empty canvas into a pan.
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// No modifier keys held.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Only Alt held.
    #[must_use]
    pub fn alt() -> Self {
        Self { alt: true, ..Self::default() }
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button.
    Secondary,
}

/// Whether a press with `button` and `modifiers` asks for a pan rather than a
/// selection click.
#[must_use]
pub fn is_pan_trigger(button: Button, modifiers: Modifiers) -> bool {
    match button {
        Button::Middle => true,
        Button::Primary => modifiers.alt,
        Button::Secondary => false,
    }
}

/// Every input the editor understands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditorEvent {
    /// A palette entry started dragging. `kind` is the raw drag payload.
    DragStart { kind: String },
    /// The drag moved over the canvas. Carries no state change.
    DragOver { at: Point },
    /// The drag ended without a drop.
    DragEnd,
    /// The drag was released over the canvas at a screen point.
    Drop { at: Point },
    PointerDown {
        at: Point,
        button: Button,
        #[serde(default)]
        modifiers: Modifiers,
    },
    PointerMove { at: Point },
    PointerUp { at: Point },
    /// The pointer left the canvas bounds.
    PointerLeave,
    /// The host viewport was resized, in screen pixels.
    SetViewport { width: f64, height: f64 },
    ZoomIn,
    ZoomOut,
    ToggleGrid,
    RotateSelected,
    DeleteSelected,
    /// Replace the label of the selected item.
    SetLabel { text: String },
    Save,
}

/// View and drag state that sits beside the scene.
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Whether the renderer draws grid lines.
    pub show_grid: bool,
    /// Item kind carried by the in-flight palette drag, if any.
    pub pending_kind: Option<ItemKind>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self { show_grid: true, pending_kind: None }
    }
}

/// Gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// The canvas follows the pointer.
    Panning {
        /// Pointer position minus pan at the moment panning began. The pan
        /// is recomputed as `pointer - anchor` on every move.
        anchor: Point,
    },
}

impl InputState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
