use tracing::{debug, info, warn};

use crate::camera::{Camera, Point};
use crate::hit;
use crate::input::{self, Button, EditorEvent, InputState, Modifiers, ViewState};
use crate::persist::{PersistError, SaveSink};
use crate::scene::{ItemId, PlacedItem, Scene};
use crate::template::ItemKind;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Cursor shown while the canvas follows the pointer.
const CURSOR_PANNING: &str = "grabbing";
/// Cursor restored when panning ends.
const CURSOR_DEFAULT: &str = "default";

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ItemCreated(PlacedItem),
    ItemUpdated(PlacedItem),
    ItemDeleted { id: ItemId },
    SelectionChanged(Option<ItemId>),
    SetCursor(String),
    /// The user asked to save; the host should call [`Editor::save`].
    SaveRequested,
    RenderNeeded,
}

/// The whole editor state: scene, view transform, view flags, and the
/// gesture state machine.
///
/// All handlers run synchronously and leave the state consistent before
/// returning. Placement, selection, rotate, delete, and label edits are only
/// honored while no pan is in progress.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    pub scene: Scene,
    pub camera: Camera,
    pub view: ViewState,
    pub input: InputState,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl Editor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the editor on a previously saved item list.
    #[must_use]
    pub fn with_items(items: Vec<PlacedItem>) -> Self {
        let mut editor = Self::new();
        editor.scene.load_seed(items);
        editor
    }

    /// Dispatch one input event.
    pub fn handle(&mut self, event: EditorEvent) -> Vec<Action> {
        match event {
            EditorEvent::DragStart { kind } => self.on_drag_start(&kind),
            EditorEvent::DragOver { at } => self.on_drag_over(at),
            EditorEvent::DragEnd => self.on_drag_end(),
            EditorEvent::Drop { at } => self.on_drop(at),
            EditorEvent::PointerDown { at, button, modifiers } => self.on_pointer_down(at, button, modifiers),
            EditorEvent::PointerMove { at } => self.on_pointer_move(at),
            EditorEvent::PointerUp { at } => self.on_pointer_up(at),
            EditorEvent::PointerLeave => self.on_pointer_leave(),
            EditorEvent::SetViewport { width, height } => self.set_viewport(width, height),
            EditorEvent::ZoomIn => self.zoom_in(),
            EditorEvent::ZoomOut => self.zoom_out(),
            EditorEvent::ToggleGrid => self.toggle_grid(),
            EditorEvent::RotateSelected => self.rotate_selected(),
            EditorEvent::DeleteSelected => self.delete_selected(),
            EditorEvent::SetLabel { text } => self.set_label(&text),
            EditorEvent::Save => vec![Action::SaveRequested],
        }
    }

    // --- Placement ---

    /// Remember the item kind carried by a palette drag.
    ///
    /// Payloads outside the catalogue leave no pending kind, so the matching
    /// drop does nothing.
    pub fn on_drag_start(&mut self, payload: &str) -> Vec<Action> {
        match payload.parse::<ItemKind>() {
            Ok(kind) => self.view.pending_kind = Some(kind),
            Err(e) => {
                warn!(error = %e, "ignoring drag with unrecognized payload");
                self.view.pending_kind = None;
            }
        }
        Vec::new()
    }

    /// Dragging over the canvas has no effect until the drop.
    pub fn on_drag_over(&mut self, _screen_pt: Point) -> Vec<Action> {
        Vec::new()
    }

    pub fn on_drag_end(&mut self) -> Vec<Action> {
        self.view.pending_kind = None;
        Vec::new()
    }

    /// Place the pending kind at the grid cell under `screen_pt`.
    pub fn on_drop(&mut self, screen_pt: Point) -> Vec<Action> {
        let Some(kind) = self.view.pending_kind.take() else {
            warn!("drop without a pending item type");
            return Vec::new();
        };
        if !self.input.is_idle() {
            return Vec::new();
        }
        let scene_pt = self.camera.screen_to_scene(screen_pt);
        let item = self.scene.add_item(kind, scene_pt).clone();
        vec![Action::ItemCreated(item), Action::RenderNeeded]
    }

    // --- Pointer ---

    /// Start a pan on empty canvas, or toggle selection on a plain click over
    /// an item. A plain click on empty canvas keeps the current selection.
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        if !self.input.is_idle() {
            return Vec::new();
        }

        let scene_pt = self.camera.screen_to_scene(screen_pt);
        let target = hit::hit_test(scene_pt, &self.scene);
        let pan_trigger = input::is_pan_trigger(button, modifiers);

        match target {
            None if pan_trigger => {
                let anchor = Point::new(screen_pt.x - self.camera.pan_x, screen_pt.y - self.camera.pan_y);
                self.input = InputState::Panning { anchor };
                debug!(x = screen_pt.x, y = screen_pt.y, "pan started");
                vec![Action::SetCursor(CURSOR_PANNING.to_owned())]
            }
            Some(id) if button == Button::Primary && !pan_trigger => {
                self.scene.select_item(id);
                vec![Action::SelectionChanged(self.scene.selected()), Action::RenderNeeded]
            }
            _ => Vec::new(),
        }
    }

    /// While panning, make the canvas track the pointer exactly.
    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        let InputState::Panning { anchor } = self.input else {
            return Vec::new();
        };
        self.camera.set_pan(Point::new(screen_pt.x - anchor.x, screen_pt.y - anchor.y));
        vec![Action::RenderNeeded]
    }

    pub fn on_pointer_up(&mut self, _screen_pt: Point) -> Vec<Action> {
        self.end_pan()
    }

    /// Leaving the canvas ends a pan exactly like releasing the button.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.end_pan()
    }

    fn end_pan(&mut self) -> Vec<Action> {
        if self.input.is_idle() {
            return Vec::new();
        }
        self.input = InputState::Idle;
        debug!(pan_x = self.camera.pan_x, pan_y = self.camera.pan_y, "pan ended");
        vec![Action::SetCursor(CURSOR_DEFAULT.to_owned())]
    }

    // --- View ---

    /// Update viewport dimensions in screen pixels.
    pub fn set_viewport(&mut self, width: f64, height: f64) -> Vec<Action> {
        self.viewport_width = width;
        self.viewport_height = height;
        vec![Action::RenderNeeded]
    }

    #[allow(clippy::float_cmp)]
    pub fn zoom_in(&mut self) -> Vec<Action> {
        let before = self.camera.zoom;
        self.camera.zoom_in();
        render_if(before != self.camera.zoom)
    }

    #[allow(clippy::float_cmp)]
    pub fn zoom_out(&mut self) -> Vec<Action> {
        let before = self.camera.zoom;
        self.camera.zoom_out();
        render_if(before != self.camera.zoom)
    }

    pub fn toggle_grid(&mut self) -> Vec<Action> {
        self.view.show_grid = !self.view.show_grid;
        vec![Action::RenderNeeded]
    }

    // --- Selection edits ---

    pub fn rotate_selected(&mut self) -> Vec<Action> {
        if !self.input.is_idle() {
            return Vec::new();
        }
        match self.scene.rotate_selected() {
            Some(item) => vec![Action::ItemUpdated(item.clone()), Action::RenderNeeded],
            None => Vec::new(),
        }
    }

    pub fn delete_selected(&mut self) -> Vec<Action> {
        if !self.input.is_idle() {
            return Vec::new();
        }
        match self.scene.delete_selected() {
            Some(item) => {
                vec![Action::ItemDeleted { id: item.id }, Action::SelectionChanged(None), Action::RenderNeeded]
            }
            None => Vec::new(),
        }
    }

    /// Replace the label of the selected item.
    pub fn set_label(&mut self, text: &str) -> Vec<Action> {
        if !self.input.is_idle() {
            return Vec::new();
        }
        let Some(id) = self.scene.selected() else {
            return Vec::new();
        };
        if !self.scene.update_label(&id, text) {
            return Vec::new();
        }
        match self.scene.get(&id) {
            Some(item) => vec![Action::ItemUpdated(item.clone()), Action::RenderNeeded],
            None => Vec::new(),
        }
    }

    // --- Persistence ---

    /// Hand the full item list to `sink` once. Sink errors are returned
    /// unchanged; nothing is retried.
    ///
    /// # Errors
    ///
    /// Returns whatever error the sink reports.
    pub fn save<S: SaveSink + ?Sized>(&self, sink: &mut S) -> Result<usize, PersistError> {
        let items = self.scene.export_items();
        match sink.save(&items) {
            Ok(()) => {
                info!(count = items.len(), "floorplan saved");
                Ok(items.len())
            }
            Err(e) => {
                warn!(error = %e, count = items.len(), "floorplan save failed");
                Err(e)
            }
        }
    }

    // --- Queries ---

    /// The currently selected item, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ItemId> {
        self.scene.selected()
    }

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// Look up an item by ID.
    #[must_use]
    pub fn item(&self, id: &ItemId) -> Option<&PlacedItem> {
        self.scene.get(id)
    }

    /// Snapshot of every item in z-order.
    #[must_use]
    pub fn export_items(&self) -> Vec<PlacedItem> {
        self.scene.export_items()
    }
}

fn render_if(changed: bool) -> Vec<Action> {
    if changed { vec![Action::RenderNeeded] } else { Vec::new() }
}
