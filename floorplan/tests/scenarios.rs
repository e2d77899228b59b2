//! End-to-end editor scenarios driven through the public API only.

#![allow(clippy::float_cmp)]

use floorplan::camera::Point;
use floorplan::engine::{Action, Editor};
use floorplan::input::{Button, EditorEvent, Modifiers};
use floorplan::persist::{self, MemorySink};
use floorplan::render::{self, DrawCommand};
use floorplan::scene::{Rotation, Size};

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn drop_item(editor: &mut Editor, kind: &str, at: Point) {
    editor.handle(EditorEvent::DragStart { kind: kind.into() });
    editor.handle(EditorEvent::Drop { at });
}

fn click(editor: &mut Editor, at: Point) {
    editor.handle(EditorEvent::PointerDown { at, button: Button::Primary, modifiers: Modifiers::none() });
    editor.handle(EditorEvent::PointerUp { at });
}

#[test]
fn single_stall_drop_snaps_to_grid() {
    let mut editor = Editor::new();
    drop_item(&mut editor, "single-stall", pt(97.0, 41.0));

    let items = editor.export_items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].position, pt(100.0, 40.0));
    assert_eq!(items[0].size, Size::new(60.0, 60.0));
    assert_eq!(items[0].rotation, Rotation::Deg0);
}

#[test]
fn rotating_square_and_oblong_items() {
    let mut editor = Editor::new();
    drop_item(&mut editor, "single-stall", pt(97.0, 41.0));
    click(&mut editor, pt(120.0, 60.0));
    editor.handle(EditorEvent::RotateSelected);

    let items = editor.export_items();
    let stall = &items[0];
    assert_eq!(stall.rotation, Rotation::Deg90);
    assert_eq!(stall.size, Size::new(60.0, 60.0));

    drop_item(&mut editor, "double-horizontal", pt(300.0, 300.0));
    click(&mut editor, pt(310.0, 310.0));
    editor.handle(EditorEvent::RotateSelected);

    let items = editor.export_items();
    let double = &items[1];
    assert_eq!(double.rotation, Rotation::Deg90);
    assert_eq!(double.size, Size::new(60.0, 120.0));
}

#[test]
fn pan_follows_pointer() {
    let mut editor = Editor::new();
    editor.handle(EditorEvent::PointerDown { at: pt(200.0, 150.0), button: Button::Middle, modifiers: Modifiers::none() });
    editor.handle(EditorEvent::PointerMove { at: pt(250.0, 180.0) });
    assert_eq!(editor.camera.pan(), pt(50.0, 30.0));
}

#[test]
fn pan_then_drop_lands_under_pointer() {
    let mut editor = Editor::new();
    editor.handle(EditorEvent::PointerDown { at: pt(0.0, 0.0), button: Button::Primary, modifiers: Modifiers::alt() });
    editor.handle(EditorEvent::PointerMove { at: pt(-200.0, -100.0) });
    editor.handle(EditorEvent::PointerUp { at: pt(-200.0, -100.0) });
    editor.handle(EditorEvent::ZoomIn);
    editor.handle(EditorEvent::ZoomIn);

    // zoom 1.4, pan (-200,-100): screen (80, 40) -> scene (200, 100)
    drop_item(&mut editor, "storage", pt(80.0, 40.0));
    assert_eq!(editor.export_items()[0].position, pt(200.0, 100.0));
}

#[test]
fn delete_then_save_excludes_item() {
    let mut editor = Editor::new();
    drop_item(&mut editor, "storage", pt(0.0, 0.0));
    drop_item(&mut editor, "tack-room", pt(200.0, 0.0));
    let doomed = editor.export_items()[0].id;

    click(&mut editor, pt(10.0, 10.0));
    editor.handle(EditorEvent::DeleteSelected);
    // Second delete has nothing selected.
    assert!(editor.handle(EditorEvent::DeleteSelected).is_empty());

    let actions = editor.handle(EditorEvent::Save);
    assert!(actions.contains(&Action::SaveRequested));
    let mut sink = MemorySink::new();
    editor.save(&mut sink).unwrap();

    let saved = sink.last().unwrap();
    assert_eq!(saved.len(), 1);
    assert!(saved.iter().all(|item| item.id != doomed));
    assert_eq!(saved[0].label, "Tack Room");
}

#[test]
fn saved_plan_reopens_identically() {
    let mut editor = Editor::new();
    drop_item(&mut editor, "double-vertical", pt(41.0, 59.0));
    click(&mut editor, pt(50.0, 70.0));
    editor.handle(EditorEvent::SetLabel { text: "Foaling".into() });
    editor.handle(EditorEvent::RotateSelected);
    editor.handle(EditorEvent::RotateSelected);

    let json = serde_json::to_vec(&editor.export_items()).unwrap();
    let reopened = Editor::with_items(persist::load_items(json.as_slice()).unwrap());

    assert_eq!(reopened.export_items(), editor.export_items());
    assert!(reopened.selection().is_none());
}

#[test]
fn scripted_session_from_json() {
    let script = r#"[
        {"op": "set_viewport", "width": 400, "height": 300},
        {"op": "drag_start", "kind": "single-stall"},
        {"op": "drop", "at": {"x": 97, "y": 41}},
        {"op": "pointer_down", "at": {"x": 110, "y": 50}, "button": "primary"},
        {"op": "pointer_up", "at": {"x": 110, "y": 50}},
        {"op": "set_label", "text": "Stall 1"},
        {"op": "toggle_grid"}
    ]"#;
    let events: Vec<EditorEvent> = serde_json::from_str(script).unwrap();
    let mut editor = Editor::new();
    for event in events {
        editor.handle(event);
    }

    let frame = render::frame(&editor);
    assert_eq!(frame.len(), 1);
    let DrawCommand::Item(quad) = &frame[0] else {
        panic!("expected an item quad, got {:?}", frame[0]);
    };
    assert_eq!(quad.label, "Stall 1");
    assert!(quad.selected);
    assert_eq!(quad.origin, pt(100.0, 40.0));
}
