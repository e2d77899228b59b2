//! Editor core for composing stable floor plans on an infinite canvas.
//!
//! The crate owns everything with real state behind the layout editor: the
//! catalogue of placeable items, the pan/zoom transform, grid snapping, the
//! ordered scene of placed items, and the state machine that turns raw
//! pointer and drag events into scene mutations. Hosts feed
//! [`input::EditorEvent`]s into [`engine::EngineCore`], act on the returned
//! [`engine::Action`]s, and hand the final item list to a
//! [`persist::SaveSink`] when the user saves.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Editor state and the event dispatcher |
//! | [`scene`] | Placed items, selection, and scene mutations |
//! | [`template`] | Item kinds and their default footprints |
//! | [`camera`] | Pan/zoom transform and coordinate conversions |
//! | [`grid`] | Grid snapping |
//! | [`hit`] | Hit-testing pointer positions against placed items |
//! | [`input`] | Input event types and the pan state machine |
//! | [`render`] | Display-list generation for the host renderer |
//! | [`persist`] | Save sinks and seed loading |
//! | [`error`] | Error types |
//! | [`consts`] | Shared numeric constants (grid size, zoom limits) |

pub mod camera;
pub mod consts;
pub mod engine;
pub mod error;
pub mod grid;
pub mod hit;
pub mod input;
pub mod persist;
pub mod render;
pub mod scene;
pub mod template;
