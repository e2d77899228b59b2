//! Shared numeric constants for the floorplan crate.

// ── Grid ────────────────────────────────────────────────────────

/// Edge length of one grid cell in scene units. Item positions are always
/// multiples of this value and template footprints are scaled by it.
pub const GRID_SIZE: f64 = 20.0;

// ── Zoom ────────────────────────────────────────────────────────

/// Smallest allowed zoom factor.
pub const ZOOM_MIN: f64 = 0.5;

/// Largest allowed zoom factor.
pub const ZOOM_MAX: f64 = 3.0;

/// Zoom change applied by one zoom-in or zoom-out action.
pub const ZOOM_STEP: f64 = 0.2;

/// Zoom factor of a freshly opened editor.
pub const DEFAULT_ZOOM: f64 = 1.0;
