//! Error types for parsing editor input.
//!
//! Editor operations themselves are total: mutating without a selection or
//! zooming past a bound is a no-op or a clamp, never an error. These errors
//! only arise at the boundary where untyped data (drag payload strings, seed
//! JSON) becomes typed editor values.

/// Errors produced while converting external data into editor types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FloorplanError {
    /// A drag payload or seed record named an item type outside the catalogue.
    #[error("unknown item type: {0}")]
    UnknownItemKind(String),

    /// A seed record carried a rotation that is not a quarter turn.
    #[error("invalid rotation {0}: expected 0, 90, 180 or 270")]
    InvalidRotation(u16),
}
