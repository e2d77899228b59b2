//! Persistence bridge: where saved floor plans go and where seeds come from.
//!
//! The editor never persists incrementally. On an explicit save it exports
//! the whole item list and hands it to a [`SaveSink`] exactly once. Storage
//! backends live outside this crate; the sinks here cover tests and local
//! JSON files.

#[cfg(test)]
#[path = "persist_test.rs"]
mod persist_test;

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::scene::PlacedItem;

/// Errors produced by save sinks and seed loading.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// The sink refused the save.
    #[error("save rejected: {0}")]
    Rejected(String),

    /// Items could not be encoded or a seed could not be decoded.
    #[error("floorplan JSON invalid: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading or writing the backing file failed.
    #[error("floorplan I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Receiver of complete floor plans.
pub trait SaveSink {
    /// Store the given items, in z-order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects or fails to store the items.
    fn save(&mut self, items: &[PlacedItem]) -> Result<(), PersistError>;
}

/// Keeps every saved snapshot in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    saves: Vec<Vec<PlacedItem>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every snapshot received, oldest first.
    #[must_use]
    pub fn saves(&self) -> &[Vec<PlacedItem>] {
        &self.saves
    }

    /// The most recent snapshot, if any save happened.
    #[must_use]
    pub fn last(&self) -> Option<&[PlacedItem]> {
        self.saves.last().map(Vec::as_slice)
    }
}

impl SaveSink for MemorySink {
    fn save(&mut self, items: &[PlacedItem]) -> Result<(), PersistError> {
        self.saves.push(items.to_vec());
        Ok(())
    }
}

/// Writes each save as pretty-printed JSON, replacing the file's contents.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SaveSink for JsonFileSink {
    fn save(&mut self, items: &[PlacedItem]) -> Result<(), PersistError> {
        let json = serde_json::to_string_pretty(items)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Parse a saved item list for use as an editor seed.
///
/// # Errors
///
/// Returns an error if the reader fails or the JSON does not describe a list
/// of placed items.
pub fn load_items<R: Read>(reader: R) -> Result<Vec<PlacedItem>, PersistError> {
    Ok(serde_json::from_reader(reader)?)
}
