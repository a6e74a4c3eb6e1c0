//! Image inventory collaborator.
//!
//! The inventory is the container runtime's view of locally known images.
//! The core only ever reads a snapshot of it; ownership and mutation stay
//! with whatever feeds the inventory.

use async_trait::async_trait;
use quayside_error::StoreError;
use serde::Deserialize;
use std::path::Path;
use std::sync::RwLock;

/// Source of the full set of locally known image references.
///
/// `list_images` may be expensive; no pagination contract is assumed. The
/// returned order is the inventory's own and is carried through filtering
/// unchanged.
#[async_trait]
pub trait ImageInventory: Send + Sync {
    /// Returns a snapshot of all image references currently known.
    ///
    /// # Errors
    ///
    /// Returns an error if the inventory cannot be enumerated.
    async fn list_images(&self) -> Result<Vec<String>, StoreError>;
}

/// Inventory snapshot file format (`images.toml`).
#[derive(Debug, Default, Deserialize)]
struct ImageSnapshot {
    #[serde(default)]
    images: Vec<String>,
}

/// In-memory image inventory.
///
/// Holds a wholesale-replaceable snapshot. The feeder (a runtime watcher,
/// a snapshot file, a test) owns the content; readers see whichever
/// snapshot was most recently installed.
#[derive(Debug, Default)]
pub struct InMemoryInventory {
    images: RwLock<Vec<String>>,
}

impl InMemoryInventory {
    /// Creates an inventory pre-populated with the given references.
    #[must_use]
    pub fn new(images: Vec<String>) -> Self {
        Self {
            images: RwLock::new(images),
        }
    }

    /// Loads an inventory from a TOML snapshot file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_snapshot_file(path: &Path) -> Result<Self, StoreError> {
        let content = std::fs::read_to_string(path)?;
        let snapshot: ImageSnapshot = toml::from_str(&content)
            .map_err(|e| StoreError::other(format!("invalid image snapshot: {e}")))?;
        tracing::debug!(
            path = %path.display(),
            count = snapshot.images.len(),
            "loaded image snapshot"
        );
        Ok(Self::new(snapshot.images))
    }

    /// Replaces the current snapshot.
    pub fn replace(&self, images: Vec<String>) {
        if let Ok(mut guard) = self.images.write() {
            *guard = images;
        }
    }
}

#[async_trait]
impl ImageInventory for InMemoryInventory {
    async fn list_images(&self) -> Result<Vec<String>, StoreError> {
        let guard = self
            .images
            .read()
            .map_err(|_| StoreError::unavailable("image inventory poisoned"))?;
        Ok(guard.clone())
    }
}
