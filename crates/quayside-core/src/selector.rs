//! Project image selection.

use crate::error::Result;
use crate::inventory::ImageInventory;
use crate::pattern::{filter_images, qualifying_pattern, validate_project_id};
use crate::project::ProjectStore;
use crate::registry::ImageRegistry;
use std::sync::Arc;

/// Resolves which images belong to a project and records its active image.
///
/// Stateless: every call recomputes the qualifying pattern, reads a fresh
/// inventory snapshot, and delegates writes to the project store. All three
/// collaborators are injected at construction, so tests substitute
/// deterministic doubles.
///
/// Requests may run concurrently; no locking or serialization happens here.
/// Concurrent `set_active_image` calls for the same project race and the
/// last write observed by the store wins.
pub struct ImageSelector {
    registry: Arc<dyn ImageRegistry>,
    inventory: Arc<dyn ImageInventory>,
    projects: Arc<dyn ProjectStore>,
}

impl ImageSelector {
    /// Creates a selector over the given collaborators.
    #[must_use]
    pub fn new(
        registry: Arc<dyn ImageRegistry>,
        inventory: Arc<dyn ImageInventory>,
        projects: Arc<dyn ProjectStore>,
    ) -> Self {
        Self {
            registry,
            inventory,
            projects,
        }
    }

    /// Returns the qualifying pattern for a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the project identifier is invalid.
    pub fn resolve_pattern(&self, project_id: &str) -> Result<String> {
        validate_project_id(project_id)?;
        Ok(qualifying_pattern(
            &self.registry.registry_with_group(),
            project_id,
        ))
    }

    /// Lists the known images belonging to a project.
    ///
    /// The result preserves the inventory's own order; an empty result is a
    /// normal outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if the project identifier is invalid or the
    /// inventory cannot be enumerated.
    pub async fn list_project_images(&self, project_id: &str) -> Result<Vec<String>> {
        let pattern = self.resolve_pattern(project_id)?;
        let images = self.inventory.list_images().await?;
        let matched = filter_images(&images, &pattern);
        tracing::debug!(
            project_id,
            pattern,
            total = images.len(),
            matched = matched.len(),
            "listed project images"
        );
        Ok(matched)
    }

    /// Records `image_name` as the project's active image.
    ///
    /// Single-assignment, last-writer-wins. On success the accepted name is
    /// echoed back; the write is durable per the store's own contract and is
    /// not independently verified. No retry is attempted on failure.
    ///
    /// # Errors
    ///
    /// Returns an error if the project identifier is invalid, the project is
    /// unknown, or the store write fails.
    pub async fn set_active_image(&self, project_id: &str, image_name: &str) -> Result<String> {
        validate_project_id(project_id)?;
        self.projects.set_active_image(project_id, image_name).await?;
        tracing::info!(project_id, image_name, "active image updated");
        Ok(image_name.to_string())
    }

    /// Reads the project's currently active image.
    ///
    /// # Errors
    ///
    /// Returns an error if the project identifier is invalid or the project
    /// is unknown.
    pub async fn active_image(&self, project_id: &str) -> Result<Option<String>> {
        validate_project_id(project_id)?;
        Ok(self.projects.active_image(project_id).await?)
    }
}
