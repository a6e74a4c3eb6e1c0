//! Project metadata collaborator.

use async_trait::async_trait;
use quayside_error::StoreError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;

/// Project record as the store sees it.
///
/// A project owns at most one active image reference. The reference is
/// overwritten on every successful selection; no history is retained here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project identifier.
    pub project_id: String,
    /// Currently active image reference, if one has been assigned.
    pub active_image: Option<String>,
}

impl Project {
    /// Creates a project record with no active image.
    #[must_use]
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            active_image: None,
        }
    }
}

/// Durable store for project metadata.
///
/// Project existence and image-name validation are this collaborator's
/// concern; the core delegates both. Writes follow the store's own
/// durability contract and are not independently verified.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Overwrites the project's active image reference.
    ///
    /// Last-writer-wins: no merge, no compare-and-swap. Concurrent writers
    /// race and the store observes whichever write lands last.
    ///
    /// # Errors
    ///
    /// Returns an error if the project is unknown or the write fails.
    async fn set_active_image(&self, project_id: &str, image_name: &str)
        -> Result<(), StoreError>;

    /// Reads the project's active image reference.
    ///
    /// # Errors
    ///
    /// Returns an error if the project is unknown or the store cannot be
    /// read.
    async fn active_image(&self, project_id: &str) -> Result<Option<String>, StoreError>;
}

/// In-memory project store.
#[derive(Debug, Default)]
pub struct InMemoryProjectStore {
    projects: RwLock<HashMap<String, Project>>,
}

impl InMemoryProjectStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a project so selection calls can address it.
    pub fn insert(&self, project: Project) {
        if let Ok(mut guard) = self.projects.write() {
            guard.insert(project.project_id.clone(), project);
        }
    }
}

#[async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn set_active_image(
        &self,
        project_id: &str,
        image_name: &str,
    ) -> Result<(), StoreError> {
        let mut guard = self
            .projects
            .write()
            .map_err(|_| StoreError::unavailable("project store poisoned"))?;
        let project = guard
            .get_mut(project_id)
            .ok_or_else(|| StoreError::not_found(format!("project {project_id}")))?;
        project.active_image = Some(image_name.to_string());
        Ok(())
    }

    async fn active_image(&self, project_id: &str) -> Result<Option<String>, StoreError> {
        let guard = self
            .projects
            .read()
            .map_err(|_| StoreError::unavailable("project store poisoned"))?;
        let project = guard
            .get(project_id)
            .ok_or_else(|| StoreError::not_found(format!("project {project_id}")))?;
        Ok(project.active_image.clone())
    }
}
