//! Project metadata persistence.
//!
//! Stores project records to disk so active-image assignments survive
//! process restarts. One TOML file per project:
//!
//! ```text
//! <base_dir>/
//! └── <project-id>/
//!     └── project.toml
//! ```

use crate::project::{Project, ProjectStore};
use async_trait::async_trait;
use quayside_error::StoreError;
use std::fs;
use std::path::PathBuf;

/// File-backed project store.
pub struct FileProjectStore {
    /// Base directory for project records.
    base_dir: PathBuf,
}

impl FileProjectStore {
    /// Creates a store rooted at the given directory.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn project_dir(&self, project_id: &str) -> PathBuf {
        self.base_dir.join(project_id)
    }

    fn record_path(&self, project_id: &str) -> PathBuf {
        self.project_dir(project_id).join("project.toml")
    }

    /// Registers a project record on disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    pub fn create(&self, project: &Project) -> Result<(), StoreError> {
        let dir = self.project_dir(&project.project_id);
        fs::create_dir_all(&dir)?;

        let content = toml::to_string_pretty(project)
            .map_err(|e| StoreError::other(format!("failed to serialize project: {e}")))?;
        fs::write(self.record_path(&project.project_id), content)?;

        tracing::debug!(project_id = %project.project_id, "saved project record");
        Ok(())
    }

    /// Loads a project record.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record exists for the project.
    pub fn load(&self, project_id: &str) -> Result<Project, StoreError> {
        let path = self.record_path(project_id);
        let content = fs::read_to_string(&path)
            .map_err(|_| StoreError::not_found(format!("project {project_id}")))?;

        toml::from_str(&content)
            .map_err(|e| StoreError::other(format!("failed to parse project record: {e}")))
    }

    /// Lists all projects with a record on disk.
    #[must_use]
    pub fn list(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(&self.base_dir) else {
            return Vec::new();
        };

        entries
            .filter_map(|e| e.ok())
            .filter(|e| e.path().join("project.toml").exists())
            .filter_map(|e| e.file_name().into_string().ok())
            .collect()
    }
}

#[async_trait]
impl ProjectStore for FileProjectStore {
    async fn set_active_image(
        &self,
        project_id: &str,
        image_name: &str,
    ) -> Result<(), StoreError> {
        let mut project = self.load(project_id)?;
        project.active_image = Some(image_name.to_string());

        let content = toml::to_string_pretty(&project)
            .map_err(|e| StoreError::other(format!("failed to serialize project: {e}")))?;
        fs::write(self.record_path(project_id), content)?;

        tracing::debug!(project_id, image_name, "recorded active image");
        Ok(())
    }

    async fn active_image(&self, project_id: &str) -> Result<Option<String>, StoreError> {
        Ok(self.load(project_id)?.active_image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_and_load() {
        let temp = TempDir::new().unwrap();
        let store = FileProjectStore::new(temp.path());

        store.create(&Project::new("orders")).unwrap();

        let loaded = store.load("orders").unwrap();
        assert_eq!(loaded.project_id, "orders");
        assert_eq!(loaded.active_image, None);
    }

    #[tokio::test]
    async fn test_assignment_survives_restart() {
        let temp = TempDir::new().unwrap();

        {
            let store = FileProjectStore::new(temp.path());
            store.create(&Project::new("orders")).unwrap();
            store
                .set_active_image("orders", "reg/grp/orders:7")
                .await
                .unwrap();
        }

        let reopened = FileProjectStore::new(temp.path());
        let active = reopened.active_image("orders").await.unwrap();
        assert_eq!(active.as_deref(), Some("reg/grp/orders:7"));
    }

    #[tokio::test]
    async fn test_overwrite_keeps_last_value() {
        let temp = TempDir::new().unwrap();
        let store = FileProjectStore::new(temp.path());
        store.create(&Project::new("orders")).unwrap();

        store
            .set_active_image("orders", "reg/grp/orders:1")
            .await
            .unwrap();
        store
            .set_active_image("orders", "reg/grp/orders:2")
            .await
            .unwrap();

        let active = store.active_image("orders").await.unwrap();
        assert_eq!(active.as_deref(), Some("reg/grp/orders:2"));
    }

    #[tokio::test]
    async fn test_unknown_project_is_not_found() {
        let temp = TempDir::new().unwrap();
        let store = FileProjectStore::new(temp.path());

        let err = store
            .set_active_image("missing-project", "img:1")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_list() {
        let temp = TempDir::new().unwrap();
        let store = FileProjectStore::new(temp.path());

        for name in ["orders", "billing", "shipping"] {
            store.create(&Project::new(name)).unwrap();
        }

        let mut projects = store.list();
        projects.sort();
        assert_eq!(projects, vec!["billing", "orders", "shipping"]);
    }
}
