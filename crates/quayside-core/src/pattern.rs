//! Image qualifying patterns.
//!
//! An image belongs to a project when its reference starts with the
//! project's qualifying pattern, `<registry-host>/<group>/<project-id>`.
//! Matching is byte-exact: no normalization, case-folding or escaping is
//! performed on either side.

use crate::error::{CoreError, Result};

/// Separator between the registry group prefix and the project identifier.
pub const PATTERN_SEPARATOR: char = '/';

/// Checks that a project identifier can participate in pattern composition.
///
/// Empty identifiers and identifiers containing [`PATTERN_SEPARATOR`] are
/// rejected: the former would qualify every image in the group, the latter
/// would reach into another project's namespace.
///
/// # Errors
///
/// Returns [`CoreError::InvalidProjectId`] for rejected identifiers.
pub fn validate_project_id(project_id: &str) -> Result<()> {
    if project_id.is_empty() || project_id.contains(PATTERN_SEPARATOR) {
        return Err(CoreError::InvalidProjectId(project_id.to_string()));
    }
    Ok(())
}

/// Composes the qualifying pattern for a project.
///
/// Exactly one string composition; pure. The result is the strict prefix
/// every image reference belonging to the project must carry.
#[must_use]
pub fn qualifying_pattern(registry_with_group: &str, project_id: &str) -> String {
    format!("{registry_with_group}{PATTERN_SEPARATOR}{project_id}")
}

/// Narrows an image snapshot to the references matching a pattern.
///
/// The relative order of the snapshot is preserved and no deduplication is
/// performed. An empty result is a normal outcome, not a failure.
#[must_use]
pub fn filter_images(images: &[String], pattern: &str) -> Vec<String> {
    images
        .iter()
        .filter(|reference| reference.starts_with(pattern))
        .cloned()
        .collect()
}
