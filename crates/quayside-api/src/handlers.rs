//! Request handlers for the image API endpoints.

use crate::api::AppState;
use crate::error::Result;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

/// Liveness probe.
pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Lists the known images belonging to a project.
///
/// The response order is the inventory's own; an empty array is a normal
/// outcome, not an error.
pub async fn list_project_images(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Json<Vec<String>>> {
    let images = state.selector.list_project_images(&project_id).await?;
    Ok(Json(images))
}

/// Active image selection payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct SetImageRequest {
    /// Image reference to record as the project's active image.
    #[serde(rename = "imageName")]
    pub image_name: String,
}

/// Records a project's active image and echoes the accepted name back.
pub async fn set_active_image(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    Json(body): Json<SetImageRequest>,
) -> Result<Json<SetImageRequest>> {
    let accepted = state
        .selector
        .set_active_image(&project_id, &body.image_name)
        .await?;
    Ok(Json(SetImageRequest {
        image_name: accepted,
    }))
}
