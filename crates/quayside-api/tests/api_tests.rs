//! Integration tests for the image API handlers.
//!
//! These tests drive the axum router directly and verify the HTTP contract:
//! routing, status mapping and JSON bodies.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use quayside_api::create_router;
use quayside_core::{
    ImageInventory, ImageSelector, InMemoryInventory, InMemoryProjectStore, Project,
    StaticRegistry,
};
use quayside_error::StoreError;
use std::sync::Arc;
use tower::ServiceExt;

/// Builds a router over in-memory collaborators.
fn create_test_app(images: Vec<&str>, projects: Vec<&str>) -> axum::Router {
    let store = InMemoryProjectStore::new();
    for project_id in projects {
        store.insert(Project::new(project_id));
    }

    let selector = ImageSelector::new(
        Arc::new(StaticRegistry::new("registry.example.com", "myorg")),
        Arc::new(InMemoryInventory::new(
            images.into_iter().map(String::from).collect(),
        )),
        Arc::new(store),
    );
    create_router(Arc::new(selector))
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

// ============================================================================
// System
// ============================================================================

#[tokio::test]
async fn test_health() {
    let app = create_test_app(vec![], vec![]);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_trace_id_header_present() {
    let app = create_test_app(vec![], vec![]);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.headers().contains_key("X-Trace-Id"));
}

// ============================================================================
// List project images
// ============================================================================

#[tokio::test]
async fn test_list_filters_by_project_prefix() {
    let app = create_test_app(
        vec![
            "registry.example.com/myorg/orders:1",
            "registry.example.com/myorg/billing:1",
        ],
        vec![],
    );

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/image/orders")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(
        json,
        serde_json::json!(["registry.example.com/myorg/orders:1"])
    );
}

#[tokio::test]
async fn test_list_empty_inventory_returns_empty_array() {
    let app = create_test_app(vec![], vec![]);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/image/orders")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn test_list_preserves_inventory_order() {
    let app = create_test_app(
        vec![
            "registry.example.com/myorg/orders:3",
            "registry.example.com/myorg/orders:1",
            "registry.example.com/myorg/orders:2",
        ],
        vec![],
    );

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/image/orders")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let json = body_json(response).await;
    assert_eq!(
        json,
        serde_json::json!([
            "registry.example.com/myorg/orders:3",
            "registry.example.com/myorg/orders:1",
            "registry.example.com/myorg/orders:2",
        ])
    );
}

#[tokio::test]
async fn test_list_inventory_failure_maps_to_503() {
    struct BrokenInventory;

    #[async_trait::async_trait]
    impl ImageInventory for BrokenInventory {
        async fn list_images(&self) -> Result<Vec<String>, StoreError> {
            Err(StoreError::unavailable("runtime socket closed"))
        }
    }

    let selector = ImageSelector::new(
        Arc::new(StaticRegistry::new("registry.example.com", "myorg")),
        Arc::new(BrokenInventory),
        Arc::new(InMemoryProjectStore::new()),
    );
    let app = create_router(Arc::new(selector));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/image/orders")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_json(response).await;
    assert_eq!(json["message"], "unavailable: runtime socket closed");
}

// ============================================================================
// Set active image
// ============================================================================

#[tokio::test]
async fn test_set_active_image_echoes_payload() {
    let app = create_test_app(vec![], vec!["orders"]);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/image/orders")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"imageName": "registry.example.com/myorg/orders:5"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["imageName"], "registry.example.com/myorg/orders:5");
}

#[tokio::test]
async fn test_set_active_image_missing_project_maps_to_404() {
    let app = create_test_app(vec![], vec![]);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/image/missing-project")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"imageName": "img:1"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "not found: project missing-project");
}

#[tokio::test]
async fn test_set_active_image_missing_field_is_rejected() {
    let app = create_test_app(vec![], vec!["orders"]);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/image/orders")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    // Json extraction rejects the payload before the core is reached.
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_set_then_list_round_trip() {
    let app = create_test_app(
        vec!["registry.example.com/myorg/orders:5"],
        vec!["orders"],
    );

    let set = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/image/orders")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"imageName": "registry.example.com/myorg/orders:5"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(set.status(), StatusCode::OK);

    let list = app
        .oneshot(
            Request::builder()
                .uri("/api/image/orders")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(list.status(), StatusCode::OK);
    assert_eq!(
        body_json(list).await,
        serde_json::json!(["registry.example.com/myorg/orders:5"])
    );
}
