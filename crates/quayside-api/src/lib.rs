//! # quayside-api
//!
//! HTTP surface for quayside.
//!
//! Exposes the image-resolution and selection core over a small JSON API:
//!
//! - `GET /api/image/{project_id}` — images belonging to a project
//! - `POST /api/image/{project_id}` — record the project's active image
//! - `GET /health` — liveness probe
//!
//! The transport owns nothing but routing, status mapping and the serve
//! loop; all decision logic stays in `quayside-core`.

#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod api;
pub mod error;
pub mod handlers;
pub mod server;
pub mod trace;

pub use api::{create_router, AppState};
pub use error::{ApiError, Result};
pub use server::{ApiServer, ServerConfig};
