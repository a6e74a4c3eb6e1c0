//! # quayside-core
//!
//! Image resolution and selection core for quayside.
//!
//! This crate answers two questions for a software project:
//!
//! - which locally known container images belong to it, and
//! - which image is its current deployable artifact.
//!
//! Both answers are computed over state owned by external collaborators,
//! reached through the traits in [`registry`], [`inventory`] and [`project`]:
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │                 ImageSelector                    │
//! │   resolve pattern → filter inventory → assign    │
//! └───────┬──────────────────┬──────────────┬────────┘
//!         ▼                  ▼              ▼
//!   ImageRegistry      ImageInventory   ProjectStore
//!   (naming policy)    (known images)   (active image)
//! ```
//!
//! The core itself is stateless: patterns are recomputed per request, the
//! inventory is read as a snapshot, and the active-image write is a plain
//! last-writer-wins overwrite.

#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod inventory;
pub mod pattern;
pub mod persistence;
pub mod project;
pub mod registry;
pub mod selector;

pub use config::Config;
pub use error::{CoreError, Result};
pub use inventory::{ImageInventory, InMemoryInventory};
pub use persistence::FileProjectStore;
pub use project::{InMemoryProjectStore, Project, ProjectStore};
pub use registry::{ImageRegistry, StaticRegistry};
pub use selector::ImageSelector;
