//! Common error types for quayside.
//!
//! This crate provides the collaborator-failure taxonomy shared across the
//! quayside crates. Every external subsystem the core talks to (image
//! inventory, registry naming, project store) reports failures as a
//! [`StoreError`], so callers branch on variants instead of parsing message
//! strings.
//!
//! # Usage
//!
//! ```rust
//! use quayside_error::StoreError;
//!
//! fn example() -> Result<(), StoreError> {
//!     Err(StoreError::not_found("project orders"))
//! }
//! ```

mod store;

pub use store::StoreError;

/// Result type alias using `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;
