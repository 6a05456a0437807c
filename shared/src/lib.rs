//! Shared types for the Grazel storefront core
//!
//! Common types used across the workspace including data models,
//! error types, and navigation intent decoding.

pub mod error;
pub mod intent;
pub mod models;
pub mod types;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Error re-exports (for convenient access)
pub use error::{AppError, AppResult, ErrorCode};

// Intent re-exports (navigation decode boundary)
pub use intent::{FacetKey, NavigationFilter, initial_filter_state};
