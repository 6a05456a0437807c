//! Data models
//!
//! Shared between the storefront core and the hosted backend (camelCase
//! JSON payloads). All IDs are opaque `String`s assigned by the backend.

pub mod cart;
pub mod filter;
pub mod fit;
pub mod order;
pub mod product;
pub mod user;

// Re-exports
pub use cart::*;
pub use filter::*;
pub use fit::*;
pub use order::*;
pub use product::*;
pub use user::*;
