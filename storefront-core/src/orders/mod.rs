//! Order assembly

pub mod builder;

// Re-exports
pub use builder::{build_order, next_order_id};
