//! Shopping cart
//!
//! Content-addressed cart lines plus the decimal money math behind cart
//! and checkout totals.

pub mod money;
pub mod ops;

// Re-exports
pub use money::{
    calculate_cart_total, calculate_item_total, checkout_summary, money_eq, validate_cart_item,
};
pub use ops::{add_item, clear, item_count, line_id, remove_item, update_quantity};
