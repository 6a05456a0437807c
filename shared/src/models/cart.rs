//! Cart models

use serde::{Deserialize, Serialize};

/// One cart line
///
/// `line_id` is content-addressed from product id + selected size, so
/// re-adding the same product in the same size merges into one line while
/// different sizes stay separate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Content-addressed line identifier
    pub line_id: String,
    /// Product reference
    pub product_id: String,
    /// Product name snapshot
    pub name: String,
    /// Unit price snapshot, display units
    pub price: f64,
    /// Product image snapshot
    pub image: String,
    pub selected_size: String,
    pub quantity: u32,
}

/// Checkout totals derived from the cart
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    /// Sum of line totals, 2-dp rounded
    pub subtotal: f64,
    /// Flat shipping fee; waived above the free-shipping threshold
    pub shipping: f64,
    pub total: f64,
}
