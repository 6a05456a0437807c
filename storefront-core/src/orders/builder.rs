//! Order assembly
//!
//! Pure order construction from cart lines. The caller owns draining the
//! cart and inserting the result into its order list.

use shared::error::{AppError, AppResult};
use shared::models::{CartItem, Order, OrderStatus};
use shared::types::Timestamp;

use crate::cart::money;

/// Sequential order id, 1-based and zero-padded: "ORD-001", "ORD-002", ...
pub fn next_order_id(existing_count: usize) -> String {
    format!("ORD-{:03}", existing_count + 1)
}

/// Assemble a pending order from cart lines
///
/// The total is the decimal sum of line totals; shipping is a checkout
/// display concern and is not folded in. An empty cart is rejected.
pub fn build_order(
    user_id: &str,
    items: Vec<CartItem>,
    shipping_address: &str,
    existing_count: usize,
    now: Timestamp,
) -> AppResult<Order> {
    if items.is_empty() {
        return Err(AppError::order_empty());
    }

    let total = money::to_f64(money::calculate_cart_total(&items));
    let order = Order {
        id: next_order_id(existing_count),
        user_id: user_id.to_string(),
        items,
        total,
        status: OrderStatus::Pending,
        created_at: now,
        shipping_address: shipping_address.to_string(),
    };

    tracing::info!(order_id = %order.id, user_id = %user_id, total = order.total, "assembled order");
    Ok(order)
}
