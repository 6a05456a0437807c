//! Order model

use super::cart::CartItem;
use crate::types::Timestamp;
use serde::{Deserialize, Serialize};

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Placed, awaiting processing
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

/// Placed order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Sequential display identifier ("ORD-001", "ORD-002", ...)
    pub id: String,
    pub user_id: String,
    /// Cart line snapshots at placement time
    pub items: Vec<CartItem>,
    /// Order total, 2-dp rounded
    pub total: f64,
    pub status: OrderStatus,
    pub created_at: Timestamp,
    pub shipping_address: String,
}
