//! User model

use crate::types::Timestamp;
use serde::{Deserialize, Serialize};

/// Storefront user account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: Timestamp,
}
