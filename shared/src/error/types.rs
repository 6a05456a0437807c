//! Error types for storefront operations

use super::codes::ErrorCode;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the primary error type for the workspace, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details for debugging
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create an invalid price error
    pub fn invalid_price(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidPrice, msg)
    }

    /// Create an invalid quantity error
    pub fn invalid_quantity(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidQuantity, msg)
    }

    /// Create a product not found error
    pub fn product_not_found(id: impl Into<String>) -> Self {
        let id = id.into();
        Self::with_message(ErrorCode::ProductNotFound, format!("Product {} not found", id))
            .with_detail("id", id)
    }

    /// Create a cart item not found error
    pub fn cart_item_not_found(line_id: impl Into<String>) -> Self {
        let line_id = line_id.into();
        Self::with_message(
            ErrorCode::CartItemNotFound,
            format!("Cart line {} not found", line_id),
        )
        .with_detail("lineId", line_id)
    }

    /// Create a size required error
    pub fn size_required() -> Self {
        Self::new(ErrorCode::SizeRequired)
    }

    /// Create an order not found error
    pub fn order_not_found(id: impl Into<String>) -> Self {
        let id = id.into();
        Self::with_message(ErrorCode::OrderNotFound, format!("Order {} not found", id))
            .with_detail("id", id)
    }

    /// Create an empty order error
    pub fn order_empty() -> Self {
        Self::new(ErrorCode::OrderEmpty)
    }

    /// Create a fit profile not found error
    pub fn fit_profile_not_found(user_id: impl Into<String>) -> Self {
        let user_id = user_id.into();
        Self::with_message(
            ErrorCode::FitProfileNotFound,
            format!("Fit profile for user {} not found", user_id),
        )
        .with_detail("userId", user_id)
    }

    /// Create an unknown facet error
    pub fn unknown_facet(key: impl Into<String>) -> Self {
        let key = key.into();
        Self::with_message(ErrorCode::UnknownFacet, format!("Unknown filter facet: {}", key))
            .with_detail("facet", key)
    }

    /// Create a missing filter value error
    pub fn filter_value_required(key: impl Into<String>) -> Self {
        let key = key.into();
        Self::with_message(
            ErrorCode::FilterValueRequired,
            format!("Filter value is required for facet: {}", key),
        )
        .with_detail("facet", key)
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
