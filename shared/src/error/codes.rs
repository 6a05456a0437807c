//! Unified error codes for the Grazel storefront core
//!
//! This module defines all error codes used across the workspace.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Validation errors
//! - 2xxx: Catalog errors
//! - 3xxx: Cart errors
//! - 4xxx: Order errors
//! - 5xxx: Fit profile errors
//! - 6xxx: Navigation intent errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,

    // ==================== 1xxx: Validation ====================
    /// Validation failed
    ValidationFailed = 1001,
    /// Price is not a valid amount
    InvalidPrice = 1002,
    /// Quantity is not a valid count
    InvalidQuantity = 1003,

    // ==================== 2xxx: Catalog ====================
    /// Product not found
    ProductNotFound = 2001,

    // ==================== 3xxx: Cart ====================
    /// Cart line not found
    CartItemNotFound = 3001,
    /// Size selection is required
    SizeRequired = 3002,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order has no items
    OrderEmpty = 4002,

    // ==================== 5xxx: Fit ====================
    /// Fit profile not found
    FitProfileNotFound = 5001,

    // ==================== 6xxx: Intent ====================
    /// Navigation filter key is not a known facet
    UnknownFacet = 6001,
    /// Navigation filter value is missing
    FilterValueRequired = 6002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",

            // Validation
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidPrice => "Price is invalid",
            ErrorCode::InvalidQuantity => "Quantity is invalid",

            // Catalog
            ErrorCode::ProductNotFound => "Product not found",

            // Cart
            ErrorCode::CartItemNotFound => "Cart item not found",
            ErrorCode::SizeRequired => "Size selection is required",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderEmpty => "Order has no items",

            // Fit
            ErrorCode::FitProfileNotFound => "Fit profile not found",

            // Intent
            ErrorCode::UnknownFacet => "Unknown filter facet",
            ErrorCode::FilterValueRequired => "Filter value is required",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),

            // Validation
            1001 => Ok(ErrorCode::ValidationFailed),
            1002 => Ok(ErrorCode::InvalidPrice),
            1003 => Ok(ErrorCode::InvalidQuantity),

            // Catalog
            2001 => Ok(ErrorCode::ProductNotFound),

            // Cart
            3001 => Ok(ErrorCode::CartItemNotFound),
            3002 => Ok(ErrorCode::SizeRequired),

            // Order
            4001 => Ok(ErrorCode::OrderNotFound),
            4002 => Ok(ErrorCode::OrderEmpty),

            // Fit
            5001 => Ok(ErrorCode::FitProfileNotFound),

            // Intent
            6001 => Ok(ErrorCode::UnknownFacet),
            6002 => Ok(ErrorCode::FilterValueRequired),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
