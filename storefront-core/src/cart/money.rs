//! Money calculation utilities using rust_decimal for precision
//!
//! Prices arrive as f64 from the product snapshot; all arithmetic runs
//! through `Decimal` and converts back to f64 only at the edges.

use rust_decimal::prelude::*;
use shared::error::{AppError, AppResult};
use shared::models::{CartItem, CheckoutSummary};

/// Number of decimal places for monetary values
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparison (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Maximum allowed price value
const MAX_PRICE: f64 = 1_000_000.0;

/// Maximum allowed quantity per cart line
pub const MAX_QUANTITY: u32 = 9999;

/// Subtotal at or above which shipping is waived
pub const FREE_SHIPPING_THRESHOLD: f64 = 200.0;

/// Flat shipping fee below the free-shipping threshold
pub const SHIPPING_FEE: f64 = 15.0;

/// Validate that a float value is finite (not NaN or infinite)
fn require_finite(value: f64, name: &str) -> AppResult<()> {
    if !value.is_finite() {
        return Err(AppError::invalid_price(format!(
            "{} must be a finite number, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Validate a cart line before it enters or changes the cart
pub fn validate_cart_item(item: &CartItem) -> AppResult<()> {
    require_finite(item.price, "price")?;
    if item.price < 0.0 {
        return Err(AppError::invalid_price(format!(
            "price must be non-negative, got {}",
            item.price
        )));
    }
    if item.price > MAX_PRICE {
        return Err(AppError::invalid_price(format!(
            "price exceeds maximum allowed ({}), got {}",
            MAX_PRICE, item.price
        )));
    }

    if item.quantity == 0 {
        return Err(AppError::invalid_quantity(format!(
            "quantity must be positive, got {}",
            item.quantity
        )));
    }
    if item.quantity > MAX_QUANTITY {
        return Err(AppError::invalid_quantity(format!(
            "quantity exceeds maximum allowed ({}), got {}",
            MAX_QUANTITY, item.quantity
        )));
    }

    if item.selected_size.is_empty() {
        return Err(AppError::size_required());
    }

    Ok(())
}

/// Convert an f64 price to Decimal for precise calculation
///
/// Non-finite values convert to zero; validation rejects them upstream.
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert a Decimal back to f64, rounded to 2 decimal places
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Compare two monetary values within [`MONEY_TOLERANCE`]
pub fn money_eq(a: f64, b: f64) -> bool {
    (to_decimal(a) - to_decimal(b)).abs() < MONEY_TOLERANCE
}

/// Calculate one line's total with precise decimal arithmetic
///
/// Formula: price * quantity, rounded to 2 decimal places
pub fn calculate_item_total(price: f64, quantity: u32) -> Decimal {
    let total = to_decimal(price) * Decimal::from(quantity);
    total.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Calculate the cart subtotal across all lines
pub fn calculate_cart_total(items: &[CartItem]) -> Decimal {
    let total: Decimal = items
        .iter()
        .map(|item| calculate_item_total(item.price, item.quantity))
        .sum();
    total.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Checkout totals for a cart: subtotal, shipping, and their sum
///
/// Shipping is a flat fee, waived once the subtotal reaches
/// [`FREE_SHIPPING_THRESHOLD`].
pub fn checkout_summary(items: &[CartItem]) -> CheckoutSummary {
    let subtotal = calculate_cart_total(items);
    let shipping = if subtotal >= to_decimal(FREE_SHIPPING_THRESHOLD) {
        Decimal::ZERO
    } else {
        to_decimal(SHIPPING_FEE)
    };

    CheckoutSummary {
        subtotal: to_f64(subtotal),
        shipping: to_f64(shipping),
        total: to_f64(subtotal + shipping),
    }
}
