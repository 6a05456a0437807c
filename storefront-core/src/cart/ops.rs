//! Cart line operations
//!
//! Lines are keyed by a content-addressed id derived from product id and
//! selected size, so adding the same product in the same size twice
//! merges quantities instead of duplicating the line.

use sha2::{Digest, Sha256};
use shared::error::{AppError, AppResult};
use shared::models::{CartItem, Product};

use super::money;

/// Content-addressed cart line id for a product/size pair
pub fn line_id(product_id: &str, selected_size: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(product_id.as_bytes());
    hasher.update(b":");
    hasher.update(selected_size.as_bytes());
    let result = hasher.finalize();
    // Use first 16 bytes for shorter ID
    hex::encode(&result[..16])
}

/// Add one unit of a product in the chosen size
///
/// An existing line for the same product/size pair gains quantity;
/// otherwise a new line is appended. The line snapshots the product's
/// current price and image.
pub fn add_item(cart: &mut Vec<CartItem>, product: &Product, selected_size: &str) -> AppResult<()> {
    let candidate = CartItem {
        line_id: line_id(&product.id, selected_size),
        product_id: product.id.clone(),
        name: product.name.clone(),
        price: product.price,
        image: product.image.clone(),
        selected_size: selected_size.to_string(),
        quantity: 1,
    };
    money::validate_cart_item(&candidate)?;

    if let Some(existing) = cart
        .iter_mut()
        .find(|item| item.line_id == candidate.line_id)
    {
        if existing.quantity >= money::MAX_QUANTITY {
            return Err(AppError::invalid_quantity(format!(
                "quantity exceeds maximum allowed ({}), got {}",
                money::MAX_QUANTITY,
                existing.quantity as u64 + 1
            )));
        }
        existing.quantity += 1;
        tracing::debug!(line_id = %existing.line_id, quantity = existing.quantity, "merged cart line");
    } else {
        tracing::debug!(line_id = %candidate.line_id, product_id = %product.id, "added cart line");
        cart.push(candidate);
    }

    Ok(())
}

/// Set a line's quantity; zero or below removes the line
pub fn update_quantity(cart: &mut Vec<CartItem>, line_id: &str, quantity: i32) -> AppResult<()> {
    let Some(pos) = cart.iter().position(|item| item.line_id == line_id) else {
        return Err(AppError::cart_item_not_found(line_id));
    };

    if quantity <= 0 {
        cart.remove(pos);
        tracing::debug!(line_id = %line_id, "removed cart line via zero quantity");
        return Ok(());
    }

    let quantity = quantity as u32;
    if quantity > money::MAX_QUANTITY {
        return Err(AppError::invalid_quantity(format!(
            "quantity exceeds maximum allowed ({}), got {}",
            money::MAX_QUANTITY,
            quantity
        )));
    }

    cart[pos].quantity = quantity;
    Ok(())
}

/// Remove a line outright; returns whether it existed
pub fn remove_item(cart: &mut Vec<CartItem>, line_id: &str) -> bool {
    let before = cart.len();
    cart.retain(|item| item.line_id != line_id);
    cart.len() != before
}

/// Empty the cart
pub fn clear(cart: &mut Vec<CartItem>) {
    cart.clear();
}

/// Total units across all lines
pub fn item_count(cart: &[CartItem]) -> u32 {
    cart.iter().map(|item| item.quantity).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;
    use shared::models::Gender;

    fn product(id: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Sample {}", id),
            price,
            image: format!("{}.jpg", id),
            category: Some("Shirts".to_string()),
            fabric: "Cotton".to_string(),
            fit: "Regular Fit".to_string(),
            gender: Gender::Men,
            size: vec!["S".to_string(), "M".to_string()],
            is_essential: false,
            is_highlight: false,
            offer_percentage: None,
            season: None,
            festival: None,
            created_at: None,
        }
    }

    #[test]
    fn test_line_id_deterministic() {
        assert_eq!(line_id("p1", "M"), line_id("p1", "M"));
        assert_eq!(line_id("p1", "M").len(), 32); // 16 bytes hex-encoded
    }

    #[test]
    fn test_line_id_varies_by_product_and_size() {
        assert_ne!(line_id("p1", "M"), line_id("p1", "L"));
        assert_ne!(line_id("p1", "M"), line_id("p2", "M"));
    }

    #[test]
    fn test_add_item_appends_new_line() {
        let mut cart = Vec::new();
        add_item(&mut cart, &product("p1", 120.0), "M").unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].quantity, 1);
        assert_eq!(cart[0].product_id, "p1");
        assert_eq!(cart[0].selected_size, "M");
        assert_eq!(cart[0].line_id, line_id("p1", "M"));
    }

    #[test]
    fn test_add_item_merges_same_product_and_size() {
        let mut cart = Vec::new();
        let shirt = product("p1", 120.0);
        add_item(&mut cart, &shirt, "M").unwrap();
        add_item(&mut cart, &shirt, "M").unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].quantity, 2);
    }

    #[test]
    fn test_add_item_same_product_different_size_splits_lines() {
        let mut cart = Vec::new();
        let shirt = product("p1", 120.0);
        add_item(&mut cart, &shirt, "M").unwrap();
        add_item(&mut cart, &shirt, "L").unwrap();

        assert_eq!(cart.len(), 2);
        assert_eq!(item_count(&cart), 2);
    }

    #[test]
    fn test_add_item_rejects_empty_size() {
        let mut cart = Vec::new();
        let err = add_item(&mut cart, &product("p1", 120.0), "").unwrap_err();
        assert_eq!(err.code, ErrorCode::SizeRequired);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_item_rejects_invalid_price() {
        let mut cart = Vec::new();
        let err = add_item(&mut cart, &product("p1", -5.0), "M").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidPrice);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_item_caps_merged_quantity() {
        let mut cart = Vec::new();
        add_item(&mut cart, &product("p1", 10.0), "M").unwrap();
        cart[0].quantity = money::MAX_QUANTITY;

        let err = add_item(&mut cart, &product("p1", 10.0), "M").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidQuantity);
        assert_eq!(cart[0].quantity, money::MAX_QUANTITY);
    }

    #[test]
    fn test_update_quantity_sets_value() {
        let mut cart = Vec::new();
        add_item(&mut cart, &product("p1", 120.0), "M").unwrap();

        let id = cart[0].line_id.clone();
        update_quantity(&mut cart, &id, 5).unwrap();
        assert_eq!(cart[0].quantity, 5);
    }

    #[test]
    fn test_update_quantity_zero_removes_line() {
        let mut cart = Vec::new();
        add_item(&mut cart, &product("p1", 120.0), "M").unwrap();

        let id = cart[0].line_id.clone();
        update_quantity(&mut cart, &id, 0).unwrap();
        assert!(cart.is_empty());

        let mut cart = Vec::new();
        add_item(&mut cart, &product("p1", 120.0), "M").unwrap();
        let id = cart[0].line_id.clone();
        update_quantity(&mut cart, &id, -3).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_unknown_line() {
        let mut cart = Vec::new();
        let err = update_quantity(&mut cart, "missing", 2).unwrap_err();
        assert_eq!(err.code, ErrorCode::CartItemNotFound);
    }

    #[test]
    fn test_update_quantity_rejects_excessive_value() {
        let mut cart = Vec::new();
        add_item(&mut cart, &product("p1", 120.0), "M").unwrap();

        let id = cart[0].line_id.clone();
        let err = update_quantity(&mut cart, &id, money::MAX_QUANTITY as i32 + 1).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidQuantity);
        assert_eq!(cart[0].quantity, 1);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Vec::new();
        add_item(&mut cart, &product("p1", 120.0), "M").unwrap();
        let id = cart[0].line_id.clone();

        assert!(remove_item(&mut cart, &id));
        assert!(cart.is_empty());
        assert!(!remove_item(&mut cart, &id));
    }

    #[test]
    fn test_clear_and_item_count() {
        let mut cart = Vec::new();
        let shirt = product("p1", 120.0);
        add_item(&mut cart, &shirt, "M").unwrap();
        add_item(&mut cart, &shirt, "M").unwrap();
        add_item(&mut cart, &shirt, "L").unwrap();
        assert_eq!(item_count(&cart), 3);

        clear(&mut cart);
        assert!(cart.is_empty());
        assert_eq!(item_count(&cart), 0);
    }

    #[test]
    fn test_line_snapshots_product_price() {
        let mut cart = Vec::new();
        add_item(&mut cart, &product("p1", 120.0), "M").unwrap();

        // A later snapshot price change does not touch existing lines
        add_item(&mut cart, &product("p2", 80.0), "M").unwrap();
        assert_eq!(cart[0].price, 120.0);
        assert_eq!(cart[1].price, 80.0);
    }
}
