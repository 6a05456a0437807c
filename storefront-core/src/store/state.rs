//! Owned view-session state
//!
//! `StoreState` is the single mutable container for one storefront
//! session. It is constructed empty or seeded from a backend snapshot
//! and passed by reference to every operation; nothing here is global
//! and nothing uses interior mutability.

use shared::error::{AppError, AppResult};
use shared::models::{CartItem, CheckoutSummary, FitProfile, Order, Product, User};
use shared::types::Timestamp;

use crate::cart::{money, ops};
use crate::orders;

/// Session state for one storefront view
#[derive(Debug, Clone, Default)]
pub struct StoreState {
    pub products: Vec<Product>,
    pub cart: Vec<CartItem>,
    pub orders: Vec<Order>,
    pub fit_profiles: Vec<FitProfile>,
    pub users: Vec<User>,
    pub current_user: Option<User>,
}

impl StoreState {
    /// Empty session state
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Products ====================

    /// Replace the product snapshot
    pub fn set_products(&mut self, products: Vec<Product>) {
        tracing::info!(count = products.len(), "loaded product snapshot");
        self.products = products;
    }

    /// Look up a product by id
    pub fn product(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    // ==================== Cart ====================

    /// Add one unit of a product to the cart in the chosen size
    pub fn add_to_cart(&mut self, product_id: &str, selected_size: &str) -> AppResult<()> {
        let Some(product) = self.products.iter().find(|p| p.id == product_id) else {
            return Err(AppError::product_not_found(product_id));
        };
        ops::add_item(&mut self.cart, product, selected_size)
    }

    /// Set a cart line's quantity; zero or below removes the line
    pub fn update_cart_quantity(&mut self, line_id: &str, quantity: i32) -> AppResult<()> {
        ops::update_quantity(&mut self.cart, line_id, quantity)
    }

    /// Remove a cart line outright; returns whether it existed
    pub fn remove_from_cart(&mut self, line_id: &str) -> bool {
        ops::remove_item(&mut self.cart, line_id)
    }

    /// Empty the cart
    pub fn clear_cart(&mut self) {
        ops::clear(&mut self.cart);
    }

    /// Total units in the cart
    pub fn cart_count(&self) -> u32 {
        ops::item_count(&self.cart)
    }

    /// Checkout totals for the current cart
    pub fn checkout_summary(&self) -> CheckoutSummary {
        money::checkout_summary(&self.cart)
    }

    // ==================== Orders ====================

    /// Drain the cart into a new pending order
    ///
    /// The cart is consumed only on success; the sole failure is an
    /// empty cart, which leaves nothing to restore.
    pub fn place_order(
        &mut self,
        user_id: &str,
        shipping_address: &str,
        now: Timestamp,
    ) -> AppResult<&Order> {
        let items = std::mem::take(&mut self.cart);
        let order =
            orders::build_order(user_id, items, shipping_address, self.orders.len(), now)?;
        self.orders.push(order);
        Ok(self.orders.last().expect("order list cannot be empty after push"))
    }

    /// Look up an order by id
    pub fn order(&self, order_id: &str) -> AppResult<&Order> {
        self.orders
            .iter()
            .find(|o| o.id == order_id)
            .ok_or_else(|| AppError::order_not_found(order_id))
    }

    /// All orders placed by one user, newest last
    pub fn orders_for(&self, user_id: &str) -> Vec<&Order> {
        self.orders.iter().filter(|o| o.user_id == user_id).collect()
    }

    // ==================== Fit profiles ====================

    /// Upsert a user's fit profile (one per user, newest wins)
    pub fn save_fit_profile(&mut self, profile: FitProfile) {
        tracing::info!(user_id = %profile.user_id, "saved fit profile");
        if let Some(existing) = self
            .fit_profiles
            .iter_mut()
            .find(|p| p.user_id == profile.user_id)
        {
            *existing = profile;
        } else {
            self.fit_profiles.push(profile);
        }
    }

    /// A user's saved fit profile
    pub fn fit_profile_for(&self, user_id: &str) -> AppResult<&FitProfile> {
        self.fit_profiles
            .iter()
            .find(|p| p.user_id == user_id)
            .ok_or_else(|| AppError::fit_profile_not_found(user_id))
    }

    // ==================== Users ====================

    /// Sign in a user from the known users list
    pub fn login(&mut self, user_id: &str) -> Option<&User> {
        let user = self.users.iter().find(|u| u.id == user_id)?.clone();
        tracing::info!(user_id = %user.id, "user signed in");
        self.current_user = Some(user);
        self.current_user.as_ref()
    }

    /// Sign out: drops the current user and empties the session cart
    pub fn logout(&mut self) {
        if let Some(user) = self.current_user.take() {
            tracing::info!(user_id = %user.id, "user signed out");
        }
        ops::clear(&mut self.cart);
    }

    /// Remove a user together with their orders and fit profiles
    ///
    /// Signs the user out first if they are currently signed in.
    /// Returns whether the user existed.
    pub fn delete_user(&mut self, user_id: &str) -> bool {
        let before = self.users.len();
        self.users.retain(|u| u.id != user_id);
        if self.users.len() == before {
            return false;
        }

        if self
            .current_user
            .as_ref()
            .map(|u| u.id == user_id)
            .unwrap_or(false)
        {
            self.logout();
        }
        self.orders.retain(|o| o.user_id != user_id);
        self.fit_profiles.retain(|p| p.user_id != user_id);
        tracing::info!(user_id = %user_id, "deleted user and cascaded records");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;
    use shared::models::{FitPreference, Gender, OrderStatus};

    const NOW: Timestamp = 1_750_000_000_000;

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

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            name: format!("User {}", id),
            email: format!("{}@example.com", id),
            created_at: NOW,
        }
    }

    fn profile(user_id: &str, height_cm: f64) -> FitProfile {
        FitProfile {
            user_id: user_id.to_string(),
            height_cm,
            weight_kg: None,
            chest_cm: None,
            waist_cm: None,
            hips_cm: None,
            preferred_fit: FitPreference::Regular,
            created_at: NOW,
        }
    }

    fn seeded_state() -> StoreState {
        let mut state = StoreState::new();
        state.set_products(vec![product("p1", 120.0), product("p2", 250.0)]);
        state.users.push(user("u1"));
        state
    }

    #[test]
    fn test_product_lookup() {
        let state = seeded_state();
        assert_eq!(state.product("p1").unwrap().price, 120.0);
        assert!(state.product("missing").is_none());
    }

    #[test]
    fn test_add_to_cart_merges_lines() {
        let mut state = seeded_state();
        state.add_to_cart("p1", "M").unwrap();
        state.add_to_cart("p1", "M").unwrap();
        state.add_to_cart("p1", "S").unwrap();

        assert_eq!(state.cart.len(), 2);
        assert_eq!(state.cart_count(), 3);
    }

    #[test]
    fn test_add_to_cart_unknown_product() {
        let mut state = seeded_state();
        let err = state.add_to_cart("missing", "M").unwrap_err();
        assert_eq!(err.code, ErrorCode::ProductNotFound);
        assert!(state.cart.is_empty());
    }

    #[test]
    fn test_cart_quantity_and_removal() {
        let mut state = seeded_state();
        state.add_to_cart("p1", "M").unwrap();
        let line_id = state.cart[0].line_id.clone();

        state.update_cart_quantity(&line_id, 4).unwrap();
        assert_eq!(state.cart_count(), 4);

        assert!(state.remove_from_cart(&line_id));
        assert!(!state.remove_from_cart(&line_id));
        assert!(state.cart.is_empty());
    }

    #[test]
    fn test_checkout_summary_waives_shipping_over_threshold() {
        let mut state = seeded_state();
        state.add_to_cart("p2", "M").unwrap();

        let summary = state.checkout_summary();
        assert_eq!(summary.subtotal, 250.0);
        assert_eq!(summary.shipping, 0.0);
        assert_eq!(summary.total, 250.0);
    }

    #[test]
    fn test_place_order_drains_cart() {
        let mut state = seeded_state();
        state.add_to_cart("p1", "M").unwrap();
        state.add_to_cart("p2", "M").unwrap();

        let order_id = {
            let order = state.place_order("u1", "12 Park Street", NOW).unwrap();
            assert_eq!(order.id, "ORD-001");
            assert_eq!(order.status, OrderStatus::Pending);
            assert_eq!(order.total, 370.0);
            order.id.clone()
        };

        assert!(state.cart.is_empty());
        assert_eq!(state.order(&order_id).unwrap().items.len(), 2);
    }

    #[test]
    fn test_place_order_sequential_ids() {
        let mut state = seeded_state();
        state.add_to_cart("p1", "M").unwrap();
        state.place_order("u1", "addr", NOW).unwrap();

        state.add_to_cart("p2", "M").unwrap();
        let second = state.place_order("u1", "addr", NOW).unwrap();
        assert_eq!(second.id, "ORD-002");
    }

    #[test]
    fn test_place_order_empty_cart() {
        let mut state = seeded_state();
        let err = state.place_order("u1", "addr", NOW).unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderEmpty);
        assert!(state.orders.is_empty());
    }

    #[test]
    fn test_order_lookup() {
        let mut state = seeded_state();
        let err = state.order("ORD-404").unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderNotFound);

        state.add_to_cart("p1", "M").unwrap();
        state.place_order("u1", "addr", NOW).unwrap();
        assert!(state.order("ORD-001").is_ok());
        assert_eq!(state.orders_for("u1").len(), 1);
        assert!(state.orders_for("u2").is_empty());
    }

    #[test]
    fn test_save_fit_profile_upserts() {
        let mut state = seeded_state();
        state.save_fit_profile(profile("u1", 175.0));
        state.save_fit_profile(profile("u1", 182.0));

        assert_eq!(state.fit_profiles.len(), 1);
        assert_eq!(state.fit_profile_for("u1").unwrap().height_cm, 182.0);

        let err = state.fit_profile_for("u2").unwrap_err();
        assert_eq!(err.code, ErrorCode::FitProfileNotFound);
    }

    #[test]
    fn test_login_and_logout() {
        let mut state = seeded_state();
        assert!(state.login("missing").is_none());
        assert!(state.current_user.is_none());

        let signed_in = state.login("u1").unwrap();
        assert_eq!(signed_in.id, "u1");

        state.add_to_cart("p1", "M").unwrap();
        state.logout();
        assert!(state.current_user.is_none());
        assert!(state.cart.is_empty(), "logout must clear the session cart");
    }

    #[test]
    fn test_delete_user_cascades() {
        let mut state = seeded_state();
        state.login("u1").unwrap();
        state.add_to_cart("p1", "M").unwrap();
        state.place_order("u1", "addr", NOW).unwrap();
        state.save_fit_profile(profile("u1", 175.0));

        assert!(state.delete_user("u1"));
        assert!(state.users.is_empty());
        assert!(state.orders.is_empty());
        assert!(state.fit_profiles.is_empty());
        assert!(state.current_user.is_none());

        assert!(!state.delete_user("u1"));
    }

    #[test]
    fn test_delete_user_keeps_other_records() {
        let mut state = seeded_state();
        state.users.push(user("u2"));
        state.add_to_cart("p1", "M").unwrap();
        state.place_order("u2", "addr", NOW).unwrap();
        state.save_fit_profile(profile("u2", 168.0));

        assert!(state.delete_user("u1"));
        assert_eq!(state.orders.len(), 1);
        assert_eq!(state.fit_profiles.len(), 1);
        assert_eq!(state.users.len(), 1);
    }
}
