//! Collection tab helpers
//!
//! The landing page groups products into Men / Women / Essentials tabs.
//! Unlike the catalog filter, the gender tabs match the product's own
//! gender line only, so Unisex garments sit outside both gender tabs.

use shared::models::Product;

/// Landing-page collection tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionTab {
    Men,
    Women,
    Essentials,
}

/// Products belonging to a collection tab
pub fn tab_products(products: &[Product], tab: CollectionTab) -> Vec<Product> {
    products
        .iter()
        .filter(|product| match tab {
            CollectionTab::Men => product.gender.matches_label("Men"),
            CollectionTab::Women => product.gender.matches_label("Women"),
            CollectionTab::Essentials => product.is_essential,
        })
        .cloned()
        .collect()
}

/// Discount badge text for a product card, e.g. "20% OFF"
///
/// Display-only; the engine never applies the percentage to the price.
/// A zero percentage renders no badge.
pub fn offer_badge(product: &Product) -> Option<String> {
    product
        .offer_percentage
        .filter(|&pct| pct > 0)
        .map(|pct| format!("{}% OFF", pct))
}
