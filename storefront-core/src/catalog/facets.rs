//! Facet counts for the sidebar
//!
//! Counts how many products in a slice carry each fixed sidebar option.
//! Callers typically pass the current filtered result so the sidebar
//! numbers track the active state. Festival is free-text and has no
//! fixed option set, so it is not counted here.

use serde::{Deserialize, Serialize};
use shared::models::Product;
use shared::types::Timestamp;

use super::matcher;
use super::options;

/// One sidebar option with its product count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetCount {
    pub value: String,
    pub count: usize,
}

/// Per-facet option counts over one product slice
///
/// Every fixed option appears, zero counts included, so the sidebar can
/// render a stable option list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FacetCounts {
    pub gender: Vec<FacetCount>,
    pub category: Vec<FacetCount>,
    pub fabric: Vec<FacetCount>,
    pub fit: Vec<FacetCount>,
    pub size: Vec<FacetCount>,
    pub price: Vec<FacetCount>,
    pub essentials: usize,
    pub new_in: usize,
}

/// Count products against every fixed sidebar option
///
/// Gender counts follow the filter's Unisex union, so a Unisex garment
/// counts under all three lines. `now` anchors the new-arrival count.
pub fn facet_counts(products: &[Product], now: Timestamp) -> FacetCounts {
    FacetCounts {
        gender: count_by(&options::GENDERS, |label| {
            products
                .iter()
                .filter(|p| matcher::gender_carries(p, label))
                .count()
        }),
        category: count_by(&options::CATEGORIES, |label| {
            products
                .iter()
                .filter(|p| p.category.as_deref() == Some(label))
                .count()
        }),
        fabric: count_by(&options::FABRICS, |label| {
            products.iter().filter(|p| p.fabric == label).count()
        }),
        fit: count_by(&options::FITS, |label| {
            products.iter().filter(|p| p.fit == label).count()
        }),
        size: count_by(&options::SIZES, |label| {
            products
                .iter()
                .filter(|p| p.size.iter().any(|s| s == label))
                .count()
        }),
        price: count_by(&options::PRICE_BRACKETS, |label| {
            products
                .iter()
                .filter(|p| matcher::price_in_bracket(p.price, label))
                .count()
        }),
        essentials: products.iter().filter(|p| p.is_essential).count(),
        new_in: products
            .iter()
            .filter(|p| matcher::is_new_arrival(p, now))
            .count(),
    }
}

fn count_by(values: &[&str], count_for: impl Fn(&str) -> usize) -> Vec<FacetCount> {
    values
        .iter()
        .map(|value| FacetCount {
            value: value.to_string(),
            count: count_for(value),
        })
        .collect()
}
