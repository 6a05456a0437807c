//! Facet match predicates
//!
//! One predicate per facet; [`matches_filters`] is their conjunction. An
//! inactive facet (empty selection) always passes, so a cleared state
//! matches the whole catalog.

use chrono::{Local, TimeZone};
use shared::models::{FilterState, Gender, Product};
use shared::types::Timestamp;

use super::options::PriceBracket;

/// Whether a product passes every active facet of the filter state
///
/// Selections within a facet combine with OR; facets combine with AND.
/// The sidebar festival facet and the top-bar quick festival are two
/// independent AND conditions.
pub fn matches_filters(product: &Product, state: &FilterState, now: Timestamp) -> bool {
    matches_essentials(product, state)
        && matches_new_in(product, state, now)
        && matches_gender(product, state)
        && matches_category(product, state)
        && matches_fabric(product, state)
        && matches_fit(product, state)
        && matches_size(product, state)
        && matches_price(product, state)
        && matches_festival(product, state)
}

/// Whether a gender label selects this product
///
/// Case-insensitive; `Unisex` garments belong to every gender line, so
/// they carry under a "Men" or "Women" selection too.
pub fn gender_carries(product: &Product, label: &str) -> bool {
    product.gender.matches_label(label) || product.gender == Gender::Unisex
}

/// Whether the product is tagged for a festival, case-insensitively
///
/// Products without a festival tag never match an active festival filter.
pub fn festival_carries(product: &Product, festival: &str) -> bool {
    product
        .festival
        .as_deref()
        .map(|tag| tag.eq_ignore_ascii_case(festival))
        .unwrap_or(false)
}

/// Whether the product was created on the same local calendar day as `now`
pub fn is_new_arrival(product: &Product, now: Timestamp) -> bool {
    let Some(created_at) = product.created_at else {
        return false;
    };
    let (Some(created), Some(today)) = (
        Local.timestamp_millis_opt(created_at).single(),
        Local.timestamp_millis_opt(now).single(),
    ) else {
        return false;
    };
    created.date_naive() == today.date_naive()
}

/// Whether a price falls inside a sidebar bracket label
///
/// Labels outside the fixed bracket set match nothing.
pub fn price_in_bracket(price: f64, label: &str) -> bool {
    PriceBracket::parse(label)
        .map(|bracket| bracket.contains(price))
        .unwrap_or(false)
}

fn matches_essentials(product: &Product, state: &FilterState) -> bool {
    !state.essentials || product.is_essential
}

fn matches_new_in(product: &Product, state: &FilterState, now: Timestamp) -> bool {
    !state.new_in || is_new_arrival(product, now)
}

fn matches_gender(product: &Product, state: &FilterState) -> bool {
    state.gender.is_empty() || state.gender.iter().any(|label| gender_carries(product, label))
}

fn matches_category(product: &Product, state: &FilterState) -> bool {
    if state.category.is_empty() {
        return true;
    }
    match product.category.as_deref() {
        Some(category) => state.category.iter().any(|selected| selected == category),
        None => false,
    }
}

fn matches_fabric(product: &Product, state: &FilterState) -> bool {
    state.fabric.is_empty() || state.fabric.iter().any(|selected| selected == &product.fabric)
}

fn matches_fit(product: &Product, state: &FilterState) -> bool {
    state.fit.is_empty() || state.fit.iter().any(|selected| selected == &product.fit)
}

fn matches_size(product: &Product, state: &FilterState) -> bool {
    state.size.is_empty()
        || state
            .size
            .iter()
            .any(|selected| product.size.iter().any(|available| available == selected))
}

fn matches_price(product: &Product, state: &FilterState) -> bool {
    state.price.is_empty()
        || state
            .price
            .iter()
            .any(|label| price_in_bracket(product.price, label))
}

fn matches_festival(product: &Product, state: &FilterState) -> bool {
    let sidebar_ok = state.festival.is_empty()
        || state
            .festival
            .iter()
            .any(|selected| festival_carries(product, selected));
    let quick_ok = match state.quick_festival.as_deref() {
        Some(festival) => festival_carries(product, festival),
        None => true,
    };
    sidebar_ok && quick_ok
}
