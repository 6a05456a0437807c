//! Filter and sort pipeline
//!
//! Pure over its inputs: the caller passes the product snapshot, the
//! filter state, and the current instant, and gets a fresh result vec.

use shared::models::{FilterState, Product, SortOrder};
use shared::types::Timestamp;

use super::matcher::matches_filters;

/// Apply the filter state to a product snapshot, then sort the result
///
/// Products keep their snapshot order except where the sort order says
/// otherwise. `now` anchors the new-arrival window.
pub fn filter_and_sort(products: &[Product], state: &FilterState, now: Timestamp) -> Vec<Product> {
    let mut result: Vec<Product> = products
        .iter()
        .filter(|product| matches_filters(product, state, now))
        .cloned()
        .collect();

    sort_products(&mut result, state.sort_by);

    tracing::debug!(
        input = products.len(),
        matched = result.len(),
        sort = ?state.sort_by,
        "filtered catalog"
    );
    result
}

/// Sort a result vec in place
///
/// Price sorts are stable, so equal prices keep their filtered order.
/// `New` and `Popular` have no recency or popularity ordering defined
/// and leave the filtered order untouched.
pub fn sort_products(products: &mut [Product], sort: SortOrder) {
    match sort {
        SortOrder::PriceAsc => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOrder::PriceDesc => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortOrder::New | SortOrder::Popular => {}
    }
}
