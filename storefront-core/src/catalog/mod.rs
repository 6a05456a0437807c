//! Catalog filtering
//!
//! The multi-facet filter and sort engine, its fixed option vocabulary,
//! and facet counts over a result slice.

pub mod engine;
pub mod facets;
pub mod matcher;
pub mod options;

// Re-exports
pub use engine::{filter_and_sort, sort_products};
pub use facets::{FacetCount, FacetCounts, facet_counts};
pub use matcher::matches_filters;
pub use options::PriceBracket;
