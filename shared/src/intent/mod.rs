//! Navigation intent decoding
//!
//! The router hands the storefront a raw `{type, value, gender?}` filter
//! signal when a catalog view is entered from a navigation tile. This
//! module decodes that signal against a closed facet-key vocabulary and
//! produces the view's initial filter state; unknown keys are rejected
//! with a typed error instead of silently accepted.

mod navigation;

pub use navigation::{FacetKey, NavigationFilter, initial_filter_state};
