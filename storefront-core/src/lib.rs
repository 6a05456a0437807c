//! Grazel Storefront Core - catalog filtering and fit intelligence
//!
//! # Overview
//!
//! The pure domain layer behind the storefront views:
//!
//! - **Catalog** (`catalog`): multi-facet filter/sort engine, fixed option
//!   sets, facet counts
//! - **Fit** (`fit`): size recommendation ladders over body measurements
//! - **Cart** (`cart`): content-addressed cart lines and decimal money math
//! - **Orders** (`orders`): pure order assembly from cart lines
//! - **Collections** (`collections`): landing-page tab helpers
//! - **Store** (`store`): the explicitly-owned session state container
//!
//! Everything is synchronous and free of I/O; callers pass the product
//! snapshot and the current instant in, results come back as plain values.
//!
//! # Module layout
//!
//! ```text
//! storefront-core/src/
//! ├── catalog/       # matcher, engine, facet counts, option sets
//! ├── fit/           # size calculator
//! ├── cart/          # cart line ops + decimal money math
//! ├── orders/        # order assembly
//! ├── collections.rs # landing-page tabs
//! └── store/         # owned session state
//! ```

pub mod cart;
pub mod catalog;
pub mod collections;
pub mod fit;
pub mod orders;
pub mod store;

// Re-export the engine entry points
pub use catalog::{FacetCounts, facet_counts, filter_and_sort};
pub use fit::{recommend_size, recommend_size_detailed, recommendation_for_profile};

// Re-export cart and order helpers
pub use cart::{checkout_summary, line_id};
pub use orders::build_order;

// Re-export session state
pub use store::StoreState;
