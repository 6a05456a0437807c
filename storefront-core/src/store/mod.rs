//! Owned session state

pub mod state;

// Re-exports
pub use state::StoreState;
