//! Fit intelligence
//!
//! Size recommendation ladders over body measurements.

pub mod calculator;

// Re-exports
pub use calculator::{
    CONFIDENCE_CAP, DEFAULT_CONFIDENCE, DEFAULT_SIZE, recommend_size, recommend_size_detailed,
    recommendation_for_profile,
};
