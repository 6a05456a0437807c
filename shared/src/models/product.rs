//! Product model

use crate::types::Timestamp;
use serde::{Deserialize, Serialize};

/// Garment gender line
///
/// Closed set; unknown strings fail decode instead of passing silently.
/// Filter matching is case-insensitive and treats `Unisex` as belonging
/// to every line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Men,
    Women,
    Unisex,
}

impl Gender {
    /// Wire / display string for this gender line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Men => "Men",
            Self::Women => "Women",
            Self::Unisex => "Unisex",
        }
    }

    /// Case-insensitive compare against a selected gender label
    pub fn matches_label(&self, label: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(label)
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Product entity (read-only input to the filter engine)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Price in the store currency, display units
    pub price: f64,
    pub image: String,
    /// Category facet value; absent never matches an active category filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub fabric: String,
    /// Fit facet value, always suffix-qualified (e.g. "Slim Fit")
    pub fit: String,
    pub gender: Gender,
    /// Available size labels
    pub size: Vec<String>,
    #[serde(default)]
    pub is_essential: bool,
    #[serde(default)]
    pub is_highlight: bool,
    /// Discount badge percentage (0-100), display-only; never applied to price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_percentage: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub festival: Option<String>,
    /// Creation instant (Unix millis); drives the new-arrival window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}
