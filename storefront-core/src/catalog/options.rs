//! Fixed catalog option sets
//!
//! The sidebar option vocabulary. Values are display strings; product
//! fields are matched against them exactly (gender case-insensitively).

/// Category options
pub const CATEGORIES: [&str; 5] = ["Shirts", "Trousers", "Knitwear", "Outerwear", "Dresses"];

/// Fabric options
pub const FABRICS: [&str; 5] = ["Cotton", "Wool", "Linen", "Cashmere", "Silk"];

/// Fit options, always suffix-qualified
pub const FITS: [&str; 3] = ["Slim Fit", "Regular Fit", "Relaxed Fit"];

/// Size options
pub const SIZES: [&str; 6] = ["XS", "S", "M", "L", "XL", "XXL"];

/// Gender options
pub const GENDERS: [&str; 3] = ["Men", "Women", "Unisex"];

/// Price bracket labels, in display order
pub const PRICE_BRACKETS: [&str; 4] = ["Under 200", "200-400", "400-600", "Over 600"];

/// Price bracket selected in the sidebar
///
/// Boundary ownership: exactly 200 belongs to `200-400`, exactly 400
/// stays in `200-400`, exactly 600 belongs to `400-600`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceBracket {
    /// p < 200
    Under200,
    /// 200 <= p <= 400
    From200To400,
    /// 400 < p <= 600
    From400To600,
    /// p > 600
    Over600,
}

impl PriceBracket {
    /// Parse a sidebar label; `None` for labels outside the fixed set
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "Under 200" => Some(Self::Under200),
            "200-400" => Some(Self::From200To400),
            "400-600" => Some(Self::From400To600),
            "Over 600" => Some(Self::Over600),
            _ => None,
        }
    }

    /// Sidebar label for this bracket
    pub fn label(&self) -> &'static str {
        match self {
            Self::Under200 => "Under 200",
            Self::From200To400 => "200-400",
            Self::From400To600 => "400-600",
            Self::Over600 => "Over 600",
        }
    }

    /// Whether a price falls inside this bracket
    pub fn contains(&self, price: f64) -> bool {
        match self {
            Self::Under200 => price < 200.0,
            Self::From200To400 => (200.0..=400.0).contains(&price),
            Self::From400To600 => price > 400.0 && price <= 600.0,
            Self::Over600 => price > 600.0,
        }
    }
}
