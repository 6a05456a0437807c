//! Size recommendation calculator
//!
//! Pure ladder lookups over body measurements. Total functions: out of
//! range, negative, or non-finite input degrades to a bucket or to the
//! default recommendation, never to a panic or an error.

use shared::models::{FitPreference, FitProfile, Size, SizeRecommendation};

/// Fallback size when no usable measurement is supplied
pub const DEFAULT_SIZE: Size = Size::M;

/// Confidence of the fallback recommendation
pub const DEFAULT_CONFIDENCE: u8 = 0;

/// Upper bound for any computed confidence
pub const CONFIDENCE_CAP: u8 = 95;

/// Flat confidence of the height-only ladder
const HEIGHT_CONFIDENCE: u8 = 65;

/// Flat confidence of the detailed chest+waist mode
const DETAILED_CONFIDENCE: u8 = 92;

/// Quick recommendation from height plus an optional chest measurement
///
/// Chest decides when both measurements are positive: the chest band's
/// base confidence is adjusted by fit preference and capped at
/// [`CONFIDENCE_CAP`]. With only a positive height, the height ladder
/// answers at flat confidence 65 and the preference is ignored. With
/// neither, the default `M` comes back as a zero-confidence placeholder.
pub fn recommend_size(
    height_cm: f64,
    chest_cm: Option<f64>,
    fit: FitPreference,
) -> SizeRecommendation {
    if let Some(chest) = chest_cm
        && chest > 0.0
        && height_cm > 0.0
    {
        let size = chest_band(chest);
        let confidence = (base_confidence(size) + fit_adjustment(fit)).min(CONFIDENCE_CAP);
        return SizeRecommendation { size, confidence };
    }

    if height_cm > 0.0 {
        return SizeRecommendation {
            size: height_band(height_cm),
            confidence: HEIGHT_CONFIDENCE,
        };
    }

    SizeRecommendation {
        size: DEFAULT_SIZE,
        confidence: DEFAULT_CONFIDENCE,
    }
}

/// Detailed recommendation from chest and waist measurements
///
/// Each measurement maps through its own ladder and the larger band
/// wins. Flat confidence; fit preference plays no part here.
pub fn recommend_size_detailed(chest_cm: f64, waist_cm: f64) -> SizeRecommendation {
    SizeRecommendation {
        size: chest_band(chest_cm).max(waist_band(waist_cm)),
        confidence: DETAILED_CONFIDENCE,
    }
}

/// Replay a saved profile through the calculator
///
/// Detailed mode takes precedence when both chest and waist are on
/// file; otherwise the quick path runs with whatever the profile holds.
pub fn recommendation_for_profile(profile: &FitProfile) -> SizeRecommendation {
    if let (Some(chest), Some(waist)) = (profile.chest_cm, profile.waist_cm) {
        return recommend_size_detailed(chest, waist);
    }
    recommend_size(profile.height_cm, profile.chest_cm, profile.preferred_fit)
}

/// Chest circumference ladder (half-open bands, centimeters)
fn chest_band(chest_cm: f64) -> Size {
    if chest_cm < 88.0 {
        Size::XS
    } else if chest_cm < 94.0 {
        Size::S
    } else if chest_cm < 100.0 {
        Size::M
    } else if chest_cm < 106.0 {
        Size::L
    } else if chest_cm < 112.0 {
        Size::XL
    } else {
        Size::XXL
    }
}

/// Height ladder; XXL is not reachable from height alone
fn height_band(height_cm: f64) -> Size {
    if height_cm < 160.0 {
        Size::XS
    } else if height_cm < 170.0 {
        Size::S
    } else if height_cm < 180.0 {
        Size::M
    } else if height_cm < 190.0 {
        Size::L
    } else {
        Size::XL
    }
}

/// Waist circumference ladder for the detailed mode
fn waist_band(waist_cm: f64) -> Size {
    if waist_cm < 72.0 {
        Size::XS
    } else if waist_cm < 78.0 {
        Size::S
    } else if waist_cm < 84.0 {
        Size::M
    } else if waist_cm < 90.0 {
        Size::L
    } else if waist_cm < 96.0 {
        Size::XL
    } else {
        Size::XXL
    }
}

/// Base confidence for a chest-band recommendation
fn base_confidence(size: Size) -> u8 {
    match size {
        Size::XS => 85,
        Size::S => 88,
        Size::M => 90,
        Size::L => 88,
        Size::XL => 85,
        Size::XXL => 82,
    }
}

fn fit_adjustment(fit: FitPreference) -> u8 {
    match fit {
        FitPreference::Slim => 5,
        FitPreference::Regular => 0,
        FitPreference::Relaxed => 3,
    }
}
