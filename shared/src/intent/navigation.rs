//! Navigation filter signal decoding

use crate::error::{AppError, AppResult};
use crate::models::FilterState;
use serde::{Deserialize, Serialize};

/// Raw navigation filter signal from the router
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NavigationFilter {
    /// Facet key vocabulary word (`gender`, `essentials`, `newIn`, ...)
    #[serde(rename = "type")]
    pub filter_type: String,
    /// Selected option for the facet; unused by the boolean keys
    #[serde(default)]
    pub value: String,
    /// Optional gender narrowing alongside the main facet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

/// Closed facet-key vocabulary accepted from navigation signals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetKey {
    Gender,
    Essentials,
    NewIn,
    Category,
    Fabric,
    Fit,
}

impl FacetKey {
    /// Parse a raw navigation key, rejecting anything outside the vocabulary
    pub fn parse(key: &str) -> AppResult<Self> {
        match key {
            "gender" => Ok(Self::Gender),
            "essentials" => Ok(Self::Essentials),
            "newIn" => Ok(Self::NewIn),
            "category" => Ok(Self::Category),
            "fabric" => Ok(Self::Fabric),
            "fit" => Ok(Self::Fit),
            _ => Err(AppError::unknown_facet(key)),
        }
    }
}

/// Decode a navigation signal into a fresh filter state
///
/// Starts from a cleared state and activates exactly the facet the signal
/// names: `essentials`/`newIn` set their boolean, the other keys set the
/// facet to the single value. Bare fit values get the `" Fit"` suffix
/// appended so they match stored fit values (a value already containing
/// `"Fit"` is left alone). An accompanying gender narrows the gender facet.
pub fn initial_filter_state(signal: &NavigationFilter) -> AppResult<FilterState> {
    let key = match FacetKey::parse(&signal.filter_type) {
        Ok(key) => key,
        Err(err) => {
            tracing::warn!(key = %signal.filter_type, "rejected unknown navigation facet");
            return Err(err);
        }
    };

    let mut state = FilterState::cleared();
    match key {
        FacetKey::Essentials => state.essentials = true,
        FacetKey::NewIn => state.new_in = true,
        FacetKey::Gender => state.gender.push(require_value(signal)?),
        FacetKey::Category => state.category.push(require_value(signal)?),
        FacetKey::Fabric => state.fabric.push(require_value(signal)?),
        FacetKey::Fit => state.fit.push(qualified_fit(&require_value(signal)?)),
    }

    if let Some(gender) = signal.gender.as_deref().filter(|g| !g.is_empty())
        && !state.gender.iter().any(|g| g == gender)
    {
        state.gender.push(gender.to_string());
    }

    tracing::info!(
        key = %signal.filter_type,
        value = %signal.value,
        "decoded navigation filter"
    );
    Ok(state)
}

fn require_value(signal: &NavigationFilter) -> AppResult<String> {
    if signal.value.is_empty() {
        return Err(AppError::filter_value_required(&signal.filter_type));
    }
    Ok(signal.value.clone())
}

/// Qualify a bare fit value: "Slim" -> "Slim Fit", "Slim Fit" unchanged
fn qualified_fit(value: &str) -> String {
    if value.contains("Fit") {
        value.to_string()
    } else {
        format!("{} Fit", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn signal(filter_type: &str, value: &str) -> NavigationFilter {
        NavigationFilter {
            filter_type: filter_type.to_string(),
            value: value.to_string(),
            gender: None,
        }
    }

    #[test]
    fn test_facet_key_parse_known() {
        assert_eq!(FacetKey::parse("gender").unwrap(), FacetKey::Gender);
        assert_eq!(FacetKey::parse("essentials").unwrap(), FacetKey::Essentials);
        assert_eq!(FacetKey::parse("newIn").unwrap(), FacetKey::NewIn);
        assert_eq!(FacetKey::parse("category").unwrap(), FacetKey::Category);
        assert_eq!(FacetKey::parse("fabric").unwrap(), FacetKey::Fabric);
        assert_eq!(FacetKey::parse("fit").unwrap(), FacetKey::Fit);
    }

    #[test]
    fn test_facet_key_parse_unknown_rejected() {
        let err = FacetKey::parse("color").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownFacet);
        assert_eq!(err.message, "Unknown filter facet: color");

        // Vocabulary is exact, not case-folded
        assert!(FacetKey::parse("Gender").is_err());
        assert!(FacetKey::parse("newin").is_err());
    }

    #[test]
    fn test_initial_state_boolean_keys() {
        let state = initial_filter_state(&signal("essentials", "")).unwrap();
        assert!(state.essentials);
        assert!(!state.new_in);
        assert!(state.gender.is_empty());

        let state = initial_filter_state(&signal("newIn", "")).unwrap();
        assert!(state.new_in);
        assert!(!state.essentials);
    }

    #[test]
    fn test_initial_state_single_facet_value() {
        let state = initial_filter_state(&signal("category", "Knitwear")).unwrap();
        assert_eq!(state.category, vec!["Knitwear"]);
        assert!(state.fabric.is_empty());
        assert!(state.gender.is_empty());

        let state = initial_filter_state(&signal("gender", "Men")).unwrap();
        assert_eq!(state.gender, vec!["Men"]);
    }

    #[test]
    fn test_initial_state_appends_fit_suffix() {
        let state = initial_filter_state(&signal("fit", "Slim")).unwrap();
        assert_eq!(state.fit, vec!["Slim Fit"]);

        let state = initial_filter_state(&signal("fit", "Relaxed Fit")).unwrap();
        assert_eq!(state.fit, vec!["Relaxed Fit"], "suffixed value left alone");
    }

    #[test]
    fn test_initial_state_gender_narrowing() {
        let mut nav = signal("category", "Dresses");
        nav.gender = Some("Women".to_string());

        let state = initial_filter_state(&nav).unwrap();
        assert_eq!(state.category, vec!["Dresses"]);
        assert_eq!(state.gender, vec!["Women"]);
    }

    #[test]
    fn test_initial_state_missing_value_rejected() {
        let err = initial_filter_state(&signal("fabric", "")).unwrap_err();
        assert_eq!(err.code, ErrorCode::FilterValueRequired);
    }

    #[test]
    fn test_navigation_filter_wire_format() {
        let json = r#"{"type":"category","value":"Shirts","gender":"Men"}"#;
        let nav: NavigationFilter = serde_json::from_str(json).unwrap();
        assert_eq!(nav.filter_type, "category");
        assert_eq!(nav.value, "Shirts");
        assert_eq!(nav.gender.as_deref(), Some("Men"));

        let out = serde_json::to_string(&nav).unwrap();
        assert!(out.contains("\"type\":\"category\""));
    }
}
