//! Filter state for the catalog view

use serde::{Deserialize, Serialize};

/// Sort order applied after filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Newest first; currently preserves filtered order
    #[default]
    New,
    /// Price low to high
    PriceAsc,
    /// Price high to low
    PriceDesc,
    /// Most popular; currently preserves filtered order
    Popular,
}

/// Sidebar multi-select facet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
    Gender,
    Category,
    Fabric,
    Fit,
    Size,
    Price,
    Festival,
}

impl Facet {
    /// Every sidebar facet, in display order
    pub const ALL: [Facet; 7] = [
        Facet::Gender,
        Facet::Category,
        Facet::Fabric,
        Facet::Fit,
        Facet::Size,
        Facet::Price,
        Facet::Festival,
    ];
}

/// Active filter facets for one catalog view
///
/// Each facet holds the selected option strings; an empty set means the
/// facet is inactive. Selections within one facet combine with OR, facets
/// combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    #[serde(default)]
    pub gender: Vec<String>,
    #[serde(default)]
    pub category: Vec<String>,
    #[serde(default)]
    pub fabric: Vec<String>,
    #[serde(default)]
    pub fit: Vec<String>,
    #[serde(default)]
    pub size: Vec<String>,
    #[serde(default)]
    pub price: Vec<String>,
    #[serde(default)]
    pub festival: Vec<String>,
    /// Top-bar quick festival filter; `None` means "all"
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de_quick_festival"
    )]
    pub quick_festival: Option<String>,
    #[serde(default)]
    pub essentials: bool,
    #[serde(default)]
    pub new_in: bool,
    #[serde(default)]
    pub sort_by: SortOrder,
}

/// Decode the quick festival filter, folding the `"all"` sentinel to `None`
///
/// The wire value `"all"` and an absent field are the same inactive state,
/// so the matcher only ever sees one representation.
fn de_quick_festival<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| v != "all"))
}

impl FilterState {
    /// Fresh state with every facet inactive
    pub fn cleared() -> Self {
        Self::default()
    }

    /// Selected options for one facet
    pub fn selections(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Gender => &self.gender,
            Facet::Category => &self.category,
            Facet::Fabric => &self.fabric,
            Facet::Fit => &self.fit,
            Facet::Size => &self.size,
            Facet::Price => &self.price,
            Facet::Festival => &self.festival,
        }
    }

    fn selections_mut(&mut self, facet: Facet) -> &mut Vec<String> {
        match facet {
            Facet::Gender => &mut self.gender,
            Facet::Category => &mut self.category,
            Facet::Fabric => &mut self.fabric,
            Facet::Fit => &mut self.fit,
            Facet::Size => &mut self.size,
            Facet::Price => &mut self.price,
            Facet::Festival => &mut self.festival,
        }
    }

    /// Checkbox-style toggle: insert the value if absent, remove it if present
    pub fn toggle(&mut self, facet: Facet, value: &str) {
        let selections = self.selections_mut(facet);
        if let Some(pos) = selections.iter().position(|v| v == value) {
            selections.remove(pos);
        } else {
            selections.push(value.to_string());
        }
    }

    /// Replace the sort order
    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort_by = sort;
    }

    /// Set the top-bar quick festival filter (`"all"` clears it)
    pub fn set_quick_festival(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.quick_festival = if value == "all" { None } else { Some(value) };
    }

    /// True when no facet, quick filter, or boolean flag is active
    pub fn is_unconstrained(&self) -> bool {
        Facet::ALL
            .iter()
            .all(|facet| self.selections(*facet).is_empty())
            && self.quick_festival.is_none()
            && !self.essentials
            && !self.new_in
    }
}
