//! Catalog filtering and sorting.
//!
//! Stages run in a fixed order and each one only narrows the previous result:
//! category, free-text search, food sub-filters, then a single stable sort.

use crate::error::CatalogError;
use crate::item::{Category, MenuItem};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// The one category whose items get sub-category and veg filters.
pub const SUBNAV_CATEGORY: Category = Category::Food;

/// Sub-category tags offered under [`SUBNAV_CATEGORY`].
pub const FOOD_SUBCATEGORIES: [&str; 7] = [
    "Appetizers",
    "Sandwiches",
    "Pastas",
    "Pizzas",
    "Burgers",
    "Wraps",
    "Sandwich Croissant",
];

/// Sort order for the menu grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Highest rating first
    #[default]
    Popular,
    /// Cheapest first
    PriceAsc,
    /// Most expensive first
    PriceDesc,
    /// Quickest prep first
    Time,
}

impl SortKey {
    /// Wire/CLI name.
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Popular => "popular",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::Time => "time",
        }
    }

    fn compare(self, a: &MenuItem, b: &MenuItem) -> Ordering {
        match self {
            SortKey::Popular => b.rating.total_cmp(&a.rating),
            SortKey::PriceAsc => a.price_value().total_cmp(&b.price_value()),
            SortKey::PriceDesc => b.price_value().total_cmp(&a.price_value()),
            SortKey::Time => a.prep_time().minutes().cmp(&b.prep_time().minutes()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "popular" => Ok(SortKey::Popular),
            "price-asc" => Ok(SortKey::PriceAsc),
            "price-desc" => Ok(SortKey::PriceDesc),
            "time" => Ok(SortKey::Time),
            _ => Err(CatalogError::UnknownSort(s.to_string())),
        }
    }
}

/// Veg / non-veg toggle for food items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VegMode {
    /// No filter
    #[default]
    All,
    /// Vegetarian only
    Veg,
    /// Non-vegetarian only
    #[serde(rename = "Non-Veg")]
    NonVeg,
}

impl VegMode {
    /// Tag (and variant name) this mode matches, `None` for `All`.
    pub fn tag(self) -> Option<&'static str> {
        match self {
            VegMode::All => None,
            VegMode::Veg => Some("Veg"),
            VegMode::NonVeg => Some("Non-Veg"),
        }
    }

    fn matches(self, item: &MenuItem) -> bool {
        match self.tag() {
            None => true,
            Some(tag) => {
                item.has_tag(tag) || item.variants.iter().any(|v| v.name.eq_ignore_ascii_case(tag))
            }
        }
    }
}

impl FromStr for VegMode {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(VegMode::All),
            "veg" => Ok(VegMode::Veg),
            "non-veg" | "nonveg" => Ok(VegMode::NonVeg),
            _ => Err(CatalogError::UnknownVegMode(s.to_string())),
        }
    }
}

/// Current filter selections.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterParams {
    /// Active category; `None` means "All"
    pub category: Option<Category>,
    /// Free-text query, matched case-insensitively
    pub query: String,
    /// Food sub-category tag; `None` means "All"
    pub sub_category: Option<String>,
    /// Veg / non-veg toggle
    pub veg: VegMode,
    /// Sort order
    pub sort: SortKey,
}

impl FilterParams {
    /// Builder-style method to set the category
    #[must_use]
    pub fn with_category(mut self, category: Option<Category>) -> Self {
        self.category = category;
        self
    }

    /// Builder-style method to set the search query
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Builder-style method to set the food sub-category
    #[must_use]
    pub fn with_sub_category(mut self, sub: Option<String>) -> Self {
        self.sub_category = sub;
        self
    }

    /// Builder-style method to set the veg mode
    #[must_use]
    pub fn with_veg(mut self, veg: VegMode) -> Self {
        self.veg = veg;
        self
    }

    /// Builder-style method to set the sort key
    #[must_use]
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }
}

/// Derives the visible, sorted subset of `items`.
///
/// The result never holds more items than the input. Items that compare
/// equal under the sort key keep their input order.
pub fn filter_catalog<'a>(items: &'a [MenuItem], params: &FilterParams) -> Vec<&'a MenuItem> {
    let mut out: Vec<&MenuItem> = items.iter().collect();

    if let Some(category) = params.category {
        out.retain(|i| i.category == category);
    }

    if !params.query.trim().is_empty() {
        let q = params.query.to_lowercase();
        out.retain(|i| {
            i.name.to_lowercase().contains(&q)
                || i.description.to_lowercase().contains(&q)
                || i.tags.iter().any(|t| t.to_lowercase().contains(&q))
        });
    }

    if params.category == Some(SUBNAV_CATEGORY) {
        if let Some(sub) = params.sub_category.as_deref() {
            out.retain(|i| i.has_tag(sub));
        }
        if params.veg != VegMode::All {
            out.retain(|i| params.veg.matches(i));
        }
    }

    // `sort_by` is stable
    out.sort_by(|a, b| params.sort.compare(a, b));
    out
}
