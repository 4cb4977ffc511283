//! Menu item model.

use crate::error::CatalogError;
use crate::parse::{parse_prep_time, price_to_minor, price_to_number, PrepTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Menu category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Breakfast plates
    Breakfast,
    /// Single-origin and signature coffee
    #[serde(rename = "Speciality Coffee")]
    SpecialityCoffee,
    /// Iced and cold-brew coffee
    #[serde(rename = "Cold Coffee")]
    ColdCoffee,
    /// Espresso-based hot coffee
    #[serde(rename = "Hot Coffee")]
    HotCoffee,
    /// Hot chocolate
    #[serde(rename = "Hot Chocolate")]
    HotChocolate,
    /// Hot tea
    #[serde(rename = "Hot Tea")]
    HotTea,
    /// Iced tea
    #[serde(rename = "Iced Tea")]
    IcedTea,
    /// Milkshakes
    Shakes,
    /// Mojitos
    Mojitos,
    /// Savoury food, the only category with sub-navigation
    Food,
    /// Desserts
    Desserts,
}

impl Category {
    /// All categories in menu order.
    pub const ALL: [Category; 11] = [
        Category::Breakfast,
        Category::SpecialityCoffee,
        Category::ColdCoffee,
        Category::HotCoffee,
        Category::HotChocolate,
        Category::HotTea,
        Category::IcedTea,
        Category::Shakes,
        Category::Mojitos,
        Category::Food,
        Category::Desserts,
    ];

    /// Display name, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Breakfast => "Breakfast",
            Category::SpecialityCoffee => "Speciality Coffee",
            Category::ColdCoffee => "Cold Coffee",
            Category::HotCoffee => "Hot Coffee",
            Category::HotChocolate => "Hot Chocolate",
            Category::HotTea => "Hot Tea",
            Category::IcedTea => "Iced Tea",
            Category::Shakes => "Shakes",
            Category::Mojitos => "Mojitos",
            Category::Food => "Food",
            Category::Desserts => "Desserts",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

/// Alternative SKU of an item, e.g. a "Veg" and a "Non-Veg" version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    /// Variant name
    pub name: String,
    /// Legacy price string
    pub price: String,
}

/// Optional extra whose price adds to the line price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddOn {
    /// Add-on name
    pub name: String,
    /// Legacy price string
    pub price: String,
}

/// One orderable product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Unique id within the catalog
    pub id: u32,
    /// Display name
    pub name: String,
    /// Short description
    #[serde(default)]
    pub description: String,
    /// Optional subtitle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Price as authored, e.g. `"$4.50"` or `"120"`
    pub price: String,
    /// Image path or URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Image fit hint for the card, e.g. `"Cover"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fit: Option<String>,
    /// Menu category
    pub category: Category,
    /// Average rating, used for the "popular" sort
    #[serde(default)]
    pub rating: f64,
    /// Prep time as authored: `"Ready"` or `"<N> min[s]"`
    #[serde(default)]
    pub time: String,
    /// Free-text labels (`"Veg"`, `"Pizzas"`, ...)
    #[serde(default)]
    pub tags: Vec<String>,
    /// Alternative SKUs
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<Variant>,
    /// Optional extras
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub add_ons: Vec<AddOn>,
}

impl MenuItem {
    /// Price as a number (0 when unparsable).
    #[inline]
    pub fn price_value(&self) -> f64 {
        price_to_number(&self.price)
    }

    /// Price in minor currency units (cents).
    #[inline]
    pub fn price_minor(&self) -> i64 {
        price_to_minor(&self.price)
    }

    /// Parsed prep time.
    #[inline]
    pub fn prep_time(&self) -> PrepTime {
        parse_prep_time(&self.time)
    }

    /// Exact tag membership.
    #[inline]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Looks up a variant by exact name.
    pub fn variant(&self, name: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.name == name)
    }

    /// Looks up an add-on by exact name.
    pub fn add_on(&self, name: &str) -> Option<&AddOn> {
        self.add_ons.iter().find(|a| a.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip_names() {
        for c in Category::ALL {
            assert_eq!(c.as_str().parse::<Category>().unwrap(), c);
            let json = serde_json::to_string(&c).unwrap();
            assert_eq!(json, format!("\"{}\"", c.as_str()));
        }
    }

    #[test]
    fn test_category_parse_case_insensitive() {
        assert_eq!("hot coffee".parse::<Category>().unwrap(), Category::HotCoffee);
        assert!("Soup".parse::<Category>().is_err());
    }

    #[test]
    fn test_menu_item_deserialize_site_shape() {
        let json = r#"{
            "id": 41,
            "name": "Paneer Tikka Pizza",
            "description": "Smoky paneer, peppers",
            "price": "₹349",
            "image": "/img/pizza.webp",
            "category": "Food",
            "rating": 4.7,
            "time": "15 mins",
            "tags": ["Pizzas", "Veg"],
            "fit": "Cover",
            "variants": [{"name": "Regular", "price": "₹349"}, {"name": "Large", "price": "₹499"}],
            "addOns": [{"name": "Extra Cheese", "price": "₹60"}]
        }"#;

        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.category, Category::Food);
        assert_eq!(item.fit.as_deref(), Some("Cover"));
        assert_eq!(item.price_value(), 349.0);
        assert_eq!(item.price_minor(), 34_900);
        assert_eq!(item.prep_time(), PrepTime::Minutes(15));
        assert!(item.has_tag("Veg"));
        assert!(!item.has_tag("veg"));
        assert_eq!(item.variant("Large").unwrap().price, "₹499");
        assert_eq!(item.add_on("Extra Cheese").unwrap().price, "₹60");
    }

    #[test]
    fn test_menu_item_optional_fields_default() {
        let json = r#"{"id": 1, "name": "Espresso", "price": "$3", "category": "Hot Coffee"}"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert!(item.tags.is_empty());
        assert!(item.fit.is_none());
        assert!(item.variants.is_empty());
        assert_eq!(item.rating, 0.0);
        assert_eq!(item.prep_time(), PrepTime::Unknown);
    }
}
