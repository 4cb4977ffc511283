//! A configured menu item: chosen variant and add-ons.

use crate::error::{CatalogError, Result};
use crate::item::MenuItem;
use crate::parse::{price_to_minor, price_to_number};

/// A menu item with its chosen variant and add-ons, ready to go in a cart.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<'a> {
    item: &'a MenuItem,
    variant: Option<String>,
    add_ons: Vec<String>,
}

impl<'a> Selection<'a> {
    /// The plain item with no options.
    pub fn new(item: &'a MenuItem) -> Self {
        Self {
            item,
            variant: None,
            add_ons: Vec::new(),
        }
    }

    /// Chooses a variant by name.
    pub fn with_variant(mut self, name: &str) -> Result<Self> {
        if self.item.variant(name).is_none() {
            return Err(CatalogError::UnknownOption {
                item_id: self.item.id,
                kind: "variant",
                name: name.to_string(),
            });
        }
        self.variant = Some(name.to_string());
        Ok(self)
    }

    /// Adds an add-on by name. Picking the same add-on twice is a no-op.
    pub fn with_add_on(mut self, name: &str) -> Result<Self> {
        if self.item.add_on(name).is_none() {
            return Err(CatalogError::UnknownOption {
                item_id: self.item.id,
                kind: "add-on",
                name: name.to_string(),
            });
        }
        if !self.add_ons.iter().any(|a| a == name) {
            self.add_ons.push(name.to_string());
        }
        Ok(self)
    }

    /// The underlying menu item.
    pub fn item(&self) -> &'a MenuItem {
        self.item
    }

    /// Chosen variant name.
    pub fn variant(&self) -> Option<&str> {
        self.variant.as_deref()
    }

    /// Chosen add-on names in pick order.
    pub fn add_ons(&self) -> &[String] {
        &self.add_ons
    }

    /// Variant price (or the base price) plus every add-on price.
    pub fn unit_price(&self) -> f64 {
        let base = self
            .variant
            .as_deref()
            .and_then(|v| self.item.variant(v))
            .map_or_else(|| price_to_number(&self.item.price), |v| price_to_number(&v.price));

        let extras: f64 = self
            .add_ons
            .iter()
            .filter_map(|a| self.item.add_on(a))
            .map(|a| price_to_number(&a.price))
            .sum();

        base + extras
    }

    /// [`Self::unit_price`] in minor currency units, summed per component
    /// so no float error creeps in.
    pub fn unit_price_minor(&self) -> i64 {
        let base = self
            .variant
            .as_deref()
            .and_then(|v| self.item.variant(v))
            .map_or_else(|| price_to_minor(&self.item.price), |v| price_to_minor(&v.price));

        let extras: i64 = self
            .add_ons
            .iter()
            .filter_map(|a| self.item.add_on(a))
            .map(|a| price_to_minor(&a.price))
            .fold(0, i64::saturating_add);

        base.saturating_add(extras)
    }

    /// Cart line label, e.g. `"Margherita - Large + Olives, Jalapeño"`.
    pub fn display_name(&self) -> String {
        let mut name = self.item.name.clone();
        if let Some(variant) = &self.variant {
            name.push_str(" - ");
            name.push_str(variant);
        }
        if !self.add_ons.is_empty() {
            name.push_str(" + ");
            name.push_str(&self.add_ons.join(", "));
        }
        name
    }
}
