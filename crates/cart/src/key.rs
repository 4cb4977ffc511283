//! Cart line identity.

use cafe_catalog::Selection;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a cart line: base item, variant and the set of add-ons.
///
/// Add-on names are kept sorted and deduplicated, so picking the same
/// extras in a different order lands on the same line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineKey {
    base_id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    variant: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    add_ons: Vec<String>,
}

impl LineKey {
    /// Key for an item with the given options.
    pub fn new<I, S>(base_id: u32, variant: Option<String>, add_ons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut add_ons: Vec<String> = add_ons.into_iter().map(Into::into).collect();
        add_ons.sort();
        add_ons.dedup();
        Self {
            base_id,
            variant,
            add_ons,
        }
    }

    /// Key for an item with no options.
    pub fn plain(base_id: u32) -> Self {
        Self {
            base_id,
            variant: None,
            add_ons: Vec::new(),
        }
    }

    /// Key for a configured menu selection.
    pub fn from_selection(selection: &Selection<'_>) -> Self {
        Self::new(
            selection.item().id,
            selection.variant().map(String::from),
            selection.add_ons().iter().cloned(),
        )
    }

    /// Menu item id.
    pub fn base_id(&self) -> u32 {
        self.base_id
    }

    /// Variant name.
    pub fn variant(&self) -> Option<&str> {
        self.variant.as_deref()
    }

    /// Sorted add-on names.
    pub fn add_ons(&self) -> &[String] {
        &self.add_ons
    }

    /// Restores the sorted, deduplicated add-on invariant after
    /// deserializing data written by hand or by an older build.
    pub(crate) fn normalize(&mut self) {
        self.add_ons.sort();
        self.add_ons.dedup();
    }
}

impl fmt::Display for LineKey {
    /// `41`, `41/Large`, `41/Large+Jalapeño+Olives` (debug and log output only).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.base_id)?;
        if let Some(variant) = &self.variant {
            write!(f, "/{variant}")?;
        }
        for add_on in &self.add_ons {
            write!(f, "+{add_on}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_add_on_order_irrelevant() {
        let a = LineKey::new(41, Some("Large".into()), ["Olives", "Jalapeño"]);
        let b = LineKey::new(41, Some("Large".into()), ["Jalapeño", "Olives", "Olives"]);
        assert_eq!(a, b);

        let set: HashSet<LineKey> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_separator_characters_do_not_collide() {
        // A name-concatenation key would render both as "Wrap - Veg + Cheese"
        let a = LineKey::new(7, Some("Veg + Cheese".into()), Vec::<String>::new());
        let b = LineKey::new(7, Some("Veg".into()), ["Cheese"]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_variant_distinguishes_lines() {
        assert_ne!(LineKey::plain(3), LineKey::new(3, Some("Regular".into()), Vec::<String>::new()));
    }

    #[test]
    fn test_display() {
        assert_eq!(LineKey::plain(9).to_string(), "9");
        let key = LineKey::new(41, Some("Large".into()), ["Olives", "Jalapeño"]);
        assert_eq!(key.to_string(), "41/Large+Jalapeño+Olives");
    }

    #[test]
    fn test_serde_shape() {
        let key = LineKey::new(41, None, ["Olives"]);
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, r#"{"baseId":41,"addOns":["Olives"]}"#);
        let back: LineKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}
