//! Saved flavor-note preference and pairing suggestions.

use crate::error::{CartError, Result};
use cafe_core::storage::{load_json, save_json, Storage};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Storage key for the selected notes.
pub const NOTES_KEY: &str = "flavor-explorer.notes";

/// Most suggestions shown at once.
pub const MAX_SUGGESTIONS: usize = 6;

/// Tasting note a customer can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlavorNote {
    /// Cocoa and dark chocolate
    Chocolatey,
    /// Almond and hazelnut
    Nutty,
    /// Caramel and toffee
    Caramel,
    /// Berry and stone fruit
    Fruity,
    /// Lemon and orange
    Citrus,
    /// Jasmine and lavender
    Floral,
    /// Cinnamon and ginger
    Spicy,
    /// Dark roast
    Smoky,
}

impl FlavorNote {
    /// Every note, in display order.
    pub const ALL: [FlavorNote; 8] = [
        FlavorNote::Chocolatey,
        FlavorNote::Nutty,
        FlavorNote::Caramel,
        FlavorNote::Fruity,
        FlavorNote::Citrus,
        FlavorNote::Floral,
        FlavorNote::Spicy,
        FlavorNote::Smoky,
    ];

    /// Display name, identical to the stored form.
    pub fn as_str(self) -> &'static str {
        match self {
            FlavorNote::Chocolatey => "Chocolatey",
            FlavorNote::Nutty => "Nutty",
            FlavorNote::Caramel => "Caramel",
            FlavorNote::Fruity => "Fruity",
            FlavorNote::Citrus => "Citrus",
            FlavorNote::Floral => "Floral",
            FlavorNote::Spicy => "Spicy",
            FlavorNote::Smoky => "Smoky",
        }
    }

    /// Menu items that go well with this note.
    pub fn pairings(self) -> &'static [&'static str] {
        match self {
            FlavorNote::Chocolatey => &["Brownie", "Dark Choc Cookie", "Mocha"],
            FlavorNote::Nutty => &["Almond Croissant", "Hazelnut Biscotti", "Praline"],
            FlavorNote::Caramel => &["Salted Caramel Tart", "Crème Brûlée", "Caramel Latte"],
            FlavorNote::Fruity => &["Berry Danish", "Peach Galette", "Cold Brew"],
            FlavorNote::Citrus => &["Lemon Tart", "Orange Pound Cake", "Yuzu Cheesecake"],
            FlavorNote::Floral => &["Honey Cake", "Lavender Shortbread", "Jasmine Tea"],
            FlavorNote::Spicy => &["Chai Latte", "Ginger Snap", "Cinnamon Roll"],
            FlavorNote::Smoky => &["Espresso", "Affogato", "Roasted Almonds"],
        }
    }
}

impl fmt::Display for FlavorNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlavorNote {
    type Err = CartError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        FlavorNote::ALL
            .into_iter()
            .find(|n| n.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CartError::UnknownNote(s.to_string()))
    }
}

/// The customer's selected notes, persisted on every change.
pub struct FlavorNotes {
    selected: Vec<FlavorNote>,
    storage: Arc<dyn Storage>,
}

impl FlavorNotes {
    /// Loads the saved selection. Unknown names are dropped; missing or
    /// corrupt data loads as no selection.
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let stored: Vec<String> = load_json(storage.as_ref(), NOTES_KEY).unwrap_or_default();
        let mut selected = Vec::new();
        for name in stored {
            // Stored names are exact; no case folding here
            if let Some(note) = FlavorNote::ALL.into_iter().find(|n| n.as_str() == name) {
                if !selected.contains(&note) {
                    selected.push(note);
                }
            }
        }
        Self { selected, storage }
    }

    /// Selected notes in pick order.
    pub fn selected(&self) -> &[FlavorNote] {
        &self.selected
    }

    /// Selects `note` if unselected, otherwise unselects it. Returns whether
    /// the note is now selected.
    pub fn toggle(&mut self, note: FlavorNote) -> Result<bool> {
        let now_selected = if let Some(idx) = self.selected.iter().position(|n| *n == note) {
            self.selected.remove(idx);
            false
        } else {
            self.selected.push(note);
            true
        };
        self.persist()?;
        Ok(now_selected)
    }

    /// Unselects everything.
    pub fn clear(&mut self) -> Result<()> {
        self.selected.clear();
        self.persist()
    }

    /// Pairings for the selected notes: in pick order, without repeats, at
    /// most [`MAX_SUGGESTIONS`].
    pub fn suggestions(&self) -> Vec<&'static str> {
        let mut out: Vec<&'static str> = Vec::new();
        for &pairing in self.selected.iter().flat_map(|n| n.pairings()) {
            if !out.contains(&pairing) {
                out.push(pairing);
            }
        }
        out.truncate(MAX_SUGGESTIONS);
        out
    }

    fn persist(&self) -> Result<()> {
        let names: Vec<&str> = self.selected.iter().map(|n| n.as_str()).collect();
        save_json(self.storage.as_ref(), NOTES_KEY, &names)?;
        Ok(())
    }
}
