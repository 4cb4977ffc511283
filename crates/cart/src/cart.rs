//! The in-memory cart.

use crate::key::LineKey;
use crate::money::Money;
use cafe_catalog::{MenuItem, Selection};
use serde::{Deserialize, Serialize};

/// What gets added to the cart: an item with its options resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    /// Line identity
    pub key: LineKey,
    /// Display name, e.g. `"Margherita - Large + Olives"`
    pub name: String,
    /// Unit price including variant and add-ons
    pub unit_price: Money,
    /// Image to show next to the line
    pub image: Option<String>,
}

impl CartItem {
    /// A menu item with no options.
    pub fn from_item(item: &MenuItem) -> Self {
        Self::from_selection(&Selection::new(item))
    }

    /// A configured menu selection.
    pub fn from_selection(selection: &Selection<'_>) -> Self {
        Self {
            key: LineKey::from_selection(selection),
            name: selection.display_name(),
            unit_price: Money::from_cents(selection.unit_price_minor()),
            image: selection.item().image.clone(),
        }
    }
}

/// One row of the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Line identity
    pub key: LineKey,
    /// Display name
    pub name: String,
    /// Unit price in cents
    pub unit_price: Money,
    /// Image path or URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Quantity, at least 1
    pub qty: u32,
}

impl CartLine {
    /// `qty × unit_price`.
    pub fn line_total(&self) -> Money {
        self.unit_price * self.qty
    }
}

/// Cart lines, newest first.
///
/// Every line has `qty >= 1` and a distinct [`LineKey`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a cart from stored lines, dropping empty lines and merging
    /// lines that share a key.
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        let mut cart = Cart::new();
        for mut line in lines {
            if line.qty == 0 {
                continue;
            }
            line.key.normalize();
            match cart.position(&line.key) {
                Some(idx) => cart.lines[idx].qty = cart.lines[idx].qty.saturating_add(line.qty),
                None => cart.lines.push(line),
            }
        }
        cart
    }

    fn position(&self, key: &LineKey) -> Option<usize> {
        self.lines.iter().position(|l| &l.key == key)
    }

    /// Adds one of `item`: bumps an existing line or inserts a new line at
    /// the front.
    pub fn add(&mut self, item: CartItem) {
        match self.position(&item.key) {
            Some(idx) => self.lines[idx].qty = self.lines[idx].qty.saturating_add(1),
            None => self.lines.insert(
                0,
                CartLine {
                    key: item.key,
                    name: item.name,
                    unit_price: item.unit_price,
                    image: item.image,
                    qty: 1,
                },
            ),
        }
    }

    /// Adds one more of an existing line. Returns false if there is no such line.
    pub fn increment(&mut self, key: &LineKey) -> bool {
        match self.position(key) {
            Some(idx) => {
                self.lines[idx].qty = self.lines[idx].qty.saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// Takes one away, removing the line when it reaches zero. Returns false
    /// if there is no such line.
    pub fn decrement(&mut self, key: &LineKey) -> bool {
        let Some(idx) = self.position(key) else {
            return false;
        };
        if self.lines[idx].qty <= 1 {
            self.lines.remove(idx);
        } else {
            self.lines[idx].qty -= 1;
        }
        true
    }

    /// Drops a line regardless of quantity. Returns false if there is no such line.
    pub fn remove(&mut self, key: &LineKey) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| &l.key != key);
        self.lines.len() != before
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines, newest first.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Looks up a line.
    pub fn get(&self, key: &LineKey) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.key == key)
    }

    /// Σ `qty × unit_price`.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Total quantity across lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.qty).sum()
    }

    /// True if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
