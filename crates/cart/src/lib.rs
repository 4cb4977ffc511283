//! Cart aggregation for the cafe site.
//!
//! This crate provides:
//! - [`Cart`]: lines keyed by [`LineKey`], newest first
//! - [`CartStore`]: the cart as an injected service that persists every
//!   change and publishes snapshots to subscribers
//! - [`Pricing`]: promo discounts, tip and tax on top of the subtotal
//! - [`validate_order`]: checkout form checks
//! - [`FlavorNotes`]: the saved flavor-note preference
//!
//! Amounts are integer cents ([`Money`]).
//!
//! # Example
//!
//! ```
//! use cafe_cart::{CartItem, CartStore, Checkout, LineKey, Money, Pricing};
//! use cafe_core::storage::MemoryStorage;
//! use std::sync::Arc;
//!
//! let mut store = CartStore::load(Arc::new(MemoryStorage::new()));
//! let latte = CartItem {
//!     key: LineKey::plain(12),
//!     name: "Caramel Latte".to_string(),
//!     unit_price: Money::from_cents(550),
//!     image: None,
//! };
//! store.add(latte.clone())?;
//! store.add(latte)?;
//!
//! let totals = store.totals(&Pricing::default(), &Checkout::default().with_promo("COFFEE10"));
//! assert_eq!(totals.subtotal.to_string(), "$11.00");
//! assert_eq!(totals.discount.to_string(), "$1.10");
//! # Ok::<(), cafe_cart::CartError>(())
//! ```

mod cart;
mod error;
mod key;
mod money;
mod notes;
mod order;
mod pricing;
mod store;

pub use cart::{Cart, CartItem, CartLine};
pub use error::{CartError, Result};
pub use key::LineKey;
pub use money::Money;
pub use notes::{FlavorNote, FlavorNotes, MAX_SUGGESTIONS, NOTES_KEY};
pub use order::{validate_order, Order, OrderForm, PaymentMethod, ServiceType};
pub use pricing::{Checkout, Discount, Pricing, Promotion, Totals};
pub use store::{CartStore, CART_KEY};
