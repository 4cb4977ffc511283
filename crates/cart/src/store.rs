//! Persistent, observable cart service.
//!
//! [`CartStore`] is handed to whatever needs the cart. Every mutation is
//! written through to storage under [`CART_KEY`] and published to
//! subscribers as a fresh snapshot.

use crate::cart::{Cart, CartItem, CartLine};
use crate::error::Result;
use crate::key::LineKey;
use crate::money::Money;
use crate::pricing::{Checkout, Pricing, Totals};
use cafe_core::storage::{load_json, save_json, Storage};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, instrument};

/// Storage key for the cart.
pub const CART_KEY: &str = "cart";

/// The cart plus its storage and subscribers.
pub struct CartStore {
    cart: Cart,
    storage: Arc<dyn Storage>,
    tx: watch::Sender<Cart>,
}

impl CartStore {
    /// Loads the saved cart. Missing or corrupt data starts an empty cart.
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let lines: Vec<CartLine> = load_json(storage.as_ref(), CART_KEY).unwrap_or_default();
        let cart = Cart::from_lines(lines);
        debug!(lines = cart.lines().len(), "Loaded cart");
        let (tx, _rx) = watch::channel(cart.clone());
        Self { cart, storage, tx }
    }

    /// Receives a snapshot after every mutation.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.tx.subscribe()
    }

    /// Current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Adds one of `item`.
    #[instrument(skip_all, fields(key = %item.key))]
    pub fn add(&mut self, item: CartItem) -> Result<()> {
        self.cart.add(item);
        self.commit()
    }

    /// Adds one more of an existing line. Returns false if there is no such line.
    pub fn increment(&mut self, key: &LineKey) -> Result<bool> {
        let changed = self.cart.increment(key);
        if changed {
            self.commit()?;
        }
        Ok(changed)
    }

    /// Takes one away, removing the line at zero. Returns false if there is
    /// no such line.
    pub fn decrement(&mut self, key: &LineKey) -> Result<bool> {
        let changed = self.cart.decrement(key);
        if changed {
            self.commit()?;
        }
        Ok(changed)
    }

    /// Drops a line. Returns false if there is no such line.
    pub fn remove(&mut self, key: &LineKey) -> Result<bool> {
        let changed = self.cart.remove(key);
        if changed {
            self.commit()?;
        }
        Ok(changed)
    }

    /// Empties the cart and deletes the stored copy.
    pub fn clear(&mut self) -> Result<()> {
        self.cart.clear();
        self.storage.remove(CART_KEY)?;
        self.tx.send_replace(self.cart.clone());
        Ok(())
    }

    /// Σ `qty × unit_price`.
    pub fn subtotal(&self) -> Money {
        self.cart.subtotal()
    }

    /// Checkout breakdown for the current cart.
    pub fn totals(&self, pricing: &Pricing, checkout: &Checkout) -> Totals {
        pricing.totals(self.cart.subtotal(), checkout)
    }

    /// Amount due for the current cart.
    pub fn total(&self, pricing: &Pricing, checkout: &Checkout) -> Money {
        self.totals(pricing, checkout).total
    }

    fn commit(&mut self) -> Result<()> {
        // Publish first so subscribers see the change even if the write fails
        self.tx.send_replace(self.cart.clone());
        save_json(self.storage.as_ref(), CART_KEY, self.cart.lines())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CartError;
    use cafe_core::storage::{FileStorage, MemoryStorage};
    use cafe_core::{Error, ErrorCode};
    use tempfile::TempDir;

    fn item(id: u32, cents: i64) -> CartItem {
        CartItem {
            key: LineKey::plain(id),
            name: format!("Item {id}"),
            unit_price: Money::from_cents(cents),
            image: None,
        }
    }

    #[test]
    fn test_mutations_persist() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let mut store = CartStore::load(storage.clone());
        store.add(item(1, 450)).unwrap();
        store.add(item(1, 450)).unwrap();
        store.add(item(2, 300)).unwrap();
        assert!(store.decrement(&LineKey::plain(1)).unwrap());

        let reloaded = CartStore::load(storage.clone());
        assert_eq!(reloaded.cart(), store.cart());
        assert_eq!(reloaded.subtotal(), Money::from_cents(750));

        store.clear().unwrap();
        assert_eq!(storage.get(CART_KEY).unwrap(), None);
        assert!(CartStore::load(storage).cart().is_empty());
    }

    #[test]
    fn test_file_backed_round_trip() {
        let dir = TempDir::new().unwrap();
        let storage: Arc<dyn Storage> = Arc::new(FileStorage::open(dir.path()).unwrap());
        let mut store = CartStore::load(storage);
        store.add(item(7, 1199)).unwrap();
        store.increment(&LineKey::plain(7)).unwrap();

        let again = CartStore::load(Arc::new(FileStorage::open(dir.path()).unwrap()));
        assert_eq!(again.cart().item_count(), 2);
        assert_eq!(again.subtotal(), Money::from_cents(2398));
    }

    #[test]
    fn test_corrupt_cart_starts_empty() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        storage.set(CART_KEY, "[{\"broken\":").unwrap();
        let store = CartStore::load(storage);
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_unknown_line_is_not_a_mutation() {
        let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
        let mut store = CartStore::load(storage.clone());
        assert!(!store.increment(&LineKey::plain(9)).unwrap());
        assert!(!store.remove(&LineKey::plain(9)).unwrap());
        assert_eq!(storage.get(CART_KEY).unwrap(), None);
    }

    #[test]
    fn test_totals_use_current_cart() {
        let mut store = CartStore::load(Arc::new(MemoryStorage::new()));
        store.add(item(1, 2500)).unwrap();
        store.add(item(1, 2500)).unwrap();

        let checkout = Checkout::default().with_promo("COFFEE10");
        let totals = store.totals(&Pricing::default(), &checkout);
        assert_eq!(totals.subtotal, Money::from_cents(5000));
        assert_eq!(totals.discount, Money::from_cents(500));
        assert_eq!(store.total(&Pricing::default(), &checkout), totals.total);
    }

    #[tokio::test]
    async fn test_subscribers_see_snapshots() {
        let mut store = CartStore::load(Arc::new(MemoryStorage::new()));
        let mut rx = store.subscribe();
        assert!(rx.borrow_and_update().is_empty());

        store.add(item(3, 100)).unwrap();
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().item_count(), 1);

        store.clear().unwrap();
        rx.changed().await.unwrap();
        assert!(rx.borrow().is_empty());
    }

    struct ReadOnly;

    impl Storage for ReadOnly {
        fn get(&self, _key: &str) -> cafe_core::Result<Option<String>> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> cafe_core::Result<()> {
            Err(Error::new(ErrorCode::PermissionDenied, "read-only"))
        }

        fn remove(&self, _key: &str) -> cafe_core::Result<bool> {
            Ok(false)
        }
    }

    #[test]
    fn test_write_failure_surfaces_but_keeps_change() {
        let mut store = CartStore::load(Arc::new(ReadOnly));
        let rx = store.subscribe();
        let err = store.add(item(1, 100)).unwrap_err();
        assert!(matches!(err, CartError::Storage(_)));
        assert_eq!(store.cart().item_count(), 1);
        assert_eq!(rx.borrow().item_count(), 1);
    }
}
