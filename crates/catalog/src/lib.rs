//! Menu catalog queries for the cafe site.
//!
//! This crate provides:
//! - Typed menu items loaded from the site's JSON data
//! - Tolerant price and prep-time parsing
//! - Category, search and food sub-filters with a stable sort
//! - Clamped pagination and a page-resetting query state
//!
//! Nothing here renders anything; menu browsers consume [`Page`]s.
//!
//! # Example
//!
//! ```
//! use cafe_catalog::{filter_catalog, paginate, Catalog, FilterParams, SortKey};
//!
//! let catalog = Catalog::from_json_str(r#"[
//!     {"id": 1, "name": "Flat White", "description": "Double ristretto", "price": "$4.50",
//!      "category": "Hot Coffee", "rating": 4.8, "time": "3 mins", "tags": ["Milk"]},
//!     {"id": 2, "name": "Cold Brew", "description": "18 hour steep", "price": "$5.00",
//!      "category": "Cold Coffee", "rating": 4.6, "time": "Ready", "tags": []}
//! ]"#).unwrap();
//!
//! let params = FilterParams::default().with_sort(SortKey::PriceDesc);
//! let filtered = filter_catalog(catalog.items(), &params);
//! let page = paginate(&filtered, 6, 1);
//!
//! assert_eq!(page.page_count, 1);
//! assert_eq!(page.items[0].name, "Cold Brew");
//! ```

mod catalog;
mod error;
mod filter;
mod item;
mod paginate;
mod parse;
mod query;
mod selection;

#[cfg(feature = "wasm")]
mod wasm;

pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use filter::{filter_catalog, FilterParams, SortKey, VegMode, FOOD_SUBCATEGORIES, SUBNAV_CATEGORY};
pub use item::{AddOn, Category, MenuItem, Variant};
pub use paginate::{paginate, Page};
pub use parse::{parse_prep_time, price_to_minor, price_to_number, time_to_minutes, PrepTime};
pub use query::MenuQuery;
pub use selection::Selection;

/// Default number of cards per menu page.
pub const DEFAULT_PAGE_SIZE: usize = 6;
