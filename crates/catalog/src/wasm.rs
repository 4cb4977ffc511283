//! WASM bindings for the catalog crate.

use crate::{filter_catalog, paginate, Catalog, Category, FilterParams, SortKey, VegMode};
use wasm_bindgen::prelude::*;

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Filters and pages a JSON catalog, returning the page as JSON.
///
/// # Arguments
/// * `catalog_json` - JSON array of menu items
/// * `category` - Category display name, or `"All"`
/// * `query` - Search text
/// * `sort` - `popular`, `price-asc`, `price-desc` or `time`
/// * `page` - 1-based page number (clamped)
/// * `page_size` - Cards per page
#[wasm_bindgen(js_name = queryMenu)]
pub fn query_menu(
    catalog_json: &str,
    category: &str,
    query: &str,
    sort: &str,
    page: usize,
    page_size: usize,
) -> Result<String, JsValue> {
    let catalog = Catalog::from_json_str(catalog_json).map_err(js_err)?;
    let category = match category {
        "" | "All" => None,
        name => Some(name.parse::<Category>().map_err(js_err)?),
    };

    let params = FilterParams::default()
        .with_category(category)
        .with_query(query)
        .with_sort(sort.parse::<SortKey>().map_err(js_err)?);

    let filtered = filter_catalog(catalog.items(), &params);
    let page = paginate(&filtered, page_size, page);
    serde_json::to_string(&page).map_err(js_err)
}

/// Numeric value of a price string.
#[wasm_bindgen(js_name = priceToNumber)]
pub fn price_to_number(price: &str) -> f64 {
    crate::price_to_number(price)
}

/// Prep time in minutes.
#[wasm_bindgen(js_name = timeToMinutes)]
pub fn time_to_minutes(time: &str) -> u32 {
    crate::time_to_minutes(time)
}

/// Validates a veg-mode label.
#[wasm_bindgen(js_name = isVegMode)]
pub fn is_veg_mode(mode: &str) -> bool {
    mode.parse::<VegMode>().is_ok()
}
