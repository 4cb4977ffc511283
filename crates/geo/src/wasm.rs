//! WASM bindings for the geo crate.
//!
//! These bindings let the map widget call into the crate from the browser.

use crate::{checked, fmt_distance, fmt_duration, GeoPoint, DEFAULT_STEPS};
use wasm_bindgen::prelude::*;

/// Distance in kilometers between two points.
///
/// Rejects out-of-range or non-finite coordinates.
#[wasm_bindgen]
pub fn distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> Result<f64, JsValue> {
    let from = GeoPoint::new(lat1, lng1);
    let to = GeoPoint::new(lat2, lng2);
    checked::distance_km(&from, &to).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Delivery-radius polygon as a GeoJSON Feature string.
///
/// # Arguments
/// * `lat` / `lng` - Center of the circle
/// * `radius_m` - Radius in meters
/// * `steps` - Number of sampled bearings (0 selects the default)
#[wasm_bindgen]
pub fn delivery_radius_geojson(lat: f64, lng: f64, radius_m: f64, steps: usize) -> Result<String, JsValue> {
    let steps = if steps == 0 { DEFAULT_STEPS } else { steps };
    let polygon = checked::circle_polygon(GeoPoint::new(lat, lng), radius_m, steps)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&polygon.to_geojson())
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}

/// Formats a distance chip label.
#[wasm_bindgen(js_name = formatDistance)]
pub fn format_distance(km: f64) -> String {
    fmt_distance(km)
}

/// Formats a duration chip label.
#[wasm_bindgen(js_name = formatDuration)]
pub fn format_duration(min: f64) -> String {
    fmt_duration(min)
}
