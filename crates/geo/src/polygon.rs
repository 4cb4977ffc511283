//! Delivery-radius polygons.
//!
//! A circle on the sphere is approximated by sampling [`destination_point`]
//! at evenly spaced bearings. The ring is closed: the vertex at 360° repeats
//! the vertex at 0°.

use crate::{destination_point, GeoPoint};
use serde::Serialize;
use serde_json::{json, Value};

/// Default number of bearings sampled around the circle.
pub const DEFAULT_STEPS: usize = 64;

/// A closed ring of vertices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polygon {
    /// Ring vertices; first and last are identical.
    pub vertices: Vec<GeoPoint>,
}

impl Polygon {
    /// Returns true if the ring is closed.
    pub fn is_closed(&self) -> bool {
        match (self.vertices.first(), self.vertices.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }

    /// Renders the ring as a GeoJSON `Feature` with a `Polygon` geometry,
    /// the payload format map layers consume.
    pub fn to_geojson(&self) -> Value {
        let ring: Vec<[f64; 2]> = self.vertices.iter().map(|p| p.to_lng_lat()).collect();
        json!({
            "type": "Feature",
            "geometry": { "type": "Polygon", "coordinates": [ring] },
            "properties": {},
        })
    }
}

/// Approximates a circle of `radius_m` meters around `center`.
///
/// Produces `steps + 1` vertices. A zero radius collapses every vertex onto
/// `center`.
///
/// # Example
/// ```
/// use cafe_geo::{circle_polygon, GeoPoint, DEFAULT_STEPS};
///
/// let ring = circle_polygon(GeoPoint::new(17.385, 78.4867), 4000.0, DEFAULT_STEPS);
/// assert_eq!(ring.vertices.len(), DEFAULT_STEPS + 1);
/// assert!(ring.is_closed());
/// ```
pub fn circle_polygon(center: GeoPoint, radius_m: f64, steps: usize) -> Polygon {
    let km = radius_m / 1000.0;
    let steps = steps.max(1);

    let mut vertices: Vec<GeoPoint> = (0..steps)
        .map(|i| {
            let bearing = i as f64 / steps as f64 * 360.0;
            destination_point(center.lat, center.lng, km, bearing)
        })
        .collect();

    // Repeat the first vertex instead of projecting 360° so the ring closes exactly.
    vertices.push(vertices[0]);

    Polygon { vertices }
}
