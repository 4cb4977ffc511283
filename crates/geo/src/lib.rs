//! Geospatial utilities for the cafe map widget.
//!
//! This crate provides:
//! - Haversine distance and destination-point projection
//! - Delivery-radius circle polygons (GeoJSON ready)
//! - Distance and duration formatting for display chips
//! - Nearest-branch selection and rough travel estimates
//! - WASM bindings for browser usage
//!
//! # Example
//!
//! ```
//! use cafe_geo::{distance_km, fmt_distance, GeoPoint};
//!
//! let cafe = GeoPoint::new(45.5152, -122.6784);  // Portland
//! let me = GeoPoint::new(45.5231, -122.6765);
//!
//! let km = distance_km(&cafe, &me);
//! assert_eq!(fmt_distance(km), "891 m");
//! ```

mod branch;
pub mod checked;
mod error;
mod format;
mod haversine;
mod polygon;

#[cfg(feature = "wasm")]
mod wasm;

pub use branch::{
    bounding_box, directions_url, estimate_minutes, nearest_branch, within_delivery_radius, BBox,
    Branch, TravelMode,
};
pub use error::{GeoError, GeoErrorCode, Result};
pub use format::{fmt_distance, fmt_duration};
pub use haversine::{destination_point, distance_km, distance_m, EARTH_RADIUS_KM};
pub use polygon::{circle_polygon, Polygon, DEFAULT_STEPS};

/// A geographic point with latitude and longitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees (-90 to 90)
    pub lat: f64,
    /// Longitude in degrees (-180 to 180)
    pub lng: f64,
}

impl GeoPoint {
    /// Creates a new point without range checks.
    ///
    /// Use [`GeoPoint::try_new`] at trust boundaries.
    #[inline]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Creates a new point, rejecting non-finite or out-of-range values.
    pub fn try_new(lat: f64, lng: f64) -> Result<Self> {
        let point = Self::new(lat, lng);
        point.validate()?;
        Ok(point)
    }

    /// Returns true if both components are finite and in range.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Checks the point and returns a descriptive error when it is unusable.
    pub fn validate(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(GeoError::InvalidCoordinate(format!(
                "lat {} / lng {} outside [-90, 90] / [-180, 180]",
                self.lat, self.lng
            )))
        }
    }

    /// Converts degrees to radians for internal calculations.
    #[inline]
    pub(crate) fn to_radians(self) -> (f64, f64) {
        (self.lat.to_radians(), self.lng.to_radians())
    }

    /// GeoJSON position order: `[lng, lat]`.
    #[inline]
    pub fn to_lng_lat(self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_creation() {
        let point = GeoPoint::new(45.5152, -122.6784);
        assert_eq!(point.lat, 45.5152);
        assert_eq!(point.lng, -122.6784);
    }

    #[test]
    fn test_point_validation() {
        assert!(GeoPoint::new(0.0, 0.0).is_valid());
        assert!(GeoPoint::new(90.0, 180.0).is_valid());
        assert!(GeoPoint::new(-90.0, -180.0).is_valid());
        assert!(!GeoPoint::new(91.0, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, 181.0).is_valid());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn test_try_new_rejects_out_of_range() {
        let err = GeoPoint::try_new(120.0, 10.0).unwrap_err();
        assert_eq!(err.code(), GeoErrorCode::InvalidCoordinate);
        assert!(GeoPoint::try_new(17.385, 78.4867).is_ok());
    }

    #[test]
    fn test_point_from_tuple() {
        let point: GeoPoint = (17.385, 78.4867).into();
        assert_eq!(point.lat, 17.385);
        assert_eq!(point.to_lng_lat(), [78.4867, 17.385]);
    }
}
