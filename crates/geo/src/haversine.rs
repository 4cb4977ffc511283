//! Great-circle distance and the spherical direct problem.
//!
//! Both functions treat the Earth as a sphere of radius [`EARTH_RADIUS_KM`].
//! They do not validate input: non-finite coordinates propagate as NaN.
//! See [`crate::checked`] for validating wrappers.

use crate::GeoPoint;

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculates the great-circle distance between two points in kilometers.
///
/// # Example
/// ```
/// use cafe_geo::{distance_km, GeoPoint};
///
/// let berlin = GeoPoint::new(52.5200, 13.4050);
/// let paris = GeoPoint::new(48.8566, 2.3522);
///
/// let distance = distance_km(&berlin, &paris);
/// assert!((distance - 878.0).abs() < 10.0);
/// ```
#[inline]
pub fn distance_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let (lat1, lng1) = a.to_radians();
    let (lat2, lng2) = b.to_radians();

    let d_lat = lat2 - lat1;
    let d_lng = lng2 - lng1;

    let s = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);

    // Rounding can push `s` a hair above 1 for antipodal points.
    2.0 * EARTH_RADIUS_KM * s.sqrt().min(1.0).asin()
}

/// Calculates the great-circle distance between two points in meters.
#[inline]
pub fn distance_m(a: &GeoPoint, b: &GeoPoint) -> f64 {
    distance_km(a, b) * 1000.0
}

/// Projects a point `distance_km` along the sphere from `(lat, lng)` on the
/// given compass bearing (0° = north, clockwise).
///
/// The resulting longitude is normalised into `[-180, 180)`.
///
/// # Example
/// ```
/// use cafe_geo::destination_point;
///
/// // 111.2 km due north is roughly one degree of latitude
/// let p = destination_point(0.0, 0.0, 111.195, 0.0);
/// assert!((p.lat - 1.0).abs() < 1e-3);
/// assert!(p.lng.abs() < 1e-9);
/// ```
pub fn destination_point(lat: f64, lng: f64, distance_km: f64, bearing_deg: f64) -> GeoPoint {
    let delta = distance_km / EARTH_RADIUS_KM;
    let theta = bearing_deg.to_radians();
    let phi1 = lat.to_radians();
    let lambda1 = lng.to_radians();

    let phi2 = (phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * theta.cos()).asin();
    let lambda2 = lambda1
        + (theta.sin() * delta.sin() * phi1.cos()).atan2(delta.cos() - phi1.sin() * phi2.sin());

    GeoPoint::new(phi2.to_degrees(), normalize_lng(lambda2.to_degrees()))
}

/// Wraps a longitude into `[-180, 180)` via `((deg + 540) mod 360) - 180`.
#[inline]
fn normalize_lng(deg: f64) -> f64 {
    (deg + 540.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const BERLIN: GeoPoint = GeoPoint::new(52.5200, 13.4050);
    const PARIS: GeoPoint = GeoPoint::new(48.8566, 2.3522);
    const NEW_YORK: GeoPoint = GeoPoint::new(40.7128, -74.0060);
    const TOKYO: GeoPoint = GeoPoint::new(35.6762, 139.6503);

    #[test]
    fn test_berlin_to_paris() {
        let distance = distance_km(&BERLIN, &PARIS);
        // Expected: ~878 km
        assert!((distance - 878.0).abs() < 5.0, "Berlin-Paris: {}", distance);
    }

    #[test]
    fn test_new_york_to_tokyo() {
        let distance = distance_km(&NEW_YORK, &TOKYO);
        // Expected: ~10,838 km
        assert!((distance - 10838.0).abs() < 50.0, "NYC-Tokyo: {}", distance);
    }

    #[test]
    fn test_same_point_zero_distance() {
        assert_eq!(distance_km(&BERLIN, &BERLIN), 0.0);
    }

    #[test]
    fn test_symmetry() {
        let d1 = distance_km(&BERLIN, &PARIS);
        let d2 = distance_km(&PARIS, &BERLIN);
        assert!((d1 - d2).abs() < 1e-9);
    }

    #[test]
    fn test_meters_conversion() {
        let km = distance_km(&BERLIN, &PARIS);
        let meters = distance_m(&BERLIN, &PARIS);
        assert!((meters - km * 1000.0).abs() < 1e-6);
    }

    #[test]
    fn test_antipodal_points_are_half_circumference() {
        let d = distance_km(&GeoPoint::new(0.0, 0.0), &GeoPoint::new(0.0, 180.0));
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    #[test]
    fn test_nan_propagates() {
        assert!(distance_km(&GeoPoint::new(f64::NAN, 0.0), &BERLIN).is_nan());
    }

    #[test]
    fn test_destination_east_on_equator() {
        let p = destination_point(0.0, 0.0, 111.195, 90.0);
        assert!(p.lat.abs() < 1e-9);
        assert!((p.lng - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_destination_wraps_antimeridian() {
        let p = destination_point(0.0, 179.5, 111.195, 90.0);
        assert!(p.lng < -179.0 && p.lng >= -180.0, "lng: {}", p.lng);
    }

    #[test]
    fn test_destination_zero_distance_is_identity() {
        let p = destination_point(BERLIN.lat, BERLIN.lng, 0.0, 123.0);
        assert!((p.lat - BERLIN.lat).abs() < 1e-12);
        assert!((p.lng - BERLIN.lng).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_lng() {
        assert_eq!(normalize_lng(0.0), 0.0);
        assert_eq!(normalize_lng(190.0), -170.0);
        assert_eq!(normalize_lng(-190.0), 170.0);
        assert_eq!(normalize_lng(180.0), -180.0);
    }

    proptest! {
        #[test]
        fn prop_distance_symmetric(
            lat1 in -90.0f64..90.0, lng1 in -180.0f64..180.0,
            lat2 in -90.0f64..90.0, lng2 in -180.0f64..180.0,
        ) {
            let a = GeoPoint::new(lat1, lng1);
            let b = GeoPoint::new(lat2, lng2);
            prop_assert!((distance_km(&a, &b) - distance_km(&b, &a)).abs() < 1e-6);
        }

        #[test]
        fn prop_distance_to_self_is_zero(lat in -90.0f64..90.0, lng in -180.0f64..180.0) {
            let a = GeoPoint::new(lat, lng);
            prop_assert!(distance_km(&a, &a).abs() < 1e-9);
        }

        #[test]
        fn prop_destination_lands_at_distance(
            lat in -80.0f64..80.0, lng in -180.0f64..180.0,
            km in 0.01f64..500.0, bearing in 0.0f64..360.0,
        ) {
            let start = GeoPoint::new(lat, lng);
            let end = destination_point(lat, lng, km, bearing);
            prop_assert!((distance_km(&start, &end) - km).abs() < 1e-6 * km.max(1.0));
        }
    }
}
