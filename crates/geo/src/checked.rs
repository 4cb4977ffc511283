//! Validating wrappers around the raw geo functions.
//!
//! The raw functions accept anything and let NaN flow through. These variants
//! reject bad coordinates, radii and step counts up front so callers at a
//! trust boundary (geolocation results, config files) fail fast.

use crate::{GeoError, GeoPoint, Polygon, Result};

/// Great-circle distance in kilometers between two validated points.
pub fn distance_km(a: &GeoPoint, b: &GeoPoint) -> Result<f64> {
    a.validate()?;
    b.validate()?;
    Ok(crate::distance_km(a, b))
}

/// Destination point from a validated start.
pub fn destination_point(
    start: &GeoPoint,
    distance_km: f64,
    bearing_deg: f64,
) -> Result<GeoPoint> {
    start.validate()?;
    if !distance_km.is_finite() || distance_km < 0.0 {
        return Err(GeoError::InvalidRadius(distance_km * 1000.0));
    }
    if !bearing_deg.is_finite() {
        return Err(GeoError::InvalidCoordinate(format!("bearing {bearing_deg}")));
    }
    Ok(crate::destination_point(start.lat, start.lng, distance_km, bearing_deg))
}

/// Circle polygon around a validated center.
pub fn circle_polygon(center: GeoPoint, radius_m: f64, steps: usize) -> Result<Polygon> {
    center.validate()?;
    if !radius_m.is_finite() || radius_m < 0.0 {
        return Err(GeoError::InvalidRadius(radius_m));
    }
    if steps < 3 {
        return Err(GeoError::InvalidSteps(steps));
    }
    Ok(crate::circle_polygon(center, radius_m, steps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeoErrorCode;

    #[test]
    fn test_distance_rejects_nan() {
        let bad = GeoPoint::new(f64::NAN, 0.0);
        let good = GeoPoint::new(10.0, 10.0);
        let err = distance_km(&bad, &good).unwrap_err();
        assert_eq!(err.code(), GeoErrorCode::InvalidCoordinate);
        assert!(distance_km(&good, &good).is_ok());
    }

    #[test]
    fn test_distance_rejects_out_of_range() {
        let bad = GeoPoint::new(0.0, 200.0);
        assert!(distance_km(&GeoPoint::new(0.0, 0.0), &bad).is_err());
    }

    #[test]
    fn test_destination_rejects_negative_distance() {
        let start = GeoPoint::new(0.0, 0.0);
        assert!(matches!(
            destination_point(&start, -1.0, 0.0),
            Err(GeoError::InvalidRadius(_))
        ));
        assert!(destination_point(&start, 1.0, f64::NAN).is_err());
        assert!(destination_point(&start, 1.0, 90.0).is_ok());
    }

    #[test]
    fn test_polygon_rejects_bad_radius_and_steps() {
        let center = GeoPoint::new(17.385, 78.4867);
        assert_eq!(
            circle_polygon(center, -5.0, 64).unwrap_err(),
            GeoError::InvalidRadius(-5.0)
        );
        assert_eq!(circle_polygon(center, 100.0, 2).unwrap_err(), GeoError::InvalidSteps(2));
        assert!(circle_polygon(center, f64::INFINITY, 64).is_err());
        assert_eq!(circle_polygon(center, 100.0, 64).unwrap().vertices.len(), 65);
    }
}
