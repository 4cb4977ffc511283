//! Branch selection, delivery checks and travel estimates.
//!
//! Everything here is advisory: a delivery check only decides what the map
//! shows, it never gates an order.

use crate::{distance_km, GeoPoint};
use serde::{Deserialize, Serialize};

/// A café location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Location of the branch
    pub coords: GeoPoint,
    /// Street address shown under the name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line: Option<String>,
    /// Contact phone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Explicit maps link, overrides the generated directions URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maps_url: Option<String>,
}

/// Returns the branch closest to `me` together with its distance in km.
///
/// Ties keep the earlier branch. Returns `None` for an empty slice.
pub fn nearest_branch<'a>(me: &GeoPoint, branches: &'a [Branch]) -> Option<(&'a Branch, f64)> {
    let mut iter = branches.iter();
    let first = iter.next()?;
    let mut best = (first, distance_km(me, &first.coords));

    for branch in iter {
        let d = distance_km(me, &branch.coords);
        if d < best.1 {
            best = (branch, d);
        }
    }

    Some(best)
}

/// Returns true if `me` lies within `radius_m` meters of `center`.
#[inline]
pub fn within_delivery_radius(me: &GeoPoint, center: &GeoPoint, radius_m: f64) -> bool {
    distance_km(me, center) * 1000.0 <= radius_m
}

/// How the visitor plans to travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    /// On foot
    Walking,
    /// By bicycle
    Cycling,
    /// By car
    #[default]
    Driving,
}

impl TravelMode {
    /// All modes in display order.
    pub const ALL: [TravelMode; 3] = [TravelMode::Walking, TravelMode::Cycling, TravelMode::Driving];

    /// Assumed average speed in km/h for straight-line estimates.
    pub fn speed_kmh(self) -> f64 {
        match self {
            TravelMode::Walking => 5.0,
            TravelMode::Cycling => 15.0,
            TravelMode::Driving => 28.0,
        }
    }

    /// Routing-service profile name.
    pub fn profile(self) -> &'static str {
        match self {
            TravelMode::Walking => "foot",
            TravelMode::Cycling => "bike",
            TravelMode::Driving => "car",
        }
    }

    /// Short label for display.
    pub fn label(self) -> &'static str {
        match self {
            TravelMode::Walking => "walk",
            TravelMode::Cycling => "bike",
            TravelMode::Driving => "drive",
        }
    }
}

impl std::str::FromStr for TravelMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "walking" | "walk" | "foot" => Ok(Self::Walking),
            "cycling" | "bike" => Ok(Self::Cycling),
            "driving" | "drive" | "car" => Ok(Self::Driving),
            other => Err(format!("unknown travel mode: {other}")),
        }
    }
}

/// As-the-crow-flies travel time in minutes.
#[inline]
pub fn estimate_minutes(km: f64, mode: TravelMode) -> f64 {
    km / mode.speed_kmh() * 60.0
}

/// Axis-aligned bounds in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BBox {
    /// Minimum longitude
    pub min_lng: f64,
    /// Minimum latitude
    pub min_lat: f64,
    /// Maximum longitude
    pub max_lng: f64,
    /// Maximum latitude
    pub max_lat: f64,
}

/// Computes the bounding box of a path, for fitting a route on screen.
pub fn bounding_box(points: &[GeoPoint]) -> Option<BBox> {
    let first = points.first()?;
    let init = BBox {
        min_lng: first.lng,
        min_lat: first.lat,
        max_lng: first.lng,
        max_lat: first.lat,
    };

    Some(points[1..].iter().fold(init, |b, p| BBox {
        min_lng: b.min_lng.min(p.lng),
        min_lat: b.min_lat.min(p.lat),
        max_lng: b.max_lng.max(p.lng),
        max_lat: b.max_lat.max(p.lat),
    }))
}

/// Builds a directions link to `target`.
///
/// Apple devices get an Apple Maps link, everything else Google Maps.
pub fn directions_url(target: &GeoPoint, apple: bool) -> String {
    if apple {
        format!("https://maps.apple.com/?daddr={},{}", target.lat, target.lng)
    } else {
        format!(
            "https://www.google.com/maps/dir/?api=1&destination={},{}",
            target.lat, target.lng
        )
    }
}
