//! Street routing through an OSRM-compatible service
//!
//! Each travel profile is served from its own path on the base URL:
//!
//! ```text
//! {base}/routed-{profile}/route/v1/driving/{lng},{lat};{lng},{lat}?overview=full&geometries=geojson
//! ```

use crate::client::CafeClient;
use crate::error::{ApiError, ApiResult};
use cafe_geo::{bounding_box, BBox, GeoPoint, TravelMode};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

/// Routing API interface
#[derive(Clone)]
pub struct RoutingApi {
    client: CafeClient,
}

impl RoutingApi {
    /// Create a new routing API interface
    pub(crate) fn new(client: CafeClient) -> Self {
        Self { client }
    }

    /// URL of the route request for `mode` between two points.
    #[must_use]
    pub fn route_url(&self, mode: TravelMode, origin: GeoPoint, dest: GeoPoint) -> String {
        format!(
            "{}/routed-{}/route/v1/driving/{},{};{},{}?overview=full&geometries=geojson",
            self.client.config().routing_url.trim_end_matches('/'),
            mode.profile(),
            origin.lng,
            origin.lat,
            dest.lng,
            dest.lat,
        )
    }

    /// Fetches the first route from `origin` to `dest`.
    ///
    /// Fails with [`ApiError::NoRoute`] when the service has none,
    /// [`ApiError::Timeout`] past the configured routing timeout and
    /// [`ApiError::Cancelled`] once `cancel` fires.
    #[instrument(skip(self, cancel), fields(profile = mode.profile()))]
    pub async fn route(
        &self,
        mode: TravelMode,
        origin: GeoPoint,
        dest: GeoPoint,
        cancel: &CancellationToken,
    ) -> ApiResult<RouteSummary> {
        origin.validate()?;
        dest.validate()?;

        let url = self.route_url(mode, origin, dest);
        let (request, request_id) = self.client.request_builder(Method::GET, &url);
        debug!(request_id = %request_id, url = %url, "Requesting route");

        let timeout = self.client.config().routing_timeout;
        self.client
            .run(&request_id, timeout, cancel, async move {
                let response = request.send().await?;
                let status = response.status();
                let body = response.text().await?;
                parse_route(status.as_u16(), &body)
            })
            .await
    }
}

/// Reads a route response. OSRM answers "no route" with a 400 and
/// `code: "NoRoute"`; other services answer 200 with no routes.
fn parse_route(status: u16, body: &str) -> ApiResult<RouteSummary> {
    let parsed: Option<RouteResponse> = serde_json::from_str(body).ok();

    if !(200..300).contains(&status) {
        return match parsed {
            Some(r) if r.code.as_deref() == Some("NoRoute") => Err(ApiError::NoRoute),
            Some(RouteResponse { message: Some(m), .. }) => Err(ApiError::api_response(status, m)),
            _ => Err(ApiError::api_response(status, body)),
        };
    }

    let response = match parsed {
        Some(r) => r,
        None => serde_json::from_str::<RouteResponse>(body)?,
    };
    let route = response.routes.into_iter().next().ok_or(ApiError::NoRoute)?;
    Ok(RouteSummary::from(route))
}

#[derive(Debug, Deserialize)]
struct RouteResponse {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    routes: Vec<Route>,
}

#[derive(Debug, Deserialize)]
struct Route {
    geometry: LineString,
    /// Meters
    distance: f64,
    /// Seconds
    duration: f64,
}

#[derive(Debug, Deserialize)]
struct LineString {
    /// `[lng, lat]` pairs
    coordinates: Vec<[f64; 2]>,
}

/// A route reduced to what the map and the ETA badge need.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    /// Length in kilometers
    pub km: f64,
    /// Travel time in minutes
    pub minutes: f64,
    /// Path from origin to destination
    pub geometry: Vec<GeoPoint>,
    /// Bounds of the path; `None` for an empty path
    pub bbox: Option<BBox>,
}

impl From<Route> for RouteSummary {
    fn from(route: Route) -> Self {
        let geometry: Vec<GeoPoint> = route
            .geometry
            .coordinates
            .into_iter()
            .map(|[lng, lat]| GeoPoint::new(lat, lng))
            .collect();
        Self {
            km: route.distance / 1000.0,
            minutes: route.duration / 60.0,
            bbox: bounding_box(&geometry),
            geometry,
        }
    }
}

impl RouteSummary {
    /// The path as a GeoJSON `FeatureCollection` with one `LineString`.
    #[must_use]
    pub fn to_geojson(&self) -> Value {
        let coordinates: Vec<[f64; 2]> = self.geometry.iter().map(|p| p.to_lng_lat()).collect();
        json!({
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "geometry": { "type": "LineString", "coordinates": coordinates },
                "properties": { "km": self.km, "minutes": self.minutes },
            }],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing;
    use crate::config::ClientConfig;
    use std::time::Duration;

    const ROUTE: &str = r#"{
        "code": "Ok",
        "routes": [{
            "geometry": {"type": "LineString", "coordinates": [[-122.6784, 45.5152], [-122.6700, 45.5200], [-122.6650, 45.5101]]},
            "distance": 2450.0,
            "duration": 390.0
        }]
    }"#;

    fn origin() -> GeoPoint {
        GeoPoint::new(45.5152, -122.6784)
    }

    fn dest() -> GeoPoint {
        GeoPoint::new(45.5101, -122.6650)
    }

    #[test]
    fn test_route_url() {
        let client = testing::client(ClientConfig::default().with_routing_url("https://osrm.example/"));
        let url = client.routing().route_url(TravelMode::Cycling, origin(), dest());
        assert_eq!(
            url,
            "https://osrm.example/routed-bike/route/v1/driving/-122.6784,45.5152;-122.665,45.5101?overview=full&geometries=geojson"
        );
    }

    #[test]
    fn test_parse_route_summary() {
        let summary = parse_route(200, ROUTE).unwrap();
        assert!((summary.km - 2.45).abs() < 1e-9);
        assert!((summary.minutes - 6.5).abs() < 1e-9);
        assert_eq!(summary.geometry.len(), 3);
        assert_eq!(summary.geometry[0], origin());

        let bbox = summary.bbox.unwrap();
        assert_eq!(bbox.min_lng, -122.6784);
        assert_eq!(bbox.max_lng, -122.6650);
        assert_eq!(bbox.min_lat, 45.5101);
        assert_eq!(bbox.max_lat, 45.5200);
    }

    #[test]
    fn test_missing_routes_is_no_route() {
        assert!(matches!(parse_route(200, r#"{"routes": []}"#), Err(ApiError::NoRoute)));
        assert!(matches!(parse_route(200, r#"{"code": "Ok"}"#), Err(ApiError::NoRoute)));
        assert!(matches!(
            parse_route(400, r#"{"code": "NoRoute", "message": "Impossible route between points"}"#),
            Err(ApiError::NoRoute)
        ));
    }

    #[test]
    fn test_error_statuses() {
        match parse_route(429, r#"{"code": "TooBig", "message": "Too many requests"}"#) {
            Err(ApiError::ApiResponse { status, message }) => {
                assert_eq!(status, 429);
                assert_eq!(message, "Too many requests");
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert!(matches!(
            parse_route(502, "Bad Gateway"),
            Err(ApiError::ApiResponse { status: 502, .. })
        ));
        assert!(matches!(parse_route(200, "<html>"), Err(ApiError::Json(_))));
    }

    #[test]
    fn test_geojson_feature() {
        let geojson = parse_route(200, ROUTE).unwrap().to_geojson();
        assert_eq!(geojson["features"][0]["geometry"]["type"], "LineString");
        assert_eq!(geojson["features"][0]["geometry"]["coordinates"][0][0], -122.6784);
    }

    #[tokio::test]
    async fn test_route_over_http() {
        let (base, server) = testing::respond_once(200, ROUTE).await;
        let client = testing::client(ClientConfig::default().with_routing_url(base));

        let summary = client
            .routing()
            .route(TravelMode::Walking, origin(), dest(), &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(summary.geometry.len(), 3);

        let request = server.await.unwrap();
        assert!(request.starts_with("GET /routed-foot/route/v1/driving/-122.6784,45.5152;-122.665,45.5101?overview=full&geometries=geojson HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_route_times_out() {
        let (base, _server) = testing::stall().await;
        let config = ClientConfig::default()
            .with_routing_url(base)
            .with_timeout(Duration::from_millis(150));
        let client = testing::client(config);

        let err = client
            .routing()
            .route(TravelMode::Driving, origin(), dest(), &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Timeout(t) if t == Duration::from_millis(150)));
    }

    #[tokio::test]
    async fn test_route_cancelled_midway() {
        let (base, _server) = testing::stall().await;
        let client = testing::client(ClientConfig::default().with_routing_url(base));
        let cancel = CancellationToken::new();

        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            trigger.cancel();
        });

        let err = client
            .routing()
            .route(TravelMode::Driving, origin(), dest(), &cancel)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Cancelled));
    }

    #[tokio::test]
    async fn test_invalid_origin_rejected_before_sending() {
        let client = testing::client(ClientConfig::default());
        let err = client
            .routing()
            .route(TravelMode::Driving, GeoPoint::new(91.0, 0.0), dest(), &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Geo(_)));
    }
}
