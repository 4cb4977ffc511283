//! HTTP client for the cafe site's external services
//!
//! Two services sit behind this crate: an OSRM-compatible routing service
//! used to draw directions to a branch, and the form endpoint that records
//! table reservations.
//!
//! # Features
//!
//! - **Environment-based configuration**: URLs and timeouts from the site config or `CAFE_*` variables
//! - **Per-request timeouts**: every call is bounded and reports [`ApiError::Timeout`]
//! - **Cancellation**: calls take a [`CancellationToken`](tokio_util::sync::CancellationToken)
//! - **Request correlation**: each request carries a unique `X-Request-ID`
//!
//! Nothing is retried automatically; [`ApiError::user_message`] tells the
//! user when trying again may help.
//!
//! # Example
//!
//! ```rust,no_run
//! use cafe_api_client::{CafeClient, ClientConfig};
//! use cafe_geo::{GeoPoint, TravelMode};
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CafeClient::with_config(ClientConfig::default())?;
//!
//!     let route = client
//!         .routing()
//!         .route(
//!             TravelMode::Walking,
//!             GeoPoint::new(45.5230, -122.6765),
//!             GeoPoint::new(45.5152, -122.6784),
//!             &CancellationToken::new(),
//!         )
//!         .await?;
//!     println!("{:.1} km, {:.0} min", route.km, route.minutes);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;

pub use client::CafeClient;
pub use config::ClientConfig;
pub use endpoints::{Confirmation, Reservation, RouteSummary};
pub use error::{ApiError, ApiResult, FieldError};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::CafeClient;
    pub use crate::config::ClientConfig;
    pub use crate::endpoints::{Confirmation, Reservation, ReservationsApi, RouteSummary, RoutingApi};
    pub use crate::error::{ApiError, ApiResult, FieldError};
}
