//! Main API client implementation

use crate::config::ClientConfig;
use crate::endpoints::{ReservationsApi, RoutingApi};
use crate::error::{ApiError, ApiResult};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, ClientBuilder, Method, RequestBuilder};
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// Client for the routing service and the reservation form.
///
/// Every request carries an `X-Request-ID`, runs under its own timeout and
/// can be abandoned through a [`CancellationToken`]. Failed requests are not
/// retried.
#[derive(Clone)]
pub struct CafeClient {
    inner: Client,
    config: Arc<ClientConfig>,
}

impl CafeClient {
    /// Create a new client with configuration from environment
    pub fn new() -> ApiResult<Self> {
        let config = ClientConfig::from_env()?;
        Self::with_config(config)
    }

    /// Create a new client with specific configuration
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;
        let inner = http_builder().build().map_err(ApiError::Request)?;
        Ok(Self::from_parts(config, inner))
    }

    pub(crate) fn from_parts(config: ClientConfig, inner: Client) -> Self {
        Self {
            inner,
            config: Arc::new(config),
        }
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Access the routing service
    #[must_use]
    pub fn routing(&self) -> RoutingApi {
        RoutingApi::new(self.clone())
    }

    /// Access the reservation form
    #[must_use]
    pub fn reservations(&self) -> ReservationsApi {
        ReservationsApi::new(self.clone())
    }

    /// Build a request tagged with a fresh request ID
    pub(crate) fn request_builder(&self, method: Method, url: &str) -> (RequestBuilder, String) {
        let request_id = Uuid::new_v4().to_string();
        let builder = self.inner.request(method, url).header(X_REQUEST_ID, &request_id);
        (builder, request_id)
    }

    /// Drive `call` to completion unless it runs past `timeout` or `cancel`
    /// fires first.
    pub(crate) async fn run<T, F>(
        &self,
        request_id: &str,
        timeout: Duration,
        cancel: &CancellationToken,
        call: F,
    ) -> ApiResult<T>
    where
        F: Future<Output = ApiResult<T>>,
    {
        let start = Instant::now();
        let result = tokio::select! {
            biased;
            () = cancel.cancelled() => Err(ApiError::Cancelled),
            outcome = tokio::time::timeout(timeout, call) => match outcome {
                Ok(Err(ApiError::Request(e))) if e.is_timeout() => Err(ApiError::Timeout(timeout)),
                Ok(result) => result,
                Err(_) => Err(ApiError::Timeout(timeout)),
            },
        };

        let elapsed_ms = start.elapsed().as_millis();
        match &result {
            Ok(_) => debug!(request_id = %request_id, elapsed_ms, "Request succeeded"),
            Err(ApiError::Cancelled) => debug!(request_id = %request_id, elapsed_ms, "Request cancelled"),
            Err(e) => warn!(request_id = %request_id, elapsed_ms, error = %e, "Request failed"),
        }
        result
    }
}

pub(crate) fn http_builder() -> ClientBuilder {
    let mut default_headers = HeaderMap::new();
    default_headers.insert(
        USER_AGENT,
        HeaderValue::from_static(concat!("cafe-api-client/", env!("CARGO_PKG_VERSION"))),
    );
    Client::builder().default_headers(default_headers)
}
