//! Configuration for the cafe API client
//!
//! Built from the `[routing]` and `[reservations]` sections of the site
//! config, or straight from environment variables.

use crate::error::{ApiError, ApiResult};
use cafe_core::config::{ConfigSchema, ENV_RESERVATIONS_URL, ENV_ROUTING_URL, ENV_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Public OSRM mirror with foot, bike and car profiles
const DEFAULT_ROUTING_URL: &str = "https://routing.openstreetmap.de";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Routing service base URL
    pub routing_url: String,
    /// Reservation form endpoint; submissions fail with a config error when unset
    pub reservations_url: Option<String>,
    /// Per-request timeout for routing
    #[serde(with = "secs")]
    pub routing_timeout: Duration,
    /// Per-request timeout for reservations
    #[serde(with = "secs")]
    pub reservations_timeout: Duration,
    /// Largest party a reservation may be for
    pub max_guests: u32,
}

mod secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            routing_url: DEFAULT_ROUTING_URL.to_string(),
            reservations_url: None,
            routing_timeout: Duration::from_secs(10),
            reservations_timeout: Duration::from_secs(15),
            max_guests: 10,
        }
    }
}

impl ClientConfig {
    /// Configuration from loaded site settings.
    pub fn from_schema(schema: &ConfigSchema) -> Self {
        Self {
            routing_url: schema.routing.base_url.clone(),
            reservations_url: schema.reservations.endpoint.clone(),
            routing_timeout: Duration::from_secs(schema.routing.timeout_secs),
            reservations_timeout: Duration::from_secs(schema.reservations.timeout_secs),
            max_guests: schema.reservations.max_guests,
        }
    }

    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `CAFE_ROUTING_URL`: routing service base URL
    /// - `CAFE_RESERVATIONS_URL`: reservation form endpoint
    /// - `CAFE_TIMEOUT_SECS`: timeout for both services, in seconds
    pub fn from_env() -> ApiResult<Self> {
        let mut config = Self::default();

        if let Ok(url) = env::var(ENV_ROUTING_URL) {
            config.routing_url = url;
        }
        config.reservations_url = env::var(ENV_RESERVATIONS_URL).ok();

        if let Ok(raw) = env::var(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|_| ApiError::config(format!("{ENV_TIMEOUT_SECS} is not a number: {raw}")))?;
            config.routing_timeout = Duration::from_secs(secs);
            config.reservations_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Set the routing base URL
    #[must_use]
    pub fn with_routing_url(mut self, url: impl Into<String>) -> Self {
        self.routing_url = url.into();
        self
    }

    /// Set the reservation endpoint
    #[must_use]
    pub fn with_reservations_url(mut self, url: impl Into<String>) -> Self {
        self.reservations_url = Some(url.into());
        self
    }

    /// Set both request timeouts
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.routing_timeout = timeout;
        self.reservations_timeout = timeout;
        self
    }

    /// Set the party size limit
    #[must_use]
    pub fn with_max_guests(mut self, max_guests: u32) -> Self {
        self.max_guests = max_guests;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> ApiResult<()> {
        check_url("routing_url", &self.routing_url)?;
        if let Some(ref url) = self.reservations_url {
            check_url("reservations_url", url)?;
        }

        if self.routing_timeout.is_zero() || self.reservations_timeout.is_zero() {
            return Err(ApiError::config("timeout must be greater than 0"));
        }

        if self.max_guests == 0 {
            return Err(ApiError::config("max_guests must be at least 1"));
        }

        Ok(())
    }
}

fn check_url(name: &str, url: &str) -> ApiResult<()> {
    if url.is_empty() {
        return Err(ApiError::config(format!("{name} cannot be empty")));
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ApiError::config(format!("{name} must start with http:// or https://")));
    }
    Ok(())
}
