//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, Result};
use std::path::Path;
use tracing::debug;

/// Environment variable overriding `routing.base_url`
pub const ENV_ROUTING_URL: &str = "CAFE_ROUTING_URL";
/// Environment variable overriding `reservations.endpoint`
pub const ENV_RESERVATIONS_URL: &str = "CAFE_RESERVATIONS_URL";
/// Environment variable overriding both request timeouts
pub const ENV_TIMEOUT_SECS: &str = "CAFE_TIMEOUT_SECS";

/// Configuration wrapper
#[derive(Debug, Clone)]
pub struct Config {
    /// Parsed settings
    pub schema: ConfigSchema,
    /// File the settings came from, if any
    pub path: Option<String>,
}

impl Config {
    /// Load configuration from a file path or use defaults, then apply
    /// environment overrides.
    ///
    /// An explicit `path` must exist; the standard locations are optional.
    pub fn load(path: Option<&str>) -> Result<Self> {
        if let Some(p) = path {
            if !Path::new(p).exists() {
                return Err(Error::config_not_found(p));
            }
        }

        let config_path = path.map(String::from).or_else(find_config_file);

        let mut schema = if let Some(ref p) = config_path {
            debug!(path = %p, "Loading config file");
            load_config_file(p)?
        } else {
            ConfigSchema::default()
        };

        apply_env_overrides(&mut schema, |key| std::env::var(key).ok())?;
        validate(&schema)?;

        Ok(Self {
            schema,
            path: config_path,
        })
    }

    /// Parse settings from a TOML string, without environment overrides
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let schema: ConfigSchema = toml::from_str(content)?;
        validate(&schema)?;
        Ok(Self { schema, path: None })
    }

    /// Load with defaults only (no file)
    pub fn defaults() -> Self {
        Self {
            schema: ConfigSchema::default(),
            path: None,
        }
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<String> {
    let candidates = [".cafe.toml", "cafe.toml", ".config/cafe.toml"];

    candidates
        .into_iter()
        .find(|candidate| Path::new(candidate).exists())
        .map(String::from)
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &str) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::config(format!("Failed to read config file {path}: {e}")))?;

    toml::from_str(&content)
        .map_err(|e| Error::config(format!("Failed to parse config file {path}: {e}")))
}

fn apply_env_overrides(
    schema: &mut ConfigSchema,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<()> {
    if let Some(url) = lookup(ENV_ROUTING_URL) {
        schema.routing.base_url = url;
    }
    if let Some(url) = lookup(ENV_RESERVATIONS_URL) {
        schema.reservations.endpoint = Some(url);
    }
    if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
        let secs = raw.trim().parse::<u64>().map_err(|_| {
            Error::invalid_config_value(ENV_TIMEOUT_SECS, format!("Not a number of seconds: {raw}"))
        })?;
        schema.routing.timeout_secs = secs;
        schema.reservations.timeout_secs = secs;
    }
    Ok(())
}

fn validate(schema: &ConfigSchema) -> Result<()> {
    let cafe = &schema.cafe;
    if !(-90.0..=90.0).contains(&cafe.lat) || !(-180.0..=180.0).contains(&cafe.lng) {
        return Err(Error::invalid_config_value(
            "cafe.lat/cafe.lng",
            format!("Coordinates out of range: ({}, {})", cafe.lat, cafe.lng),
        ));
    }
    if !cafe.delivery_radius_m.is_finite() || cafe.delivery_radius_m < 0.0 {
        return Err(Error::invalid_config_value(
            "cafe.delivery_radius_m",
            "Delivery radius must be a non-negative number of meters",
        ));
    }
    if schema.menu.page_size == 0 {
        return Err(Error::invalid_config_value("menu.page_size", "Page size must be at least 1"));
    }
    if !(0.0..1.0).contains(&schema.checkout.tax_rate) {
        return Err(Error::invalid_config_value(
            "checkout.tax_rate",
            "Tax rate is a fraction, e.g. 0.07 for 7%",
        ));
    }
    for promo in &schema.checkout.promotions {
        if promo.percent_off.is_some() == promo.amount_off.is_some() {
            return Err(Error::invalid_config_value(
                "checkout.promotions",
                format!("Promotion {} needs exactly one of percent_off or amount_off", promo.code),
            ));
        }
    }
    if schema.routing.timeout_secs == 0 || schema.reservations.timeout_secs == 0 {
        return Err(Error::invalid_config_value("timeout_secs", "Timeouts must be at least 1 second"));
    }
    Ok(())
}
