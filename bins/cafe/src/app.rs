//! Shared command context: settings, storage, catalog and clients

use crate::OutputFormat;
use anyhow::{Context, Result};
use cafe_api_client::{ApiError, CafeClient, ClientConfig};
use cafe_cart::{CartError, Pricing};
use cafe_catalog::{Catalog, CatalogError};
use cafe_core::config::Config;
use cafe_core::error::exit_codes;
use cafe_core::storage::{FileStorage, Storage};
use cafe_geo::{Branch, GeoPoint};
use serde::Serialize;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Menu shipped with the binary, used when `menu.catalog_path` is unset
const BUNDLED_MENU: &str = include_str!("../data/menu.json");

/// Loaded settings plus the output format for this run
pub struct App {
    pub config: Config,
    pub format: OutputFormat,
}

impl App {
    pub fn load(path: Option<&str>, format: OutputFormat) -> Result<Self> {
        let config = Config::load(path)?;
        debug!(path = ?config.path, "Configuration loaded");
        Ok(Self { config, format })
    }

    pub fn json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    pub fn storage(&self) -> Result<Arc<dyn Storage>> {
        let storage = FileStorage::open(&self.config.schema.storage.dir)?;
        Ok(Arc::new(storage))
    }

    pub fn catalog(&self) -> Result<Catalog> {
        match &self.config.schema.menu.catalog_path {
            Some(path) => Catalog::from_path(path).with_context(|| format!("Loading menu from {}", path.display())),
            None => Ok(Catalog::from_json_str(BUNDLED_MENU)?),
        }
    }

    pub fn pricing(&self) -> Pricing {
        Pricing::from_config(&self.config.schema.checkout)
    }

    pub fn cafe_point(&self) -> GeoPoint {
        let cafe = &self.config.schema.cafe;
        GeoPoint::new(cafe.lat, cafe.lng)
    }

    /// Configured branches, or the cafe itself when none are listed
    pub fn branches(&self) -> Vec<Branch> {
        let cafe = &self.config.schema.cafe;
        if cafe.branches.is_empty() {
            return vec![Branch {
                id: "main".to_string(),
                name: cafe.name.clone(),
                coords: self.cafe_point(),
                address_line: None,
                phone: None,
                maps_url: None,
            }];
        }

        cafe.branches
            .iter()
            .map(|b| Branch {
                id: b.id.clone(),
                name: b.name.clone(),
                coords: GeoPoint::new(b.lat, b.lng),
                address_line: b.address_line.clone(),
                phone: b.phone.clone(),
                maps_url: b.maps_url.clone(),
            })
            .collect()
    }

    pub fn client(&self) -> Result<CafeClient> {
        let config = ClientConfig::from_schema(&self.config.schema);
        Ok(CafeClient::with_config(config)?)
    }
}

/// Prints `value` as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Token that fires on Ctrl-C
pub fn cancel_on_ctrl_c() -> CancellationToken {
    let token = CancellationToken::new();
    let trigger = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            trigger.cancel();
        }
    });
    token
}

/// One-line message for a failed command
pub fn describe(err: &anyhow::Error) -> String {
    if let Some(api) = err.downcast_ref::<ApiError>() {
        return api.user_message();
    }
    format!("{err:#}")
}

/// Process exit code for a failed command
pub fn exit_code(err: &anyhow::Error) -> u8 {
    if let Some(api) = err.downcast_ref::<ApiError>() {
        return match api {
            ApiError::Timeout(_) => exit_codes::TIMEOUT,
            ApiError::Cancelled => exit_codes::INTERRUPTED,
            ApiError::Validation(_) | ApiError::Geo(_) => exit_codes::VALIDATION_ERROR,
            ApiError::Config(_) => exit_codes::CONFIG_ERROR,
            _ => exit_codes::NETWORK_ERROR,
        };
    }

    if let Some(core) = err.downcast_ref::<cafe_core::Error>() {
        return if core.code.category() == "Configuration" {
            exit_codes::CONFIG_ERROR
        } else {
            exit_codes::FAILURE
        };
    }

    if let Some(cart) = err.downcast_ref::<CartError>() {
        return match cart {
            CartError::Storage(_) => exit_codes::FAILURE,
            _ => exit_codes::VALIDATION_ERROR,
        };
    }

    match err.downcast_ref::<CatalogError>() {
        Some(CatalogError::Io(_) | CatalogError::Parse(_) | CatalogError::DuplicateId(_)) => exit_codes::CONFIG_ERROR,
        Some(_) => exit_codes::VALIDATION_ERROR,
        None if err.downcast_ref::<cafe_geo::GeoError>().is_some() => exit_codes::VALIDATION_ERROR,
        None => exit_codes::FAILURE,
    }
}
