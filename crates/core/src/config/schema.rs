//! Configuration schema definitions
//!
//! Every section and field has a default, so an empty file (or no file)
//! describes the flagship cafe.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    /// Cafe identity, location and branches
    #[serde(default)]
    pub cafe: CafeConfig,

    /// Menu browsing
    #[serde(default)]
    pub menu: MenuConfig,

    /// Checkout pricing
    #[serde(default)]
    pub checkout: CheckoutConfig,

    /// Routing service
    #[serde(default)]
    pub routing: RoutingConfig,

    /// Reservation form endpoint
    #[serde(default)]
    pub reservations: ReservationsConfig,

    /// Local persistence
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Cafe identity and delivery area
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CafeConfig {
    /// Display name
    #[serde(default = "default_cafe_name")]
    pub name: String,

    /// Latitude of the flagship cafe
    #[serde(default = "default_lat")]
    pub lat: f64,

    /// Longitude of the flagship cafe
    #[serde(default = "default_lng")]
    pub lng: f64,

    /// Delivery radius around the flagship, in meters
    #[serde(default = "default_delivery_radius")]
    pub delivery_radius_m: f64,

    /// Other branches; the flagship is always a candidate too
    #[serde(default)]
    pub branches: Vec<BranchConfig>,
}

impl Default for CafeConfig {
    fn default() -> Self {
        Self {
            name: default_cafe_name(),
            lat: default_lat(),
            lng: default_lng(),
            delivery_radius_m: default_delivery_radius(),
            branches: Vec::new(),
        }
    }
}

fn default_cafe_name() -> String {
    "Deccan Brews".to_string()
}

fn default_lat() -> f64 {
    45.5152
}

fn default_lng() -> f64 {
    -122.6784
}

fn default_delivery_radius() -> f64 {
    4000.0
}

/// One branch location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchConfig {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lng: f64,
    /// Street address
    #[serde(default)]
    pub address_line: Option<String>,
    /// Phone number
    #[serde(default)]
    pub phone: Option<String>,
    /// Link to the branch on a map
    #[serde(default)]
    pub maps_url: Option<String>,
}

/// Menu browsing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Path to the catalog JSON file
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Cards per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> usize {
    6
}

/// Checkout pricing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Tax rate applied after discounts (0.07 = 7%)
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,

    /// Tip percentages offered at checkout
    #[serde(default = "default_tip_options")]
    pub tip_options: Vec<u32>,

    /// Promo codes
    #[serde(default = "default_promotions")]
    pub promotions: Vec<PromotionConfig>,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            tax_rate: default_tax_rate(),
            tip_options: default_tip_options(),
            promotions: default_promotions(),
        }
    }
}

fn default_tax_rate() -> f64 {
    0.07
}

fn default_tip_options() -> Vec<u32> {
    vec![0, 5, 10, 15, 20]
}

fn default_promotions() -> Vec<PromotionConfig> {
    vec![PromotionConfig {
        code: "COFFEE10".to_string(),
        percent_off: Some(10.0),
        amount_off: None,
        max_discount: Some(20.0),
    }]
}

/// One promo code.
///
/// Exactly one of `percent_off` and `amount_off` must be set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromotionConfig {
    /// Code as typed by the customer (matched case-insensitively)
    pub code: String,
    /// Percentage of the subtotal taken off
    #[serde(default)]
    pub percent_off: Option<f64>,
    /// Flat amount taken off
    #[serde(default)]
    pub amount_off: Option<f64>,
    /// Upper bound on the discount
    #[serde(default)]
    pub max_discount: Option<f64>,
}

/// Routing service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Base URL; profiles are addressed as `{base_url}/routed-{profile}/...`
    #[serde(default = "default_routing_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_routing_timeout")]
    pub timeout_secs: u64,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            base_url: default_routing_url(),
            timeout_secs: default_routing_timeout(),
        }
    }
}

fn default_routing_url() -> String {
    "https://routing.openstreetmap.de".to_string()
}

fn default_routing_timeout() -> u64 {
    10
}

/// Reservation form endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationsConfig {
    /// Form endpoint; reservations are disabled when unset
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_reservations_timeout")]
    pub timeout_secs: u64,

    /// Largest party accepted
    #[serde(default = "default_max_guests")]
    pub max_guests: u32,
}

impl Default for ReservationsConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: default_reservations_timeout(),
            max_guests: default_max_guests(),
        }
    }
}

fn default_reservations_timeout() -> u64 {
    15
}

fn default_max_guests() -> u32 {
    10
}

/// Local persistence configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one JSON document per key
    #[serde(default = "default_storage_dir")]
    pub dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: default_storage_dir(),
        }
    }
}

fn default_storage_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from(".data"))
        .join("cafe-tools")
}
