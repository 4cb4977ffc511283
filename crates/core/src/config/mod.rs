//! Configuration loading and schema definitions

mod loader;
mod schema;

pub use loader::{Config, ENV_RESERVATIONS_URL, ENV_ROUTING_URL, ENV_TIMEOUT_SECS};
pub use schema::*;
