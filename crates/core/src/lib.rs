//! Core utilities for the cafe tools
//!
//! This crate provides shared functionality used by the domain crates and
//! the `cafe` binary:
//!
//! - **Error handling**: errors with codes, context and recovery suggestions
//! - **Configuration**: TOML-based configuration with defaults, environment
//!   overrides and validation
//! - **Storage**: durable key/value documents for the cart and preferences
//!
//! # Example
//!
//! ```rust,no_run
//! use cafe_core::config::Config;
//! use cafe_core::storage::FileStorage;
//!
//! let config = Config::load(None)?;
//! let storage = FileStorage::open(&config.schema.storage.dir)?;
//! println!("Storing data in {}", storage.dir().display());
//! # Ok::<(), cafe_core::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod storage;

pub use error::{Error, ErrorCode, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ConfigSchema};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result};
    pub use crate::storage::{load_json, save_json, FileStorage, MemoryStorage, Storage};
}
