//! Terminal helpers for the `cafe` binary
//!
//! Provides shared CLI functionality:
//! - Status messages and headers
//! - Aligned receipt rows
//! - Spinners for network calls

#![warn(missing_docs)]

pub mod output;
pub mod progress;
