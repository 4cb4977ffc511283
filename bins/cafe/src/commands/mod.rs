//! CLI command implementations

pub mod cart;
pub mod geo;
pub mod menu;
pub mod notes;
pub mod reserve;
pub mod route;
