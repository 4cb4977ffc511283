//! Endpoint-specific API implementations
//!
//! | Module | Service | Description |
//! |--------|---------|-------------|
//! | `routing` | OSRM `route/v1` | Street routes between two points, per travel profile |
//! | `reservations` | Form web app | Table reservation submissions |

pub mod reservations;
pub mod routing;

pub use reservations::{Confirmation, Reservation, ReservationsApi};
pub use routing::{RouteSummary, RoutingApi};
