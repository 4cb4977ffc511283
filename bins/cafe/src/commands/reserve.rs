//! Table reservation command

use crate::app::{cancel_on_ctrl_c, print_json, App};
use anyhow::Result;
use cafe_api_client::{ApiError, Reservation};
use cafe_cli::output::{format_duration, Status};
use cafe_cli::progress;
use cafe_telemetry::Timer;

/// Validate and submit a reservation
pub async fn run(app: &App, reservation: &Reservation) -> Result<()> {
    let client = app.client()?;
    let cancel = cancel_on_ctrl_c();

    let spinner = (!app.json()).then(|| progress::spinner("Saving your reservation"));
    let timer = Timer::start("reservation");
    let result = client.reservations().submit_with_cancel(reservation, &cancel).await;
    let elapsed = timer.stop();

    match result {
        Ok(confirmation) => {
            if let Some(pb) = &spinner {
                progress::finish_success(pb, &format!("Reservation confirmed ({})", format_duration(elapsed)));
            }
            if app.json() {
                return print_json(&confirmation);
            }
            println!("  {confirmation}");
            Ok(())
        }
        Err(ApiError::Validation(errors)) => {
            if let Some(pb) = &spinner {
                progress::clear(pb);
            }
            if !app.json() {
                for error in &errors {
                    Status::error(&error.to_string());
                }
            }
            Err(ApiError::Validation(errors).into())
        }
        Err(e) => {
            if let Some(pb) = &spinner {
                progress::clear(pb);
            }
            Err(e.into())
        }
    }
}
