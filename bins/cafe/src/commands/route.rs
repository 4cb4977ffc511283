//! Street route command

use crate::app::{cancel_on_ctrl_c, print_json, App};
use anyhow::{anyhow, Result};
use cafe_cli::output::{format_duration, Status};
use cafe_cli::progress;
use cafe_geo::{directions_url, fmt_distance, fmt_duration, nearest_branch, Branch, GeoPoint, TravelMode};
use cafe_telemetry::Timer;
use serde_json::json;
use tracing::info;

/// Fetch a route from `lat, lng` to a branch
pub async fn run(app: &App, lat: f64, lng: f64, mode: &str, branch_id: Option<&str>) -> Result<()> {
    let me = GeoPoint::try_new(lat, lng)?;
    let mode: TravelMode = mode.parse().map_err(|e: String| anyhow!(e))?;
    let branches = app.branches();
    let target = pick_branch(&me, &branches, branch_id)?;

    let client = app.client()?;
    let cancel = cancel_on_ctrl_c();

    let spinner = (!app.json()).then(|| progress::spinner(&format!("Routing to {} ({})", target.name, mode.label())));
    let timer = Timer::start("route");
    let result = client.routing().route(mode, me, target.coords, &cancel).await;
    let elapsed = timer.stop();

    let summary = match result {
        Ok(summary) => {
            if let Some(pb) = &spinner {
                progress::finish_success(pb, &format!("Route found in {}", format_duration(elapsed)));
            }
            summary
        }
        Err(e) => {
            if let Some(pb) = &spinner {
                progress::finish_error(pb, &e.user_message());
            }
            return Err(e.into());
        }
    };
    info!(branch = %target.id, km = summary.km, minutes = summary.minutes, "Route found");

    if app.json() {
        return print_json(&json!({
            "branch": target.id,
            "mode": mode,
            "km": summary.km,
            "minutes": summary.minutes,
            "bbox": summary.bbox,
            "route": summary.to_geojson(),
        }));
    }

    Status::success(&format!(
        "{} to {}: {} · {}",
        mode.label(),
        target.name,
        fmt_distance(summary.km),
        fmt_duration(summary.minutes)
    ));
    println!("  Directions: {}", directions_url(&target.coords, false));
    Ok(())
}

fn pick_branch<'a>(me: &GeoPoint, branches: &'a [Branch], id: Option<&str>) -> Result<&'a Branch> {
    match id {
        Some(id) => branches
            .iter()
            .find(|b| b.id == id)
            .ok_or_else(|| anyhow!("No branch with id {id}")),
        None => nearest_branch(me, branches)
            .map(|(b, _)| b)
            .ok_or_else(|| anyhow!("No branches configured")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn branch(id: &str, lat: f64, lng: f64) -> Branch {
        Branch {
            id: id.to_string(),
            name: id.to_string(),
            coords: GeoPoint::new(lat, lng),
            address_line: None,
            phone: None,
            maps_url: None,
        }
    }

    #[test]
    fn test_pick_branch() {
        let branches = vec![branch("downtown", 45.5152, -122.6784), branch("pearl", 45.5290, -122.6840)];
        let me = GeoPoint::new(45.5300, -122.6850);

        assert_eq!(pick_branch(&me, &branches, None).unwrap().id, "pearl");
        assert_eq!(pick_branch(&me, &branches, Some("downtown")).unwrap().id, "downtown");
        assert!(pick_branch(&me, &branches, Some("airport")).is_err());
        assert!(pick_branch(&me, &[], None).is_err());
    }
}
