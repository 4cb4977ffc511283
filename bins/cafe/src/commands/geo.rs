//! Distance and delivery-area commands

use crate::app::{print_json, App};
use anyhow::Result;
use cafe_cli::output::Status;
use cafe_geo::{
    circle_polygon, directions_url, distance_km, estimate_minutes, fmt_distance, fmt_duration,
    nearest_branch, within_delivery_radius, GeoPoint, TravelMode,
};
use owo_colors::OwoColorize;
use serde_json::json;

/// Distances from `lat, lng` to every branch, plus the delivery check
pub fn distance(app: &App, lat: f64, lng: f64) -> Result<()> {
    let me = GeoPoint::try_new(lat, lng)?;
    let branches = app.branches();
    let cafe = &app.config.schema.cafe;
    let delivers = within_delivery_radius(&me, &app.cafe_point(), cafe.delivery_radius_m);
    let nearest = nearest_branch(&me, &branches);

    if app.json() {
        let rows: Vec<_> = branches
            .iter()
            .map(|b| {
                let km = distance_km(&me, &b.coords);
                let eta: serde_json::Map<String, serde_json::Value> = TravelMode::ALL
                    .iter()
                    .map(|m| (m.label().to_string(), json!(estimate_minutes(km, *m))))
                    .collect();
                json!({ "branch": b, "km": km, "minutes": eta })
            })
            .collect();
        return print_json(&json!({
            "branches": rows,
            "nearest": nearest.map(|(b, _)| &b.id),
            "withinDeliveryRadius": delivers,
        }));
    }

    Status::header(&format!("Distances from {lat:.4}, {lng:.4}"));
    for branch in &branches {
        let km = distance_km(&me, &branch.coords);
        let etas: Vec<String> = TravelMode::ALL
            .iter()
            .map(|m| format!("{} {}", m.label(), fmt_duration(estimate_minutes(km, *m))))
            .collect();
        let marker = if nearest.is_some_and(|(b, _)| b.id == branch.id) { "★" } else { " " };
        println!(
            "  {} {:<24} {:>9}  {}",
            marker.yellow(),
            branch.name.bold(),
            fmt_distance(km),
            etas.join(" · ").dimmed()
        );
    }

    if let Some((branch, _)) = nearest {
        println!();
        println!("  Directions: {}", directions_url(&branch.coords, false).underline());
    }

    println!();
    if delivers {
        Status::success(&format!("Inside the {} delivery area", fmt_distance(cafe.delivery_radius_m / 1000.0)));
    } else {
        Status::warning(&format!("Outside the {} delivery area", fmt_distance(cafe.delivery_radius_m / 1000.0)));
    }
    Ok(())
}

/// Delivery area polygon as GeoJSON
pub fn radius(app: &App, steps: usize) -> Result<()> {
    let cafe = &app.config.schema.cafe;
    let polygon = circle_polygon(app.cafe_point(), cafe.delivery_radius_m, steps);
    print_json(&polygon.to_geojson())
}
