//! Flavor notes commands

use crate::app::{print_json, App};
use anyhow::Result;
use cafe_cart::{FlavorNote, FlavorNotes};
use cafe_cli::output::Status;
use owo_colors::OwoColorize;
use serde_json::json;

fn open(app: &App) -> Result<FlavorNotes> {
    Ok(FlavorNotes::load(app.storage()?))
}

/// List every note, marking the selected ones
pub fn list(app: &App) -> Result<()> {
    let notes = open(app)?;

    if app.json() {
        return print_json(&json!({
            "notes": FlavorNote::ALL,
            "selected": notes.selected(),
        }));
    }

    Status::header("Flavor notes");
    for note in FlavorNote::ALL {
        if notes.selected().contains(&note) {
            println!("  {} {}", "●".green(), note.bold());
        } else {
            println!("  {} {}", "○".dimmed(), note);
        }
    }
    Ok(())
}

/// Select or unselect one note
pub fn toggle(app: &App, name: &str) -> Result<()> {
    let note: FlavorNote = name.parse()?;
    let mut notes = open(app)?;
    let selected = notes.toggle(note)?;

    if app.json() {
        return print_json(&json!({ "note": note, "selected": selected }));
    }
    if selected {
        Status::success(&format!("{note} selected"));
    } else {
        Status::info(&format!("{note} unselected"));
    }
    Ok(())
}

/// Unselect everything
pub fn clear(app: &App) -> Result<()> {
    let mut notes = open(app)?;
    notes.clear()?;
    if !app.json() {
        Status::success("Flavor notes cleared");
    }
    Ok(())
}

/// Pairings for the selected notes
pub fn suggest(app: &App) -> Result<()> {
    let notes = open(app)?;
    let suggestions = notes.suggestions();

    if app.json() {
        return print_json(&suggestions);
    }

    if suggestions.is_empty() {
        Status::info("Pick a flavor note to get pairing suggestions");
        return Ok(());
    }

    let picked: Vec<&str> = notes.selected().iter().map(|n| n.as_str()).collect();
    Status::header(&format!("Pairs well with {}", picked.join(", ")));
    for suggestion in suggestions {
        println!("  • {suggestion}");
    }
    Ok(())
}
