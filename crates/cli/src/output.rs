//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use owo_colors::OwoColorize;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.chars().count()));
    }

    /// Print a subheader
    pub fn subheader(message: &str) {
        println!();
        println!("{}", message.bold().dimmed());
    }
}

/// Default width of a receipt row
pub const RECEIPT_WIDTH: usize = 36;

/// Left label, right value, padded with dots to `width` characters.
///
/// Labels that do not fit are kept whole and the value follows after a
/// single space.
pub fn receipt_row(label: &str, value: &str, width: usize) -> String {
    let used = label.chars().count() + value.chars().count();
    if used + 2 > width {
        return format!("{label} {value}");
    }
    let dots = ".".repeat(width - used - 2);
    format!("{label} {dots} {value}")
}

/// Format a duration for display
pub fn format_duration(duration: std::time::Duration) -> String {
    let secs = duration.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.1}s")
    } else {
        let mins = (secs / 60.0).floor();
        let remaining_secs = secs % 60.0;
        format!("{mins}m {remaining_secs:.0}s")
    }
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration(Duration::from_millis(500)), "500ms");
    }

    #[test]
    fn test_format_duration_secs() {
        assert_eq!(format_duration(Duration::from_secs_f32(5.5)), "5.5s");
    }

    #[test]
    fn test_format_duration_mins() {
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 5s");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(1, "item", "items"), "1 item");
        assert_eq!(format_count(0, "item", "items"), "0 items");
        assert_eq!(format_count(5, "item", "items"), "5 items");
    }

    #[test]
    fn test_receipt_row_pads_to_width() {
        let row = receipt_row("Subtotal", "$12.50", 24);
        assert_eq!(row.chars().count(), 24);
        assert!(row.starts_with("Subtotal ."));
        assert!(row.ends_with(". $12.50"));
    }

    #[test]
    fn test_receipt_row_overflow() {
        assert_eq!(receipt_row("Paneer Tikka Pizza - Large", "$11.00", 20), "Paneer Tikka Pizza - Large $11.00");
    }
}
