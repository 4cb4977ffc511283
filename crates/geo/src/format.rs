//! Display formatting for distance and duration chips.

/// Formats a distance given in kilometers.
///
/// - below 1 km: whole meters (`"500 m"`)
/// - below 100 km: one decimal (`"12.3 km"`)
/// - otherwise: grouped whole kilometers (`"1,250 km"`)
///
/// Non-finite input renders as `"n/a"`.
pub fn fmt_distance(km: f64) -> String {
    if !km.is_finite() {
        return "n/a".to_string();
    }

    if km < 1.0 {
        format!("{} m", (km * 1000.0).round() as i64)
    } else if km < 100.0 {
        format!("{km:.1} km")
    } else {
        format!("{} km", group_thousands(km.round() as i64))
    }
}

/// Formats a duration given in minutes as a rough ETA.
///
/// Below an hour renders whole minutes, otherwise whole hours.
pub fn fmt_duration(min: f64) -> String {
    if !min.is_finite() {
        return "n/a".to_string();
    }

    if min < 60.0 {
        format!("{} min", min.round() as i64)
    } else {
        format!("{} h", (min / 60.0).round() as i64)
    }
}

/// Inserts `,` between groups of three digits (en-US style).
fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_distance_meters() {
        assert_eq!(fmt_distance(0.5), "500 m");
        assert_eq!(fmt_distance(0.0), "0 m");
        assert_eq!(fmt_distance(0.9994), "999 m");
    }

    #[test]
    fn test_fmt_distance_km() {
        assert_eq!(fmt_distance(1.0), "1.0 km");
        assert_eq!(fmt_distance(12.34), "12.3 km");
        assert_eq!(fmt_distance(99.9), "99.9 km");
    }

    #[test]
    fn test_fmt_distance_grouped() {
        assert_eq!(fmt_distance(150.0), "150 km");
        assert_eq!(fmt_distance(1250.4), "1,250 km");
        assert_eq!(fmt_distance(10_838.2), "10,838 km");
    }

    #[test]
    fn test_fmt_distance_non_finite() {
        assert_eq!(fmt_distance(f64::NAN), "n/a");
        assert_eq!(fmt_distance(f64::INFINITY), "n/a");
    }

    #[test]
    fn test_fmt_duration() {
        assert_eq!(fmt_duration(45.0), "45 min");
        assert_eq!(fmt_duration(0.4), "0 min");
        assert_eq!(fmt_duration(59.4), "59 min");
        assert_eq!(fmt_duration(60.0), "1 h");
        assert_eq!(fmt_duration(125.0), "2 h");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(-4200), "-4,200");
    }
}
