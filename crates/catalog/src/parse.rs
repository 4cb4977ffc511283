//! Tolerant parsing of the legacy price and prep-time strings.
//!
//! Catalog data stores prices as display strings (`"$4.50"`, `"₹120"`) and
//! prep times as free text (`"Ready"`, `"12 mins"`). These helpers are the
//! only place that interprets them; unparsable input degrades to zero.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Leading float after currency symbols and separators are stripped.
static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d*(?:\.\d*)?").unwrap());

/// First integer followed by "min".
static MINUTES: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s*min").unwrap());

/// Parsed prep time.
///
/// Keeps "ready now" apart from "could not tell", which
/// [`time_to_minutes`] folds together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrepTime {
    /// Served immediately
    Ready,
    /// Takes this many minutes
    Minutes(u32),
    /// Missing or unparsable
    Unknown,
}

impl PrepTime {
    /// Minutes for sorting; `Ready` and `Unknown` both count as 0.
    #[inline]
    pub fn minutes(self) -> u32 {
        match self {
            PrepTime::Minutes(m) => m,
            PrepTime::Ready | PrepTime::Unknown => 0,
        }
    }
}

/// Extracts the numeric value of a price string.
///
/// Every character other than ASCII digits and `.` is dropped, then the
/// leading decimal number is read. Returns 0 when nothing parses.
///
/// # Example
/// ```
/// use cafe_catalog::price_to_number;
///
/// assert_eq!(price_to_number("$4.50"), 4.5);
/// assert_eq!(price_to_number("₹120"), 120.0);
/// assert_eq!(price_to_number("free"), 0.0);
/// ```
pub fn price_to_number(price: &str) -> f64 {
    let cleaned: String = price
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let leading = LEADING_NUMBER.find(&cleaned).map_or("", |m| m.as_str());

    match leading.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            debug!(price, "Unparsable price, defaulting to 0");
            0.0
        }
    }
}

/// Price in minor currency units (cents, paise), rounded to the nearest unit.
#[inline]
pub fn price_to_minor(price: &str) -> i64 {
    (price_to_number(price) * 100.0).round() as i64
}

/// Parses a prep-time string.
pub fn parse_prep_time(time: &str) -> PrepTime {
    if time.eq_ignore_ascii_case("ready") {
        return PrepTime::Ready;
    }

    match MINUTES
        .captures(time)
        .and_then(|caps| caps[1].parse::<u32>().ok())
    {
        Some(minutes) => PrepTime::Minutes(minutes),
        None => {
            debug!(time, "Unparsable prep time, defaulting to 0");
            PrepTime::Unknown
        }
    }
}

/// Prep time in minutes; `"Ready"` and unparsable input both yield 0.
///
/// # Example
/// ```
/// use cafe_catalog::time_to_minutes;
///
/// assert_eq!(time_to_minutes("Ready"), 0);
/// assert_eq!(time_to_minutes("12 mins"), 12);
/// assert_eq!(time_to_minutes(""), 0);
/// ```
#[inline]
pub fn time_to_minutes(time: &str) -> u32 {
    parse_prep_time(time).minutes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_price_currency_symbols() {
        assert_eq!(price_to_number("$4.50"), 4.5);
        assert_eq!(price_to_number("₹120"), 120.0);
        assert_eq!(price_to_number("120"), 120.0);
        assert_eq!(price_to_number("Rs. 99"), 0.99);
    }

    #[test]
    fn test_price_unparsable_is_zero() {
        assert_eq!(price_to_number("free"), 0.0);
        assert_eq!(price_to_number(""), 0.0);
        assert_eq!(price_to_number("."), 0.0);
    }

    #[test]
    fn test_price_reads_leading_number_only() {
        assert_eq!(price_to_number("1.2.3"), 1.2);
        assert_eq!(price_to_number("$.75"), 0.75);
        assert_eq!(price_to_number("$1,250"), 1250.0);
    }

    #[test]
    fn test_price_to_minor() {
        assert_eq!(price_to_minor("$4.50"), 450);
        assert_eq!(price_to_minor("$0.10"), 10);
        assert_eq!(price_to_minor("$19.99"), 1999);
        assert_eq!(price_to_minor("n/a"), 0);
    }

    #[test]
    fn test_time_ready_any_case() {
        assert_eq!(time_to_minutes("Ready"), 0);
        assert_eq!(time_to_minutes("READY"), 0);
        assert_eq!(parse_prep_time("ready"), PrepTime::Ready);
    }

    #[test]
    fn test_time_minutes() {
        assert_eq!(time_to_minutes("12 mins"), 12);
        assert_eq!(time_to_minutes("3 min"), 3);
        assert_eq!(time_to_minutes("5min"), 5);
        assert_eq!(time_to_minutes("about 8 mins"), 8);
    }

    #[test]
    fn test_time_unknown_is_zero_but_distinct() {
        assert_eq!(time_to_minutes(""), 0);
        assert_eq!(time_to_minutes("soon"), 0);
        assert_eq!(parse_prep_time("soon"), PrepTime::Unknown);
        assert_ne!(parse_prep_time("soon"), parse_prep_time("Ready"));
    }

    proptest! {
        #[test]
        fn prop_price_never_negative_or_nan(s in ".*") {
            let v = price_to_number(&s);
            prop_assert!(v.is_finite());
            prop_assert!(v >= 0.0);
        }

        #[test]
        fn prop_dollar_prices_parse(cents in 0u32..1_000_000) {
            let s = format!("${}.{:02}", cents / 100, cents % 100);
            prop_assert_eq!(price_to_minor(&s), i64::from(cents));
        }
    }
}
