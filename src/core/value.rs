// src/core/value.rs
//
// Market-value text → whole euros.
//
// Two notations exist in the source data, both with a decimal comma:
//   "1,5 mil €"    thousands  → 1_500
//   "2,3 mill. €"  millions   → 2_300_000
// Anything else is Missing. The parser never fails.

use std::fmt;

pub const THOUSANDS_MARKER: &str = " mil €";
pub const MILLIONS_MARKER: &str = " mill. €";

/// Canonical value in euros, or Missing. Zero is a real value, not Missing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MarketValue {
    Known(i64),
    #[default]
    Missing,
}

impl MarketValue {
    pub fn known(self) -> Option<i64> {
        match self {
            MarketValue::Known(v) => Some(v),
            MarketValue::Missing => None,
        }
    }

    pub fn is_missing(self) -> bool {
        matches!(self, MarketValue::Missing)
    }
}

impl From<i64> for MarketValue {
    fn from(v: i64) -> Self {
        MarketValue::Known(v)
    }
}

impl From<Option<i64>> for MarketValue {
    fn from(v: Option<i64>) -> Self {
        v.map_or(MarketValue::Missing, MarketValue::Known)
    }
}

impl fmt::Display for MarketValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketValue::Known(v) => write!(f, "{v}"),
            MarketValue::Missing => f.write_str("N/A"),
        }
    }
}

/// One cell as a typed tabular reader sees it. Only `Text` is eligible for parsing.
#[derive(Clone, Debug, PartialEq)]
pub enum RawCell {
    Empty,
    Number(f64),
    Text(String),
}

impl RawCell {
    /// Classify a raw field: blank → Empty, plain number → Number, rest → Text.
    pub fn classify(field: &str) -> Self {
        let t = field.trim();
        if t.is_empty() {
            return RawCell::Empty;
        }
        match t.parse::<f64>() {
            Ok(n) => RawCell::Number(n),
            Err(_) => RawCell::Text(field.to_string()),
        }
    }
}

/// Parse any cell. Non-text cells are Missing.
pub fn parse_cell(cell: &RawCell) -> MarketValue {
    match cell {
        RawCell::Text(s) => parse_market_value(s),
        RawCell::Empty | RawCell::Number(_) => MarketValue::Missing,
    }
}

/// Parse one market-value string.
///
/// Matching is by substring: the marker may sit anywhere, the marker is
/// removed, commas become points and the remainder must read as a float.
/// The scaled result is truncated toward zero. A leading minus passes
/// through and yields a negative value.
pub fn parse_market_value(raw: &str) -> MarketValue {
    if raw.contains(THOUSANDS_MARKER) {
        scaled(raw, THOUSANDS_MARKER, 1_000.0)
    } else if raw.contains(MILLIONS_MARKER) {
        scaled(raw, MILLIONS_MARKER, 1_000_000.0)
    } else {
        MarketValue::Missing
    }
}

fn scaled(raw: &str, marker: &str, factor: f64) -> MarketValue {
    let number = raw.replace(marker, "").replace(',', ".");
    let scaled = match number.trim().parse::<f64>() {
        Ok(n) => n * factor,
        Err(_) => return MarketValue::Missing,
    };
    // `as` saturates; i64::MAX as f64 rounds up to 2^63, which is already out of range
    if scaled.is_finite() && scaled >= i64::MIN as f64 && scaled < i64::MAX as f64 {
        // `as` truncates toward zero
        MarketValue::Known(scaled as i64)
    } else {
        MarketValue::Missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_notation() {
        assert_eq!(parse_market_value("1,5 mil €"), MarketValue::Known(1_500));
        assert_eq!(parse_market_value("500 mil €"), MarketValue::Known(500_000));
        assert_eq!(parse_market_value("0,75 mil €"), MarketValue::Known(750));
    }

    #[test]
    fn millions_notation() {
        assert_eq!(parse_market_value("2,3 mill. €"), MarketValue::Known(2_300_000));
        assert_eq!(parse_market_value("180,00 mill. €"), MarketValue::Known(180_000_000));
        assert_eq!(parse_market_value("1 mill. €"), MarketValue::Known(1_000_000));
    }

    #[test]
    fn truncates_instead_of_rounding() {
        // 0.0015 * 1000 = 1.5 → 1
        assert_eq!(parse_market_value("0,0015 mil €"), MarketValue::Known(1));
        assert_eq!(parse_market_value("1,0000009 mill. €"), MarketValue::Known(1_000_000));
    }

    #[test]
    fn zero_is_not_missing() {
        let v = parse_market_value("0 mil €");
        assert_eq!(v, MarketValue::Known(0));
        assert!(!v.is_missing());
    }

    #[test]
    fn unknown_formats_are_missing() {
        assert_eq!(parse_market_value("unknown format"), MarketValue::Missing);
        assert_eq!(parse_market_value("N/A"), MarketValue::Missing);
        assert_eq!(parse_market_value("1,5 M€"), MarketValue::Missing);
        assert_eq!(parse_market_value("1,5 mil $"), MarketValue::Missing);
        assert_eq!(parse_market_value(""), MarketValue::Missing);
    }

    #[test]
    fn marker_with_unparseable_number_is_missing() {
        assert_eq!(parse_market_value("abc mil €"), MarketValue::Missing);
        assert_eq!(parse_market_value("1,2,3 mill. €"), MarketValue::Missing);
        assert_eq!(parse_market_value("inf mill. €"), MarketValue::Missing);
        assert_eq!(parse_market_value("NaN mil €"), MarketValue::Missing);
    }

    #[test]
    fn out_of_range_is_missing_not_clamped() {
        assert_eq!(parse_market_value("1e300 mill. €"), MarketValue::Missing);
        assert_eq!(parse_market_value("-1e300 mill. €"), MarketValue::Missing);
        assert_eq!(parse_market_value("1e16 mil €"), MarketValue::Missing);
        // near the top of the range, still exact
        assert_eq!(
            parse_market_value("9000000000000 mill. €"),
            MarketValue::Known(9_000_000_000_000_000_000)
        );
    }

    #[test]
    fn substring_match_is_permissive() {
        // Surrounding whitespace is tolerated by the float read
        assert_eq!(parse_market_value("  4,5 mil € "), MarketValue::Known(4_500));
        // Every marker occurrence is removed before the float read
        assert_eq!(parse_market_value("7 mil € mil €"), MarketValue::Known(7_000));
        // Leftover text makes the number unreadable
        assert_eq!(parse_market_value("approx 4,5 mil €"), MarketValue::Missing);
    }

    #[test]
    fn negative_passes_through() {
        assert_eq!(parse_market_value("-1,5 mil €"), MarketValue::Known(-1_500));
        assert_eq!(parse_market_value("-0,0015 mil €"), MarketValue::Known(-1));
    }

    #[test]
    fn non_text_cells_are_missing() {
        assert_eq!(parse_cell(&RawCell::Number(42.0)), MarketValue::Missing);
        assert_eq!(parse_cell(&RawCell::Empty), MarketValue::Missing);
        assert_eq!(
            parse_cell(&RawCell::Text(s!("3,2 mill. €"))),
            MarketValue::Known(3_200_000)
        );
    }

    #[test]
    fn classify_fields() {
        assert_eq!(RawCell::classify(""), RawCell::Empty);
        assert_eq!(RawCell::classify("   "), RawCell::Empty);
        assert_eq!(RawCell::classify("42"), RawCell::Number(42.0));
        assert_eq!(RawCell::classify("1,5 mil €"), RawCell::Text(s!("1,5 mil €")));
    }

    #[test]
    fn display_missing_as_placeholder() {
        assert_eq!(MarketValue::Missing.to_string(), "N/A");
        assert_eq!(MarketValue::Known(1500).to_string(), "1500");
    }
}
