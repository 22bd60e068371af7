// src/format.rs
//
// Display strings for euro amounts. Presentation only; nothing here feeds
// back into the data.

use crate::core::MarketValue;

/// "€1.5M", "€820.0K", "€500".
pub fn format_large_number(number: f64) -> String {
    if number >= 1_000_000.0 {
        format!("€{:.1}M", number / 1_000_000.0)
    } else if number >= 1_000.0 {
        format!("€{:.1}K", number / 1_000.0)
    } else {
        format!("€{:.0}", number)
    }
}

/// "€1,234,567" (rounded to whole euros).
pub fn format_euros(number: f64) -> String {
    let rounded = format!("{:.0}", number);
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };
    join_thousands(sign, digits)
}

fn join_thousands(sign: &str, digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    out.push('€');
    out.push_str(sign);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_percent(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Euros with separators, or "N/A".
pub fn format_value(v: MarketValue) -> String {
    match v {
        MarketValue::Known(n) => format_euros(n as f64),
        MarketValue::Missing => s!("N/A"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_numbers_abbreviate() {
        assert_eq!(format_large_number(2_300_000.0), "€2.3M");
        assert_eq!(format_large_number(1_000_000.0), "€1.0M");
        assert_eq!(format_large_number(820_000.0), "€820.0K");
        assert_eq!(format_large_number(1_500.0), "€1.5K");
        assert_eq!(format_large_number(999.0), "€999");
        assert_eq!(format_large_number(0.0), "€0");
    }

    #[test]
    fn negative_deltas_are_not_abbreviated() {
        assert_eq!(format_large_number(-2_000_000.0), "€-2000000");
    }

    #[test]
    fn euros_group_thousands() {
        assert_eq!(format_euros(0.0), "€0");
        assert_eq!(format_euros(999.0), "€999");
        assert_eq!(format_euros(1_000.0), "€1,000");
        assert_eq!(format_euros(1_234_567.0), "€1,234,567");
        assert_eq!(format_euros(180_000_000.0), "€180,000,000");
        assert_eq!(format_euros(-45_000.0), "€-45,000");
        assert_eq!(format_euros(1_999.7), "€2,000");
    }

    #[test]
    fn percent_and_value() {
        assert_eq!(format_percent(33.333), "33.3%");
        assert_eq!(format_percent(-50.0), "-50.0%");
        assert_eq!(format_value(MarketValue::Known(2_500_000)), "€2,500,000");
        assert_eq!(format_value(MarketValue::Missing), "N/A");
    }
}
