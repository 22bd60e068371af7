// tests/monthly_series.rs
use chrono::{Datelike, NaiveDate};

use mv_dash::core::{MarketValue, SeriesError, generate_monthly_series};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn k(v: i64) -> MarketValue {
    MarketValue::Known(v)
}

#[test]
fn first_month_is_a_single_end_point() {
    let s = generate_monthly_series(ymd(2024, 1, 15), k(1_000), k(5_000)).unwrap();
    assert_eq!(s.pairs(), vec![(String::from("January 2024"), 5_000.0)]);
}

#[test]
fn three_months_interpolate_evenly() {
    let s = generate_monthly_series(ymd(2024, 3, 10), k(1_000), k(3_000)).unwrap();
    assert_eq!(s.labels(), vec!["January 2024", "February 2024", "March 2024"]);
    assert_eq!(s.values(), vec![1_000.0, 2_000.0, 3_000.0]);
}

#[test]
fn months_are_consecutive_across_years() {
    let s = generate_monthly_series(ymd(2026, 10, 18), k(60_000_000), k(180_000_000)).unwrap();
    assert_eq!(s.len(), 34);

    let months: Vec<NaiveDate> = s.iter().map(|p| p.month).collect();
    assert_eq!(months.first(), Some(&ymd(2024, 1, 1)));
    assert_eq!(months.last(), Some(&ymd(2026, 10, 1)));
    for w in months.windows(2) {
        let (a, b) = (w[0], w[1]);
        assert_eq!(b.day(), 1);
        let step = (b.year() * 12 + b.month() as i32) - (a.year() * 12 + a.month() as i32);
        assert_eq!(step, 1, "{a} → {b}");
    }

    let values = s.values();
    assert_eq!(values[0], 60_000_000.0);
    assert_eq!(values[33], 180_000_000.0);
    assert!(values.windows(2).all(|w| w[1] > w[0]));
}

#[test]
fn falling_values_interpolate_down() {
    let s = generate_monthly_series(ymd(2024, 5, 31), k(2_000_000), k(800_000)).unwrap();
    assert_eq!(s.values(), vec![2_000_000.0, 1_700_000.0, 1_400_000.0, 1_100_000.0, 800_000.0]);
}

#[test]
fn repeated_calls_agree() {
    let now = ymd(2025, 2, 28);
    let a = generate_monthly_series(now, k(10), k(20)).unwrap();
    let b = generate_monthly_series(now, k(10), k(20)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn missing_endpoints_are_rejected() {
    let err = generate_monthly_series(ymd(2024, 6, 1), MarketValue::Missing, k(1)).unwrap_err();
    assert!(matches!(err, SeriesError::MissingOperand(_)));
    assert!(err.to_string().contains("cannot interpolate a missing value"));

    let err = generate_monthly_series(ymd(2024, 6, 1), k(1), MarketValue::Missing).unwrap_err();
    assert!(matches!(err, SeriesError::MissingOperand(_)));
}

#[test]
fn dates_before_the_anchor_are_rejected() {
    let err = generate_monthly_series(ymd(2023, 12, 31), k(1), k(2)).unwrap_err();
    assert!(matches!(err, SeriesError::NowBeforeAnchor { .. }));
}
