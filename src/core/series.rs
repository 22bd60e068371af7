// src/core/series.rs
//
// Synthesized monthly market-value series.
//
// One point per calendar month, from the anchor month through the month of
// `now` (both inclusive), with values linearly interpolated between a start
// and an end value. Nothing here reads the clock; `now` is always passed in.

use std::fmt;

use chrono::{Datelike, Days, NaiveDate};
use thiserror::Error as ThisError;

use super::value::MarketValue;
use crate::config::consts::{ANCHOR_MONTH, ANCHOR_YEAR};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    Start,
    End,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Start => f.write_str("start"),
            Operand::End => f.write_str("end"),
        }
    }
}

#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum SeriesError {
    #[error("cannot interpolate a missing value ({0} value)")]
    MissingOperand(Operand),

    #[error("evaluation date {now} precedes the series anchor {anchor}")]
    NowBeforeAnchor { now: NaiveDate, anchor: NaiveDate },
}

#[derive(Clone, Debug, PartialEq)]
pub struct MonthPoint {
    /// First day of the month
    pub month: NaiveDate,
    /// "January 2024"
    pub label: String,
    pub value: f64,
}

/// Ordered, gap-free, never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct MonthlySeries {
    points: Vec<MonthPoint>,
}

impl MonthlySeries {
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
    pub fn points(&self) -> &[MonthPoint] { &self.points }
    pub fn iter(&self) -> impl Iterator<Item = &MonthPoint> { self.points.iter() }

    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.label.as_str()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// (label, value) pairs, the shape charts consume.
    pub fn pairs(&self) -> Vec<(String, f64)> {
        self.points.iter().map(|p| (p.label.clone(), p.value)).collect()
    }
}

/// January 1, 2024.
pub fn anchor_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(ANCHOR_YEAR, ANCHOR_MONTH, 1).expect("anchor constant is a valid date")
}

pub fn month_label(d: NaiveDate) -> String {
    d.format("%B %Y").to_string()
}

fn month_start(d: NaiveDate) -> NaiveDate {
    d - Days::new(u64::from(d.day0()))
}

/// Series from the fixed anchor month to the month of `now`.
pub fn generate_monthly_series(
    now: NaiveDate,
    start: MarketValue,
    end: MarketValue,
) -> Result<MonthlySeries, SeriesError> {
    generate_monthly_series_from(anchor_date(), now, start, end)
}

/// Same as `generate_monthly_series` with an explicit anchor. The anchor is
/// snapped to the first of its month.
pub fn generate_monthly_series_from(
    anchor: NaiveDate,
    now: NaiveDate,
    start: MarketValue,
    end: MarketValue,
) -> Result<MonthlySeries, SeriesError> {
    let start = start.known().ok_or(SeriesError::MissingOperand(Operand::Start))?;
    let end = end.known().ok_or(SeriesError::MissingOperand(Operand::End))?;

    let months = months_between(month_start(anchor), month_start(now));
    if months.is_empty() {
        return Err(SeriesError::NowBeforeAnchor { now, anchor });
    }

    let n = months.len();
    let (start, end) = (start as f64, end as f64);

    let points = months
        .into_iter()
        .enumerate()
        .map(|(i, month)| {
            let value = if n == 1 {
                end
            } else {
                start + (end - start) * (i as f64 / (n - 1) as f64)
            };
            MonthPoint { month, label: month_label(month), value }
        })
        .collect();

    Ok(MonthlySeries { points })
}

/// First-of-month dates from `from` through `to`, inclusive.
/// Steps by overshooting 32 days and snapping back to day 1.
fn months_between(from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut date = from;
    while date <= to {
        out.push(date);
        match date.checked_add_days(Days::new(32)) {
            Some(next) => date = month_start(next),
            None => break,
        }
    }
    out
}
