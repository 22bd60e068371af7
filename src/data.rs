// src/data.rs
//
// Read-only analytics over a loaded `Dataset`.
//
// - PlayerMetrics / Totals: the numbers behind the metric cards.
// - top_by_current: the "top N by current value" chart.
// - Filter + FilteredView: row-index view for the full-data table.
// - evolution / comparison: monthly series for one player or a pair.
//
// Nothing here mutates the dataset; views hold indices into it.

use chrono::NaiveDate;

use crate::core::{MarketValue, MonthlySeries, generate_monthly_series};
use crate::error::{DashError, Result};
use crate::store::{Dataset, Player};

/// Change in percent, None when `from` is zero. Wide integers so the
/// difference of two extreme values cannot overflow.
fn pct_change(from: i128, to: i128) -> Option<f64> {
    if from == 0 {
        None
    } else {
        Some((to - from) as f64 / from as f64 * 100.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerMetrics {
    pub initial: MarketValue,
    pub current: MarketValue,
    /// current − initial, when both are known and the difference fits
    pub change: Option<i64>,
    pub change_pct: Option<f64>,
}

impl PlayerMetrics {
    pub fn for_player(p: &Player) -> Self {
        let both = p.value_start.known().zip(p.value_current.known());
        Self {
            initial: p.value_start,
            current: p.value_current,
            change: both.and_then(|(a, b)| b.checked_sub(a)),
            change_pct: both.and_then(|(a, b)| pct_change(a.into(), b.into())),
        }
    }
}

/// Dataset-wide sums. Missing values are skipped, not counted as zero.
/// Summed as i128: a handful of near-max rows would overflow i64.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Totals {
    pub initial: i128,
    pub current: i128,
    pub change: i128,
    pub change_pct: Option<f64>,
}

impl Totals {
    pub fn of(ds: &Dataset) -> Self {
        let initial: i128 = ds.players.iter().filter_map(|p| p.value_start.known()).map(i128::from).sum();
        let current: i128 = ds.players.iter().filter_map(|p| p.value_current.known()).map(i128::from).sum();
        Self {
            initial,
            current,
            change: current - initial,
            change_pct: pct_change(initial, current),
        }
    }
}

/// Up to `n` players with the largest known current value, descending.
/// Ties keep dataset order.
pub fn top_by_current(ds: &Dataset, n: usize) -> Vec<&Player> {
    let mut ranked: Vec<(usize, i64)> = ds
        .players
        .iter()
        .enumerate()
        .filter_map(|(i, p)| p.value_current.known().map(|v| (i, v)))
        .collect();
    // stable sort: equal values stay in index order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.into_iter().take(n).map(|(i, _)| &ds.players[i]).collect()
}

/// Full-data table filter. A row passes when its current value is known and
/// inside `[min, max]`, and its name contains `search` (case-insensitive).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Filter {
    pub min: i64,
    pub max: Option<i64>,
    pub search: String,
}

impl Default for Filter {
    fn default() -> Self {
        Self { min: 0, max: None, search: s!() }
    }
}

impl Filter {
    /// Default filter for a dataset: max is the largest current value.
    pub fn for_dataset(ds: &Dataset) -> Self {
        Self { max: ds.max_current(), ..Self::default() }
    }

    pub fn matches(&self, p: &Player) -> bool {
        let Some(v) = p.value_current.known() else { return false };
        if v < self.min {
            return false;
        }
        if let Some(max) = self.max {
            if v > max {
                return false;
            }
        }
        let needle = self.search.to_lowercase();
        needle.is_empty() || p.name.to_lowercase().contains(&needle)
    }
}

/// Zero-copy filtered view: indices into `Dataset::rows` / `Dataset::players`.
#[derive(Clone, Debug)]
pub struct FilteredView<'a> {
    pub row_ix: Vec<usize>,
    ds: &'a Dataset,
}

impl<'a> FilteredView<'a> {
    pub fn new(ds: &'a Dataset, filter: &Filter) -> Self {
        let row_ix = ds
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| filter.matches(p))
            .map(|(i, _)| i)
            .collect();
        Self { row_ix, ds }
    }

    /// Rows for the given player names, in dataset order.
    pub fn for_names(ds: &'a Dataset, names: &[&str]) -> Self {
        let row_ix = ds
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| names.contains(&p.name.as_str()))
            .map(|(i, _)| i)
            .collect();
        Self { row_ix, ds }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }
    pub fn dataset(&self) -> &'a Dataset { self.ds }

    pub fn row(&self, i: usize) -> Option<&'a [String]> {
        self.row_ix.get(i).and_then(|&ix| self.ds.rows.get(ix).map(|r| r.as_slice()))
    }

    pub fn player(&self, i: usize) -> Option<&'a Player> {
        self.row_ix.get(i).and_then(|&ix| self.ds.players.get(ix))
    }

    pub fn players(&self) -> impl Iterator<Item = &'a Player> + '_ {
        self.row_ix.iter().filter_map(|&ix| self.ds.players.get(ix))
    }
}

fn lookup<'a>(ds: &'a Dataset, name: &str) -> Result<&'a Player> {
    ds.player(name).ok_or_else(|| DashError::PlayerNotFound(s!(name)))
}

/// One player's monthly series up to `now`.
pub fn evolution(ds: &Dataset, name: &str, now: NaiveDate) -> Result<MonthlySeries> {
    let p = lookup(ds, name)?;
    Ok(generate_monthly_series(now, p.value_start, p.value_current)?)
}

/// Series for two different players, in argument order.
pub fn comparison(
    ds: &Dataset,
    a: &str,
    b: &str,
    now: NaiveDate,
) -> Result<[(String, MonthlySeries); 2]> {
    if a == b {
        return Err(DashError::InvalidInput(format!("cannot compare {a} with itself")));
    }
    let sa = evolution(ds, a, now)?;
    let sb = evolution(ds, b, now)?;
    Ok([(s!(a), sa), (s!(b), sb)])
}

/// Names the second comparison slot may take: everyone except `first`.
pub fn comparison_candidates<'a>(ds: &'a Dataset, first: &str) -> Vec<&'a str> {
    ds.unique_names().into_iter().filter(|n| *n != first).collect()
}
