// src/store.rs
//
// Dataset load + the read-only, load-once store that hands it out.
//
// Load: fetch the CSV text (URL or local file), read it with headers, find
// the four consumed columns by name and run both value columns through the
// value parser exactly once. After that the dataset is never mutated.

use std::collections::HashSet;
use std::fs;
use std::sync::{Arc, OnceLock};

use csv::ReaderBuilder;

use crate::config::options::{AppOptions, ColumnMap, DataSource};
use crate::core::{MarketValue, RawCell, net, parse_cell};
use crate::error::{DashError, Result};
use crate::progress::Progress;

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub name: String,
    pub value_start: MarketValue,
    pub value_current: MarketValue,
    pub image_url: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnIndex {
    pub name: usize,
    pub value_start: usize,
    pub value_current: usize,
    pub image_url: usize,
}

/// Headers + every row as read, plus the typed player view of each row.
/// `rows[i]` and `players[i]` describe the same line of the source. In
/// `rows`, both value cells hold the canonical value (`"1500"` / `"N/A"`).
#[derive(Clone, Debug)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub players: Vec<Player>,
    pub columns: ColumnIndex,
}

impl Dataset {
    pub fn len(&self) -> usize { self.players.len() }
    pub fn is_empty(&self) -> bool { self.players.is_empty() }

    /// First player with this exact name.
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    /// Names in first-appearance order, duplicates dropped.
    pub fn unique_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.players
            .iter()
            .map(|p| p.name.as_str())
            .filter(|n| seen.insert(*n))
            .collect()
    }

    /// Largest known current value.
    pub fn max_current(&self) -> Option<i64> {
        self.players.iter().filter_map(|p| p.value_current.known()).max()
    }
}

/// Parse CSV text into a dataset. Headers are required.
pub fn parse_dataset(text: &str, columns: &ColumnMap) -> Result<Dataset> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect();
    let find = |wanted: &str| {
        headers
            .iter()
            .position(|h| h == wanted)
            .ok_or_else(|| DashError::MissingColumn(s!(wanted)))
    };
    let cols = ColumnIndex {
        name: find(&columns.name)?,
        value_start: find(&columns.value_start)?,
        value_current: find(&columns.value_current)?,
        image_url: find(&columns.image_url)?,
    };

    let mut rows = Vec::new();
    let mut players = Vec::new();

    for record in rdr.records() {
        let record = record?;
        let mut row: Vec<String> = record.iter().map(|c| c.to_string()).collect();
        // Short rows: pad so every column index is addressable
        if row.len() < headers.len() {
            row.resize(headers.len(), s!());
        }

        let value_start = parse_cell(&RawCell::classify(&row[cols.value_start]));
        let value_current = parse_cell(&RawCell::classify(&row[cols.value_current]));

        row[cols.value_start] = value_start.to_string();
        row[cols.value_current] = value_current.to_string();

        players.push(Player {
            name: row[cols.name].clone(),
            value_start,
            value_current,
            image_url: row[cols.image_url].trim().to_string(),
        });
        rows.push(row);
    }

    let missing = players
        .iter()
        .filter(|p| p.value_start.is_missing() || p.value_current.is_missing())
        .count();
    logf!(
        "Load: parsed {} rows ({} cols), {} with a missing value",
        players.len(),
        headers.len(),
        missing
    );

    Ok(Dataset { headers, rows, players, columns: cols })
}

/// Fetch and parse. Any fetch failure is reported as `DataUnavailable`.
pub fn load(opts: &AppOptions, progress: &mut dyn Progress) -> Result<Dataset> {
    let desc = opts.source.describe();
    progress.begin(&desc);
    logf!("Load: source {}", desc);

    let text = match fetch_text(opts) {
        Ok(t) => t,
        Err(e) => {
            loge!("Load: {} unavailable: {}", desc, e);
            progress.finish(None);
            return Err(DashError::DataUnavailable { source_desc: desc, reason: e.to_string() });
        }
    };

    progress.log("Parsing dataset");
    match parse_dataset(&text, &opts.columns) {
        Ok(ds) => {
            progress.finish(Some(ds.len()));
            Ok(ds)
        }
        Err(e) => {
            loge!("Load: parse failed: {}", e);
            progress.finish(None);
            Err(e)
        }
    }
}

fn fetch_text(opts: &AppOptions) -> Result<String> {
    match &opts.source {
        DataSource::Url(url) => net::http_get(url, opts.timeout_secs),
        DataSource::File(path) => Ok(fs::read_to_string(path)?),
    }
}

/// Load-once, read-only dataset holder. Owned by whoever drives the app
/// (GUI `App`, CLI `run`) and passed down explicitly.
#[derive(Debug, Default)]
pub struct DataStore {
    cell: OnceLock<Arc<Dataset>>,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that is already initialized with `ds`.
    pub fn with_dataset(ds: Dataset) -> Self {
        let store = Self::new();
        let _ = store.cell.set(Arc::new(ds));
        store
    }

    pub fn get(&self) -> Option<Arc<Dataset>> {
        self.cell.get().cloned()
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Return the dataset, loading it on first use. A failed load leaves the
    /// store empty so a later call can retry.
    pub fn get_or_load(&self, opts: &AppOptions, progress: &mut dyn Progress) -> Result<Arc<Dataset>> {
        if let Some(ds) = self.cell.get() {
            logd!("Load: reusing dataset ({} players)", ds.len());
            return Ok(ds.clone());
        }
        let ds = Arc::new(load(opts, progress)?);
        Ok(self.cell.get_or_init(|| ds).clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Nombre,Club,Valor de Mercado en 01/01/2024,Valor de Mercado Actual,Jugador
Ana,Real,\"1,5 mill. €\",\"2,3 mill. €\",https://img.example/ana.png
Bea,Sevilla,800 mil €,N/A,https://img.example/bea.png
Cris,Betis,,42,https://img.example/cris.png
";

    #[test]
    fn parses_values_and_keeps_other_columns() {
        let ds = parse_dataset(SAMPLE, &ColumnMap::default()).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.headers[1], "Club");

        let ana = ds.player("Ana").unwrap();
        assert_eq!(ana.value_start, MarketValue::Known(1_500_000));
        assert_eq!(ana.value_current, MarketValue::Known(2_300_000));
        assert_eq!(ana.image_url, "https://img.example/ana.png");

        let bea = ds.player("Bea").unwrap();
        assert_eq!(bea.value_start, MarketValue::Known(800_000));
        assert!(bea.value_current.is_missing());

        // Empty and plain-number cells are not value text
        let cris = ds.player("Cris").unwrap();
        assert!(cris.value_start.is_missing());
        assert!(cris.value_current.is_missing());

        assert_eq!(ds.rows[0][2], "1500000");
        assert_eq!(ds.rows[1][3], "N/A");
        assert_eq!(ds.rows[2][1], "Betis");
    }

    #[test]
    fn missing_column_is_reported() {
        let text = "Nombre,Valor de Mercado Actual,Jugador\nAna,1 mil €,x\n";
        let err = parse_dataset(text, &ColumnMap::default()).unwrap_err();
        assert!(matches!(err, DashError::MissingColumn(c) if c == "Valor de Mercado en 01/01/2024"));
    }

    #[test]
    fn bom_and_short_rows() {
        let text = "\u{feff}Nombre,Valor de Mercado en 01/01/2024,Valor de Mercado Actual,Jugador\nSolo,1 mil €\n";
        let ds = parse_dataset(text, &ColumnMap::default()).unwrap();
        let p = ds.player("Solo").unwrap();
        assert_eq!(p.value_start, MarketValue::Known(1_000));
        assert!(p.value_current.is_missing());
        assert_eq!(p.image_url, "");
    }

    #[test]
    fn unique_names_and_max() {
        let text = "\
Nombre,Valor de Mercado en 01/01/2024,Valor de Mercado Actual,Jugador
B,1 mil €,5 mil €,
A,1 mil €,9 mil €,
B,1 mil €,7 mil €,
";
        let ds = parse_dataset(text, &ColumnMap::default()).unwrap();
        assert_eq!(ds.unique_names(), vec!["B", "A"]);
        assert_eq!(ds.max_current(), Some(9_000));
        // First match wins
        assert_eq!(ds.player("B").unwrap().value_current, MarketValue::Known(5_000));
    }

    #[test]
    fn store_is_loaded_once() {
        let ds = parse_dataset(SAMPLE, &ColumnMap::default()).unwrap();
        let store = DataStore::with_dataset(ds);
        assert!(store.is_loaded());

        // The source is never touched once the dataset is present
        let opts = AppOptions {
            source: DataSource::File("/definitely/not/here.csv".into()),
            ..AppOptions::default()
        };
        let a = store.get_or_load(&opts, &mut crate::progress::NullProgress).unwrap();
        let b = store.get().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn failed_load_is_data_unavailable_and_retryable() {
        let store = DataStore::new();
        let opts = AppOptions {
            source: DataSource::File("/definitely/not/here.csv".into()),
            ..AppOptions::default()
        };
        let err = store.get_or_load(&opts, &mut crate::progress::NullProgress).unwrap_err();
        assert!(matches!(err, DashError::DataUnavailable { .. }));
        assert!(!store.is_loaded());
    }
}
