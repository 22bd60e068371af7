// tests/dataset_load.rs
//
// Load the fixture through the file source and run the analytics the
// front ends use. No network.

use std::path::PathBuf;

use chrono::NaiveDate;

use mv_dash::config::options::{AppOptions, DataSource};
use mv_dash::core::MarketValue;
use mv_dash::data::{self, Filter, FilteredView, PlayerMetrics, Totals};
use mv_dash::error::DashError;
use mv_dash::progress::Progress;
use mv_dash::store::{DataStore, Dataset};

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/players.csv")
}

fn opts() -> AppOptions {
    AppOptions { source: DataSource::File(fixture()), ..AppOptions::default() }
}

#[derive(Default)]
struct Recorder {
    events: Vec<String>,
}

impl Progress for Recorder {
    fn begin(&mut self, source: &str) {
        self.events.push(format!("begin {source}"));
    }
    fn log(&mut self, msg: &str) {
        self.events.push(msg.to_string());
    }
    fn finish(&mut self, players: Option<usize>) {
        self.events.push(format!("finish {players:?}"));
    }
}

fn load() -> std::sync::Arc<Dataset> {
    DataStore::new().get_or_load(&opts(), &mut Recorder::default()).unwrap()
}

#[test]
fn fixture_loads_with_canonical_values() {
    let mut rec = Recorder::default();
    let store = DataStore::new();
    let ds = store.get_or_load(&opts(), &mut rec).unwrap();

    assert_eq!(ds.len(), 6);
    assert_eq!(ds.headers.len(), 5);
    assert!(rec.events.first().unwrap().starts_with("begin "));
    assert_eq!(rec.events.last().unwrap(), "finish Some(6)");

    let lamine = ds.player("Lamine Yamal").unwrap();
    assert_eq!(lamine.value_start, MarketValue::Known(60_000_000));
    assert_eq!(lamine.value_current, MarketValue::Known(180_000_000));
    assert!(ds.player("Joselu").unwrap().value_current.is_missing());
    assert_eq!(ds.player("Canterano").unwrap().image_url, "");

    // second call hands out the same dataset
    let again = store.get_or_load(&opts(), &mut rec).unwrap();
    assert!(std::sync::Arc::ptr_eq(&ds, &again));
}

#[test]
fn unreachable_source_fails_closed() {
    let opts = AppOptions {
        source: DataSource::File(PathBuf::from("tests/fixtures/nope.csv")),
        ..AppOptions::default()
    };
    let mut rec = Recorder::default();
    let err = DataStore::new().get_or_load(&opts, &mut rec).unwrap_err();
    assert!(matches!(err, DashError::DataUnavailable { .. }));
    assert_eq!(rec.events.last().unwrap(), "finish None");
}

#[test]
fn dashboard_numbers() {
    let ds = load();
    let t = Totals::of(&ds);
    assert_eq!(t.initial, 187_500_000);
    assert_eq!(t.current, 332_300_000);
    assert_eq!(t.change, 144_800_000);

    let top: Vec<&str> = data::top_by_current(&ds, 5).iter().map(|p| p.name.as_str()).collect();
    assert_eq!(top, vec!["Lamine Yamal", "Pedri", "Nico Williams", "Canterano", "Veterano"]);

    let m = PlayerMetrics::for_player(ds.player("Veterano").unwrap());
    assert_eq!(m.change, Some(-1_200_000));
    assert_eq!(m.change_pct, Some(-60.0));
}

#[test]
fn data_page_filter() {
    let ds = load();
    let all = FilteredView::new(&ds, &Filter::for_dataset(&ds));
    // Joselu has no current value
    assert_eq!(all.len(), 5);

    let f = Filter { min: 1_000_000, max: Some(75_000_000), search: String::new() };
    let names: Vec<&str> = FilteredView::new(&ds, &f).players().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Nico Williams", "Canterano"]);

    let f = Filter { search: String::from("WILL"), ..Filter::for_dataset(&ds) };
    assert_eq!(FilteredView::new(&ds, &f).len(), 1);
}

#[test]
fn evolution_and_comparison_series() {
    let ds = load();
    let now = NaiveDate::from_ymd_opt(2024, 4, 2).unwrap();

    let s = data::evolution(&ds, "Nico Williams", now).unwrap();
    assert_eq!(s.len(), 4);
    assert_eq!(s.values().first(), Some(&45_000_000.0));
    assert_eq!(s.values().last(), Some(&70_000_000.0));

    let [(a, sa), (b, sb)] = data::comparison(&ds, "Pedri", "Veterano", now).unwrap();
    assert_eq!((a.as_str(), b.as_str()), ("Pedri", "Veterano"));
    assert_eq!(sa.labels(), sb.labels());
    assert!(sa.values().iter().all(|v| *v == 80_000_000.0));

    assert!(matches!(
        data::evolution(&ds, "Joselu", now).unwrap_err(),
        DashError::Series(_)
    ));
    assert!(!data::comparison_candidates(&ds, "Pedri").contains(&"Pedri"));
}
