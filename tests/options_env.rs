// tests/options_env.rs
use std::collections::HashMap;
use std::path::PathBuf;

use mv_dash::config::consts::{DEFAULT_DATASET_URL, DEFAULT_TIMEOUT_SECS};
use mv_dash::config::options::{AppOptions, DataSource};

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> =
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_point_at_the_remote_dataset() {
    let opts = AppOptions::from_lookup(lookup(&[]));
    assert_eq!(opts.source, DataSource::Url(String::from(DEFAULT_DATASET_URL)));
    assert_eq!(opts.timeout_secs, DEFAULT_TIMEOUT_SECS);
    assert_eq!(opts.columns.name, "Nombre");
}

#[test]
fn env_overrides_apply() {
    let opts = AppOptions::from_lookup(lookup(&[
        ("MV_DASH_URL", " https://mirror.example/players.csv "),
        ("MV_DASH_TIMEOUT_SECS", "5"),
    ]));
    assert_eq!(opts.source, DataSource::Url(String::from("https://mirror.example/players.csv")));
    assert_eq!(opts.timeout_secs, 5);
}

#[test]
fn file_wins_and_bad_timeouts_are_ignored() {
    let opts = AppOptions::from_lookup(lookup(&[
        ("MV_DASH_URL", "https://mirror.example/players.csv"),
        ("MV_DASH_FILE", "data/players.csv"),
        ("MV_DASH_TIMEOUT_SECS", "0"),
    ]));
    assert_eq!(opts.source, DataSource::File(PathBuf::from("data/players.csv")));
    assert_eq!(opts.timeout_secs, DEFAULT_TIMEOUT_SECS);

    let opts = AppOptions::from_lookup(lookup(&[("MV_DASH_TIMEOUT_SECS", "soon")]));
    assert_eq!(opts.timeout_secs, DEFAULT_TIMEOUT_SECS);
}
