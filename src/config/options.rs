// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub source: DataSource,
    pub timeout_secs: u64,
    pub columns: ColumnMap,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            source: DataSource::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            columns: ColumnMap::default(),
        }
    }
}

impl AppOptions {
    /// Defaults with `MV_DASH_URL` / `MV_DASH_FILE` / `MV_DASH_TIMEOUT_SECS` applied.
    /// A file source wins over a URL when both are set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading through `lookup` instead of the process env.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        if let Some(url) = lookup(ENV_URL).filter(|v| !v.trim().is_empty()) {
            opts.source = DataSource::Url(url.trim().to_string());
        }
        if let Some(path) = lookup(ENV_FILE).filter(|v| !v.trim().is_empty()) {
            opts.source = DataSource::File(PathBuf::from(path.trim()));
        }
        if let Some(secs) = lookup(ENV_TIMEOUT).and_then(|v| v.trim().parse::<u64>().ok()) {
            if secs > 0 { opts.timeout_secs = secs; }
        }
        opts
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    File(PathBuf),
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::Url(s!(DEFAULT_DATASET_URL))
    }
}

impl DataSource {
    pub fn describe(&self) -> String {
        match self {
            DataSource::Url(u) => u.clone(),
            DataSource::File(p) => p.display().to_string(),
        }
    }
}

/// Header names of the four columns the dashboard consumes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnMap {
    pub name: String,
    pub value_start: String,
    pub value_current: String,
    pub image_url: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            name: s!(COL_NAME),
            value_start: s!(COL_VALUE_START),
            value_current: s!(COL_VALUE_CURRENT),
            image_url: s!(COL_IMAGE_URL),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Dashboard,
    Individual,
    Comparison,
    Data,
}
