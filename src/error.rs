// src/error.rs
use thiserror::Error as ThisError;

use crate::core::series::SeriesError;

#[derive(ThisError, Debug)]
pub enum DashError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Data unavailable from {source_desc}: {reason}")]
    DataUnavailable { source_desc: String, reason: String },

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("Column not found in dataset: {0}")]
    MissingColumn(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Series(#[from] SeriesError),
}

impl From<std::io::Error> for DashError {
    fn from(err: std::io::Error) -> Self {
        DashError::Io(err.to_string())
    }
}

impl From<csv::Error> for DashError {
    fn from(err: csv::Error) -> Self {
        DashError::Csv(err.to_string())
    }
}

impl From<reqwest::Error> for DashError {
    fn from(err: reqwest::Error) -> Self {
        DashError::Network(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DashError>;
