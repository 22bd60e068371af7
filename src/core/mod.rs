// src/core/mod.rs

pub mod net;
pub mod series;
pub mod value;

pub use series::{MonthPoint, MonthlySeries, SeriesError, generate_monthly_series};
pub use value::{MarketValue, RawCell, parse_cell, parse_market_value};
