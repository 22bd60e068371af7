// src/gui/components/mod.rs
pub mod chart;
pub mod data_table;
pub mod menu;
pub mod metric;
