// src/config/consts.rs

// Net config
pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/AndersonP444/PROYECTO-SIC-JAKDG/main/valores_mercado_actualizados%20(3).csv";
pub const USER_AGENT: &str = concat!("mv_dash/", env!("CARGO_PKG_VERSION"));
pub const CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// Env overrides
pub const ENV_URL: &str = "MV_DASH_URL";
pub const ENV_FILE: &str = "MV_DASH_FILE";
pub const ENV_TIMEOUT: &str = "MV_DASH_TIMEOUT_SECS";
pub const LOG_ENV: &str = "MV_DASH_LOG";

// Source columns
pub const COL_NAME: &str = "Nombre";
pub const COL_VALUE_START: &str = "Valor de Mercado en 01/01/2024";
pub const COL_VALUE_CURRENT: &str = "Valor de Mercado Actual";
pub const COL_IMAGE_URL: &str = "Jugador";

// Series anchor (first month of every generated series)
pub const ANCHOR_YEAR: i32 = 2024;
pub const ANCHOR_MONTH: u32 = 1;

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// GUI
pub const WINDOW_W: f32 = 1200.0;
pub const WINDOW_H: f32 = 760.0;
pub const TOP_N: usize = 5;
