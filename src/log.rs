// src/log.rs
//
// Thin macro layer over `tracing`. Call sites keep the short logf!/logd!/loge!
// forms; `init` decides where the lines end up (debug file for the GUI,
// stderr for the CLI).

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt::time::Uptime};

use crate::config::consts::{LOG_ENV, LOG_FILE, STORE_DIR};

pub enum LogTarget {
    /// `.store/debug.log`, truncated on start
    File,
    Stderr,
}

/// Install the global subscriber. Safe to call more than once; later calls are no-ops.
pub fn init(target: LogTarget) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(Uptime::default())
        .with_target(false);

    let res = match target {
        LogTarget::File => match open_log_file() {
            Some(file) => builder.with_ansi(false).with_writer(Mutex::new(file)).try_init(),
            None => builder.with_writer(std::io::stderr).try_init(),
        },
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
    };
    // Already installed (tests, second init): keep the first one.
    let _ = res;
}

fn open_log_file() -> Option<File> {
    fs::create_dir_all(STORE_DIR).ok()?;
    File::create(PathBuf::from(STORE_DIR).join(LOG_FILE)).ok()
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
