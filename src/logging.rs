//! File-backed tracing setup. The terminal belongs to the UI while the app
//! runs, so log output goes to a file under the user's home directory.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;
use tracing_subscriber::EnvFilter;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".film-browser";
const LOG_FILE_NAME: &str = "film-browser.log";
/// Filter applied when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber and return the log file path.
pub fn init_logging() -> Result<PathBuf> {
    let log_path = log_path()?;

    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent).context("failed to create data directory")?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .context("failed to open log file")?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))?;

    Ok(log_path)
}

/// Resolve the absolute path to the log file inside the user's home.
fn log_path() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME).join(LOG_FILE_NAME))
}
