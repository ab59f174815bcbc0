// src/config/options.rs
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::UserDirs;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub sheet: SheetOptions,
}

/// Everything the fetch workflow needs to know about the target page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub url: String,
    pub city: String,

    /// Chrome/Chromium binary; `None` lets the driver search the usual places.
    pub browser_executable: Option<PathBuf>,

    /// Upper bound for the navigation to report the page as loaded.
    pub ready_timeout: Duration,
    /// Fixed pause after navigation so client-side scripts can fill in the numbers.
    pub settle_delay: Duration,

    pub temperature_selectors: Vec<String>,
    pub humidity_selectors: Vec<String>,

    pub simulated_temperature: RangeInclusive<i32>,
    pub simulated_humidity: RangeInclusive<i32>,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            url: s!(FORECAST_URL),
            city: s!(CITY),
            browser_executable: None,
            ready_timeout: Duration::from_secs(READY_TIMEOUT_SECS),
            settle_delay: Duration::from_secs(SETTLE_DELAY_SECS),
            temperature_selectors: TEMPERATURE_SELECTORS.iter().map(|s| s!(*s)).collect(),
            humidity_selectors: HUMIDITY_SELECTORS.iter().map(|s| s!(*s)).collect(),
            simulated_temperature: SIM_TEMPERATURE_MIN..=SIM_TEMPERATURE_MAX,
            simulated_humidity: SIM_HUMIDITY_MIN..=SIM_HUMIDITY_MAX,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetOptions {
    out_path: PathBuf,
}

impl Default for SheetOptions {
    fn default() -> Self {
        Self { out_path: documents_dir().join(SHEET_FILE) }
    }
}

impl SheetOptions {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { out_path: path.into() }
    }

    pub fn out_path(&self) -> &Path {
        &self.out_path
    }
}

/// The platform documents folder, or `~/Documents` when the platform has none.
pub fn documents_dir() -> PathBuf {
    match UserDirs::new() {
        Some(dirs) => match dirs.document_dir() {
            Some(docs) => docs.to_path_buf(),
            None => dirs.home_dir().join(DOCUMENTS_FALLBACK),
        },
        None => PathBuf::from(DOCUMENTS_FALLBACK),
    }
}
