// src/specs/mod.rs
//! # Page-reading specs
//!
//! How the forecast page is read. Everything here is pure: a rendered page goes
//! in, numbers (or nothing) come out. No browser, no files, no dialogs.
//!
//! ## Shape
//! - [`PageDoc`] holds the rendered HTML twice: as source text (for regex scans)
//!   and as a parsed DOM (for CSS selectors).
//! - Each field (`temperature`, `humidity`) owns a [`Field`] description and builds
//!   its cascade: configured selector guesses first, then a page-source scan.
//! - [`extract`] runs both cascades and returns an [`Extraction`].
//!
//! ## Conventions
//! - Selector text must be the *whole* value (`"22°"`, `"70%"`); labels and
//!   mixed text are skipped rather than guessed at.
//! - A selector the parser rejects (e.g. jQuery-style `:contains`) is skipped
//!   silently so the cascade keeps going.
//! - Humidity is bounded to `0..=100` on every tier; temperature is not bounded.
//!
//! The site markup changes often. When it does, the fix is usually a new
//! selector in `config::consts`, not new code here.

pub mod humidity;
pub mod strategy;
pub mod temperature;

use scraper::Html;

use crate::config::consts::NA;
use crate::config::options::ScrapeOptions;

pub use strategy::{cascade, first_match, Field, Strategy};

pub struct PageDoc {
    source: String,
    dom: Html,
}

impl PageDoc {
    pub fn parse(source: impl Into<String>) -> Self {
        let source = source.into();
        let dom = Html::parse_document(&source);
        Self { source, dom }
    }

    pub fn source(&self) -> &str { &self.source }
    pub fn dom(&self) -> &Html { &self.dom }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Extraction {
    pub temperature: Option<i32>,
    pub humidity: Option<i32>,
}

impl Extraction {
    pub fn is_complete(&self) -> bool {
        self.temperature.is_some() && self.humidity.is_some()
    }

    /// Stored form, or the `N/A` sentinel.
    pub fn temperature_text(&self) -> String {
        self.temperature.map_or_else(|| s!(NA), |v| v.to_string())
    }

    pub fn humidity_text(&self) -> String {
        self.humidity.map_or_else(|| s!(NA), |v| v.to_string())
    }
}

pub fn extract(page: &PageDoc, opts: &ScrapeOptions) -> Extraction {
    let temperature = temperature::extract(page, &opts.temperature_selectors);
    let humidity = humidity::extract(page, &opts.humidity_selectors);
    let out = Extraction { temperature, humidity };

    logf!(
        "Extract: temperature={} humidity={}",
        out.temperature_text(),
        out.humidity_text()
    );
    out
}
