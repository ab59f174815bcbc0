// src/scrape.rs
//! The button's workflow: render → extract → (simulate) → save → tell the user.
//!
//! From the user's point of view this never fails: any browser or page problem
//! ends in simulated values plus a warning, and a row is always written. The
//! only error returned to the caller is a failure to write the spreadsheet.

use std::{error::Error, ops::RangeInclusive, path::PathBuf};

use rand::Rng;

use crate::{
    browser::PageSource,
    config::options::{AppOptions, ScrapeOptions},
    notify::{Dialog, Notifier},
    progress::{self, Progress},
    reading::WeatherReading,
    specs::{self, Extraction, PageDoc},
    store,
};

/// Number of stages reported through `Progress` by `fetch_and_save`.
pub const STAGES: usize = 4;

/// The two values that end up in the spreadsheet, already in stored text form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Measurement {
    pub temperature: String,
    pub humidity: String,
}

impl Measurement {
    fn from_extraction(x: &Extraction) -> Option<Self> {
        match (x.temperature, x.humidity) {
            (Some(t), Some(h)) => Some(Self { temperature: t.to_string(), humidity: h.to_string() }),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Both values came from the page.
    Live,
    /// The page loaded but at least one value was missing.
    Incomplete,
    /// Browser, network or page failure (error text).
    Failed(String),
}

impl Outcome {
    pub fn is_simulated(&self) -> bool {
        !matches!(self, Outcome::Live)
    }
}

#[derive(Clone, Debug)]
pub struct Report {
    pub reading: WeatherReading,
    pub outcome: Outcome,
    pub path: PathBuf,
    pub rows: usize,
}

/// Render the page and run both extraction cascades.
pub fn measure(
    source: &dyn PageSource,
    opts: &ScrapeOptions,
    progress: &mut dyn Progress,
) -> Result<Extraction, Box<dyn Error>> {
    let html = source.render(opts, &mut *progress)?;

    progress::stage(progress, "Reading temperature and humidity…");
    let page = PageDoc::parse(html);
    Ok(specs::extract(&page, opts))
}

/// Independent draws for both fields from the configured plausible ranges.
pub fn simulate<R: Rng>(opts: &ScrapeOptions, rng: &mut R) -> Measurement {
    Measurement {
        temperature: draw(rng, &opts.simulated_temperature).to_string(),
        humidity: draw(rng, &opts.simulated_humidity).to_string(),
    }
}

fn draw<R: Rng>(rng: &mut R, range: &RangeInclusive<i32>) -> i32 {
    if range.is_empty() {
        return *range.start();
    }
    rng.random_range(range.clone())
}

/// Decide live vs simulated. Sub-failures never escape this function.
pub fn resolve<R: Rng>(
    measured: Result<Extraction, Box<dyn Error>>,
    opts: &ScrapeOptions,
    rng: &mut R,
) -> (Measurement, Outcome) {
    match measured {
        Ok(x) => match Measurement::from_extraction(&x) {
            Some(m) => (m, Outcome::Live),
            None => {
                logw!(
                    "Fetch: incomplete (temperature={}, humidity={}), simulating",
                    x.temperature_text(),
                    x.humidity_text()
                );
                (simulate(opts, rng), Outcome::Incomplete)
            }
        },
        Err(e) => {
            logw!("Fetch: failed ({}), simulating", e);
            (simulate(opts, rng), Outcome::Failed(e.to_string()))
        }
    }
}

/// One button press, start to finish.
pub fn fetch_and_save<R: Rng>(
    opts: &AppOptions,
    source: &dyn PageSource,
    notifier: &dyn Notifier,
    rng: &mut R,
    progress: &mut dyn Progress,
) -> Result<Report, Box<dyn Error>> {
    progress.begin(STAGES);
    notifier.show(&Dialog::Wait);

    let measured = measure(source, &opts.scrape, &mut *progress);
    let (m, outcome) = resolve(measured, &opts.scrape, rng);

    if outcome == Outcome::Incomplete {
        notifier.show(&Dialog::Simulated { city: opts.scrape.city.clone() });
    }

    progress::stage(progress, "Saving spreadsheet…");
    let path = opts.sheet.out_path().to_path_buf();
    let reading = WeatherReading::now(&m.temperature, &m.humidity, &opts.scrape.city);
    let saved = store::append_reading(&path, &reading);

    progress.finish();
    let rows = saved?;

    let dialog = match &outcome {
        Outcome::Live | Outcome::Incomplete => Dialog::Saved {
            temperature: m.temperature.clone(),
            humidity: m.humidity.clone(),
        },
        Outcome::Failed(error) => Dialog::Failed {
            error: error.clone(),
            temperature: m.temperature.clone(),
            humidity: m.humidity.clone(),
        },
    };
    notifier.show(&dialog);

    logf!("Fetch: done outcome={:?} rows={}", outcome, rows);
    Ok(Report { reading, outcome, path, rows })
}
