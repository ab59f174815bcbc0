// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod browser;
pub mod gui;
pub mod notify;
pub mod progress;
pub mod reading;
pub mod scrape;
pub mod store;
