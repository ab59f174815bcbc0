// src/gui/mod.rs
pub mod actions;
pub mod app;
pub mod busy;
pub mod components;
pub mod dialogs;

pub use app::run;
