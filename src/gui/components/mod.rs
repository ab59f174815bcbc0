// src/gui/components/mod.rs
pub mod fetch_panel;
