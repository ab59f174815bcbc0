// tests/common/mod.rs
#![allow(dead_code)]

use std::{cell::RefCell, error::Error, fs, path::PathBuf};

use previsao::{
    browser::PageSource,
    config::options::{AppOptions, ScrapeOptions, SheetOptions},
    notify::{Dialog, Notifier},
    progress::Progress,
};

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("previsao_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

/// Options pointing at `<tmp>/<name>/Documents/previsao_tempo_embu.xlsx`.
pub fn options_in(name: &str) -> AppOptions {
    let path = tmp_dir(name).join("Documents").join("previsao_tempo_embu.xlsx");
    AppOptions {
        scrape: ScrapeOptions::default(),
        sheet: SheetOptions::with_path(path),
    }
}

/// Serves a fixed page, or fails like an unreachable site.
pub enum FakeSource {
    Page(String),
    Unreachable(String),
}

impl PageSource for FakeSource {
    fn render(
        &self,
        _opts: &ScrapeOptions,
        progress: &mut dyn Progress,
    ) -> Result<String, Box<dyn Error>> {
        progress.log("fake render");
        match self {
            FakeSource::Page(html) => Ok(html.clone()),
            FakeSource::Unreachable(msg) => Err(msg.clone().into()),
        }
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub shown: RefCell<Vec<Dialog>>,
}

impl RecordingNotifier {
    pub fn dialogs(&self) -> Vec<Dialog> {
        self.shown.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn show(&self, dialog: &Dialog) {
        self.shown.borrow_mut().push(dialog.clone());
    }
}

#[derive(Default)]
pub struct RecordingProgress {
    pub total: usize,
    pub lines: Vec<String>,
    pub finished: bool,
}

impl Progress for RecordingProgress {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn log(&mut self, msg: &str) { self.lines.push(msg.to_string()); }
    fn finish(&mut self) { self.finished = true; }
}
