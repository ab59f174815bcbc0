use std::error::Error;

use eframe::egui;

use crate::config::{consts::WINDOW_TITLE, state::AppState};
use crate::gui::busy::FetchState;

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    logf!("Init: window {:?}", WINDOW_TITLE);
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // status line under the button
    pub status: String,

    pub fetch: FetchState,
}

impl App {
    pub fn new(state: AppState) -> Self {
        logf!(
            "Init: url={} sheet={}",
            state.options.scrape.url,
            state.options.sheet.out_path().display()
        );
        Self {
            state,
            status: s!("Idle"),
            fetch: FetchState::default(),
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }
}

impl eframe::App for App {
    fn raw_input_hook(&mut self, _ctx: &egui::Context, raw_input: &mut egui::RawInput) {
        self.fetch.settle(raw_input);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.fetch.on_frame() {
            crate::gui::actions::fetch(self);
            self.fetch.finish();
        }
        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::fetch_panel::draw(ui, self);
        });

        // Keep frames coming until the state machine is back to idle.
        if self.fetch.is_busy() {
            ctx.request_repaint();
        }
    }
}
