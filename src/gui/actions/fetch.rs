// src/gui/actions/fetch.rs
use crate::{
    browser::ChromeSource,
    gui::{app::App, dialogs::RfdNotifier},
    notify::{Dialog, Notifier},
    progress::NullProgress,
    scrape,
};

/// Runs the whole workflow on the UI thread. The window stays frozen until the
/// final dialog is dismissed; that is the intended interaction. Stages go to the
/// debug log only, since no frame is painted until this returns.
pub fn fetch(app: &mut App) {
    logf!("Fetch: Begin url={}", app.state.options.scrape.url);

    let notifier = RfdNotifier;
    let mut rng = rand::rng();

    match scrape::fetch_and_save(&app.state.options, &ChromeSource, &notifier, &mut rng, &mut NullProgress) {
        Ok(report) => {
            let tag = if report.outcome.is_simulated() { "simulated" } else { "live" };
            app.status(format!(
                "Saved {}°C / {}% ({tag}) → {}",
                report.reading.temperature(),
                report.reading.humidity(),
                report.path.display()
            ));
            app.state.gui.last_reading = Some(report.reading);
        }
        Err(e) => {
            loge!("Fetch: Save failed: {}", e);
            notifier.show(&Dialog::SaveFailed { error: e.to_string() });
            app.status(format!("Error: {e}"));
        }
    }
}
