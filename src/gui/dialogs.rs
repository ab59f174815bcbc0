// src/gui/dialogs.rs
use rfd::{MessageButtons, MessageDialog, MessageLevel};

use crate::notify::{Dialog, Level, Notifier};

/// Native modal message boxes. `show` blocks until the user clicks OK.
#[derive(Clone, Copy, Debug, Default)]
pub struct RfdNotifier;

impl Notifier for RfdNotifier {
    fn show(&self, dialog: &Dialog) {
        let level = match dialog.level() {
            Level::Info => MessageLevel::Info,
            Level::Warning => MessageLevel::Warning,
        };
        logd!("UI: dialog {:?}", dialog.title());

        let _ = MessageDialog::new()
            .set_level(level)
            .set_title(dialog.title())
            .set_description(dialog.body())
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
