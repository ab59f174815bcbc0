// src/gui/components/fetch_panel.rs
use eframe::egui::{self, RichText};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.vertical_centered(|ui| {
        ui.add_space(12.0);
        ui.label(RichText::new("Atualizar previsão na planilha:").size(16.0));
        ui.add_space(16.0);

        let button = egui::Button::new(RichText::new("Buscar previsão").size(14.0))
            .min_size(egui::vec2(140.0, 36.0));
        if ui.add_enabled(!app.fetch.is_busy(), button).clicked() && app.fetch.request() {
            app.status("Buscando previsão…");
        }

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            if app.fetch.is_busy() {
                ui.add(egui::Spinner::new().size(12.0));
            }
            ui.label(RichText::new(&app.status).small().weak());
        });

        if let Some(r) = &app.state.gui.last_reading {
            ui.label(
                RichText::new(format!(
                    "{}  {}°C  {}%",
                    r.timestamp(),
                    r.temperature(),
                    r.humidity()
                ))
                .small(),
            );
        }
    });
}
