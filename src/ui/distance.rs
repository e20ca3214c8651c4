//! Schwebende Distanz-Anzeige über der Karte.

use crate::app::AppState;

/// Rendert die Gesamtdistanz-Box, sobald ein Pfad existiert.
/// Unter zwei Punkten bleibt die Fläche vollständig leer.
pub fn render_distance_box(ctx: &egui::Context, state: &AppState) {
    let Some(text) = &state.ui.distance_text else {
        return;
    };

    egui::Area::new(egui::Id::new("distance_box"))
        .anchor(egui::Align2::LEFT_TOP, [12.0, 48.0])
        .show(ctx, |ui| {
            egui::Frame::popup(&ctx.style()).show(ui, |ui| {
                ui.label(egui::RichText::new(text).monospace());
            });
        });
}
