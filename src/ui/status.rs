//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar mit Kartenzentrum und Zoom.
///
/// `show_point_count` blendet die Punktanzahl ein (nur in der Mess-Demo).
pub fn render_status_bar(ctx: &egui::Context, state: &AppState, show_point_count: bool) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let center = state.view.center();
            ui.label(format!(
                "Longitude: {:.4} | Latitude: {:.4} | Zoom: {:.2}",
                center.x(),
                center.y(),
                state.view.zoom()
            ));

            if show_point_count {
                ui.separator();
                ui.label(format!("Points: {}", state.point_count()));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
