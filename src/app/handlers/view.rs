//! Handler für Ansicht und Anwendungs-Lebenszyklus.

use crate::app::AppState;

/// Zoomt stufenweise hinein.
pub fn zoom_in(state: &mut AppState) {
    let _ = state.view.memory.zoom_in();
}

/// Zoomt stufenweise heraus.
pub fn zoom_out(state: &mut AppState) {
    let _ = state.view.memory.zoom_out();
}

/// Setzt die Ansicht auf Home-Position und Start-Zoom zurück.
pub fn reset_view(state: &mut AppState) {
    state.view.memory.follow_my_position();
    let _ = state.view.memory.set_zoom(state.options.start_zoom);
    log::info!(
        "Ansicht zurückgesetzt auf ({:.4}, {:.4}) @ {:.2}",
        state.view.home.x(),
        state.view.home.y(),
        state.options.start_zoom
    );
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Signalisiert dem Host das kontrollierte Beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
