//! Handler für die Punkt/Pfad-Messung.

use walkers::Position;

use crate::app::AppState;
use crate::core::PointId;

/// Hängt einen neuen Punkt an der Klick-Position an und aktualisiert die Anzeige.
pub fn add_point(state: &mut AppState, position: Position) {
    let id = state.track.add_point(position);
    log::info!(
        "Punkt {} bei ({:.4}, {:.4}) gesetzt ({} gesamt)",
        id,
        position.x(),
        position.y(),
        state.track.point_count()
    );
    refresh_distance(state);
}

/// Entfernt den getroffenen Punkt und aktualisiert die Anzeige.
///
/// Eine unbekannte Id ist ein No-op — der Hit-Test liefert nur Ids aktuell
/// gerenderter Punkte, aber die Zustandsmaschine verlässt sich nicht darauf.
pub fn remove_point(state: &mut AppState, id: &PointId) {
    if state.track.remove_point(id) {
        log::info!(
            "Punkt {} entfernt ({} verbleibend)",
            id,
            state.track.point_count()
        );
    } else {
        log::warn!("Punkt {} nicht gefunden, nichts entfernt", id);
    }
    refresh_distance(state);
}

/// Spiegelt die aktuelle Pfadlänge in den Anzeigetext.
///
/// Unter zwei Punkten wird der Text geleert, sonst komplett ersetzt —
/// niemals an einen alten Wert angehängt.
fn refresh_distance(state: &mut AppState) {
    state.ui.distance_text = state.track.length_km().map(format_total_distance);
}

/// Formatiert die Gesamtdistanz für die Anzeige.
pub fn format_total_distance(km: f64) -> String {
    format!("Total distance: {km:.3}km")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_total_distance() {
        assert_eq!(format_total_distance(0.0), "Total distance: 0.000km");
        assert_eq!(
            format_total_distance(1111.9508),
            "Total distance: 1111.951km"
        );
    }
}
