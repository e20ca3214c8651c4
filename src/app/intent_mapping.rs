//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Hier fällt die Add-vs-Remove-Entscheidung für Klicks: ein Klick mit
/// Punkt-Treffer entfernt, jeder andere fügt hinzu. Die Koordinate eines
/// Treffers wird verworfen — gelöscht wird ausschließlich über die Id.
pub fn map_intent_to_commands(_state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ResetViewRequested => vec![AppCommand::ResetView],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::SurfaceClicked { position, hit } => match hit {
            Some(id) => vec![AppCommand::RemovePoint { id }],
            None => vec![AppCommand::AddPoint { position }],
        },
    }
}
