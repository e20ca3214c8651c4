use walkers::Position;

use crate::core::PointId;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Anwendung beenden
    ExitRequested,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Ansicht auf Home-Position und Start-Zoom zurücksetzen
    ResetViewRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Klick auf die Kartenfläche.
    ///
    /// `hit` trägt die Id eines existierenden Punkts, falls der Klick im
    /// Treffer-Radius eines gerenderten Punkts lag — die Add-vs-Remove-
    /// Entscheidung fällt erst im Intent-Mapping.
    SurfaceClicked {
        position: Position,
        hit: Option<PointId>,
    },
}
