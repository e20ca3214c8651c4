//! Application State — zentrale Datenhaltung.

use walkers::{MapMemory, Position};

use crate::core::MeasureTrack;
use crate::shared::AppOptions;

/// View-bezogener Anwendungszustand.
///
/// `MapMemory` gehört dem Karten-Widget (Pan/Zoom-Gesten laufen dort),
/// wird aber hier gehalten, damit Commands und Status-Anzeige denselben
/// Zustand sehen.
pub struct ViewState {
    /// Pan/Zoom-Zustand des Karten-Widgets
    pub memory: MapMemory,
    /// Konfigurierte Start-Position der Ansicht
    pub home: Position,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den View-Zustand aus den Optionen (Home-Position, Start-Zoom).
    pub fn new(options: &AppOptions) -> Self {
        let mut memory = MapMemory::default();
        let _ = memory.set_zoom(options.start_zoom);
        Self {
            memory,
            home: options.home_position(),
            viewport_size: [0.0, 0.0],
        }
    }

    /// Aktuelles Kartenzentrum: losgelöste Position oder Home.
    pub fn center(&self) -> Position {
        self.memory.detached().unwrap_or(self.home)
    }

    /// Aktueller Zoom-Level.
    pub fn zoom(&self) -> f64 {
        self.memory.zoom()
    }
}

/// UI-bezogener Anwendungszustand.
#[derive(Default)]
pub struct UiState {
    /// Anzeigetext der Gesamtdistanz (None = leer, unter zwei Punkten)
    pub distance_text: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand (keine Distanz-Anzeige).
    pub fn new() -> Self {
        Self::default()
    }
}

/// Hauptzustand der Anwendung.
pub struct AppState {
    /// Punkt/Pfad-Zustandsmaschine
    pub track: MeasureTrack,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Laufzeit-Optionen (Provider, Farben, Radien)
    pub options: AppOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(AppOptions::default())
    }

    /// Erstellt einen neuen App-State mit den gegebenen Optionen.
    pub fn with_options(options: AppOptions) -> Self {
        Self {
            track: MeasureTrack::new(),
            view: ViewState::new(&options),
            ui: UiState::new(),
            options,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der gesetzten Punkte zurück (für UI-Anzeige).
    pub fn point_count(&self) -> usize {
        self.track.point_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
