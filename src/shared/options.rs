//! Zentrale Konfiguration für die Karten-Demos.
//!
//! `AppOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};
use walkers::Position;

// ── Tile-Provider ───────────────────────────────────────────────────

/// Anzeigename des Standard-Tile-Providers.
pub const TILE_PROVIDER_NAME: &str = "OpenStreetMap";
/// URL-Template des Standard-Tile-Providers.
/// `{key}` wird, falls vorhanden, durch den API-Key ersetzt.
pub const TILE_PROVIDER_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
/// Umgebungsvariable für den API-Key (überschreibt die Optionen-Datei).
pub const API_KEY_ENV_VAR: &str = "MAP_MEASURE_API_KEY";

// ── Start-Ansicht ───────────────────────────────────────────────────

/// Breitengrad der Start-Position.
pub const HOME_LAT: f64 = 54.682;
/// Längengrad der Start-Position.
pub const HOME_LON: f64 = 25.2792;
/// Zoom-Level beim Start.
pub const START_ZOOM: f64 = 12.0;

// ── Overlay-Rendering ───────────────────────────────────────────────

/// Kreis-Radius gesetzter Punkte in Screen-Pixeln.
pub const POINT_RADIUS_PX: f32 = 5.0;
/// Füllfarbe der Punkte (RGBA: Schwarz).
pub const POINT_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Outline-Farbe der Punkte (RGBA: Weiß).
pub const POINT_OUTLINE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Linienstärke des Pfads in Screen-Pixeln.
pub const PATH_WIDTH_PX: f32 = 2.5;
/// Farbe des Pfads (RGBA: Schwarz).
pub const PATH_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Treffer-Radius für Klicks auf existierende Punkte in Screen-Pixeln.
pub const HIT_RADIUS_PX: f32 = 12.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen der Karten-Demos.
/// Wird als `map_measure.toml` neben der Binary gelesen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppOptions {
    // ── Tile-Provider ───────────────────────────────────────────
    /// Anzeigename des Tile-Providers (Attribution)
    pub provider_name: String,
    /// URL-Template mit `{z}`/`{x}`/`{y}` und optionalem `{key}`
    pub provider_url: String,
    /// API-Key für den Tile-Provider (optional)
    #[serde(default)]
    pub api_key: Option<String>,

    // ── Start-Ansicht ───────────────────────────────────────────
    /// Breitengrad der Start-Position
    pub home_lat: f64,
    /// Längengrad der Start-Position
    pub home_lon: f64,
    /// Zoom-Level beim Start
    pub start_zoom: f64,

    // ── Overlay ─────────────────────────────────────────────────
    /// Kreis-Radius gesetzter Punkte in Screen-Pixeln
    pub point_radius_px: f32,
    /// Füllfarbe der Punkte (RGBA)
    pub point_color: [f32; 4],
    /// Outline-Farbe der Punkte (RGBA)
    pub point_outline_color: [f32; 4],
    /// Linienstärke des Pfads in Screen-Pixeln
    pub path_width_px: f32,
    /// Farbe des Pfads (RGBA)
    pub path_color: [f32; 4],
    /// Treffer-Radius für Klick-Selektion in Screen-Pixeln
    #[serde(default = "default_hit_radius_px")]
    pub hit_radius_px: f32,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            provider_name: TILE_PROVIDER_NAME.to_string(),
            provider_url: TILE_PROVIDER_URL.to_string(),
            api_key: None,

            home_lat: HOME_LAT,
            home_lon: HOME_LON,
            start_zoom: START_ZOOM,

            point_radius_px: POINT_RADIUS_PX,
            point_color: POINT_COLOR,
            point_outline_color: POINT_OUTLINE_COLOR,
            path_width_px: PATH_WIDTH_PX,
            path_color: PATH_COLOR,
            hit_radius_px: HIT_RADIUS_PX,
        }
    }
}

/// Serde-Default für `hit_radius_px` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_hit_radius_px() -> f32 {
    HIT_RADIUS_PX
}

impl AppOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("map_measure"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("map_measure.toml")
    }

    /// Start-Position der Kartenansicht.
    pub fn home_position(&self) -> Position {
        walkers::lat_lon(self.home_lat, self.home_lon)
    }

    /// Aufgelöster API-Key: Umgebungsvariable vor Optionen-Datei.
    ///
    /// Ein fehlender oder ungültiger Key wird nicht behandelt — Tile-Fehler
    /// zeigen sich ausschließlich im Karten-Widget selbst.
    pub fn resolved_api_key(&self) -> Option<String> {
        std::env::var(API_KEY_ENV_VAR)
            .ok()
            .filter(|key| !key.is_empty())
            .or_else(|| self.api_key.clone())
    }
}
