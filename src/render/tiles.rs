//! Konfigurierbarer HTTP-Tile-Provider für das Karten-Widget.

use walkers::sources::{Attribution, TileSource};
use walkers::TileId;

use crate::shared::AppOptions;

/// Tile-Quelle über ein URL-Template mit `{z}`/`{x}`/`{y}`-Platzhaltern.
///
/// Der optionale `{key}`-Platzhalter ist zu diesem Zeitpunkt bereits durch
/// den aufgelösten API-Key ersetzt (siehe [`source_from_options`]).
#[derive(Debug, Clone)]
pub struct UrlTileSource {
    name: String,
    url_template: String,
}

impl UrlTileSource {
    /// Erstellt eine Tile-Quelle aus Name und fertigem URL-Template.
    pub fn new(name: String, url_template: String) -> Self {
        Self { name, url_template }
    }
}

impl TileSource for UrlTileSource {
    fn tile_url(&self, tile_id: TileId) -> String {
        self.url_template
            .replace("{z}", &tile_id.zoom.to_string())
            .replace("{x}", &tile_id.x.to_string())
            .replace("{y}", &tile_id.y.to_string())
    }

    fn attribution(&self) -> Attribution {
        // Attribution verlangt 'static — der Name wird einmalig geleakt,
        // der Provider wechselt zur Laufzeit nicht.
        let text: &'static str = Box::leak(self.name.clone().into_boxed_str());
        Attribution {
            text,
            url: "",
            logo_light: None,
            logo_dark: None,
        }
    }
}

/// Baut die Tile-Quelle aus den Laufzeit-Optionen.
///
/// Ersetzt `{key}` im URL-Template durch den aufgelösten API-Key.
/// Fehlt der Key, bleibt der Platzhalter leer — der Provider quittiert
/// das mit fehlgeschlagenen Tile-Loads, nicht dieser Code.
pub fn source_from_options(options: &AppOptions) -> UrlTileSource {
    let key = options.resolved_api_key().unwrap_or_default();
    let url_template = options.provider_url.replace("{key}", &key);
    UrlTileSource::new(options.provider_name.clone(), url_template)
}
