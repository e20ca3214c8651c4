//! Render-Layer: Karten-Overlay und Tile-Provider.

pub mod overlay;
pub mod tiles;

pub use overlay::{OverlayStyle, SharedIntents, TrackOverlay};
pub use tiles::{source_from_options, UrlTileSource};
