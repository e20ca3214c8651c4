//! Map-Measure Library.
//! Core-Funktionalität als Library exportiert für Tests und beide Demos.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, UiState, ViewState};
pub use core::{
    FeatureCollection, HitTester, MeasureTrack, PathFeature, PointFeature, PointId,
    ScreenSpaceHitTester,
};
pub use render::{source_from_options, OverlayStyle, SharedIntents, TrackOverlay, UrlTileSource};
pub use shared::AppOptions;
