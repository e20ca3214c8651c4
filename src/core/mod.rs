//! Core-Domänentypen: Punkte, Pfad, Hit-Test und geodätische Länge.

pub mod features;
pub mod geodesic;
/// Die Punkt/Pfad-Zustandsmaschine.
///
/// Dieses Modul hält die geordnete Punktmenge und leitet daraus die
/// Verbindungslinie ab — unabhängig von UI und Render-Engine.
pub mod track;

pub use features::{FeatureCollection, PathFeature, PointFeature, PointId};
pub use hit_test::{HitTester, ScreenSpaceHitTester};
pub use track::MeasureTrack;
