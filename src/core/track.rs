//! Die zentrale MeasureTrack-Datenstruktur: geordnete Punkte plus abgeleiteter Pfad.

use std::time::{SystemTime, UNIX_EPOCH};
use walkers::Position;

use super::geodesic;
use super::{FeatureCollection, PathFeature, PointFeature, PointId};

/// Container für alle gesetzten Punkte und die daraus abgeleitete Linie.
///
/// Invariante: `path` ist genau dann `Some`, wenn mindestens zwei Punkte
/// existieren, und enthält dann exakt deren Koordinaten in Setz-Reihenfolge.
/// Jede Mutation baut den Pfad vollständig neu auf.
#[derive(Debug, Clone, Default)]
pub struct MeasureTrack {
    /// Alle Punkte in Setz-Reihenfolge
    points: Vec<PointFeature>,
    /// Abgeleitete Verbindungslinie (None bei weniger als zwei Punkten)
    path: Option<PathFeature>,
    /// Zuletzt vergebener Id-Zeitstempel (Millisekunden)
    last_id_millis: u64,
}

impl MeasureTrack {
    /// Erstellt einen leeren Track.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt einen neuen Punkt an der gegebenen Position an.
    /// Gibt die frisch vergebene Id zurück.
    pub fn add_point(&mut self, position: Position) -> PointId {
        let id = self.next_point_id();
        self.points.push(PointFeature::new(id.clone(), position));
        self.rebuild_path();
        id
    }

    /// Entfernt den Punkt mit der gegebenen Id.
    /// Gibt `true` zurück falls ein Punkt entfernt wurde; unbekannte Ids sind ein No-op.
    pub fn remove_point(&mut self, id: &PointId) -> bool {
        let before = self.points.len();
        self.points.retain(|p| p.id != *id);
        let removed = self.points.len() < before;
        if removed {
            self.rebuild_path();
        }
        removed
    }

    /// Gibt alle Punkte in Setz-Reihenfolge zurück.
    pub fn points(&self) -> &[PointFeature] {
        &self.points
    }

    /// Gibt den aktuellen Pfad zurück (None bei weniger als zwei Punkten).
    pub fn path(&self) -> Option<&PathFeature> {
        self.path.as_ref()
    }

    /// Gibt die Anzahl der Punkte zurück.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Geodätische Pfadlänge in Kilometern (None ohne Pfad).
    pub fn length_km(&self) -> Option<f64> {
        self.path
            .as_ref()
            .map(|path| geodesic::path_length_km(&path.coordinates))
    }

    /// Stellt den render-sichtbaren Zustand zusammen: Punkte, dann der Pfad.
    pub fn feature_collection(&self) -> FeatureCollection {
        FeatureCollection {
            points: self.points.clone(),
            path: self.path.clone(),
        }
    }

    /// Baut den Pfad vollständig aus den aktuellen Punkten neu auf.
    fn rebuild_path(&mut self) {
        self.path = if self.points.len() >= 2 {
            Some(PathFeature::through(
                self.points.iter().map(|p| p.position).collect(),
            ))
        } else {
            None
        };
    }

    /// Vergibt die nächste Punkt-Id aus dem aktuellen Zeitstempel.
    ///
    /// Mehrere Klicks innerhalb derselben Millisekunde (oder eine rückwärts
    /// springende Systemuhr) erhöhen monoton, damit Ids eindeutig bleiben.
    fn next_point_id(&mut self) -> PointId {
        let now_millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        let millis = now_millis.max(self.last_id_millis + 1);
        self.last_id_millis = millis;
        PointId::from_millis(millis)
    }
}
