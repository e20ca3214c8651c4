//! Feature-Typen: Punkte, Pfad und die render-sichtbare Collection.

use std::fmt;
use walkers::Position;

/// Eindeutige Kennung eines gesetzten Punkts.
///
/// Abgeleitet aus dem Erstellungszeitpunkt (Millisekunden seit Unix-Epoche,
/// dezimal). Die Eindeutigkeit stellt [`super::MeasureTrack`] sicher.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PointId(String);

impl PointId {
    /// Erstellt eine Id aus einem Millisekunden-Zeitstempel.
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.to_string())
    }

    /// Gibt die Id als String-Slice zurück.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ein einzelner, vom Nutzer gesetzter Punkt.
/// Nach Erstellung unveränderlich, kann nur gelöscht werden.
#[derive(Debug, Clone, PartialEq)]
pub struct PointFeature {
    /// Eindeutige Kennung (Zeitstempel-basiert)
    pub id: PointId,
    /// Geografische Position (Länge/Breite)
    pub position: Position,
}

impl PointFeature {
    /// Erstellt einen neuen Punkt.
    pub fn new(id: PointId, position: Position) -> Self {
        Self { id, position }
    }
}

/// Die abgeleitete Verbindungslinie durch alle aktuellen Punkte.
///
/// Wird nach jeder Mutation vollständig neu aufgebaut (kein inkrementelles
/// Patchen) und existiert nur bei mindestens zwei Punkten. Keine eigene
/// Identität — es gibt immer höchstens einen Pfad.
#[derive(Debug, Clone, PartialEq)]
pub struct PathFeature {
    /// Koordinaten in Setz-Reihenfolge der Punkte
    pub coordinates: Vec<Position>,
}

impl PathFeature {
    /// Baut den Pfad aus einer Koordinatensequenz.
    pub fn through(coordinates: Vec<Position>) -> Self {
        Self { coordinates }
    }
}

/// Render-sichtbarer Gesamtzustand: alle Punkte plus optional der Pfad.
///
/// Der Pfad ist bewusst getrennt vom Punkt-Vektor gehalten und wird nie aus
/// einer gemischten Feature-Liste herausgefiltert. Die Zeichenreihenfolge
/// (Pfad unter den Punkt-Kreisen) ist rein kosmetisch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureCollection {
    /// Alle aktuellen Punkte in Setz-Reihenfolge
    pub points: Vec<PointFeature>,
    /// Verbindungslinie, sobald mindestens zwei Punkte existieren
    pub path: Option<PathFeature>,
}

impl FeatureCollection {
    /// Gibt zurück, ob weder Punkte noch Pfad vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.path.is_none()
    }
}
