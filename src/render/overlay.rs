//! Karten-Overlay: zeichnet Punkte und Pfad, meldet Klicks und Hover.

use std::sync::{Arc, Mutex};

use walkers::{MapMemory, Plugin, Projector};

use crate::app::AppIntent;
use crate::core::{FeatureCollection, HitTester, ScreenSpaceHitTester};
use crate::shared::AppOptions;

/// Sammelbecken für Intents aus dem Plugin-Durchlauf.
///
/// Das Plugin wird vom Karten-Widget konsumiert (`Box<Self>`), deshalb
/// laufen Klick-Ergebnisse über diese geteilte Zelle zurück in den Frame.
pub type SharedIntents = Arc<Mutex<Vec<AppIntent>>>;

/// Darstellungsparameter des Overlays, aus den Optionen abgeleitet.
#[derive(Debug, Clone)]
pub struct OverlayStyle {
    /// Kreis-Radius der Punkte in Pixeln
    pub point_radius_px: f32,
    /// Füllfarbe der Punkte
    pub point_color: egui::Color32,
    /// Outline-Farbe der Punkte
    pub point_outline_color: egui::Color32,
    /// Farbe des Pfads
    pub path_color: egui::Color32,
    /// Linienstärke des Pfads in Pixeln
    pub path_width_px: f32,
    /// Treffer-Radius für Klicks in Pixeln
    pub hit_radius_px: f32,
}

impl OverlayStyle {
    /// Leitet den Stil aus den Laufzeit-Optionen ab.
    pub fn from_options(options: &AppOptions) -> Self {
        Self {
            point_radius_px: options.point_radius_px,
            point_color: color32(options.point_color),
            point_outline_color: color32(options.point_outline_color),
            path_color: color32(options.path_color),
            path_width_px: options.path_width_px,
            hit_radius_px: options.hit_radius_px,
        }
    }
}

/// Konvertiert eine RGBA-Farbe (0.0–1.0) in egui-Farbwerte.
fn color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (rgba[0] * 255.0) as u8,
        (rgba[1] * 255.0) as u8,
        (rgba[2] * 255.0) as u8,
        (rgba[3] * 255.0) as u8,
    )
}

/// Plugin für das Karten-Widget: zeichnet die Feature-Collection und
/// übersetzt Pointer-Eingaben in Intents.
pub struct TrackOverlay {
    /// Snapshot des render-sichtbaren Zustands (Punkte + Pfad)
    features: FeatureCollection,
    /// Darstellungsparameter
    style: OverlayStyle,
    /// Kartenfläche für Clipping
    map_rect: egui::Rect,
    /// Rückkanal für Klick-Intents
    intents: SharedIntents,
}

impl TrackOverlay {
    /// Erstellt das Overlay für einen Frame.
    pub fn new(
        features: FeatureCollection,
        style: OverlayStyle,
        map_rect: egui::Rect,
        intents: SharedIntents,
    ) -> Self {
        Self {
            features,
            style,
            map_rect,
            intents,
        }
    }
}

impl Plugin for TrackOverlay {
    fn run(
        self: Box<Self>,
        ui: &mut egui::Ui,
        response: &egui::Response,
        projector: &Projector,
        _memory: &MapMemory,
    ) {
        let painter = ui.painter().with_clip_rect(self.map_rect);

        // Pfad unter den Punkt-Kreisen zeichnen
        if let Some(path) = &self.features.path {
            let stroke = egui::Stroke::new(self.style.path_width_px, self.style.path_color);
            for pair in path.coordinates.windows(2) {
                // Sprünge über die Datumsgrenze nicht quer über die Welt ziehen
                if (pair[0].x() - pair[1].x()).abs() > 180.0 {
                    continue;
                }
                let a = projector.project(pair[0]);
                let b = projector.project(pair[1]);
                painter.line_segment([egui::pos2(a.x, a.y), egui::pos2(b.x, b.y)], stroke);
            }
        }

        // Punkte zeichnen und dabei den Hit-Tester über den projizierten
        // Positionen aufbauen — Treffer-Abfrage und Darstellung sehen
        // damit garantiert denselben Zustand.
        let mut tester = ScreenSpaceHitTester::new(self.style.hit_radius_px);
        for point in &self.features.points {
            let projected = projector.project(point.position);
            let screen_pos = egui::pos2(projected.x, projected.y);

            painter.circle_filled(screen_pos, self.style.point_radius_px, self.style.point_color);
            painter.circle_stroke(
                screen_pos,
                self.style.point_radius_px,
                egui::Stroke::new(1.5, self.style.point_outline_color),
            );

            tester.push(point.id.clone(), [projected.x, projected.y]);
        }

        // Cursor-Feedback: Zeigehand über existierenden Punkten, sonst
        // Fadenkreuz. Rein kosmetisch, erzeugt keinen Intent.
        if let Some(hover_pos) = response.hover_pos() {
            let icon = if tester.hit_point([hover_pos.x, hover_pos.y]).is_some() {
                egui::CursorIcon::PointingHand
            } else {
                egui::CursorIcon::Crosshair
            };
            ui.ctx().set_cursor_icon(icon);
        }

        // Klick → SurfaceClicked-Intent mit optionalem Punkt-Treffer
        if response.clicked() {
            if let Some(pointer_pos) = response.interact_pointer_pos() {
                let hit = tester.hit_point([pointer_pos.x, pointer_pos.y]).cloned();
                let position = projector.unproject(pointer_pos.to_vec2());
                if let Ok(mut queue) = self.intents.lock() {
                    queue.push(AppIntent::SurfaceClicked { position, hit });
                }
            }
        }
    }
}
