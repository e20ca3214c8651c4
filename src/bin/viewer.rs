//! Map-Viewer Demo.
//!
//! Minimaler Karten-Viewer ohne Mess-Werkzeug: zeigt nur das aktuelle
//! Kartenzentrum (Länge/Breite) und den Zoom-Level in der Status-Bar.

use eframe::egui;
use map_measure::render;
use map_measure::{ui, AppController, AppIntent, AppOptions, AppState};
use walkers::{HttpTiles, Map};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Map Viewer v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("Map Viewer"),
            ..Default::default()
        };

        eframe::run_native(
            "Map Viewer",
            options,
            Box::new(|_cc| Ok(Box::new(ViewerApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur des Viewers
struct ViewerApp {
    state: AppState,
    controller: AppController,
    /// Tile-Provider; wird einmalig beim ersten Frame aufgebaut
    tiles: Option<HttpTiles>,
}

impl ViewerApp {
    fn new() -> Self {
        let config_path = AppOptions::config_path();
        let app_options = AppOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(app_options),
            controller: AppController::new(),
            tiles: None,
        }
    }

    fn ensure_tiles(&mut self, ctx: &egui::Context) {
        if self.tiles.is_none() {
            let source = render::source_from_options(&self.state.options);
            self.tiles = Some(HttpTiles::new(source, ctx.clone()));
            log::info!(
                "Tile-Provider initialisiert: {}",
                self.state.options.provider_name
            );
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl ViewerApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        self.ensure_tiles(ctx);

        events.extend(ui::render_menu(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state, false);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let map_rect = ui.available_rect_before_wrap();
                events.push(AppIntent::ViewportResized {
                    size: [map_rect.width(), map_rect.height()],
                });

                let home = self.state.view.home;
                if let Some(tiles) = self.tiles.as_mut() {
                    let map = Map::new(Some(tiles), &mut self.state.view.memory, home);
                    ui.add(map);

                    // Provider-Attribution unten rechts
                    ui.painter().text(
                        map_rect.max - egui::vec2(5.0, 5.0),
                        egui::Align2::RIGHT_BOTTOM,
                        format!("© {}", self.state.options.provider_name),
                        egui::FontId::proportional(10.0),
                        egui::Color32::from_black_alpha(150),
                    );
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events || ctx.input(|i| i.pointer.is_moving()) {
            ctx.request_repaint();
        }
    }
}
