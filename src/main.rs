//! Image Target Editor.
//!
//! Markiert editierbare Ziel-Regionen (Kreis, Quadrat, Rechteck) auf einer
//! oder zwei gleichzeitig offenen Ansichten; alle Ansichten bleiben beim
//! Ziehen der Kontrollpunkte synchron.

use eframe::egui;
use image_target_editor::{ui, AppIntent, AppState, EditorOptions};

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

        log::info!(
            "Image Target Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1100.0, 720.0])
                .with_title("Image Target Editor"),
            ..Default::default()
        };

        eframe::run_native(
            "Image Target Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = editor_options;

        Self { state }
    }

    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::show_target_panel(ctx, &self.state));

        egui::CentralPanel::default().show(ctx, |ui| {
            let views = self.state.open_views();
            let count = views.len().max(1) as f32;
            let spacing = ui.spacing().item_spacing.x;
            let avail = ui.available_size();
            let each = egui::vec2((avail.x - spacing * (count - 1.0)) / count, avail.y);

            // Neue Targets landen im Zentrum einer Ansicht
            self.state.view_center = glam::Vec2::new(each.x / 2.0, each.y / 2.0);

            ui.horizontal(|ui| {
                for surface_id in views {
                    if let Some(scene) = self.state.surfaces.get(surface_id) {
                        events.extend(ui::show_surface(ui, surface_id, scene, each));
                    }
                }
            });
        });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.state.handle_intent(event) {
                log::error!("Intent-Verarbeitung fehlgeschlagen: {:#}", e);
            }
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let events = self.collect_ui_events(ctx);
        let had_events = !events.is_empty();
        self.process_events(events);

        // Während eines Drags kontinuierlich neu zeichnen
        if had_events || ctx.input(|i| i.pointer.is_moving()) {
            ctx.request_repaint();
        }
    }
}
