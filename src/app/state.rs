//! Anwendungszustand: Surfaces, Target-Verwaltung, Optionen und Panel-Daten.

use glam::Vec2;

use super::events::AppIntent;
use super::label::SharedTextLabel;
use super::manager::TargetManager;
use crate::core::SurfaceRegistry;
use crate::shared::options::TARGET_COLORS;
use crate::shared::EditorOptions;
use crate::targets::{CircleTarget, RectangleTarget, SquareTarget, Target};

/// Eintrag im Target-Panel: Name plus lesbares Geometrie-Label.
pub struct PanelEntry {
    pub target_id: u64,
    pub name: String,
    pub label: SharedTextLabel,
}

/// Gesamtzustand der Anwendung.
pub struct AppState {
    pub surfaces: SurfaceRegistry,
    pub manager: TargetManager,
    pub options: EditorOptions,
    /// Haupt-Ansicht (immer vorhanden)
    pub primary_surface: u64,
    /// Optionale zweite Ansicht derselben Targets
    pub secondary_surface: Option<u64>,
    pub panel: Vec<PanelEntry>,
    /// Zentrum der Haupt-Ansicht in Canvas-Koordinaten (von der UI gepflegt);
    /// neue Targets werden hier platziert.
    pub view_center: Vec2,
    next_color: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Erstellt den Startzustand mit einer offenen Haupt-Ansicht.
    pub fn new() -> Self {
        let mut surfaces = SurfaceRegistry::new();
        let primary_surface = surfaces.add_surface();
        Self {
            surfaces,
            manager: TargetManager::new(),
            options: EditorOptions::default(),
            primary_surface,
            secondary_surface: None,
            panel: Vec::new(),
            view_center: Vec2::new(320.0, 240.0),
            next_color: 0,
        }
    }

    /// Verarbeitet einen Intent der UI.
    pub fn handle_intent(&mut self, intent: AppIntent) -> anyhow::Result<()> {
        match intent {
            AppIntent::AddCircle => self.add_circle(),
            AppIntent::AddSquare => self.add_square(),
            AppIntent::AddRectangle => self.add_rectangle(),
            AppIntent::RemoveTarget(id) => self.remove_target(id),
            AppIntent::ToggleSecondView => self.toggle_second_view(),
            AppIntent::SaveOptions => self.options.save_to_file(&EditorOptions::config_path())?,
            AppIntent::Pointer { surface_id, event } => {
                self.manager
                    .handle_pointer(surface_id, event, &mut self.surfaces)
            }
        }
        Ok(())
    }

    /// Nächste Farbe aus der Palette (zyklisch).
    fn next_color(&mut self) -> [f32; 4] {
        let color = TARGET_COLORS[self.next_color % TARGET_COLORS.len()];
        self.next_color += 1;
        color
    }

    /// Legt ein Target an, zeichnet es auf alle offenen Ansichten und
    /// registriert den Panel-Eintrag.
    fn add_target(&mut self, target: Target) {
        let name = format!("{} {}", target.kind_name(), self.panel.len() + 1);
        let label = SharedTextLabel::new();
        let id = self.manager.add_target(
            target,
            Box::new(label.clone()),
            &mut self.surfaces,
            self.primary_surface,
        );
        if let Some(second) = self.secondary_surface {
            self.manager.draw_target(id, &mut self.surfaces, second);
        }
        self.panel.push(PanelEntry {
            target_id: id,
            name,
            label,
        });
    }

    pub fn add_circle(&mut self) {
        let color = self.next_color();
        let c = self.view_center;
        let r = self.options.default_radius_px;
        self.add_target(Target::Circle(CircleTarget::new(c.x, c.y, r, color)));
    }

    pub fn add_square(&mut self) {
        let color = self.next_color();
        let c = self.view_center;
        let side = self.options.default_side_px;
        self.add_target(Target::Square(SquareTarget::new(c.x, c.y, side, color)));
    }

    pub fn add_rectangle(&mut self) {
        let color = self.next_color();
        let c = self.view_center;
        let side = self.options.default_side_px;
        self.add_target(Target::Rectangle(RectangleTarget::new(
            c.x, c.y, side, color,
        )));
    }

    /// Entfernt ein Target samt Panel-Eintrag.
    pub fn remove_target(&mut self, id: u64) {
        self.manager.remove_target(id, &mut self.surfaces);
        self.panel.retain(|entry| entry.target_id != id);
    }

    /// Öffnet die zweite Ansicht (und zeichnet alle Targets darauf) bzw.
    /// schließt sie wieder.
    pub fn toggle_second_view(&mut self) {
        match self.secondary_surface.take() {
            Some(second) => {
                self.manager.detach_surface(second, &mut self.surfaces);
                self.surfaces.remove_surface(second);
                log::info!("Zweite Ansicht geschlossen");
            }
            None => {
                let second = self.surfaces.add_surface();
                self.manager.draw_all(&mut self.surfaces, second);
                self.secondary_surface = Some(second);
                log::info!("Zweite Ansicht geöffnet");
            }
        }
    }

    /// Ids der offenen Ansichten in Darstellungs-Reihenfolge.
    pub fn open_views(&self) -> Vec<u64> {
        let mut views = vec![self.primary_surface];
        views.extend(self.secondary_surface);
        views
    }
}
