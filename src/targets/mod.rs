//! Target-System: editierbare Ziel-Regionen (Kreis, Quadrat, Rechteck).
//!
//! Jede Variante besitzt ihre Kontrollpunkte und rekonstruiert ihre Geometrie
//! aus der neuen Position eines gezogenen Punkts. Gezeichnet wird auf beliebig
//! viele Surfaces gleichzeitig; alle gebundenen Darstellungen werden in einer
//! Operation aktualisiert, sodass keine Ansicht eigenen Zustand trägt.
//!
//! Aufgeteilt in:
//! - `control_point` — draggbares Handle mit Achsenmaske und Marker-Bindungen
//! - `circle`        — Zentrum + Radius-Handle
//! - `square`        — Zentrum + Seiten-Handle (halbe Seitenlänge)
//! - `rectangle`     — vier unabhängige Eck-Handles

pub mod circle;
pub mod control_point;
pub mod rectangle;
pub mod square;

pub use circle::CircleTarget;
pub use control_point::{AxisMask, ControlPoint};
pub use rectangle::RectangleTarget;
pub use square::SquareTarget;

use glam::Vec2;

use crate::core::{ControlRole, PatchShape, SurfaceRegistry};

/// Bindung eines Targets an einen Patch auf einer Surface.
#[derive(Debug, Clone, Copy)]
pub struct PatchBinding {
    pub surface_id: u64,
    pub patch_id: u64,
}

/// Schreibt eine neue Form in alle gebundenen Patches (alles-oder-nichts).
///
/// Vor dem ersten Schreibzugriff wird jede Bindung geprüft; zeigt eine ins
/// Leere, unterbleibt das gesamte Update und keine Ansicht läuft auseinander.
pub(crate) fn set_patches(
    surfaces: &mut SurfaceRegistry,
    bindings: &[PatchBinding],
    shape: PatchShape,
) -> bool {
    let all_present = bindings.iter().all(|b| {
        surfaces
            .get(b.surface_id)
            .and_then(|scene| scene.patch(b.patch_id))
            .is_some()
    });
    if !all_present {
        log::warn!("Patch-Update übersprungen: mindestens eine Bindung zeigt ins Leere");
        return false;
    }
    for b in bindings {
        if let Some(patch) = surfaces
            .get_mut(b.surface_id)
            .and_then(|scene| scene.patch_mut(b.patch_id))
        {
            patch.shape = shape;
        }
    }
    true
}

/// Entfernt alle Patch-Bindungen einer Surface und löscht die Patches dort.
pub(crate) fn detach_patches(
    surfaces: &mut SurfaceRegistry,
    bindings: &mut Vec<PatchBinding>,
    surface_id: u64,
) {
    for b in bindings.iter().filter(|b| b.surface_id == surface_id) {
        if let Some(scene) = surfaces.get_mut(b.surface_id) {
            scene.remove_patch(b.patch_id);
        }
    }
    bindings.retain(|b| b.surface_id != surface_id);
}

/// Entfernt sämtliche Patches eines Targets von allen Surfaces.
pub(crate) fn remove_patches(surfaces: &mut SurfaceRegistry, bindings: &mut Vec<PatchBinding>) {
    for b in bindings.drain(..) {
        if let Some(scene) = surfaces.get_mut(b.surface_id) {
            scene.remove_patch(b.patch_id);
        }
    }
}

/// Ziel-Region als Tagged Union — eine Variante pro Form.
pub enum Target {
    Circle(CircleTarget),
    Square(SquareTarget),
    Rectangle(RectangleTarget),
}

impl Target {
    /// Anzeigename der Variante.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Target::Circle(_) => "Kreis",
            Target::Square(_) => "Quadrat",
            Target::Rectangle(_) => "Rechteck",
        }
    }

    /// Zeichnet das Target auf eine weitere Surface.
    ///
    /// Darf mehrfach aufgerufen werden (gleiche oder verschiedene Surface);
    /// jede Darstellung bleibt danach mit allen anderen synchron.
    pub fn draw(&mut self, surfaces: &mut SurfaceRegistry, surface_id: u64) {
        match self {
            Target::Circle(t) => t.draw(surfaces, surface_id),
            Target::Square(t) => t.draw(surfaces, surface_id),
            Target::Rectangle(t) => t.draw(surfaces, surface_id),
        }
    }

    /// Rekonstruiert die Geometrie aus der neuen Position eines Kontrollpunkts.
    pub fn update_from_control(
        &mut self,
        role: ControlRole,
        pos: Vec2,
        surfaces: &mut SurfaceRegistry,
    ) {
        match self {
            Target::Circle(t) => t.update_from_control(role, pos, surfaces),
            Target::Square(t) => t.update_from_control(role, pos, surfaces),
            Target::Rectangle(t) => t.update_from_control(role, pos, surfaces),
        }
    }

    /// Motion-Seiteneffekt eines laufenden Drags: erst die Marker des Punkts
    /// entlang der erlaubten Achsen verschieben, dann die Geometrie neu
    /// berechnen.
    pub fn drag_control(&mut self, role: ControlRole, pos: Vec2, surfaces: &mut SurfaceRegistry) {
        let Some(cp) = self.control_point(role) else {
            // Rolle gehört nicht zu dieser Variante — Event verfällt still
            return;
        };
        cp.apply_motion(surfaces, pos);
        self.update_from_control(role, pos, surfaces);
    }

    /// Formatierter Geometrie-Text für das Label (ganzzahlig).
    pub fn label_text(&self) -> String {
        match self {
            Target::Circle(t) => t.label_text(),
            Target::Square(t) => t.label_text(),
            Target::Rectangle(t) => t.label_text(),
        }
    }

    /// Kontrollpunkt zu einer Rolle, falls die Variante ihn besitzt.
    pub fn control_point(&self, role: ControlRole) -> Option<&ControlPoint> {
        self.control_points().into_iter().find(|cp| cp.role() == role)
    }

    /// Alle Kontrollpunkte der Variante in fester Reihenfolge.
    pub fn control_points(&self) -> Vec<&ControlPoint> {
        match self {
            Target::Circle(t) => t.control_points(),
            Target::Square(t) => t.control_points(),
            Target::Rectangle(t) => t.control_points(),
        }
    }

    /// Löst das Target von einer Surface (Patches und Marker dort entfernen).
    pub fn detach_surface(&mut self, surfaces: &mut SurfaceRegistry, surface_id: u64) {
        match self {
            Target::Circle(t) => t.detach_surface(surfaces, surface_id),
            Target::Square(t) => t.detach_surface(surfaces, surface_id),
            Target::Rectangle(t) => t.detach_surface(surfaces, surface_id),
        }
    }

    /// Entfernt sämtliche Darstellungen des Targets von allen Surfaces.
    pub fn remove_visuals(&mut self, surfaces: &mut SurfaceRegistry) {
        match self {
            Target::Circle(t) => t.remove_visuals(surfaces),
            Target::Square(t) => t.remove_visuals(surfaces),
            Target::Rectangle(t) => t.remove_visuals(surfaces),
        }
    }
}

/// Rundet eine Spannweite auf die halbe Ausdehnung (Host-Rundung).
pub(crate) fn half_extent(span: f32) -> f32 {
    (span / 2.0).round()
}
