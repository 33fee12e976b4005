//! Draggbarer Kontrollpunkt: ein logischer Punkt, dargestellt durch je einen
//! Marker pro gebundener Surface.
//!
//! Invariante: alle Marker eines Punkts tragen zu jedem Zeitpunkt dieselben
//! Koordinaten (abgesehen vom Intervall zwischen Motion-Event und dessen
//! Propagierung). Gelesen wird darum immer vom ersten Marker.

use glam::Vec2;

use crate::core::{ControlRole, Marker, MarkerSymbol, SurfaceRegistry};
use crate::shared::options::{MARKER_SIZE_PX, PICK_RADIUS_PX};

/// Welche Koordinaten ein Drag an diesem Punkt verändern darf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisMask {
    pub allow_x: bool,
    pub allow_y: bool,
}

impl AxisMask {
    /// Beide Achsen frei (Zentrum, Ecken).
    pub const BOTH: Self = Self {
        allow_x: true,
        allow_y: true,
    };
    /// Nur x veränderbar (Radius- und Seiten-Handles).
    pub const X_ONLY: Self = Self {
        allow_x: true,
        allow_y: false,
    };
}

/// Bindung an einen Marker auf einer Surface.
#[derive(Debug, Clone, Copy)]
pub struct MarkerBinding {
    pub surface_id: u64,
    pub marker_id: u64,
}

/// Ein draggbares Handle eines Targets.
#[derive(Debug)]
pub struct ControlPoint {
    role: ControlRole,
    axes: AxisMask,
    symbol: MarkerSymbol,
    color: [f32; 4],
    bindings: Vec<MarkerBinding>,
}

impl ControlPoint {
    /// Erstellt einen Kontrollpunkt ohne Marker-Bindungen.
    pub fn new(role: ControlRole, axes: AxisMask, symbol: MarkerSymbol, color: [f32; 4]) -> Self {
        Self {
            role,
            axes,
            symbol,
            color,
            bindings: Vec::new(),
        }
    }

    pub fn role(&self) -> ControlRole {
        self.role
    }

    pub fn axes(&self) -> AxisMask {
        self.axes
    }

    pub fn bindings(&self) -> &[MarkerBinding] {
        &self.bindings
    }

    /// Legt auf `surface_id` einen neuen Marker für diesen Punkt an.
    ///
    /// Position: explizit übergeben oder die aktuelle Koordinate des ersten
    /// bereits gebundenen Markers. Ohne beides verfällt der Aufruf still —
    /// es gibt dann keine sinnvolle Position.
    pub fn bind_to_surface(
        &mut self,
        surfaces: &mut SurfaceRegistry,
        surface_id: u64,
        pos: Option<Vec2>,
    ) {
        let pos = match pos {
            Some(p) => p,
            None => {
                let Some(current) = self.position(surfaces) else {
                    log::warn!(
                        "Kontrollpunkt {:?} ohne Position und ohne bestehende Marker — Bindung übersprungen",
                        self.role
                    );
                    return;
                };
                current
            }
        };
        let Some(scene) = surfaces.get_mut(surface_id) else {
            // Unbekannte Surface — Bindung verfällt still
            return;
        };
        let marker_id = scene.add_marker(Marker {
            pos,
            color: self.color,
            symbol: self.symbol,
            size: MARKER_SIZE_PX,
            pick_radius: PICK_RADIUS_PX,
        });
        self.bindings.push(MarkerBinding {
            surface_id,
            marker_id,
        });
    }

    /// x-Koordinate, gelesen vom ersten gebundenen Marker.
    pub fn x(&self, surfaces: &SurfaceRegistry) -> Option<f32> {
        self.position(surfaces).map(|p| p.x)
    }

    /// y-Koordinate, gelesen vom ersten gebundenen Marker.
    pub fn y(&self, surfaces: &SurfaceRegistry) -> Option<f32> {
        self.position(surfaces).map(|p| p.y)
    }

    /// Position des ersten gebundenen Markers.
    pub fn position(&self, surfaces: &SurfaceRegistry) -> Option<Vec2> {
        let first = self.bindings.first()?;
        surfaces
            .get(first.surface_id)
            .and_then(|scene| scene.marker(first.marker_id))
            .map(|m| m.pos)
    }

    /// Setzt x auf allen gebundenen Markern einheitlich.
    pub fn set_x(&self, surfaces: &mut SurfaceRegistry, x: f32) {
        for b in &self.bindings {
            if let Some(marker) = surfaces
                .get_mut(b.surface_id)
                .and_then(|scene| scene.marker_mut(b.marker_id))
            {
                marker.pos.x = x;
            }
        }
    }

    /// Setzt y auf allen gebundenen Markern einheitlich.
    pub fn set_y(&self, surfaces: &mut SurfaceRegistry, y: f32) {
        for b in &self.bindings {
            if let Some(marker) = surfaces
                .get_mut(b.surface_id)
                .and_then(|scene| scene.marker_mut(b.marker_id))
            {
                marker.pos.y = y;
            }
        }
    }

    /// Verschiebt den Punkt entlang der erlaubten Achsen auf `pos`.
    pub fn apply_motion(&self, surfaces: &mut SurfaceRegistry, pos: Vec2) {
        if self.axes.allow_x {
            self.set_x(surfaces, pos.x);
        }
        if self.axes.allow_y {
            self.set_y(surfaces, pos.y);
        }
    }

    /// True wenn `pos` innerhalb des Pick-Radius eines Markers dieses Punkts
    /// auf der angegebenen Surface liegt.
    pub fn hit_test(&self, surfaces: &SurfaceRegistry, surface_id: u64, pos: Vec2) -> bool {
        self.bindings
            .iter()
            .filter(|b| b.surface_id == surface_id)
            .any(|b| {
                surfaces
                    .get(b.surface_id)
                    .and_then(|scene| scene.marker(b.marker_id))
                    .is_some_and(|m| m.pos.distance(pos) <= m.pick_radius)
            })
    }

    /// Entfernt die Marker dieses Punkts auf einer Surface.
    pub fn unbind_surface(&mut self, surfaces: &mut SurfaceRegistry, surface_id: u64) {
        for b in self.bindings.iter().filter(|b| b.surface_id == surface_id) {
            if let Some(scene) = surfaces.get_mut(b.surface_id) {
                scene.remove_marker(b.marker_id);
            }
        }
        self.bindings.retain(|b| b.surface_id != surface_id);
    }

    /// Entfernt sämtliche Marker dieses Punkts von allen Surfaces.
    pub fn remove_markers(&mut self, surfaces: &mut SurfaceRegistry) {
        for b in self.bindings.drain(..) {
            if let Some(scene) = surfaces.get_mut(b.surface_id) {
                scene.remove_marker(b.marker_id);
            }
        }
    }
}

#[cfg(test)]
mod tests;
