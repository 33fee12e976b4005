//! Quadrat-Target: strukturell wie der Kreis, mit halber Seitenlänge statt
//! Radius. Das Label meldet die volle Seitenlänge `2·side`.

use glam::Vec2;

use super::control_point::{AxisMask, ControlPoint};
use super::{remove_patches, set_patches, PatchBinding};
use crate::core::{ControlRole, MarkerSymbol, Patch, PatchShape, SurfaceRegistry};
use crate::shared::options::PATCH_LINE_WIDTH_PX;

/// Editierbares Quadrat mit Zentrums- und Seiten-Kontrollpunkt.
pub struct SquareTarget {
    /// Zentrum
    pub x: f32,
    pub y: f32,
    /// Halbe Seitenlänge (darf 0 werden — degeneriert, kein Fehler)
    pub side: f32,
    pt_center: ControlPoint,
    pt_side: ControlPoint,
    patches: Vec<PatchBinding>,
    color: [f32; 4],
}

impl SquareTarget {
    /// Erstellt ein Quadrat; gezeichnet wird erst mit `draw`.
    pub fn new(x: f32, y: f32, side: f32, color: [f32; 4]) -> Self {
        Self {
            x,
            y,
            side,
            pt_center: ControlPoint::new(
                ControlRole::Center,
                AxisMask::BOTH,
                MarkerSymbol::Cross,
                color,
            ),
            pt_side: ControlPoint::new(
                ControlRole::Side,
                AxisMask::X_ONLY,
                MarkerSymbol::Square,
                color,
            ),
            patches: Vec::new(),
            color,
        }
    }

    /// Aktuelle Form als Patch (Ecke bei `(x−side, y−side)`, Kantenlänge `2·side`).
    fn shape(&self) -> PatchShape {
        PatchShape::Rect {
            corner: Vec2::new(self.x - self.side, self.y - self.side),
            width: self.side * 2.0,
            height: self.side * 2.0,
        }
    }

    /// Zeichnet das Quadrat samt Kontrollpunkten auf eine Surface.
    pub fn draw(&mut self, surfaces: &mut SurfaceRegistry, surface_id: u64) {
        let Some(scene) = surfaces.get_mut(surface_id) else {
            // Unbekannte Surface — Zeichnung verfällt still
            return;
        };
        let patch_id = scene.add_patch(Patch {
            shape: self.shape(),
            color: self.color,
            line_width: PATCH_LINE_WIDTH_PX,
        });
        self.patches.push(PatchBinding {
            surface_id,
            patch_id,
        });
        self.pt_center
            .bind_to_surface(surfaces, surface_id, Some(Vec2::new(self.x, self.y)));
        self.pt_side.bind_to_surface(
            surfaces,
            surface_id,
            Some(Vec2::new(self.x + self.side, self.y)),
        );
    }

    /// Verteilt ein Kontrollpunkt-Update an den passenden Handler.
    pub fn update_from_control(
        &mut self,
        role: ControlRole,
        pos: Vec2,
        surfaces: &mut SurfaceRegistry,
    ) {
        match role {
            ControlRole::Center => self.update_center(pos, surfaces),
            ControlRole::Side => self.update_side(pos, surfaces),
            // Fremde Rollen gehören nicht zum Quadrat — still ignorieren
            _ => {}
        }
    }

    /// Zentrum verschoben: Seiten-Handle folgt auf `(x + side, y)`.
    fn update_center(&mut self, pos: Vec2, surfaces: &mut SurfaceRegistry) {
        self.pt_side.set_x(surfaces, pos.x + self.side);
        self.pt_side.set_y(surfaces, pos.y);

        self.x = pos.x;
        self.y = pos.y;
        let shape = self.shape();
        set_patches(surfaces, &self.patches, shape);
    }

    /// Seiten-Handle verschoben: `side = |x_zentrum − x|`, Breite = Höhe = `2·side`.
    fn update_side(&mut self, pos: Vec2, surfaces: &mut SurfaceRegistry) {
        self.side = (self.x - pos.x).abs();
        let shape = self.shape();
        set_patches(surfaces, &self.patches, shape);
    }

    /// Geometrie-Text des Labels (volle Seitenlänge).
    pub fn label_text(&self) -> String {
        format!(
            "x = {}\ny = {}\nside = {}",
            self.x as i64,
            self.y as i64,
            (self.side * 2.0) as i64
        )
    }

    pub fn control_points(&self) -> Vec<&ControlPoint> {
        vec![&self.pt_center, &self.pt_side]
    }

    pub fn detach_surface(&mut self, surfaces: &mut SurfaceRegistry, surface_id: u64) {
        super::detach_patches(surfaces, &mut self.patches, surface_id);
        self.pt_center.unbind_surface(surfaces, surface_id);
        self.pt_side.unbind_surface(surfaces, surface_id);
    }

    pub fn remove_visuals(&mut self, surfaces: &mut SurfaceRegistry) {
        remove_patches(surfaces, &mut self.patches);
        self.pt_center.remove_markers(surfaces);
        self.pt_side.remove_markers(surfaces);
    }

    pub(crate) fn patch_bindings(&self) -> &[PatchBinding] {
        &self.patches
    }
}
