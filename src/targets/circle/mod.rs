//! Kreis-Target: Zentrum frei verschiebbar, Radius über ein x-gebundenes
//! Handle rechts vom Zentrum.

use glam::Vec2;

use super::control_point::{AxisMask, ControlPoint};
use super::{remove_patches, set_patches, PatchBinding};
use crate::core::{ControlRole, MarkerSymbol, Patch, PatchShape, SurfaceRegistry};
use crate::shared::options::PATCH_LINE_WIDTH_PX;

/// Editierbarer Kreis mit Zentrums- und Radius-Kontrollpunkt.
pub struct CircleTarget {
    /// Zentrum
    pub x: f32,
    pub y: f32,
    /// Radius (darf 0 werden — degeneriert zum Punkt, kein Fehler)
    pub r: f32,
    pt_center: ControlPoint,
    pt_radius: ControlPoint,
    patches: Vec<PatchBinding>,
    color: [f32; 4],
}

impl CircleTarget {
    /// Erstellt einen Kreis; gezeichnet wird erst mit `draw`.
    pub fn new(x: f32, y: f32, r: f32, color: [f32; 4]) -> Self {
        Self {
            x,
            y,
            r,
            pt_center: ControlPoint::new(
                ControlRole::Center,
                AxisMask::BOTH,
                MarkerSymbol::Cross,
                color,
            ),
            pt_radius: ControlPoint::new(
                ControlRole::Radius,
                AxisMask::X_ONLY,
                MarkerSymbol::Circle,
                color,
            ),
            patches: Vec::new(),
            color,
        }
    }

    /// Zeichnet den Kreis samt Kontrollpunkten auf eine Surface.
    pub fn draw(&mut self, surfaces: &mut SurfaceRegistry, surface_id: u64) {
        let Some(scene) = surfaces.get_mut(surface_id) else {
            // Unbekannte Surface — Zeichnung verfällt still
            return;
        };
        let patch_id = scene.add_patch(Patch {
            shape: PatchShape::Circle {
                center: Vec2::new(self.x, self.y),
                radius: self.r,
            },
            color: self.color,
            line_width: PATCH_LINE_WIDTH_PX,
        });
        self.patches.push(PatchBinding {
            surface_id,
            patch_id,
        });
        self.pt_center
            .bind_to_surface(surfaces, surface_id, Some(Vec2::new(self.x, self.y)));
        self.pt_radius
            .bind_to_surface(surfaces, surface_id, Some(Vec2::new(self.x + self.r, self.y)));
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
            ControlRole::Radius => self.update_radius(pos, surfaces),
            // Fremde Rollen gehören nicht zum Kreis — still ignorieren
            _ => {}
        }
    }

    /// Zentrum verschoben: Radius-Handle folgt auf `(x + r, y)`,
    /// alle Darstellungen werden neu zentriert.
    fn update_center(&mut self, pos: Vec2, surfaces: &mut SurfaceRegistry) {
        self.pt_radius.set_x(surfaces, pos.x + self.r);
        self.pt_radius.set_y(surfaces, pos.y);

        set_patches(
            surfaces,
            &self.patches,
            PatchShape::Circle {
                center: pos,
                radius: self.r,
            },
        );

        self.x = pos.x;
        self.y = pos.y;
    }

    /// Radius-Handle verschoben: `r = |x_zentrum − x|`; die y-Komponente des
    /// Events ist durch die Achsenmaske des Handles ohnehin wirkungslos.
    fn update_radius(&mut self, pos: Vec2, surfaces: &mut SurfaceRegistry) {
        self.r = (self.x - pos.x).abs();

        set_patches(
            surfaces,
            &self.patches,
            PatchShape::Circle {
                center: Vec2::new(self.x, self.y),
                radius: self.r,
            },
        );
    }

    /// Geometrie-Text des Labels.
    pub fn label_text(&self) -> String {
        format!(
            "x = {}\ny = {}\nr = {}",
            self.x as i64, self.y as i64, self.r as i64
        )
    }

    pub fn control_points(&self) -> Vec<&ControlPoint> {
        vec![&self.pt_center, &self.pt_radius]
    }

    pub fn detach_surface(&mut self, surfaces: &mut SurfaceRegistry, surface_id: u64) {
        super::detach_patches(surfaces, &mut self.patches, surface_id);
        self.pt_center.unbind_surface(surfaces, surface_id);
        self.pt_radius.unbind_surface(surfaces, surface_id);
    }

    pub fn remove_visuals(&mut self, surfaces: &mut SurfaceRegistry) {
        remove_patches(surfaces, &mut self.patches);
        self.pt_center.remove_markers(surfaces);
        self.pt_radius.remove_markers(surfaces);
    }

    pub(crate) fn patch_bindings(&self) -> &[PatchBinding] {
        &self.patches
    }
}
