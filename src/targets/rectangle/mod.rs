//! Rechteck-Target mit vier unabhängigen Eck-Kontrollpunkten.
//!
//! Jede Ecke rekonstruiert die Geometrie aus ihrer eigenen neuen Position und
//! den beiden kantengleichen Nachbarecken — nicht aus der Gegenecke. Beim
//! Ziehen einer Ecke werden zuerst die geteilten Koordinaten der Nachbarn
//! erzwungen (z. B. zwingt `tr` die y-Koordinate von `tl` und die x-Koordinate
//! von `br`), dann werden die Spannweiten `ddx`/`ddy` gegen die Nachbarn
//! gemessen und die halben Ausdehnungen auf ganze Werte gerundet.
//!
//! Bekannte Einschränkung: die Gegenecke wird dabei nie nachgeführt. Nach
//! wiederholten asymmetrischen Drags kann ihr Marker von der neu gezeichneten
//! Rechteck-Darstellung abweichen, bis sie selbst gezogen wird. Das ist
//! beabsichtigtes Verhalten und wird nicht "korrigiert".

use glam::Vec2;

use super::control_point::{AxisMask, ControlPoint};
use super::{half_extent, remove_patches, set_patches, PatchBinding};
use crate::core::{ControlRole, MarkerSymbol, Patch, PatchShape, SurfaceRegistry};
use crate::shared::options::PATCH_LINE_WIDTH_PX;

/// Editierbares Rechteck mit unabhängig verfolgten halben Ausdehnungen.
pub struct RectangleTarget {
    /// Zentrum
    pub x: f32,
    pub y: f32,
    /// Halbe Ausdehnung je Achse (dürfen 0 werden — degeneriert, kein Fehler)
    pub dx: f32,
    pub dy: f32,
    pt_tl: ControlPoint,
    pt_tr: ControlPoint,
    pt_br: ControlPoint,
    pt_bl: ControlPoint,
    patches: Vec<PatchBinding>,
    color: [f32; 4],
}

impl RectangleTarget {
    /// Erstellt ein Rechteck; beide halben Ausdehnungen starten gleich (`side`).
    pub fn new(x: f32, y: f32, side: f32, color: [f32; 4]) -> Self {
        let corner = |role| {
            ControlPoint::new(role, AxisMask::BOTH, MarkerSymbol::Square, color)
        };
        Self {
            x,
            y,
            dx: side,
            dy: side,
            pt_tl: corner(ControlRole::TopLeft),
            pt_tr: corner(ControlRole::TopRight),
            pt_br: corner(ControlRole::BottomRight),
            pt_bl: corner(ControlRole::BottomLeft),
            patches: Vec::new(),
            color,
        }
    }

    /// Zeichnet das Rechteck samt Eck-Kontrollpunkten auf eine Surface.
    pub fn draw(&mut self, surfaces: &mut SurfaceRegistry, surface_id: u64) {
        let Some(scene) = surfaces.get_mut(surface_id) else {
            // Unbekannte Surface — Zeichnung verfällt still
            return;
        };
        let patch_id = scene.add_patch(Patch {
            shape: PatchShape::Rect {
                corner: Vec2::new(self.x - self.dx, self.y - self.dy),
                width: self.dx * 2.0,
                height: self.dy * 2.0,
            },
            color: self.color,
            line_width: PATCH_LINE_WIDTH_PX,
        });
        self.patches.push(PatchBinding {
            surface_id,
            patch_id,
        });
        self.pt_tr.bind_to_surface(
            surfaces,
            surface_id,
            Some(Vec2::new(self.x + self.dx, self.y + self.dy)),
        );
        self.pt_tl.bind_to_surface(
            surfaces,
            surface_id,
            Some(Vec2::new(self.x - self.dx, self.y + self.dy)),
        );
        self.pt_br.bind_to_surface(
            surfaces,
            surface_id,
            Some(Vec2::new(self.x + self.dx, self.y - self.dy)),
        );
        self.pt_bl.bind_to_surface(
            surfaces,
            surface_id,
            Some(Vec2::new(self.x - self.dx, self.y - self.dy)),
        );
    }

    /// Verteilt ein Eck-Update an den passenden Handler.
    pub fn update_from_control(
        &mut self,
        role: ControlRole,
        pos: Vec2,
        surfaces: &mut SurfaceRegistry,
    ) {
        match role {
            ControlRole::TopRight => self.update_tr(pos, surfaces),
            ControlRole::TopLeft => self.update_tl(pos, surfaces),
            ControlRole::BottomRight => self.update_br(pos, surfaces),
            ControlRole::BottomLeft => self.update_bl(pos, surfaces),
            // Fremde Rollen gehören nicht zum Rechteck — still ignorieren
            _ => {}
        }
    }

    /// Schreibt Spannweiten, Zentrum und Patch-Geometrie in einem Zug.
    fn apply_geometry(
        &mut self,
        corner: Vec2,
        ddx: f32,
        ddy: f32,
        center: Vec2,
        surfaces: &mut SurfaceRegistry,
    ) {
        set_patches(
            surfaces,
            &self.patches,
            PatchShape::Rect {
                corner,
                width: ddx,
                height: ddy,
            },
        );
        self.x = center.x;
        self.y = center.y;
        self.dx = half_extent(ddx).abs();
        self.dy = half_extent(ddy).abs();
    }

    /// Ecke oben rechts gezogen.
    fn update_tr(&mut self, pos: Vec2, surfaces: &mut SurfaceRegistry) {
        self.pt_tl.set_y(surfaces, pos.y);
        self.pt_br.set_x(surfaces, pos.x);

        let (Some(tl_x), Some(br_y)) = (self.pt_tl.x(surfaces), self.pt_br.y(surfaces)) else {
            // Nachbarecken ohne Marker — Update verfällt still
            return;
        };
        let ddx = pos.x - tl_x;
        let ddy = pos.y - br_y;
        let center = Vec2::new(pos.x - half_extent(ddx), pos.y - half_extent(ddy));
        self.apply_geometry(pos - Vec2::new(ddx, ddy), ddx, ddy, center, surfaces);
    }

    /// Ecke oben links gezogen.
    fn update_tl(&mut self, pos: Vec2, surfaces: &mut SurfaceRegistry) {
        self.pt_tr.set_y(surfaces, pos.y);
        self.pt_bl.set_x(surfaces, pos.x);

        let (Some(tr_x), Some(bl_y)) = (self.pt_tr.x(surfaces), self.pt_bl.y(surfaces)) else {
            return;
        };
        let ddx = tr_x - pos.x;
        let ddy = pos.y - bl_y;
        let center = Vec2::new(pos.x + half_extent(ddx), pos.y - half_extent(ddy));
        self.apply_geometry(Vec2::new(pos.x, pos.y - ddy), ddx, ddy, center, surfaces);
    }

    /// Ecke unten rechts gezogen.
    fn update_br(&mut self, pos: Vec2, surfaces: &mut SurfaceRegistry) {
        self.pt_bl.set_y(surfaces, pos.y);
        self.pt_tr.set_x(surfaces, pos.x);

        let (Some(bl_x), Some(tr_y)) = (self.pt_bl.x(surfaces), self.pt_tr.y(surfaces)) else {
            return;
        };
        let ddx = pos.x - bl_x;
        let ddy = tr_y - pos.y;
        let center = Vec2::new(pos.x - half_extent(ddx), pos.y + half_extent(ddy));
        self.apply_geometry(Vec2::new(pos.x - ddx, pos.y), ddx, ddy, center, surfaces);
    }

    /// Ecke unten links gezogen.
    fn update_bl(&mut self, pos: Vec2, surfaces: &mut SurfaceRegistry) {
        self.pt_br.set_y(surfaces, pos.y);
        self.pt_tl.set_x(surfaces, pos.x);

        let (Some(br_x), Some(tl_y)) = (self.pt_br.x(surfaces), self.pt_tl.y(surfaces)) else {
            return;
        };
        let ddx = br_x - pos.x;
        let ddy = tl_y - pos.y;
        let center = Vec2::new(pos.x + half_extent(ddx), pos.y + half_extent(ddy));
        self.apply_geometry(pos, ddx, ddy, center, surfaces);
    }

    /// Geometrie-Text des Labels (volle Ausdehnungen).
    pub fn label_text(&self) -> String {
        format!(
            "x = {}\ny = {}\ndx = {}\ndy = {}",
            self.x as i64,
            self.y as i64,
            (self.dx * 2.0) as i64,
            (self.dy * 2.0) as i64
        )
    }

    pub fn control_points(&self) -> Vec<&ControlPoint> {
        vec![&self.pt_tl, &self.pt_tr, &self.pt_br, &self.pt_bl]
    }

    pub fn detach_surface(&mut self, surfaces: &mut SurfaceRegistry, surface_id: u64) {
        super::detach_patches(surfaces, &mut self.patches, surface_id);
        self.pt_tl.unbind_surface(surfaces, surface_id);
        self.pt_tr.unbind_surface(surfaces, surface_id);
        self.pt_br.unbind_surface(surfaces, surface_id);
        self.pt_bl.unbind_surface(surfaces, surface_id);
    }

    pub fn remove_visuals(&mut self, surfaces: &mut SurfaceRegistry) {
        remove_patches(surfaces, &mut self.patches);
        self.pt_tl.remove_markers(surfaces);
        self.pt_tr.remove_markers(surfaces);
        self.pt_br.remove_markers(surfaces);
        self.pt_bl.remove_markers(surfaces);
    }

    pub(crate) fn patch_bindings(&self) -> &[PatchBinding] {
        &self.patches
    }
}
