//! Retained-Szene pro Ansicht: Patches (Umriss-Primitive) und Marker.
//!
//! Eine `SurfaceScene` hält ausschließlich Daten — gezeichnet wird sie vom
//! Frontend (`ui::canvas`). Dadurch lässt sich die gesamte Geometrie-Logik
//! ohne Fenster testen, und mehrere Ansichten derselben Targets bleiben
//! automatisch konsistent: jede Geometrie-Änderung schreibt in alle Szenen.

use glam::Vec2;
use indexmap::IndexMap;

/// Form eines Umriss-Patches.
///
/// Breite/Höhe eines Rechtecks dürfen null oder negativ werden — degenerierte
/// Geometrie wird gezeichnet wie sie ist, nie zurückgewiesen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PatchShape {
    /// Kreis-Umriss um `center`
    Circle { center: Vec2, radius: f32 },
    /// Achsenparalleles Rechteck, verankert an `corner`
    Rect { corner: Vec2, width: f32, height: f32 },
}

/// Umriss-Primitiv auf einer Surface (nicht gefüllt).
#[derive(Debug, Clone, Copy)]
pub struct Patch {
    pub shape: PatchShape,
    /// Linienfarbe (RGBA)
    pub color: [f32; 4],
    /// Linienstärke in Display-Einheiten
    pub line_width: f32,
}

/// Symbol eines Markers (Handle eines Kontrollpunkts).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerSymbol {
    /// Kreuz — Zentrums-Kontrollpunkte
    Cross,
    /// Kreis — Radius-Kontrollpunkt
    Circle,
    /// Quadrat — Seiten- und Eck-Kontrollpunkte
    Square,
}

/// Sichtbares, pickbares Handle auf einer Surface.
#[derive(Debug, Clone, Copy)]
pub struct Marker {
    pub pos: Vec2,
    pub color: [f32; 4],
    pub symbol: MarkerSymbol,
    /// Darstellungsgröße in Display-Einheiten
    pub size: f32,
    /// Treffer-Radius für Press-Events in Display-Einheiten
    pub pick_radius: f32,
}

/// Szene einer einzelnen Ansicht.
#[derive(Debug, Default)]
pub struct SurfaceScene {
    patches: IndexMap<u64, Patch>,
    markers: IndexMap<u64, Marker>,
    next_patch_id: u64,
    next_marker_id: u64,
}

impl SurfaceScene {
    /// Erstellt eine leere Szene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt einen Patch hinzu und gibt seine Id zurück.
    pub fn add_patch(&mut self, patch: Patch) -> u64 {
        let id = self.next_patch_id;
        self.next_patch_id += 1;
        self.patches.insert(id, patch);
        id
    }

    pub fn patch(&self, id: u64) -> Option<&Patch> {
        self.patches.get(&id)
    }

    pub fn patch_mut(&mut self, id: u64) -> Option<&mut Patch> {
        self.patches.get_mut(&id)
    }

    /// Entfernt einen Patch; unbekannte Id ist ein No-op.
    pub fn remove_patch(&mut self, id: u64) {
        self.patches.shift_remove(&id);
    }

    /// Fügt einen Marker hinzu und gibt seine Id zurück.
    pub fn add_marker(&mut self, marker: Marker) -> u64 {
        let id = self.next_marker_id;
        self.next_marker_id += 1;
        self.markers.insert(id, marker);
        id
    }

    pub fn marker(&self, id: u64) -> Option<&Marker> {
        self.markers.get(&id)
    }

    pub fn marker_mut(&mut self, id: u64) -> Option<&mut Marker> {
        self.markers.get_mut(&id)
    }

    /// Entfernt einen Marker; unbekannte Id ist ein No-op.
    pub fn remove_marker(&mut self, id: u64) {
        self.markers.shift_remove(&id);
    }

    /// Alle Patches in Einfüge-Reihenfolge.
    pub fn patches(&self) -> impl Iterator<Item = (&u64, &Patch)> {
        self.patches.iter()
    }

    /// Alle Marker in Einfüge-Reihenfolge.
    pub fn markers(&self) -> impl Iterator<Item = (&u64, &Marker)> {
        self.markers.iter()
    }

    pub fn patch_count(&self) -> usize {
        self.patches.len()
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }
}

/// Registry aller offenen Ansichten, Id-vergebend.
#[derive(Debug, Default)]
pub struct SurfaceRegistry {
    surfaces: IndexMap<u64, SurfaceScene>,
    next_id: u64,
}

impl SurfaceRegistry {
    /// Erstellt eine leere Registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Legt eine neue Surface an und gibt ihre Id zurück.
    pub fn add_surface(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.surfaces.insert(id, SurfaceScene::new());
        log::debug!("Surface {} angelegt", id);
        id
    }

    /// Entfernt eine Surface samt Szene; unbekannte Id ist ein No-op.
    pub fn remove_surface(&mut self, id: u64) {
        if self.surfaces.shift_remove(&id).is_some() {
            log::debug!("Surface {} entfernt", id);
        }
    }

    pub fn get(&self, id: u64) -> Option<&SurfaceScene> {
        self.surfaces.get(&id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut SurfaceScene> {
        self.surfaces.get_mut(&id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.surfaces.contains_key(&id)
    }

    /// Ids aller Surfaces in Anlege-Reihenfolge.
    pub fn ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.surfaces.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}
