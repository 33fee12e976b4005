//! Target-Verwaltung und Pointer-Routing.
//!
//! Der `TargetManager` besitzt die einzige `DragSession` des Prozesses und
//! die Routing-Tabelle — damit ist prozessweit garantiert, dass höchstens ein
//! Kontrollpunkt gleichzeitig gezogen wird und alle Geometrie-Änderungen
//! strikt nacheinander laufen.
//!
//! Fehlerpolitik: dieses Subsystem wirft keine Fehler. Jede Anomalie
//! (besetzte Session, fremde Surface, verwaiste Id) ist ein lokaler No-op und
//! ist an der jeweiligen Stelle kommentiert.

use glam::Vec2;
use indexmap::IndexMap;

use super::label::LabelSink;
use crate::core::{
    DragOwner, DragSession, PointerEvent, SubscriptionSet, SurfaceRegistry,
};
use crate::targets::Target;

/// Ein verwaltetes Target samt seiner Label-Senke.
struct TargetEntry {
    target: Target,
    label: Box<dyn LabelSink>,
}

/// Registry aller Targets, Besitzer von Drag-Session und Routing-Tabelle.
#[derive(Default)]
pub struct TargetManager {
    targets: IndexMap<u64, TargetEntry>,
    next_id: u64,
    session: DragSession,
    subs: SubscriptionSet,
}

impl TargetManager {
    /// Erstellt einen leeren Manager mit freier Drag-Session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Nimmt ein Target auf, zeichnet es auf die aktive Surface und stößt das
    /// initiale Label an.
    pub fn add_target(
        &mut self,
        target: Target,
        mut label: Box<dyn LabelSink>,
        surfaces: &mut SurfaceRegistry,
        active_surface: u64,
    ) -> u64 {
        label.set_text(target.label_text());
        let id = self.next_id;
        self.next_id += 1;
        log::info!("Target {} ({}) angelegt", id, target.kind_name());
        self.targets.insert(id, TargetEntry { target, label });
        self.draw_target(id, surfaces, active_surface);
        id
    }

    /// Zeichnet ein Target auf eine (weitere) Surface und abonniert seine
    /// Kontrollpunkte dort. Mehrfaches Zeichnen erzeugt nie doppelte
    /// Event-Zustellung — Abonnieren ist idempotent.
    pub fn draw_target(&mut self, id: u64, surfaces: &mut SurfaceRegistry, surface_id: u64) {
        let Some(entry) = self.targets.get_mut(&id) else {
            // Unbekanntes Target — still ignorieren
            return;
        };
        entry.target.draw(surfaces, surface_id);
        for cp in entry.target.control_points() {
            self.subs.subscribe(surface_id, (id, cp.role()));
        }
    }

    /// Zeichnet alle Targets auf eine Surface (neue zweite Ansicht).
    pub fn draw_all(&mut self, surfaces: &mut SurfaceRegistry, surface_id: u64) {
        let ids: Vec<u64> = self.targets.keys().copied().collect();
        for id in ids {
            self.draw_target(id, surfaces, surface_id);
        }
    }

    /// Entfernt ein Target vollständig: ein laufender Drag auf einem seiner
    /// Punkte wird beendet, Abonnements und Darstellungen werden gelöscht.
    pub fn remove_target(&mut self, id: u64, surfaces: &mut SurfaceRegistry) {
        if self.session.owner().is_some_and(|o| o.target_id == id) {
            self.session.release();
        }
        self.subs.unsubscribe_target(id);
        if let Some(mut entry) = self.targets.shift_remove(&id) {
            entry.target.remove_visuals(surfaces);
            log::info!("Target {} entfernt", id);
        }
    }

    /// Löst eine geschlossene Surface aus allen Targets und der
    /// Routing-Tabelle; ein dort laufender Drag wird beendet.
    pub fn detach_surface(&mut self, surface_id: u64, surfaces: &mut SurfaceRegistry) {
        if self
            .session
            .owner()
            .is_some_and(|o| o.surface_id == surface_id)
        {
            self.session.release();
        }
        self.subs.remove_surface(surface_id);
        for entry in self.targets.values_mut() {
            entry.target.detach_surface(surfaces, surface_id);
        }
    }

    /// Verarbeitet ein Pointer-Event einer Surface (Press/Motion/Release).
    pub fn handle_pointer(
        &mut self,
        surface_id: u64,
        event: PointerEvent,
        surfaces: &mut SurfaceRegistry,
    ) {
        match event {
            PointerEvent::Press { pos } => self.handle_press(surface_id, pos, surfaces),
            PointerEvent::Motion { pos } => self.handle_motion(surface_id, pos, surfaces),
            // Release von überall beendet den Drag; ohne Drag ein No-op
            PointerEvent::Release => self.session.release(),
        }
    }

    /// Press: erster abonnierter Kontrollpunkt mit Treffer gewinnt —
    /// vorausgesetzt, die Session ist frei.
    fn handle_press(&mut self, surface_id: u64, pos: Vec2, surfaces: &SurfaceRegistry) {
        if !self.session.is_free() {
            // Anderweitig laufender Drag — Press wird verworfen, nicht gequeued
            return;
        }
        let keys: Vec<_> = self.subs.subscribers(surface_id).collect();
        for (target_id, role) in keys {
            let Some(entry) = self.targets.get(&target_id) else {
                continue;
            };
            let Some(cp) = entry.target.control_point(role) else {
                continue;
            };
            if cp.hit_test(surfaces, surface_id, pos) {
                self.session.try_acquire(DragOwner {
                    target_id,
                    role,
                    surface_id,
                });
                return;
            }
        }
    }

    /// Motion: nur Events der Press-Surface bewegen den gezogenen Punkt.
    fn handle_motion(&mut self, surface_id: u64, pos: Vec2, surfaces: &mut SurfaceRegistry) {
        let Some(owner) = self.session.owner() else {
            // Kein Drag aktiv — Motion ohne Wirkung
            return;
        };
        if owner.surface_id != surface_id {
            // Fremde Surface: ignorieren, die Session bleibt gehalten
            return;
        }
        let Some(entry) = self.targets.get_mut(&owner.target_id) else {
            return;
        };
        entry.target.drag_control(owner.role, pos, surfaces);
        entry.label.set_text(entry.target.label_text());
    }

    /// Referenz auf ein Target.
    pub fn target(&self, id: u64) -> Option<&Target> {
        self.targets.get(&id).map(|e| &e.target)
    }

    /// Ids aller Targets in Anlege-Reihenfolge.
    pub fn ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.targets.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Lesezugriff auf die Drag-Session (Tests, Statusanzeige).
    pub fn session(&self) -> &DragSession {
        &self.session
    }

    /// Lesezugriff auf die Routing-Tabelle.
    pub fn subscriptions(&self) -> &SubscriptionSet {
        &self.subs
    }
}

#[cfg(test)]
mod tests;
