//! Routing-Tabelle: welche Kontrollpunkte hören auf welche Surface.
//!
//! Abonnieren ist idempotent (Insert in ein geordnetes Set), damit das
//! wiederholte Binden derselben Surface nie zu doppelter Event-Zustellung
//! führt. Die Zustell-Reihenfolge entspricht der Abonnier-Reihenfolge.

use indexmap::{IndexMap, IndexSet};

use super::drag::ControlRole;

/// Abonnement-Schlüssel: ein Kontrollpunkt, identifiziert über sein Target.
pub type SubKey = (u64, ControlRole);

/// Pro Surface ein geordnetes Set von Abonnenten.
#[derive(Debug, Default)]
pub struct SubscriptionSet {
    subs: IndexMap<u64, IndexSet<SubKey>>,
}

impl SubscriptionSet {
    /// Erstellt eine leere Routing-Tabelle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Abonniert einen Kontrollpunkt auf einer Surface (idempotent).
    pub fn subscribe(&mut self, surface_id: u64, key: SubKey) {
        self.subs.entry(surface_id).or_default().insert(key);
    }

    /// Entfernt ein einzelnes Abonnement; unbekannte Schlüssel sind No-ops.
    pub fn unsubscribe(&mut self, surface_id: u64, key: SubKey) {
        if let Some(set) = self.subs.get_mut(&surface_id) {
            set.shift_remove(&key);
        }
    }

    /// Entfernt alle Abonnements eines Targets auf allen Surfaces.
    pub fn unsubscribe_target(&mut self, target_id: u64) {
        for set in self.subs.values_mut() {
            set.retain(|(tid, _)| *tid != target_id);
        }
    }

    /// Entfernt alle Abonnements einer Surface.
    pub fn remove_surface(&mut self, surface_id: u64) {
        self.subs.shift_remove(&surface_id);
    }

    /// Abonnenten einer Surface in Abonnier-Reihenfolge.
    pub fn subscribers(&self, surface_id: u64) -> impl Iterator<Item = SubKey> + '_ {
        self.subs
            .get(&surface_id)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// True wenn der Kontrollpunkt auf der Surface abonniert ist.
    pub fn is_subscribed(&self, surface_id: u64, key: SubKey) -> bool {
        self.subs
            .get(&surface_id)
            .is_some_and(|set| set.contains(&key))
    }

    /// Anzahl Abonnements auf einer Surface.
    pub fn count(&self, surface_id: u64) -> usize {
        self.subs.get(&surface_id).map_or(0, IndexSet::len)
    }
}
