//! Drag-Session: genau ein Kontrollpunkt darf prozessweit gezogen werden.
//!
//! Die Session ersetzt ein ambient geteiltes Lock-Flag durch ein explizites
//! Objekt, das der `TargetManager` besitzt. Erwerb ist test-and-set ohne
//! Warteschlange: ein Press während eines laufenden Drags wird verworfen.

use glam::Vec2;

/// Welches Feld eines Targets ein Kontrollpunkt steuert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlRole {
    /// Zentrum (Kreis und Quadrat)
    Center,
    /// Radius-Handle des Kreises (nur x wirksam)
    Radius,
    /// Seiten-Handle des Quadrats (nur x wirksam)
    Side,
    /// Rechteck-Ecken
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

/// Diskretes Pointer-Event einer Surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press { pos: Vec2 },
    Motion { pos: Vec2 },
    Release,
}

/// Identität des gerade gezogenen Kontrollpunkts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragOwner {
    /// Target, dem der Punkt gehört
    pub target_id: u64,
    /// Rolle des Punkts innerhalb des Targets
    pub role: ControlRole,
    /// Surface, auf der der Press stattfand — nur deren Motion zählt
    pub surface_id: u64,
}

/// Prozessweite Drag-Exklusivität: hält höchstens einen `DragOwner`.
#[derive(Debug, Default)]
pub struct DragSession {
    owner: Option<DragOwner>,
}

impl DragSession {
    /// Erstellt eine freie Session.
    pub fn new() -> Self {
        Self::default()
    }

    /// True wenn kein Drag aktiv ist.
    pub fn is_free(&self) -> bool {
        self.owner.is_none()
    }

    /// Aktueller Besitzer, falls ein Drag läuft.
    pub fn owner(&self) -> Option<DragOwner> {
        self.owner
    }

    /// Versucht die Session zu erwerben (test-and-set).
    ///
    /// Gibt `false` zurück wenn bereits ein Drag läuft — der Aufrufer
    /// verwirft den Press dann kommentarlos.
    pub fn try_acquire(&mut self, candidate: DragOwner) -> bool {
        if self.owner.is_some() {
            return false;
        }
        log::debug!(
            "Drag-Session erworben: Target {} / {:?} auf Surface {}",
            candidate.target_id,
            candidate.role,
            candidate.surface_id
        );
        self.owner = Some(candidate);
        true
    }

    /// Gibt die Session frei. Release ohne laufenden Drag ist ein No-op.
    pub fn release(&mut self) {
        if let Some(owner) = self.owner.take() {
            log::debug!(
                "Drag-Session freigegeben: Target {} / {:?}",
                owner.target_id,
                owner.role
            );
        }
    }
}
