//! Intents: von der UI gesammelte Absichten, zentral verarbeitet.

use crate::core::PointerEvent;

/// Absicht des Benutzers, erzeugt von Panel oder Canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppIntent {
    /// Neuen Kreis im Sichtzentrum anlegen
    AddCircle,
    /// Neues Quadrat im Sichtzentrum anlegen
    AddSquare,
    /// Neues Rechteck im Sichtzentrum anlegen
    AddRectangle,
    /// Target samt Darstellungen entfernen
    RemoveTarget(u64),
    /// Zweite Ansicht öffnen bzw. schließen
    ToggleSecondView,
    /// Optionen als TOML speichern
    SaveOptions,
    /// Pointer-Event einer Surface
    Pointer {
        surface_id: u64,
        event: PointerEvent,
    },
}
