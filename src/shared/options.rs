//! Zentrale Konfiguration des Target-Editors.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kontrollpunkte ──────────────────────────────────────────────────

/// Treffer-Radius eines Marker-Handles in Display-Einheiten.
pub const PICK_RADIUS_PX: f32 = 8.0;
/// Darstellungsgröße eines Marker-Handles in Display-Einheiten.
pub const MARKER_SIZE_PX: f32 = 8.0;

// ── Patches ─────────────────────────────────────────────────────────

/// Linienstärke der Umriss-Patches.
pub const PATCH_LINE_WIDTH_PX: f32 = 1.0;

// ── Neue Targets ────────────────────────────────────────────────────

/// Radius eines neu angelegten Kreises.
pub const DEFAULT_RADIUS_PX: f32 = 60.0;
/// Halbe Seitenlänge eines neu angelegten Quadrats/Rechtecks.
pub const DEFAULT_SIDE_PX: f32 = 40.0;

/// Farbpalette für neue Targets, zyklisch vergeben (RGBA).
pub const TARGET_COLORS: [[f32; 4]; 6] = [
    [0.90, 0.25, 0.20, 1.0], // Rot
    [0.20, 0.65, 0.95, 1.0], // Blau
    [0.30, 0.80, 0.35, 1.0], // Grün
    [0.95, 0.70, 0.15, 1.0], // Orange
    [0.75, 0.35, 0.90, 1.0], // Violett
    [0.20, 0.80, 0.80, 1.0], // Türkis
];

// ── UI ──────────────────────────────────────────────────────────────

/// Breite des Target-Panels in Pixeln.
pub const PANEL_WIDTH_PX: f32 = 240.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `image_target_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Radius neu angelegter Kreise
    pub default_radius_px: f32,
    /// Halbe Seitenlänge neu angelegter Quadrate/Rechtecke
    pub default_side_px: f32,
    /// Breite des Target-Panels
    #[serde(default = "default_panel_width")]
    pub panel_width_px: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            default_radius_px: DEFAULT_RADIUS_PX,
            default_side_px: DEFAULT_SIDE_PX,
            panel_width_px: PANEL_WIDTH_PX,
        }
    }
}

/// Serde-Default für `panel_width_px` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_panel_width() -> f32 {
    PANEL_WIDTH_PX
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("image_target_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("image_target_editor.toml")
    }
}
