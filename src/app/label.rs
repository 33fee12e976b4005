//! Label-Senken: empfangen nach jeder Geometrie-Änderung den formatierten
//! Geometrie-Text eines Targets.

use std::sync::{Arc, Mutex};

/// Abnehmer für den Geometrie-Text eines Targets.
pub trait LabelSink {
    /// Ersetzt den angezeigten Text vollständig.
    fn set_text(&mut self, text: String);
}

/// Teilbarer Text-Puffer: der Manager schreibt, das Panel liest.
#[derive(Debug, Clone, Default)]
pub struct SharedTextLabel {
    inner: Arc<Mutex<String>>,
}

impl SharedTextLabel {
    /// Erstellt ein leeres Label.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktueller Text (leer wenn der Puffer nicht lesbar ist).
    pub fn text(&self) -> String {
        self.inner
            .lock()
            .map(|t| t.clone())
            .unwrap_or_default()
    }
}

impl LabelSink for SharedTextLabel {
    fn set_text(&mut self, text: String) {
        if let Ok(mut t) = self.inner.lock() {
            *t = text;
        }
    }
}

/// Protokollierende Senke für Tests: hebt jede Aktualisierung auf.
#[derive(Debug, Clone, Default)]
pub struct RecordingLabel {
    texts: Arc<Mutex<Vec<String>>>,
}

impl RecordingLabel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Alle bisher empfangenen Texte in Reihenfolge.
    pub fn texts(&self) -> Vec<String> {
        self.texts.lock().map(|t| t.clone()).unwrap_or_default()
    }

    /// Zuletzt empfangener Text.
    pub fn last(&self) -> Option<String> {
        self.texts
            .lock()
            .ok()
            .and_then(|t| t.last().cloned())
    }
}

impl LabelSink for RecordingLabel {
    fn set_text(&mut self, text: String) {
        if let Ok(mut t) = self.texts.lock() {
            t.push(text);
        }
    }
}
