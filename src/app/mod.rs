//! Application-Layer: Target-Verwaltung, Event-Routing, State und Intents.

pub mod events;
pub mod label;
pub mod manager;
pub mod state;

pub use events::AppIntent;
pub use label::{LabelSink, RecordingLabel, SharedTextLabel};
pub use manager::TargetManager;
pub use state::{AppState, PanelEntry};
