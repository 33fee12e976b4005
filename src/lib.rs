//! Image Target Editor Library.
//! Core-Funktionalität (Surfaces, Targets, Drag-Session) als Library
//! exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod targets;
pub mod ui;

pub use app::{
    AppIntent, AppState, LabelSink, PanelEntry, RecordingLabel, SharedTextLabel, TargetManager,
};
pub use core::{
    ControlRole, DragOwner, DragSession, Marker, MarkerSymbol, Patch, PatchShape, PointerEvent,
    SubscriptionSet, SurfaceRegistry, SurfaceScene,
};
pub use shared::EditorOptions;
pub use targets::{AxisMask, CircleTarget, ControlPoint, RectangleTarget, SquareTarget, Target};
