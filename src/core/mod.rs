//! Core-Bausteine: Surface-Szenen, Event-Routing und Drag-Session.

pub mod drag;
pub mod subscription;
pub mod surface;

pub use drag::{ControlRole, DragOwner, DragSession, PointerEvent};
pub use subscription::SubscriptionSet;
pub use surface::{Marker, MarkerSymbol, Patch, PatchShape, SurfaceRegistry, SurfaceScene};
