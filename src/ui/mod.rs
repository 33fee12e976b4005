//! UI-Schicht: Canvas-Rendering der Surface-Szenen und Target-Panel.

pub mod canvas;
pub mod target_panel;

pub use canvas::show_surface;
pub use target_panel::show_target_panel;
