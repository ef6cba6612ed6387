//! UI-Layer mit egui: Zeichenfläche, Input-Handling, Toolbar, Status-Bar.
//!
//! Die UI liest nur `AppState`/`RenderScene` und liefert `AppIntent`s zurück.

pub mod canvas;
pub mod input;
mod keyboard;
pub mod status;
pub mod toolbar;

pub use canvas::{paint_scene, CanvasTransform};
pub use input::InputState;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;

/// Wandelt eine RGBA-Farbe aus den Optionen in eine egui-Farbe.
pub(crate) fn color(rgba: [f32; 4]) -> egui::Color32 {
    egui::Rgba::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3]).into()
}
