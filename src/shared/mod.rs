//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `ui` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::EditorOptions;
pub use options::{KNOT_RADIUS, SEED_KNOT_COUNT};
pub use render_scene::{KnotSprite, KnotVisual, RenderScene};
