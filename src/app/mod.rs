//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod editor;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
/// Application State
///
/// Knot-Menge, Interaktion, Playhead und gecachte Kurve.
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::{AppController, RefreshCallback};
pub use editor::SplineEditor;
pub use events::{AppCommand, AppIntent, RefreshReason};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, CurveCache, DragState, Interaction, PlayheadState};
