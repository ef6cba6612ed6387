//! Periodic Spline Editor Library.
//! Solver, Editor-Logik und UI als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, DragState, Interaction, RefreshReason,
    SplineEditor,
};
pub use core::{
    evaluate, Knot, KnotHit, KnotId, KnotSet, LinearSolveError, PeriodicSpline, SplineError,
};
pub use shared::{EditorOptions, KnotSprite, KnotVisual, RenderScene};
