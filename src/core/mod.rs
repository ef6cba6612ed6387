//! Core-Domänentypen: Knots, KnotSet und der periodische Spline-Solver.

pub mod knot;
pub mod knot_set;
/// Periodischer kubischer Spline-Solver
///
/// Reine Funktion Knot-Menge → Kurve, ohne veränderlichen Zustand.
pub mod spline;

pub use knot::{Knot, KnotId};
pub use knot_set::{nearest_hit, KnotHit, KnotSet};
pub use spline::{evaluate, LinearSolveError, PeriodicSpline, SplineError};
