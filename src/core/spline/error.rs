//! Fehlertypen des Spline-Solvers.

use thiserror::Error;

/// Fehler beim Lösen eines dichten linearen Gleichungssystems.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LinearSolveError {
    /// Matrix und rechte Seite passen nicht zusammen
    #[error("Dimensionen passen nicht: Matrix {matrix}x{matrix}, rechte Seite {rhs}")]
    DimensionMismatch { matrix: usize, rhs: usize },
    /// Kein brauchbares Pivot-Element in dieser Spalte
    #[error("Matrix ist singulär (Spalte {column})")]
    Singular { column: usize },
    /// Lösungskomponente ist NaN/Inf
    #[error("Lösung nicht endlich (Komponente {index})")]
    NonFinite { index: usize },
}

/// Fehler beim Aufbau oder Auswerten einer periodischen Spline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    /// Weniger als zwei Knots mit unterschiedlichem x
    #[error("mindestens 2 Knots mit verschiedenem x benötigt, gefunden: {found}")]
    InsufficientKnots { found: usize },
    /// Spannweite ist nicht positiv oder nicht endlich
    #[error("ungültige Spannweite: {width}")]
    InvalidWidth { width: f64 },
    /// Gleichungssystem singulär oder Lösung nicht endlich.
    ///
    /// Tritt bei Knots auf, deren x-Abstand relativ zur Spannweite unter
    /// etwa 1e-15 liegt (z.B. 1e-13 bei Spannweite 100).
    #[error("interner Solver-Fehler")]
    InternalSolver(#[from] LinearSolveError),
}

