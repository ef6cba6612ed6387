//! Periodische kubische Spline-Interpolation.
//!
//! Aus einer ungeordneten Knot-Menge wird einmalig das Ableitungssystem
//! aufgebaut und gelöst (`PeriodicSpline::fit`). Danach ist jede Auswertung
//! eine Intervallsuche plus Hermite-Formel; für einen Render-Durchlauf mit
//! vielen x-Werten wird also nur einmal gelöst.
//!
//! Die Kurve ist periodisch über `[0, width)`: `y(x) == y(x + width)`.

mod error;
pub mod linear;
mod sequence;
mod system;

pub use error::{LinearSolveError, SplineError};
pub use sequence::fold_into_span;

use crate::core::Knot;
use sequence::AugmentedSequence;

/// Gelöste periodische Spline, bereit für beliebig viele Auswertungen.
///
/// Unveränderlicher Snapshot einer Knot-Menge: wird die Menge geändert,
/// muss neu gefittet werden.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodicSpline {
    width: f64,
    xs: Vec<f64>,
    ys: Vec<f64>,
    derivatives: Vec<f64>,
}

impl PeriodicSpline {
    /// Normalisiert die Knots, stellt das Ableitungssystem auf und löst es.
    ///
    /// # Fehler
    /// - `InsufficientKnots` bei weniger als zwei Knots mit verschiedenem x
    /// - `InvalidWidth` bei nicht positiver Spannweite
    /// - `InternalSolver` wenn das System unerwartet singulär ist
    pub fn fit<'a>(
        knots: impl IntoIterator<Item = &'a Knot>,
        width: f64,
    ) -> Result<Self, SplineError> {
        let seq = AugmentedSequence::build(knots, width)?;
        let (matrix, rhs) = system::build_derivative_system(&seq, width);
        let derivatives = matrix.solve(rhs)?;

        log::debug!(
            "Periodische Spline gelöst: {} Knots, Spannweite {}",
            seq.real_len(),
            width
        );

        Ok(Self {
            width,
            xs: seq.xs,
            ys: seq.ys,
            derivatives,
        })
    }

    /// Spannweite, über die die Kurve periodisch ist.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Anzahl der verwendeten Knots (nach Duplikat-Filterung, ohne Spiegel).
    pub fn knot_count(&self) -> usize {
        self.xs.len() - 2
    }

    /// Die verwendeten Knots, nach x sortiert und nach `[0, width)` gefaltet.
    pub fn knots(&self) -> Vec<Knot> {
        let end = self.xs.len() - 1;
        self.xs[1..end]
            .iter()
            .zip(&self.ys[1..end])
            .map(|(&x, &y)| Knot::new(x, y))
            .collect()
    }

    /// Ableitungsvektor: Steigung an jedem verwendeten Knot (Reihenfolge wie `knots()`).
    pub fn derivatives(&self) -> &[f64] {
        &self.derivatives[1..self.derivatives.len() - 1]
    }

    /// Größter Index `i` mit `xs[i] <= x`; liegt `x` vor allen Stützstellen,
    /// wird das letzte Intervall (umgebrochen) verwendet.
    fn find_interval(&self, x: f64) -> usize {
        let upper = self.xs.partition_point(|&xi| xi <= x);
        upper.checked_sub(1).unwrap_or(self.xs.len() - 1)
    }

    /// Wertet die Kurve an `x` aus. `x` darf beliebig außerhalb von `[0, width)` liegen.
    ///
    /// Nicht endliches `x` (NaN, ±Inf) ergibt NaN.
    pub fn evaluate(&self, x: f64) -> f64 {
        let x = fold_into_span(x, self.width);
        let i = self.find_interval(x);
        let next = (i + 1) % self.xs.len();

        let (x1, x2) = (self.xs[i], self.xs[next]);
        let (y1, y2) = (self.ys[i], self.ys[next]);
        let (k1, k2) = (self.derivatives[i], self.derivatives[next]);

        let h = x2 - x1;
        let dy = y2 - y1;
        let a = k1 * h - dy;
        let b = -k2 * h + dy;
        let t = (x - x1) / h;

        (1.0 - t) * y1 + t * y2 + t * (1.0 - t) * (a * (1.0 - t) + b * t)
    }

    /// Wertet die Kurve für viele x-Werte aus, ohne erneut zu lösen.
    pub fn evaluate_batch(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }
}

/// Einmal-Auswertung: fittet die Knots und wertet an `x` aus.
///
/// Für mehrere Auswertungen `PeriodicSpline::fit` + `evaluate_batch` nutzen.
pub fn evaluate<'a>(
    knots: impl IntoIterator<Item = &'a Knot>,
    width: f64,
    x: f64,
) -> Result<f64, SplineError> {
    Ok(PeriodicSpline::fit(knots, width)?.evaluate(x))
}
