//! Dichte lineare Algebra für kleine Gleichungssysteme.
//!
//! Die Systeme des Spline-Solvers haben so viele Zeilen wie Knots (plus zwei
//! Spiegel-Knots), praktisch also unter 100. Gauß-Elimination mit
//! Spaltenpivotsuche reicht dafür aus.

use super::error::LinearSolveError;
use std::ops::{Index, IndexMut};

/// Quadratische Matrix in Zeilen-Major-Anordnung.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    dim: usize,
    data: Vec<f64>,
}

impl DenseMatrix {
    /// Erstellt eine `dim x dim`-Nullmatrix.
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            data: vec![0.0; dim * dim],
        }
    }

    /// Erstellt eine Matrix aus Zeilen. Alle Zeilen müssen `rows.len()` lang sein.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, LinearSolveError> {
        let dim = rows.len();
        let mut matrix = Self::zeros(dim);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != dim {
                return Err(LinearSolveError::DimensionMismatch {
                    matrix: dim,
                    rhs: row.len(),
                });
            }
            matrix.data[r * dim..(r + 1) * dim].copy_from_slice(row);
        }
        Ok(matrix)
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for col in 0..self.dim {
            self.data.swap(a * self.dim + col, b * self.dim + col);
        }
    }

    /// Löst `A·x = rhs` per Gauß-Elimination mit Spaltenpivotsuche.
    ///
    /// Verbraucht die Matrix, da sie während der Elimination überschrieben wird.
    /// Die Pivot-Toleranz `n·ε·max|A|` gilt für die ganze Matrix: sehr kleine
    /// Einträge neben sehr großen gelten als null.
    pub fn solve(mut self, mut rhs: Vec<f64>) -> Result<Vec<f64>, LinearSolveError> {
        let n = self.dim;
        if rhs.len() != n {
            return Err(LinearSolveError::DimensionMismatch {
                matrix: n,
                rhs: rhs.len(),
            });
        }

        let scale = self.data.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
        let tolerance = scale * f64::EPSILON * n as f64;

        for col in 0..n {
            // Pivot: betragsgrößtes Element ab der Diagonalen
            let (pivot_row, pivot_abs) = (col..n)
                .map(|r| (r, self[(r, col)].abs()))
                .fold((col, -1.0), |best, cand| if cand.1 > best.1 { cand } else { best });

            if !(pivot_abs > tolerance) {
                return Err(LinearSolveError::Singular { column: col });
            }

            self.swap_rows(col, pivot_row);
            rhs.swap(col, pivot_row);

            let pivot = self[(col, col)];
            for r in (col + 1)..n {
                let factor = self[(r, col)] / pivot;
                if factor == 0.0 {
                    continue;
                }
                for c in col..n {
                    let v = self[(col, c)];
                    self[(r, c)] -= factor * v;
                }
                rhs[r] -= factor * rhs[col];
            }
        }

        // Rückwärtseinsetzen
        let mut solution = vec![0.0; n];
        for r in (0..n).rev() {
            let tail: f64 = ((r + 1)..n).map(|c| self[(r, c)] * solution[c]).sum();
            solution[r] = (rhs[r] - tail) / self[(r, r)];
        }

        if let Some(index) = solution.iter().position(|v| !v.is_finite()) {
            return Err(LinearSolveError::NonFinite { index });
        }

        Ok(solution)
    }
}

impl Index<(usize, usize)> for DenseMatrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.data[row * self.dim + col]
    }
}

impl IndexMut<(usize, usize)> for DenseMatrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.data[row * self.dim + col]
    }
}
