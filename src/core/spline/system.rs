//! Aufbau des Gleichungssystems für die ersten Ableitungen an den Knots.

use super::linear::DenseMatrix;
use super::sequence::AugmentedSequence;

/// Stellt `A·k = b` für die Ableitungen `k` der gespiegelten Folge auf.
///
/// Zeile `i` ist die Stetigkeitsbedingung zwischen `k_{i-1}`, `k_i` und `k_{i+1}`.
/// Die Nachbarn der ersten und letzten Zeile werden über die Spannweite
/// umgebrochen. Dadurch entarten diese beiden Zeilen zu `k_{N-1} = k_1` und
/// `k_{N-2} = k_0`: jeder Spiegel-Knot erhält die Steigung seines Originals.
/// Ihre Diagonale ist exakt 0, der Solver muss pivotisieren.
pub fn build_derivative_system(seq: &AugmentedSequence, width: f64) -> (DenseMatrix, Vec<f64>) {
    let n = seq.len();
    let mut matrix = DenseMatrix::zeros(n);
    let mut rhs = vec![0.0; n];

    for i in 0..n {
        let is_first = i == 0;
        let is_last = i == n - 1;

        let (x, y) = (seq.xs[i], seq.ys[i]);
        let prev = if is_first { n - 1 } else { i - 1 };
        let next = if is_last { 0 } else { i + 1 };

        let prev_x = if is_first { seq.xs[prev] - width } else { seq.xs[prev] };
        let next_x = if is_last { seq.xs[next] + width } else { seq.xs[next] };
        let (prev_y, next_y) = (seq.ys[prev], seq.ys[next]);

        let h_prev = x - prev_x;
        let h_next = next_x - x;

        matrix[(i, prev)] += 1.0 / h_prev;
        matrix[(i, i)] += 2.0 * (1.0 / h_prev + 1.0 / h_next);
        matrix[(i, next)] += 1.0 / h_next;

        rhs[i] = 3.0 * ((y - prev_y) / (h_prev * h_prev) + (next_y - y) / (h_next * h_next));
    }

    (matrix, rhs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Knot;
    use approx::assert_relative_eq;

    fn sequence() -> AugmentedSequence {
        let knots = [
            Knot::new(10.0, 1.0),
            Knot::new(40.0, 5.0),
            Knot::new(70.0, 2.0),
        ];
        AugmentedSequence::build(&knots, 100.0).expect("gültig")
    }

    #[test]
    fn wrap_rows_tie_mirror_slopes_to_originals() {
        let seq = sequence();
        let (matrix, rhs) = build_derivative_system(&seq, 100.0);
        let n = seq.len();

        // Zeile 0: -k_{N-1}/g + k_1/g = 0 mit Lücke g = 40
        assert_relative_eq!(matrix[(0, 0)], 0.0, epsilon = 1e-15);
        assert_relative_eq!(matrix[(0, n - 1)], -1.0 / 40.0);
        assert_relative_eq!(matrix[(0, 1)], 1.0 / 40.0);
        assert_relative_eq!(rhs[0], 0.0, epsilon = 1e-15);

        // Letzte Zeile: k_{N-2}/g - k_0/g = 0
        assert_relative_eq!(matrix[(n - 1, n - 1)], 0.0, epsilon = 1e-15);
        assert_relative_eq!(matrix[(n - 1, n - 2)], 1.0 / 40.0);
        assert_relative_eq!(matrix[(n - 1, 0)], -1.0 / 40.0);
        assert_relative_eq!(rhs[n - 1], 0.0, epsilon = 1e-15);
    }

    #[test]
    fn interior_row_matches_continuity_equation() {
        let seq = sequence();
        let (matrix, rhs) = build_derivative_system(&seq, 100.0);

        // Zeile 2: Knot (40, 5) zwischen (10, 1) und (70, 2), beide Abstände 30
        assert_relative_eq!(matrix[(2, 1)], 1.0 / 30.0);
        assert_relative_eq!(matrix[(2, 2)], 2.0 * (2.0 / 30.0));
        assert_relative_eq!(matrix[(2, 3)], 1.0 / 30.0);
        assert_relative_eq!(rhs[2], 3.0 * (4.0 / 900.0 + -3.0 / 900.0));
    }

    #[test]
    fn first_real_row_uses_mirror_before() {
        let seq = sequence();
        let (matrix, _) = build_derivative_system(&seq, 100.0);
        // Spiegel bei -30, echter erster Knot bei 10 → Abstand 40
        assert_relative_eq!(matrix[(1, 0)], 1.0 / 40.0);
    }
}
