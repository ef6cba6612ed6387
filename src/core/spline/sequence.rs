//! Normalisierung der Knot-Menge zur sortierten, gespiegelten Stützstellenfolge.

use super::error::SplineError;
use crate::core::Knot;

/// Nach x sortierte Stützstellen inklusive der zwei Spiegel-Knots.
///
/// Index 0 ist der Spiegel des letzten echten Knots (`x - width`),
/// der letzte Index der Spiegel des ersten echten Knots (`x + width`).
/// Dazwischen liegen die echten Knots streng aufsteigend in `[0, width)`.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedSequence {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl AugmentedSequence {
    /// Baut die Folge aus einer ungeordneten Knot-Menge.
    ///
    /// x-Werte werden periodisch nach `[0, width)` gefaltet. Bei gleichem x
    /// bleibt der erste Knot nach stabiler Sortierung, die übrigen entfallen.
    /// Ein Knot mit `x >= width` wird daher an seiner gefalteten Stelle
    /// interpoliert: `evaluate(x)` liefert dort den Wert des nach dem Falten
    /// übrig gebliebenen Knots.
    pub fn build<'a>(
        knots: impl IntoIterator<Item = &'a Knot>,
        width: f64,
    ) -> Result<Self, SplineError> {
        if !(width.is_finite() && width > 0.0) {
            return Err(SplineError::InvalidWidth { width });
        }

        let mut sorted: Vec<Knot> = knots
            .into_iter()
            .filter(|knot| {
                let finite = knot.is_finite();
                if !finite {
                    log::warn!("Knot mit nicht endlicher Position ignoriert: {:?}", knot);
                }
                finite
            })
            .map(|knot| Knot::new(fold_into_span(knot.x, width), knot.y))
            .collect();

        // sort_by ist stabil: bei gleichem x bleibt die Z-Reihenfolge erhalten
        sorted.sort_by(|a, b| a.x.total_cmp(&b.x));
        sorted.dedup_by(|later, earlier| later.x == earlier.x);

        if sorted.len() < 2 {
            return Err(SplineError::InsufficientKnots {
                found: sorted.len(),
            });
        }

        let first = sorted[0];
        let last = sorted[sorted.len() - 1];

        let len = sorted.len() + 2;
        let mut xs = Vec::with_capacity(len);
        let mut ys = Vec::with_capacity(len);

        xs.push(last.x - width);
        ys.push(last.y);
        for knot in &sorted {
            xs.push(knot.x);
            ys.push(knot.y);
        }
        xs.push(first.x + width);
        ys.push(first.y);

        Ok(Self { xs, ys })
    }

    /// Länge inklusive Spiegel-Knots.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Anzahl der echten (nicht gespiegelten) Knots.
    pub fn real_len(&self) -> usize {
        self.xs.len().saturating_sub(2)
    }
}

/// Faltet `x` periodisch in `[0, width)`.
pub fn fold_into_span(x: f64, width: f64) -> f64 {
    let folded = x.rem_euclid(width);
    // rem_euclid liefert bei winzigen negativen Werten genau `width`, bei -0.0 wieder -0.0
    if folded >= width || folded == 0.0 {
        0.0
    } else {
        folded
    }
}
