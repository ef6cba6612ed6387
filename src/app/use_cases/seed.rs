//! Use-Case: Start-Knots bestimmen (konfiguriert oder zufällig erzeugt).

use crate::app::state::Interaction;
use crate::app::AppState;
use crate::core::Knot;
use crate::shared::EditorOptions;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// Erzeugt `seed_knot_count` Knots, gleichmäßig über die Breite verteilt.
///
/// Knot `i` liegt bei `x = width * i / count`, y zufällig im Band
/// `height * [seed_band_min, seed_band_min + seed_band_span)`.
pub fn seed_knots(options: &EditorOptions, rng: &mut impl Rng) -> Vec<Knot> {
    let count = options.seed_knot_count;
    if count == 0 {
        return Vec::new();
    }

    let band = Uniform::from(0.0..1.0);
    (0..count)
        .map(|i| {
            let x = options.width * i as f64 / count as f64;
            let fraction = options.seed_band_min + band.sample(rng) * options.seed_band_span;
            Knot::new(x, options.height * fraction)
        })
        .collect()
}

/// Start-Knots: aus `initial_knots`, falls konfiguriert, sonst zufällig.
pub fn initial_knots(options: &EditorOptions, rng: &mut impl Rng) -> Vec<Knot> {
    match &options.initial_knots {
        Some(points) => points.iter().map(|&p| Knot::from(p)).collect(),
        None => seed_knots(options, rng),
    }
}

/// Ersetzt die Knot-Menge durch neu erzeugte Knots.
///
/// Alte IDs werden nicht wiederverwendet, die Interaktion wird zurückgesetzt.
pub fn reseed(state: &mut AppState, rng: &mut impl Rng) {
    let knots = seed_knots(&state.options, rng);
    log::info!("{} Knots neu erzeugt", knots.len());

    let set = state.knots_mut();
    set.clear();
    for knot in knots {
        set.add(knot);
    }
    state.interaction = Interaction::Idle;
}
