//! Use-Case: Neuen Knot an einer Position hinzufügen.

use crate::app::AppState;
use crate::core::{Knot, KnotId};
use glam::DVec2;

/// Fügt einen Knot an `pos` hinzu. Er liegt danach oben in der Z-Reihenfolge.
///
/// Position außerhalb der Spannweite ist erlaubt; der Solver faltet x periodisch.
pub fn add_knot_at_position(state: &mut AppState, pos: DVec2) -> KnotId {
    let id = state.knots_mut().add(Knot::from_position(pos));
    log::info!(
        "Knot {} hinzugefügt bei ({:.1}, {:.1}), jetzt {} Knots",
        id,
        pos.x,
        pos.y,
        state.knot_count()
    );
    id
}
