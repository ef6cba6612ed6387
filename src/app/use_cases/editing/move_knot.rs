//! Use-Case: Knot verschieben und in der Z-Reihenfolge nach vorne holen.

use crate::app::AppState;
use crate::core::KnotId;
use glam::DVec2;

/// Setzt den Knot auf `pos`. Keine Klemmung auf die Spannweite.
pub fn move_knot_to(state: &mut AppState, id: KnotId, pos: DVec2) {
    if !state.knots_mut().move_to(id, pos) {
        log::warn!("Knot {} nicht vorhanden, Verschieben ignoriert", id);
        return;
    }
    log::debug!("Knot {} → ({:.1}, {:.1})", id, pos.x, pos.y);
}

/// Holt den Knot ans Ende der Z-Reihenfolge (zuletzt gezeichnet).
pub fn bring_knot_to_front(state: &mut AppState, id: KnotId) {
    if !state.knots_mut().bring_to_front(id) {
        log::warn!("Knot {} nicht vorhanden, Z-Reihenfolge unverändert", id);
    }
}
