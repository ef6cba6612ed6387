//! Handler für Knot-Editing.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::KnotId;
use glam::DVec2;

/// Fügt einen neuen Knot an der übergebenen Position hinzu.
pub fn add_knot(state: &mut AppState, pos: DVec2) {
    use_cases::editing::add_knot_at_position(state, pos);
}

/// Löscht einen Knot.
pub fn delete_knot(state: &mut AppState, id: KnotId) {
    use_cases::editing::delete_knot(state, id);
}

/// Setzt einen Knot auf eine neue Position.
pub fn move_knot(state: &mut AppState, id: KnotId, pos: DVec2) {
    use_cases::editing::move_knot_to(state, id, pos);
}

/// Holt einen Knot in der Z-Reihenfolge nach vorne.
pub fn bring_to_front(state: &mut AppState, id: KnotId) {
    use_cases::editing::bring_knot_to_front(state, id);
}

/// Ersetzt alle Knots durch zufällig erzeugte.
pub fn reseed(state: &mut AppState) {
    use_cases::seed::reseed(state, &mut rand::thread_rng());
}
