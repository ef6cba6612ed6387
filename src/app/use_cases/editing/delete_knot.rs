//! Use-Case: Knot entfernen.

use crate::app::state::Interaction;
use crate::app::AppState;
use crate::core::KnotId;

/// Entfernt den Knot. Verweist die Interaktion noch auf ihn, wird sie zurückgesetzt.
///
/// Unbekannte IDs werden ignoriert.
pub fn delete_knot(state: &mut AppState, id: KnotId) {
    if !state.knots().contains(id) {
        log::warn!("Knot {} nicht vorhanden, nichts gelöscht", id);
        return;
    }

    state.knots_mut().remove(id);
    if state.interaction.refers_to(id) {
        state.interaction = Interaction::Idle;
    }
    log::info!("Knot {} gelöscht, noch {} Knots", id, state.knot_count());
}
