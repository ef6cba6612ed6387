//! Handler für den Zeiger-Interaktionszustand.

use crate::app::state::Interaction;
use crate::app::AppState;

/// Setzt den Interaktionszustand. Verweise auf unbekannte Knots werden zu `Idle`.
pub fn set_interaction(state: &mut AppState, interaction: Interaction) {
    let target = interaction.hovered().or(interaction.dragged());
    let interaction = match target {
        Some(id) if !state.knots().contains(id) => {
            log::warn!("Interaktion verweist auf unbekannten Knot {}", id);
            Interaction::Idle
        }
        _ => interaction,
    };

    if state.interaction != interaction {
        log::trace!("Interaktion: {:?} → {:?}", state.interaction, interaction);
    }
    state.interaction = interaction;
}
