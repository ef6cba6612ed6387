//! Keyboard-Shortcuts für die Zeichenfläche.

use crate::app::{AppIntent, PlayheadState};

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// - `P`: Playhead ein/aus
/// - `R`: Knots neu erzeugen
pub(super) fn collect_keyboard_intents(ui: &egui::Ui, playhead: &PlayheadState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, key_p_pressed, key_r_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::P),
            i.key_pressed(egui::Key::R),
        )
    });
    if modifiers.any() {
        return events;
    }

    if key_p_pressed {
        events.push(if playhead.visible {
            AppIntent::HidePlayheadRequested
        } else {
            AppIntent::ShowPlayheadRequested
        });
    }
    if key_r_pressed {
        events.push(AppIntent::ReseedKnotsRequested);
    }

    events
}
