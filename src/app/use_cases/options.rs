//! Use-Case: Laufzeit-Optionen übernehmen und persistieren.

use crate::app::state::PlayheadState;
use crate::app::AppState;
use crate::shared::EditorOptions;
use std::path::Path;

/// Prüft und übernimmt neue Optionen.
///
/// Ändert sich die Spannweite, wird die gecachte Kurve verworfen.
/// Ungültige Optionen lassen den Zustand unverändert.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    options.validate()?;

    if options.width != state.options.width {
        state.invalidate_curve();
    }
    if options.playhead_start_x != state.options.playhead_start_x && !state.playhead.visible {
        state.playhead = PlayheadState::new(options.playhead_start_x);
    }
    state.options = options;
    log::info!("Optionen übernommen");
    Ok(())
}

/// Schreibt die aktuellen Optionen nach `path`.
pub fn save_options(state: &AppState, path: &Path) -> anyhow::Result<()> {
    state.options.save_to_file(path)
}
