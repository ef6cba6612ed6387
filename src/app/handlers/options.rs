//! Handler für Laufzeit-Optionen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::EditorOptions;

/// Übernimmt neue Optionen (nach Prüfung).
pub fn apply(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    use_cases::options::apply_options(state, options)
}

/// Speichert die Optionen neben der Binary.
pub fn save(state: &AppState) -> anyhow::Result<()> {
    let path = EditorOptions::config_path();
    use_cases::options::save_options(state, &path)
}
