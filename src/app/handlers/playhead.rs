//! Handler für das Playhead-Overlay.

use crate::app::AppState;

/// Blendet den Playhead ein.
pub fn show(state: &mut AppState) {
    state.playhead.visible = true;
}

/// Blendet den Playhead aus. Die Position bleibt erhalten.
pub fn hide(state: &mut AppState) {
    state.playhead.visible = false;
}

/// Setzt die x-Position. Werte außerhalb der Spannweite sind erlaubt.
pub fn set_x(state: &mut AppState, x: f64) {
    if !x.is_finite() {
        log::warn!("Playhead-Position {} ignoriert", x);
        return;
    }
    state.playhead.x = x;
}
