//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, Interaction};
use crate::core::SplineError;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Knots: {}", state.knot_count()));
            ui.separator();

            match state.curve() {
                Ok(spline) => ui.label(format!("Kurve: {} Stützstellen", spline.knot_count())),
                Err(SplineError::InsufficientKnots { .. }) => {
                    ui.label("Kurve: mindestens 2 Knots nötig")
                }
                Err(e) => ui.label(format!("Kurve: {}", e)),
            };
            ui.separator();

            match state.interaction {
                Interaction::Idle => {}
                Interaction::Hovering(id) => {
                    ui.label(format!("Knot {} (Klick = löschen, Ziehen = verschieben)", id));
                }
                Interaction::Dragging(drag) => {
                    if let Some(knot) = state.knots().get(drag.knot) {
                        ui.label(format!(
                            "Knot {} bei ({:.1}, {:.1})",
                            drag.knot, knot.x, knot.y
                        ));
                    }
                }
            }

            if state.playhead.visible {
                ui.separator();
                ui.label(format!("Playhead: x = {:.1}", state.playhead.x));
            }
        });
    });
}
