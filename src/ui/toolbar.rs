//! Toolbar: Knots neu erzeugen, Playhead steuern, Optionen speichern.

use crate::app::{AppIntent, AppState};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("Neue Knots (R)").clicked() {
                events.push(AppIntent::ReseedKnotsRequested);
            }
            ui.separator();

            let mut visible = state.playhead.visible;
            if ui.checkbox(&mut visible, "Playhead (P)").changed() {
                events.push(if visible {
                    AppIntent::ShowPlayheadRequested
                } else {
                    AppIntent::HidePlayheadRequested
                });
            }

            let mut x = state.playhead.x;
            let slider = egui::Slider::new(&mut x, 0.0..=state.options.width).text("x");
            if ui.add_enabled(state.playhead.visible, slider).changed() {
                events.push(AppIntent::SetPlayheadRequested { x });
            }
            ui.separator();

            if ui.button("Optionen speichern").clicked() {
                events.push(AppIntent::SaveOptionsRequested);
            }
        });
    });

    events
}
