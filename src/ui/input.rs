//! Canvas-Input-Handling: Maus-Events → AppIntent.

use super::canvas::CanvasTransform;
use super::keyboard;
use crate::app::{AppIntent, AppState};

/// Verwaltet den Input-Zustand der Zeichenfläche.
#[derive(Default)]
pub struct InputState {
    /// Letzte gemeldete Zeigerposition (Span-Koordinaten), gegen doppelte Moves
    last_pointer: Option<glam::DVec2>,
    /// Ob der aktuelle Druck auf der Zeichenfläche begann
    press_on_canvas: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Canvas-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Reihenfolge pro Frame: Move, Down, Up. Ein Klick innerhalb eines
    /// Frames erzeugt so Down + Up ohne Move (= Löschen eines Knots).
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        transform: &CanvasTransform,
        state: &AppState,
    ) -> Vec<AppIntent> {
        let mut events = keyboard::collect_keyboard_intents(ui, &state.playhead);

        let (hover_pos, pressed, released) = ui.input(|i| {
            (
                i.pointer.hover_pos(),
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
            )
        });
        let Some(screen_pos) = hover_pos else {
            return events;
        };
        let pos = transform.to_span(screen_pos);

        if self.last_pointer != Some(pos) && (response.hovered() || self.press_on_canvas) {
            events.push(AppIntent::PointerMove { pos });
        }
        self.last_pointer = Some(pos);

        if pressed && response.hovered() {
            self.press_on_canvas = true;
            events.push(AppIntent::PointerDown { pos });
        }

        if released && self.press_on_canvas {
            self.press_on_canvas = false;
            events.push(AppIntent::PointerUp { pos });
        }

        events
    }
}
