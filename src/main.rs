//! Periodic Spline Editor.
//!
//! Interaktiver Editor für eine periodische kubische Spline:
//! Knots setzen, ziehen und per Klick löschen, Kurve live neu lösen.

use eframe::egui;
use periodic_spline_editor::{ui, AppIntent, EditorOptions, RefreshReason, SplineEditor};
use std::cell::Cell;
use std::rc::Rc;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Periodic Spline Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);
        let initial_size = [
            editor_options.width as f32 + 40.0,
            editor_options.height as f32 + 100.0,
        ];

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(initial_size)
                .with_title("Periodic Spline Editor"),
            renderer: eframe::Renderer::Wgpu,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Periodic Spline Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new(editor_options)?))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    editor: SplineEditor,
    input: ui::InputState,
    /// Vom Refresh-Callback gesetzt, im nächsten `update` abgearbeitet
    repaint_requested: Rc<Cell<bool>>,
}

impl EditorApp {
    fn new(options: EditorOptions) -> anyhow::Result<Self> {
        let mut editor = SplineEditor::new(options)?;

        let repaint_requested = Rc::new(Cell::new(true));
        let flag = Rc::clone(&repaint_requested);
        editor.set_refresh_callback(move |reason: RefreshReason| {
            log::trace!("Refresh angefordert: {:?}", reason);
            flag.set(true);
        });

        Ok(Self {
            editor,
            input: ui::InputState::new(),
            repaint_requested,
        })
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let events = self.collect_ui_events(ctx);
        self.process_events(events);

        if self.repaint_requested.replace(false) {
            ctx.request_repaint();
        }
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, self.editor.state());
        events.extend(ui::render_toolbar(ctx, self.editor.state()));

        egui::CentralPanel::default().show(ctx, |ui| {
            let (rect, response) =
                ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

            let scene = self.editor.render_scene();
            let transform = ui::CanvasTransform::fit(rect, scene.span_size);

            events.extend(self.input.collect_canvas_events(
                ui,
                &response,
                &transform,
                self.editor.state(),
            ));

            ui::paint_scene(&ui.painter_at(rect), &transform, &scene);
        });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.editor.handle_intent(event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
