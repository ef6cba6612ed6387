//! `SplineEditor`: öffentliche Fassade über State und Controller.
//!
//! Bündelt die Knot-API, die Auswertung und die Zeiger-Eingänge, damit
//! ein Host nur einen Typ halten muss.

use super::events::RefreshReason;
use super::state::Interaction;
use super::use_cases;
use super::{AppController, AppIntent, AppState};
use crate::core::{Knot, KnotId, KnotSet, PeriodicSpline, SplineError};
use crate::shared::{EditorOptions, RenderScene};
use glam::DVec2;
use rand::Rng;
use std::sync::Arc;

/// Interaktiver Editor für eine periodische Spline.
pub struct SplineEditor {
    state: AppState,
    controller: AppController,
}

impl SplineEditor {
    /// Erstellt einen Editor mit konfigurierten oder zufällig erzeugten Start-Knots.
    pub fn new(options: EditorOptions) -> anyhow::Result<Self> {
        Self::with_rng(options, &mut rand::thread_rng())
    }

    /// Wie `new`, aber mit vorgegebenem Zufallsgenerator (reproduzierbar).
    pub fn with_rng(options: EditorOptions, rng: &mut impl Rng) -> anyhow::Result<Self> {
        let knots = use_cases::seed::initial_knots(&options, rng);
        Self::with_knots(options, knots)
    }

    /// Erstellt einen Editor mit genau diesen Knots (in dieser Z-Reihenfolge).
    pub fn with_knots(
        options: EditorOptions,
        knots: impl IntoIterator<Item = Knot>,
    ) -> anyhow::Result<Self> {
        options.validate()?;
        let mut state = AppState::new(options);
        state.replace_knots(KnotSet::from_knots(knots));
        log::info!("Editor mit {} Knots gestartet", state.knot_count());
        Ok(Self {
            state,
            controller: AppController::new(),
        })
    }

    /// Read-only Zugriff auf den kompletten Zustand.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Die Knot-Menge in Z-Reihenfolge.
    pub fn knots(&self) -> &KnotSet {
        self.state.knots()
    }

    /// Aktueller Zeiger-Interaktionszustand.
    pub fn interaction(&self) -> Interaction {
        self.state.interaction
    }

    /// Laufzeit-Optionen.
    pub fn options(&self) -> &EditorOptions {
        &self.state.options
    }

    /// Registriert den Refresh-Callback des Hosts.
    pub fn set_refresh_callback(&mut self, callback: impl FnMut(RefreshReason) + 'static) {
        self.controller.set_refresh_callback(callback);
    }

    /// Leitet einen beliebigen Intent an den Controller.
    pub fn handle_intent(&mut self, intent: AppIntent) -> anyhow::Result<()> {
        self.controller.handle_intent(&mut self.state, intent)
    }

    // ── Knot-API ────────────────────────────────────────────────────

    /// Fügt einen Knot hinzu und gibt seine ID zurück.
    pub fn add_knot(&mut self, x: f64, y: f64) -> anyhow::Result<KnotId> {
        self.handle_intent(AppIntent::AddKnotRequested {
            pos: DVec2::new(x, y),
        })?;
        self.knots()
            .ids()
            .last()
            .copied()
            .ok_or_else(|| anyhow::anyhow!("Knot wurde nicht hinzugefügt"))
    }

    /// Löscht einen Knot. Unbekannte IDs werden ignoriert.
    pub fn delete_knot(&mut self, id: KnotId) -> anyhow::Result<()> {
        self.handle_intent(AppIntent::DeleteKnotRequested { id })
    }

    /// Setzt einen Knot auf eine neue Position.
    pub fn move_knot(&mut self, id: KnotId, x: f64, y: f64) -> anyhow::Result<()> {
        self.handle_intent(AppIntent::MoveKnotRequested {
            id,
            pos: DVec2::new(x, y),
        })
    }

    /// Ersetzt alle Knots durch zufällig erzeugte.
    pub fn reseed(&mut self) -> anyhow::Result<()> {
        self.handle_intent(AppIntent::ReseedKnotsRequested)
    }

    // ── Auswertung ──────────────────────────────────────────────────

    /// Gelöste Kurve der aktuellen Knots (gecacht bis zur nächsten Änderung).
    pub fn curve(&self) -> Result<Arc<PeriodicSpline>, SplineError> {
        self.state.curve()
    }

    /// Kurvenwert an `x`.
    pub fn evaluate(&self, x: f64) -> Result<f64, SplineError> {
        Ok(self.curve()?.evaluate(x))
    }

    /// Kurvenwerte an allen `xs` mit einem einzigen Solve.
    pub fn evaluate_batch(&self, xs: &[f64]) -> Result<Vec<f64>, SplineError> {
        Ok(self.curve()?.evaluate_batch(xs))
    }

    // ── Zeiger ──────────────────────────────────────────────────────

    /// Primärtaste gedrückt bei `(x, y)`.
    pub fn handle_pointer_down(&mut self, x: f64, y: f64) -> anyhow::Result<()> {
        self.handle_intent(AppIntent::PointerDown {
            pos: DVec2::new(x, y),
        })
    }

    /// Zeiger bewegt nach `(x, y)`.
    pub fn handle_pointer_move(&mut self, x: f64, y: f64) -> anyhow::Result<()> {
        self.handle_intent(AppIntent::PointerMove {
            pos: DVec2::new(x, y),
        })
    }

    /// Primärtaste losgelassen bei `(x, y)`.
    pub fn handle_pointer_up(&mut self, x: f64, y: f64) -> anyhow::Result<()> {
        self.handle_intent(AppIntent::PointerUp {
            pos: DVec2::new(x, y),
        })
    }

    // ── Playhead ────────────────────────────────────────────────────

    /// Blendet den Playhead ein.
    pub fn show_playhead(&mut self) -> anyhow::Result<()> {
        self.handle_intent(AppIntent::ShowPlayheadRequested)
    }

    /// Blendet den Playhead aus.
    pub fn hide_playhead(&mut self) -> anyhow::Result<()> {
        self.handle_intent(AppIntent::HidePlayheadRequested)
    }

    /// Setzt die Playhead-Position.
    pub fn set_playhead_x(&mut self, x: f64) -> anyhow::Result<()> {
        self.handle_intent(AppIntent::SetPlayheadRequested { x })
    }

    // ── Darstellung ─────────────────────────────────────────────────

    /// Baut die Render-Szene für den aktuellen Zustand.
    pub fn render_scene(&self) -> RenderScene {
        self.controller.build_render_scene(&self.state)
    }
}
