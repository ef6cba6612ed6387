//! Application Controller für zentrale Event-Verarbeitung.

use super::events::RefreshReason;
use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Vom Host registrierter Rückruf für Neuzeichnungs-Anforderungen.
pub type RefreshCallback = Box<dyn FnMut(RefreshReason)>;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController {
    refresh_callback: Option<RefreshCallback>,
}

impl AppController {
    /// Erstellt einen neuen Controller ohne Refresh-Callback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert den Refresh-Callback (ersetzt einen vorhandenen).
    pub fn set_refresh_callback(&mut self, callback: impl FnMut(RefreshReason) + 'static) {
        self.refresh_callback = Some(Box::new(callback));
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Knots ===
            AppCommand::AddKnot { pos } => handlers::editing::add_knot(state, pos),
            AppCommand::DeleteKnot { id } => handlers::editing::delete_knot(state, id),
            AppCommand::MoveKnot { id, pos } => handlers::editing::move_knot(state, id, pos),
            AppCommand::BringKnotToFront { id } => handlers::editing::bring_to_front(state, id),
            AppCommand::ReseedKnots => handlers::editing::reseed(state),

            // === Interaktion ===
            AppCommand::SetInteraction { interaction } => {
                handlers::interaction::set_interaction(state, interaction)
            }

            // === Playhead ===
            AppCommand::ShowPlayhead => handlers::playhead::show(state),
            AppCommand::HidePlayhead => handlers::playhead::hide(state),
            AppCommand::SetPlayheadX { x } => handlers::playhead::set_x(state, x),

            // === Optionen ===
            AppCommand::ApplyOptions { options } => handlers::options::apply(state, options)?,
            AppCommand::SaveOptions => handlers::options::save(state)?,

            // === Host ===
            AppCommand::RequestRefresh { reason } => self.notify_refresh(reason),
        }

        Ok(())
    }

    fn notify_refresh(&mut self, reason: RefreshReason) {
        match self.refresh_callback.as_mut() {
            Some(callback) => callback(reason),
            None => log::trace!("Refresh ({:?}) ohne registrierten Callback", reason),
        }
    }

    /// Baut die RenderScene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
