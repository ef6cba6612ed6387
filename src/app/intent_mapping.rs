//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Die Zeiger-Zustandsmaschine (Idle/Hovering/Dragging) lebt vollständig
//! hier: aus Zustand + Intent entsteht eine Command-Folge, die der
//! Controller danach ausführt.

use super::events::RefreshReason;
use super::state::{DragState, Interaction};
use super::{AppCommand, AppIntent, AppState};
use crate::core::{nearest_hit, KnotId, KnotSet};
use glam::DVec2;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerDown { pos } => pointer_down(state, pos),
        AppIntent::PointerMove { pos } => pointer_move(state, pos),
        AppIntent::PointerUp { pos } => pointer_up(state, pos),

        AppIntent::AddKnotRequested { pos } => vec![
            AppCommand::AddKnot { pos },
            refresh(RefreshReason::KnotsChanged),
        ],
        AppIntent::DeleteKnotRequested { id } => vec![
            AppCommand::DeleteKnot { id },
            refresh(RefreshReason::KnotsChanged),
        ],
        AppIntent::MoveKnotRequested { id, pos } => vec![
            AppCommand::MoveKnot { id, pos },
            refresh(RefreshReason::KnotsChanged),
        ],
        AppIntent::ReseedKnotsRequested => vec![
            AppCommand::ReseedKnots,
            refresh(RefreshReason::KnotsChanged),
        ],

        AppIntent::ShowPlayheadRequested => vec![
            AppCommand::ShowPlayhead,
            refresh(RefreshReason::PlayheadChanged),
        ],
        AppIntent::HidePlayheadRequested => vec![
            AppCommand::HidePlayhead,
            refresh(RefreshReason::PlayheadChanged),
        ],
        AppIntent::SetPlayheadRequested { x } => vec![
            AppCommand::SetPlayheadX { x },
            refresh(RefreshReason::PlayheadChanged),
        ],

        AppIntent::OptionsChanged { options } => vec![
            AppCommand::ApplyOptions { options },
            refresh(RefreshReason::OptionsChanged),
        ],
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions],
    }
}

fn refresh(reason: RefreshReason) -> AppCommand {
    AppCommand::RequestRefresh { reason }
}

/// Hover-Ziel an `pos`: nächster Knot im Radius, optional ohne `exclude`.
fn hover_target(
    knots: &KnotSet,
    pos: DVec2,
    radius: f64,
    exclude: Option<KnotId>,
) -> Interaction {
    let hits = knots
        .knots_under_point(pos, radius)
        .into_iter()
        .filter(|hit| Some(hit.knot_id) != exclude);
    match nearest_hit(hits) {
        Some(hit) => Interaction::Hovering(hit.knot_id),
        None => Interaction::Idle,
    }
}

/// Treffer → Drag beginnen, sonst neuen Knot am Zeiger anlegen.
fn pointer_down(state: &AppState, pos: DVec2) -> Vec<AppCommand> {
    let hit = state
        .knots()
        .nearest_knot_under_point(pos, state.options.knot_radius)
        .and_then(|hit| Some((hit.knot_id, *state.knots().get(hit.knot_id)?)));

    match hit {
        Some((id, knot)) => vec![
            AppCommand::SetInteraction {
                interaction: Interaction::Dragging(DragState {
                    knot: id,
                    offset: pos - knot.position(),
                    moved: false,
                }),
            },
            AppCommand::BringKnotToFront { id },
            refresh(RefreshReason::KnotsChanged),
        ],
        None => vec![
            AppCommand::AddKnot { pos },
            refresh(RefreshReason::KnotsChanged),
        ],
    }
}

/// Im Drag: Knot folgt dem Zeiger. Sonst: Hover neu bestimmen,
/// Refresh nur bei tatsächlicher Änderung.
fn pointer_move(state: &AppState, pos: DVec2) -> Vec<AppCommand> {
    match state.interaction {
        Interaction::Dragging(drag) => vec![
            AppCommand::MoveKnot {
                id: drag.knot,
                pos: pos - drag.offset,
            },
            AppCommand::SetInteraction {
                interaction: Interaction::Dragging(DragState {
                    moved: true,
                    ..drag
                }),
            },
            refresh(RefreshReason::KnotsChanged),
        ],
        Interaction::Idle | Interaction::Hovering(_) => {
            let target = hover_target(state.knots(), pos, state.options.knot_radius, None);
            if target == state.interaction {
                Vec::new()
            } else {
                vec![
                    AppCommand::SetInteraction {
                        interaction: target,
                    },
                    refresh(RefreshReason::InteractionChanged),
                ]
            }
        }
    }
}

/// Drag beenden. Ohne Bewegung war es ein Klick: der Knot wird gelöscht.
fn pointer_up(state: &AppState, pos: DVec2) -> Vec<AppCommand> {
    let Interaction::Dragging(drag) = state.interaction else {
        return Vec::new();
    };
    let radius = state.options.knot_radius;

    if drag.moved {
        vec![
            AppCommand::SetInteraction {
                interaction: hover_target(state.knots(), pos, radius, None),
            },
            refresh(RefreshReason::InteractionChanged),
        ]
    } else {
        vec![
            AppCommand::DeleteKnot { id: drag.knot },
            AppCommand::SetInteraction {
                interaction: hover_target(state.knots(), pos, radius, Some(drag.knot)),
            },
            refresh(RefreshReason::KnotsChanged),
        ]
    }
}
