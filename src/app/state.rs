//! Application State: zentrale Datenhaltung.

use super::CommandLog;
use crate::core::{KnotId, KnotSet, PeriodicSpline, SplineError};
use crate::shared::EditorOptions;
use glam::DVec2;
use std::cell::OnceCell;
use std::sync::Arc;

/// Laufender Drag eines Knots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Gezogener Knot
    pub knot: KnotId,
    /// Abstand Zeiger → Knot-Mitte beim Greifen (bleibt während des Drags konstant)
    pub offset: DVec2,
    /// Ob seit dem Greifen mindestens ein Move kam (sonst: Klick = Löschen)
    pub moved: bool,
}

/// Zeiger-Interaktionszustand.
///
/// Hover und Drag schließen sich gegenseitig aus.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Interaction {
    /// Kein Knot unter dem Zeiger
    #[default]
    Idle,
    /// Zeiger liegt über einem Knot
    Hovering(KnotId),
    /// Ein Knot wird gezogen
    Dragging(DragState),
}

impl Interaction {
    /// Knot unter dem Zeiger (nur im Hover-Zustand).
    pub fn hovered(&self) -> Option<KnotId> {
        match self {
            Self::Hovering(id) => Some(*id),
            _ => None,
        }
    }

    /// Gezogener Knot (nur im Drag-Zustand).
    pub fn dragged(&self) -> Option<KnotId> {
        match self {
            Self::Dragging(drag) => Some(drag.knot),
            _ => None,
        }
    }

    /// Gibt `true` zurück, wenn der Zustand auf `id` verweist.
    pub fn refers_to(&self, id: KnotId) -> bool {
        self.hovered() == Some(id) || self.dragged() == Some(id)
    }
}

/// Zustand des Playhead-Overlays (vertikale Linie, reine Darstellung).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayheadState {
    /// Ob die Linie gezeichnet wird
    pub visible: bool,
    /// x-Position der Linie
    pub x: f64,
}

impl PlayheadState {
    /// Unsichtbarer Playhead an der Start-Position.
    pub fn new(start_x: f64) -> Self {
        Self {
            visible: false,
            x: start_x,
        }
    }
}

/// Ergebnis eines Fits: gelöste Kurve oder Grund, warum keine existiert.
pub type CurveSnapshot = Result<Arc<PeriodicSpline>, SplineError>;

/// Zwischenspeicher für die gelöste Kurve.
///
/// Wird bei jeder Knot-Mutation verworfen und beim nächsten Zugriff
/// einmalig neu gefittet.
#[derive(Debug, Default)]
pub struct CurveCache {
    snapshot: OnceCell<CurveSnapshot>,
}

impl CurveCache {
    /// Liefert die gecachte Kurve oder fittet sie neu.
    pub fn get_or_fit(&self, knots: &KnotSet, width: f64) -> CurveSnapshot {
        self.snapshot
            .get_or_init(|| {
                let fitted = PeriodicSpline::fit(knots.knots(), width).map(Arc::new);
                match &fitted {
                    Err(SplineError::InsufficientKnots { found }) => {
                        log::debug!("Keine Kurve: nur {} verwendbare Knots", found);
                    }
                    Err(e) => log::warn!("Kurve nicht lösbar: {}", e),
                    Ok(_) => {}
                }
                fitted
            })
            .clone()
    }

    /// Ob aktuell ein Fit-Ergebnis vorliegt.
    pub fn is_cached(&self) -> bool {
        self.snapshot.get().is_some()
    }

    /// Verwirft das gecachte Ergebnis.
    pub fn invalidate(&mut self) {
        self.snapshot.take();
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    knots: KnotSet,
    curve: CurveCache,
    /// Zeiger-Interaktion (Hover/Drag)
    pub interaction: Interaction,
    /// Playhead-Overlay
    pub playhead: PlayheadState,
    /// Laufzeit-Optionen (Spannweite, Radius, Farben)
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl AppState {
    /// Erstellt einen leeren App-State mit den gegebenen Optionen.
    pub fn new(options: EditorOptions) -> Self {
        Self {
            knots: KnotSet::new(),
            curve: CurveCache::default(),
            interaction: Interaction::Idle,
            playhead: PlayheadState::new(options.playhead_start_x),
            options,
            command_log: CommandLog::new(),
        }
    }

    /// Read-only Zugriff auf die Knot-Menge.
    pub fn knots(&self) -> &KnotSet {
        &self.knots
    }

    /// Mutabler Zugriff auf die Knot-Menge.
    ///
    /// Alle Mutationen laufen hierüber, damit die gecachte Kurve verworfen wird.
    pub fn knots_mut(&mut self) -> &mut KnotSet {
        self.curve.invalidate();
        &mut self.knots
    }

    /// Ersetzt die komplette Knot-Menge und setzt die Interaktion zurück.
    pub fn replace_knots(&mut self, knots: KnotSet) {
        self.curve.invalidate();
        self.knots = knots;
        self.interaction = Interaction::Idle;
    }

    /// Gelöste Kurve der aktuellen Knots (gecacht).
    pub fn curve(&self) -> CurveSnapshot {
        self.curve.get_or_fit(&self.knots, self.options.width)
    }

    /// Verwirft die gecachte Kurve (z.B. nach Änderung der Spannweite).
    pub fn invalidate_curve(&mut self) {
        self.curve.invalidate();
    }

    /// Ob die Kurve aktuell gecacht ist.
    pub fn is_curve_cached(&self) -> bool {
        self.curve.is_cached()
    }

    /// Anzahl der Knots (für UI-Anzeige)
    pub fn knot_count(&self) -> usize {
        self.knots.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(EditorOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Knot;

    fn state_with_knots() -> AppState {
        let mut state = AppState::new(EditorOptions::with_span(100.0, 100.0));
        state.replace_knots(KnotSet::from_knots([
            Knot::new(0.0, 50.0),
            Knot::new(50.0, 10.0),
        ]));
        state
    }

    #[test]
    fn curve_is_cached_until_knots_change() {
        let mut state = state_with_knots();
        assert!(!state.is_curve_cached());

        let first = state.curve().expect("lösbar");
        assert!(state.is_curve_cached());
        let second = state.curve().expect("lösbar");
        assert!(Arc::ptr_eq(&first, &second));

        state.knots_mut().add(Knot::new(70.0, 30.0));
        assert!(!state.is_curve_cached());
        let third = state.curve().expect("lösbar");
        assert_eq!(third.knot_count(), 3);
    }

    #[test]
    fn insufficient_knots_are_cached_as_error() {
        let state = AppState::default();
        assert_eq!(
            state.curve().map(|_| ()),
            Err(SplineError::InsufficientKnots { found: 0 })
        );
        assert!(state.is_curve_cached());
    }

    #[test]
    fn replace_knots_resets_interaction() {
        let mut state = state_with_knots();
        let id = state.knots().ids()[0];
        state.interaction = Interaction::Hovering(id);
        state.replace_knots(KnotSet::new());
        assert_eq!(state.interaction, Interaction::Idle);
    }

    #[test]
    fn interaction_accessors() {
        let id = KnotId(3);
        let drag = Interaction::Dragging(DragState {
            knot: id,
            offset: DVec2::ZERO,
            moved: false,
        });
        assert_eq!(drag.dragged(), Some(id));
        assert_eq!(drag.hovered(), None);
        assert!(drag.refers_to(id));
        assert!(!Interaction::Hovering(KnotId(4)).refers_to(id));
    }
}
