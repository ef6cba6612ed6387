use crate::app::state::Interaction;
use crate::core::KnotId;
use crate::shared::EditorOptions;
use glam::DVec2;

/// Grund einer Neuzeichnungs-Anforderung an den Host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefreshReason {
    /// Knot-Menge oder -Reihenfolge geändert, Kurve muss neu gezeichnet werden
    KnotsChanged,
    /// Nur Hover/Drag-Hervorhebung geändert
    InteractionChanged,
    /// Playhead ein-/ausgeblendet oder verschoben
    PlayheadChanged,
    /// Optionen (Spannweite, Farben) geändert
    OptionsChanged,
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Neuen Knot an Position hinzufügen (landet oben in der Z-Reihenfolge)
    AddKnot { pos: DVec2 },
    /// Knot entfernen
    DeleteKnot { id: KnotId },
    /// Knot auf Position setzen
    MoveKnot { id: KnotId, pos: DVec2 },
    /// Knot ans Ende der Z-Reihenfolge verschieben
    BringKnotToFront { id: KnotId },
    /// Knot-Menge durch zufällig erzeugte ersetzen
    ReseedKnots,
    /// Interaktionszustand setzen
    SetInteraction { interaction: Interaction },
    /// Playhead einblenden
    ShowPlayhead,
    /// Playhead ausblenden
    HidePlayhead,
    /// Playhead-Position setzen
    SetPlayheadX { x: f64 },
    /// Optionen prüfen und übernehmen
    ApplyOptions { options: EditorOptions },
    /// Optionen persistieren
    SaveOptions,
    /// Host um Neuzeichnen bitten
    RequestRefresh { reason: RefreshReason },
}
