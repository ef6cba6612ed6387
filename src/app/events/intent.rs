use crate::core::KnotId;
use crate::shared::EditorOptions;
use glam::DVec2;

/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
///
/// Zeigerpositionen sind in Span-Koordinaten (x nach rechts, y nach unten).
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Primärtaste gedrückt
    PointerDown { pos: DVec2 },
    /// Zeiger bewegt (mit oder ohne gedrückte Taste)
    PointerMove { pos: DVec2 },
    /// Primärtaste losgelassen
    PointerUp { pos: DVec2 },

    /// Knot an Position hinzufügen (programmatisch)
    AddKnotRequested { pos: DVec2 },
    /// Knot löschen (programmatisch)
    DeleteKnotRequested { id: KnotId },
    /// Knot auf Position setzen (programmatisch)
    MoveKnotRequested { id: KnotId, pos: DVec2 },
    /// Knots neu zufällig erzeugen
    ReseedKnotsRequested,

    /// Playhead einblenden
    ShowPlayheadRequested,
    /// Playhead ausblenden
    HidePlayheadRequested,
    /// Playhead auf x setzen
    SetPlayheadRequested { x: f64 },

    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: EditorOptions },
    /// Aktuelle Optionen als TOML neben der Binary speichern
    SaveOptionsRequested,
}
