//! Render-Szene als expliziter Übergabevertrag zwischen App und Host.
//!
//! Lebt im shared-Modul, da `app` sie baut und die UI sie konsumiert.

use super::options::EditorOptions;
use crate::core::KnotId;

/// Darstellungszustand eines Knots im aktuellen Frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KnotVisual {
    /// Weder gehovert noch gezogen
    #[default]
    Normal,
    /// Liegt unter dem Mauszeiger
    Hovered,
    /// Wird gerade gezogen
    Dragged,
}

/// Ein zu zeichnender Knot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnotSprite {
    /// ID des Knots
    pub id: KnotId,
    /// Position in Span-Koordinaten
    pub position: [f64; 2],
    /// Hervorhebung
    pub visual: KnotVisual,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Größe der Zeichenfläche [Breite, Höhe]
    pub span_size: [f64; 2],
    /// Knots in Z-Reihenfolge (letzter liegt oben)
    pub knots: Vec<KnotSprite>,
    /// Abgetastete Kurve als Polyline; leer, wenn keine Kurve lösbar ist
    pub curve: Vec<[f64; 2]>,
    /// x-Position des Playheads, falls sichtbar
    pub playhead_x: Option<f64>,
    /// Laufzeit-Optionen für Farben, Größen, Breiten
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob eine Kurve gezeichnet werden kann.
    pub fn has_curve(&self) -> bool {
        self.curve.len() >= 2
    }
}
