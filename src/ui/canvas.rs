//! Zeichnet eine `RenderScene` mit dem egui-Painter.

use super::color;
use crate::shared::{KnotVisual, RenderScene};
use glam::DVec2;

/// Abbildung Span-Koordinaten ↔ Bildschirm.
///
/// Die Spannweite wird seitenverhältnistreu in das Rechteck eingepasst
/// und oben links ausgerichtet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    origin: egui::Pos2,
    scale: f32,
}

impl CanvasTransform {
    /// Passt `span_size` in `rect` ein.
    pub fn fit(rect: egui::Rect, span_size: [f64; 2]) -> Self {
        let sx = rect.width() / span_size[0] as f32;
        let sy = rect.height() / span_size[1] as f32;
        let scale = sx.min(sy);
        Self {
            origin: rect.min,
            scale: if scale.is_finite() && scale > 0.0 {
                scale
            } else {
                1.0
            },
        }
    }

    /// Skalierungsfaktor Span → Pixel.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Span-Koordinate → Bildschirmposition.
    pub fn to_screen(&self, x: f64, y: f64) -> egui::Pos2 {
        self.origin + egui::vec2(x as f32, y as f32) * self.scale
    }

    /// Bildschirmposition → Span-Koordinate.
    pub fn to_span(&self, pos: egui::Pos2) -> DVec2 {
        let local = (pos - self.origin) / self.scale;
        DVec2::new(local.x as f64, local.y as f64)
    }
}

/// Zeichnet Hintergrund, Kurve, Playhead und Knots (in Z-Reihenfolge).
pub fn paint_scene(painter: &egui::Painter, transform: &CanvasTransform, scene: &RenderScene) {
    let options = &scene.options;
    let span_rect = egui::Rect::from_min_max(
        transform.to_screen(0.0, 0.0),
        transform.to_screen(scene.span_size[0], scene.span_size[1]),
    );
    painter.rect_filled(span_rect, 0.0, color(options.background_color));

    if scene.has_curve() {
        let points: Vec<egui::Pos2> = scene
            .curve
            .iter()
            .map(|p| transform.to_screen(p[0], p[1]))
            .collect();
        painter.add(egui::Shape::line(
            points,
            egui::Stroke::new(options.curve_thickness, color(options.curve_color)),
        ));
    }

    if let Some(x) = scene.playhead_x {
        painter.line_segment(
            [
                transform.to_screen(x, 0.0),
                transform.to_screen(x, scene.span_size[1]),
            ],
            egui::Stroke::new(options.playhead_thickness, color(options.playhead_color)),
        );
    }

    let radius = options.knot_radius as f32 * transform.scale();
    for knot in &scene.knots {
        let (fill, stroke) = match knot.visual {
            KnotVisual::Normal => (options.knot_fill, options.knot_stroke),
            KnotVisual::Hovered => (options.knot_fill_hovered, options.knot_stroke_hovered),
            KnotVisual::Dragged => (options.knot_fill_dragged, options.knot_stroke_dragged),
        };
        painter.circle(
            transform.to_screen(knot.position[0], knot.position[1]),
            radius,
            color(fill),
            egui::Stroke::new(1.0, color(stroke)),
        );
    }
}
