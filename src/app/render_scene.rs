//! Builder für RenderScene aus dem AppState.

use super::AppState;
use crate::shared::{KnotSprite, KnotVisual, RenderScene};

/// Erstellt eine RenderScene aus dem aktuellen AppState.
///
/// Die Kurve wird einmal gefittet (bzw. aus dem Cache geholt) und dann
/// in einem Durchlauf über `[0, width]` abgetastet.
pub fn build(state: &AppState) -> RenderScene {
    let hovered = state.interaction.hovered();
    let dragged = state.interaction.dragged();

    let knots = state
        .knots()
        .iter()
        .map(|(id, knot)| KnotSprite {
            id,
            position: [knot.x, knot.y],
            visual: if Some(id) == dragged {
                KnotVisual::Dragged
            } else if Some(id) == hovered {
                KnotVisual::Hovered
            } else {
                KnotVisual::Normal
            },
        })
        .collect();

    let curve = match state.curve() {
        Ok(spline) => {
            let xs = sample_positions(state.options.width, state.options.curve_sample_step);
            let ys = spline.evaluate_batch(&xs);
            xs.into_iter().zip(ys).map(|(x, y)| [x, y]).collect()
        }
        Err(_) => Vec::new(),
    };

    RenderScene {
        span_size: [state.options.width, state.options.height],
        knots,
        curve,
        playhead_x: state.playhead.visible.then_some(state.playhead.x),
        options: state.options.clone(),
    }
}

/// Abtastpunkte `0, step, 2·step, …` plus `width` als Schlusspunkt.
fn sample_positions(width: f64, step: f64) -> Vec<f64> {
    let count = (width / step).ceil() as usize;
    let mut xs: Vec<f64> = (0..count)
        .map(|i| i as f64 * step)
        .take_while(|&x| x < width)
        .collect();
    xs.push(width);
    xs
}
