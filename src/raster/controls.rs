use crate::error::{ColorError, Result};
use crate::geometry::{checkmark, Outline, Rect};
use crate::metrics::{ControlKind, Metrics, Shape};
use crate::palette::Palette;
use crate::shadow::{DualShadow, ShadowSet};
use crate::state::{Appearance, ControlState, Effect};

use super::Canvas;

/// Gap between a switch body and its knob, in logical pixels.
const KNOB_GAP: f64 = 2.0;

/// Paint one control into `canvas`, with its top-left at the canvas origin.
///
/// Corner radii in [`Metrics`] are arc diameters, so shapes are painted with
/// half of them. Labels are left to the host.
pub fn paint_control(
    canvas: &mut Canvas,
    kind: ControlKind,
    shape: Shape,
    state: ControlState,
    palette: &Palette,
    metrics: &Metrics,
) -> Result<()> {
    let appearance = Appearance::resolve(kind, state, palette);
    let shadows = ShadowSet::new(palette, metrics);
    let sr = metrics.shadow_radius;
    let bounds = Rect::new(0.0, 0.0, metrics.width, metrics.height);

    match kind {
        ControlKind::Button | ControlKind::ToggleButton => {
            let outline = match shape {
                Shape::Circular => Outline::circle(
                    Rect::new(0.0, 0.0, metrics.size, metrics.size).inset(sr),
                ),
                _ => Outline::rounded_rect(bounds.inset(sr), metrics.corner_radius / 2.0),
            };
            body(canvas, kind, &outline, &appearance, &shadows)?;
        }
        ControlKind::RadioButton => {
            let square = indicator_square(metrics);
            let outline = Outline::circle(square.inset(2.0 * sr));
            body(canvas, kind, &outline, &appearance, &shadows)?;
            if appearance.indicator {
                let dot = square.inset(3.0 * sr);
                if dot.is_empty() {
                    log::warn!("radio button too small for its dot: {:?}", metrics.size);
                } else {
                    content(canvas, &Outline::circle(dot), &appearance, &shadows);
                }
            }
        }
        ControlKind::CheckBox => {
            let square = indicator_square(metrics);
            let outline = Outline::rounded_rect(square.inset(sr), metrics.corner_radius / 2.0);
            body(canvas, kind, &outline, &appearance, &shadows)?;
            if appearance.indicator {
                let mark_size = metrics.size * 0.5;
                let offset = (metrics.size - mark_size) * 0.5;
                let mark = checkmark(square.x + offset, square.y + offset, mark_size);
                content(canvas, &mark, &appearance, &shadows);
            }
        }
        ControlKind::Switch => {
            let outline = Outline::rounded_rect(bounds.inset(sr), metrics.corner_radius / 2.0);
            body(canvas, kind, &outline, &appearance, &shadows)?;
            paint_knob(canvas, state.contains(ControlState::ON), palette, metrics, &shadows.inner);
        }
        ControlKind::Container => {
            // A sunken container fills its whole box; a raised one leaves room
            // for the outer shadow.
            let inset = if appearance.effect == Effect::Inner {
                0.0
            } else {
                sr
            };
            let outline = match shape {
                Shape::Rectangular => {
                    Outline::rounded_rect(bounds.inset(inset), metrics.corner_radius / 2.0)
                }
                Shape::Pill => Outline::rounded_rect(bounds.inset(inset), metrics.height / 2.0),
                Shape::Circular => Outline::circle(
                    Rect::new(0.0, 0.0, metrics.size, metrics.size).inset(inset),
                ),
            };
            body(canvas, kind, &outline, &appearance, &shadows)?;
        }
        ControlKind::TextField | ControlKind::ChoiceBox => {
            let outline = Outline::rounded_rect(bounds.inset(sr), metrics.corner_radius / 2.0);
            body(canvas, kind, &outline, &appearance, &shadows)?;
        }
    }
    Ok(())
}

/// The `size` square a radio button or checkbox draws in, centered vertically.
fn indicator_square(metrics: &Metrics) -> Rect {
    let y = (metrics.height - metrics.size) * 0.5;
    Rect::new(0.0, y, metrics.size, metrics.size)
}

fn body(
    canvas: &mut Canvas,
    kind: ControlKind,
    outline: &Outline,
    appearance: &Appearance,
    shadows: &ShadowSet,
) -> Result<()> {
    let bounds = outline.bounds();
    if bounds.is_empty() {
        log::warn!("{:?} has no area left after its shadow margin", kind);
        return Err(ColorError::EmptyArea {
            width: bounds.width,
            height: bounds.height,
        });
    }
    match appearance.effect {
        Effect::Outer => {
            canvas.dual_shadow(outline, &shadows.outer);
            canvas.fill(outline, appearance.fill);
        }
        Effect::Inner => {
            canvas.fill(outline, appearance.fill);
            canvas.dual_shadow(outline, &shadows.inner);
        }
        Effect::None => canvas.fill(outline, appearance.fill),
    }
    Ok(())
}

fn content(canvas: &mut Canvas, outline: &Outline, appearance: &Appearance, shadows: &ShadowSet) {
    if appearance.content_glow {
        canvas.drop_shadow(outline, &shadows.glow);
    }
    canvas.fill(outline, appearance.content_color);
}

fn paint_knob(
    canvas: &mut Canvas,
    on: bool,
    palette: &Palette,
    metrics: &Metrics,
    inner: &DualShadow,
) {
    let sr = metrics.shadow_radius;
    let knob_width = metrics.width / 2.0 - sr;
    let knob_offset = sr + KNOB_GAP;
    let knob_height = metrics.height - 2.0 * sr - 2.0 * KNOB_GAP;
    // Left when on.
    let x = if on {
        knob_offset
    } else {
        metrics.width - knob_offset - knob_width
    };
    let rect = Rect::new(x, knob_offset, knob_width, knob_height);
    if rect.is_empty() {
        log::warn!("switch too small for its knob: {}x{}", metrics.width, metrics.height);
        return;
    }
    let knob = Outline::rounded_rect(rect, metrics.corner_radius * 0.8 / 2.0);
    canvas.fill(&knob, palette.background);
    canvas.dual_shadow(&knob, &inner.halved());
}
