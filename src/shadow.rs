use crate::color::Color;
use crate::metrics::Metrics;
use crate::palette::Palette;

/// One blurred shadow pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowLayer {
    pub color: Color,
    /// Blur radius in logical pixels
    pub radius: f64,
    /// Offset in logical pixels (x, y)
    pub offset: (f64, f64),
}

impl ShadowLayer {
    pub fn new(color: Color, radius: f64, offset: (f64, f64)) -> Self {
        Self {
            color,
            radius,
            offset,
        }
    }

    pub fn none() -> Self {
        Self {
            color: Color::TRANSPARENT,
            radius: 0.0,
            offset: (0.0, 0.0),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.color.a > 0.0 && self.radius > 0.0
    }
}

/// A highlight from the top-left paired with a shade from the bottom-right.
///
/// Drawn outside the shape it reads as raised; drawn inside (`inset`) as sunken.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DualShadow {
    pub bright: ShadowLayer,
    pub dark: ShadowLayer,
    pub inset: bool,
}

impl DualShadow {
    pub fn new(palette: &Palette, radius: f64, offset: f64, inset: bool) -> Self {
        Self {
            bright: ShadowLayer::new(palette.bright_shadow, radius, (-offset, -offset)),
            dark: ShadowLayer::new(palette.dark_shadow, radius, (offset, offset)),
            inset,
        }
    }

    /// Same layers with offsets halved, for shapes nested inside another.
    pub fn halved(&self) -> Self {
        let half = |layer: ShadowLayer| ShadowLayer {
            offset: (layer.offset.0 / 2.0, layer.offset.1 / 2.0),
            ..layer
        };
        Self {
            bright: half(self.bright),
            dark: half(self.dark),
            inset: self.inset,
        }
    }

    pub fn layers(&self) -> [ShadowLayer; 2] {
        [self.dark, self.bright]
    }
}

/// All shadows a control can paint at its current size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowSet {
    pub outer: DualShadow,
    pub inner: DualShadow,
    pub glow: ShadowLayer,
}

impl ShadowSet {
    pub fn new(palette: &Palette, metrics: &Metrics) -> Self {
        let glow = if metrics.glow_radius > 0.0 {
            ShadowLayer::new(palette.glow, metrics.glow_radius, (0.0, 0.0))
        } else {
            ShadowLayer::none()
        };
        Self {
            outer: DualShadow::new(palette, metrics.shadow_radius, metrics.shadow_offset, false),
            inner: DualShadow::new(palette, metrics.shadow_radius, metrics.shadow_offset, true),
            glow,
        }
    }
}
