use super::Color;

const WEIGHT_RED: f64 = 0.299;
const WEIGHT_GREEN: f64 = 0.587;
// Not the ITU 0.114: every bright/dark decision downstream depends on this value.
const WEIGHT_BLUE: f64 = 0.144;
const U_MAX: f64 = 0.436;
const V_MAX: f64 = 0.615;

/// Brightness used in place of zero when brightening true black.
const BLACK_BRIGHTNESS_FLOOR: f64 = 0.05;

/// Clamp `value` into `[min, max]`.
///
/// Works for any ordered type. A NaN `value` compares false against both
/// bounds and is returned unchanged, so NaN propagates instead of turning
/// into a plausible color channel.
#[inline]
pub fn clamp<T: PartialOrd>(min: T, max: T, value: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Same RGB, opacity clamped to `[0, 1]`.
pub fn with_opacity(color: Color, opacity: f64) -> Color {
    Color::rgba(color.r, color.g, color.b, clamp(0.0, 1.0, opacity))
}

/// Scale the HSB brightness of `color` by `factor`, keeping hue and saturation.
///
/// Black has no brightness to scale, so when brightening it starts from 0.05
/// instead. This applies at `factor == 1.0` too.
/// The result is opaque.
pub fn derive(color: Color, factor: f64) -> Color {
    let hue = color.hue();
    let saturation = color.saturation();
    let mut brightness = color.brightness();
    if brightness == 0.0 && factor > 0.0 {
        brightness = BLACK_BRIGHTNESS_FLOOR;
    }
    Color::hsb(hue, saturation, clamp(0.0, 1.0, brightness * factor))
}

/// Luma / chroma triple from [`color_to_yuv`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Yuv {
    pub y: f64,
    pub u: f64,
    pub v: f64,
}

impl Yuv {
    /// `y >= 0.5`. At exactly 0.5 a color is bright and not dark.
    pub fn is_bright(&self) -> bool {
        self.y >= 0.5
    }

    pub fn is_dark(&self) -> bool {
        self.y < 0.5
    }
}

pub fn color_to_yuv(color: Color) -> Yuv {
    let y = clamp(
        0.0,
        1.0,
        WEIGHT_RED * color.r + WEIGHT_GREEN * color.g + WEIGHT_BLUE * color.b,
    );
    let u = clamp(-U_MAX, U_MAX, U_MAX * ((color.b - y) / (1.0 - WEIGHT_BLUE)));
    let v = clamp(-V_MAX, V_MAX, V_MAX * ((color.r - y) / (1.0 - WEIGHT_RED)));
    Yuv { y, u, v }
}

pub fn is_bright(color: Color) -> bool {
    color_to_yuv(color).is_bright()
}

pub fn is_dark(color: Color) -> bool {
    color_to_yuv(color).is_dark()
}
