//! Color values and the color math behind neumorphic shading.
//!
//! A [`Color`] is a plain RGBA quadruple in `[0, 1]`. Everything that derives
//! one color from another lives in [`math`] (brightness, opacity, luma) and
//! [`hsl`] (HSL conversion), re-exported here.

mod hsl;
mod math;

pub use hsl::{hsl_to_rgb, rgb_to_hsl, Hsl};
pub use math::{clamp, color_to_yuv, derive, is_bright, is_dark, with_opacity, Yuv};

use crate::error::{ColorError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f64 / 255.0,
            g: ((hex >> 8) & 0xFF) as f64 / 255.0,
            b: (hex & 0xFF) as f64 / 255.0,
            a: 1.0,
        }
    }

    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    /// Parse a web hex color: `#rgb`, `#rrggbb` or `#rrggbbaa`, the `#` optional.
    pub fn web(input: &str) -> Result<Self> {
        let digits = input.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        let invalid = || ColorError::InvalidHex(input.to_string());

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;

        match digits.len() {
            3 => {
                let expand = |nibble: u32| (nibble & 0xF) * 17;
                let r = expand(value >> 8);
                let g = expand(value >> 4);
                let b = expand(value);
                Ok(Self::from_hex((r << 16) | (g << 8) | b))
            }
            6 => Ok(Self::from_hex(value)),
            8 => Ok(Self::from_hex(value >> 8).with_alpha((value & 0xFF) as f64 / 255.0)),
            _ => Err(invalid()),
        }
    }

    /// Build a color from hue (degrees), saturation and brightness, fully opaque.
    pub fn hsb(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self::hsba(hue, saturation, brightness, 1.0)
    }

    /// Build a color from hue (degrees), saturation, brightness and opacity.
    ///
    /// Saturation, brightness and opacity are clamped to `[0, 1]`; the hue
    /// wraps around 360. A NaN hue, saturation or brightness turns all three
    /// channels NaN.
    pub fn hsba(hue: f64, saturation: f64, brightness: f64, opacity: f64) -> Self {
        let saturation = clamp(0.0, 1.0, saturation);
        let brightness = clamp(0.0, 1.0, brightness);
        let opacity = clamp(0.0, 1.0, opacity);

        if hue.is_nan() || saturation.is_nan() || brightness.is_nan() {
            return Self::rgba(f64::NAN, f64::NAN, f64::NAN, opacity);
        }

        if saturation == 0.0 {
            return Self::rgba(brightness, brightness, brightness, opacity);
        }

        let h = hue.rem_euclid(360.0) / 360.0;
        let sector = (h - h.floor()) * 6.0;
        let f = sector - sector.floor();
        let p = brightness * (1.0 - saturation);
        let q = brightness * (1.0 - saturation * f);
        let t = brightness * (1.0 - saturation * (1.0 - f));

        let (r, g, b) = match sector as u8 {
            0 => (brightness, t, p),
            1 => (q, brightness, p),
            2 => (p, brightness, t),
            3 => (p, q, brightness),
            4 => (t, p, brightness),
            _ => (brightness, p, q),
        };
        Self::rgba(r, g, b, opacity)
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    fn max_channel(&self) -> f64 {
        self.r.max(self.g).max(self.b)
    }

    fn min_channel(&self) -> f64 {
        self.r.min(self.g).min(self.b)
    }

    /// Hue in degrees, `[0, 360)`. Grays report 0.
    pub fn hue(&self) -> f64 {
        let max = self.max_channel();
        let min = self.min_channel();
        if self.saturation() == 0.0 {
            return 0.0;
        }
        let range = max - min;
        let red = (max - self.r) / range;
        let green = (max - self.g) / range;
        let blue = (max - self.b) / range;

        let sector = if self.r == max {
            blue - green
        } else if self.g == max {
            2.0 + red - blue
        } else {
            4.0 + green - red
        };
        let mut hue = sector / 6.0;
        if hue < 0.0 {
            hue += 1.0;
        }
        hue * 360.0
    }

    /// HSB saturation, `[0, 1]`.
    pub fn saturation(&self) -> f64 {
        let max = self.max_channel();
        if max == 0.0 {
            0.0
        } else {
            (max - self.min_channel()) / max
        }
    }

    /// HSB brightness: the largest of the three channels.
    pub fn brightness(&self) -> f64 {
        self.max_channel()
    }

    /// Convert to 8-bit channels, rounding half up.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let channel = |v: f64| (clamp(0.0, 1.0, v) * 255.0 + 0.5).floor() as u8;
        [channel(self.r), channel(self.g), channel(self.b), channel(self.a)]
    }

    pub fn from_rgba8(rgba: [u8; 4]) -> Self {
        Self::rgba(
            rgba[0] as f64 / 255.0,
            rgba[1] as f64 / 255.0,
            rgba[2] as f64 / 255.0,
            rgba[3] as f64 / 255.0,
        )
    }

    /// Color with the same RGB and a clamped opacity. See [`with_opacity`].
    pub fn opacity(self, opacity: f64) -> Self {
        with_opacity(self, opacity)
    }

    /// Scale HSB brightness by `factor`. See [`derive`].
    pub fn derive(self, factor: f64) -> Self {
        derive(self, factor)
    }

    pub fn is_bright(&self) -> bool {
        is_bright(*self)
    }

    pub fn is_dark(&self) -> bool {
        is_dark(*self)
    }

    pub fn to_yuv(&self) -> Yuv {
        color_to_yuv(*self)
    }

    pub fn to_hsl(&self) -> Hsl {
        rgb_to_hsl(self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}
