use super::{clamp, Color};

/// Hue (degrees), saturation and luminance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub luminance: f64,
}

pub fn rgb_to_hsl(red: f64, green: f64, blue: f64) -> Hsl {
    let min = red.min(green.min(blue));
    let max = red.max(green.max(blue));

    // Only the red branch can go negative, so only it is wrapped.
    let hue = if max == min {
        0.0
    } else if max == red {
        ((60.0 * (green - blue) / (max - min)) + 360.0) % 360.0
    } else if max == green {
        (60.0 * (blue - red) / (max - min)) + 120.0
    } else {
        (60.0 * (red - green) / (max - min)) + 240.0
    };

    let luminance = (max + min) / 2.0;

    let saturation = if max == min {
        0.0
    } else if luminance <= 0.5 {
        (max - min) / (max + min)
    } else {
        (max - min) / (2.0 - max - min)
    };

    Hsl {
        hue,
        saturation,
        luminance,
    }
}

/// Inverse of [`rgb_to_hsl`].
///
/// Saturation, luminance and opacity are clamped to `[0, 1]`. The hue is
/// reduced modulo 360 and normalized to `[0, 1)`, negative hues included.
/// A NaN hue, saturation or luminance turns all three channels NaN.
pub fn hsl_to_rgb(hue: f64, saturation: f64, luminance: f64, opacity: f64) -> Color {
    let saturation = clamp(0.0, 1.0, saturation);
    let luminance = clamp(0.0, 1.0, luminance);
    let opacity = clamp(0.0, 1.0, opacity);

    if hue.is_nan() || saturation.is_nan() || luminance.is_nan() {
        return Color::rgba(f64::NAN, f64::NAN, f64::NAN, opacity);
    }

    let hue = hue.rem_euclid(360.0) / 360.0;

    let q = if luminance < 0.5 {
        luminance * (1.0 + saturation)
    } else {
        (luminance + saturation) - (saturation * luminance)
    };
    let p = 2.0 * luminance - q;

    let r = clamp(0.0, 1.0, hue_to_rgb(p, q, hue + 1.0 / 3.0));
    let g = clamp(0.0, 1.0, hue_to_rgb(p, q, hue));
    let b = clamp(0.0, 1.0, hue_to_rgb(p, q, hue - 1.0 / 3.0));

    Color::rgba(r, g, b, opacity)
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if 6.0 * t < 1.0 {
        return p + (q - p) * 6.0 * t;
    }
    if 2.0 * t < 1.0 {
        return q;
    }
    if 3.0 * t < 2.0 {
        return p + (q - p) * 6.0 * (2.0 / 3.0 - t);
    }
    p
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        hsl_to_rgb(hsl.hue, hsl.saturation, hsl.luminance, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_primaries() {
        let red = rgb_to_hsl(1.0, 0.0, 0.0);
        assert_eq!(red.hue, 0.0);
        assert_eq!(red.saturation, 1.0);
        assert_eq!(red.luminance, 0.5);

        assert_eq!(rgb_to_hsl(0.0, 1.0, 0.0).hue, 120.0);
        assert_eq!(rgb_to_hsl(0.0, 0.0, 1.0).hue, 240.0);
    }

    #[test]
    fn test_secondaries_follow_branch_order() {
        // Ties on max resolve to the first matching channel: red, then green.
        assert_eq!(rgb_to_hsl(1.0, 1.0, 0.0).hue, 60.0);
        assert_eq!(rgb_to_hsl(0.0, 1.0, 1.0).hue, 180.0);
        assert_eq!(rgb_to_hsl(1.0, 0.0, 1.0).hue, 300.0);
    }

    #[test]
    fn test_gray_has_no_hue() {
        let gray = rgb_to_hsl(0.3, 0.3, 0.3);
        assert_eq!(gray.hue, 0.0);
        assert_eq!(gray.saturation, 0.0);
        assert!(approx_eq(gray.luminance, 0.3));
    }

    #[test]
    fn test_hsl_to_rgb_known_values() {
        let c = hsl_to_rgb(120.0, 1.0, 0.25, 1.0);
        assert!(approx_eq(c.r, 0.0));
        assert!(approx_eq(c.g, 0.5));
        assert!(approx_eq(c.b, 0.0));

        let white = hsl_to_rgb(42.0, 0.7, 1.0, 1.0);
        assert!(approx_eq(white.r, 1.0) && approx_eq(white.g, 1.0) && approx_eq(white.b, 1.0));
    }

    #[test]
    fn test_hsl_to_rgb_wraps_hue() {
        let a = hsl_to_rgb(30.0, 0.8, 0.4, 1.0);
        let b = hsl_to_rgb(390.0, 0.8, 0.4, 1.0);
        let c = hsl_to_rgb(-330.0, 0.8, 0.4, 1.0);
        assert!(approx_eq(a.r, b.r) && approx_eq(a.g, b.g) && approx_eq(a.b, b.b));
        assert!(approx_eq(a.r, c.r) && approx_eq(a.g, c.g) && approx_eq(a.b, c.b));
    }

    #[test]
    fn test_hsl_to_rgb_clamps_inputs() {
        let c = hsl_to_rgb(0.0, 5.0, 0.5, 9.0);
        assert!(approx_eq(c.r, 1.0));
        assert!(approx_eq(c.g, 0.0));
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_round_trip() {
        let mut samples = Vec::new();
        for r in 0..=8 {
            for g in 0..=8 {
                for b in 0..=8 {
                    samples.push((r as f64 / 8.0, g as f64 / 8.0, b as f64 / 8.0));
                }
            }
        }
        for (r, g, b) in samples {
            let hsl = rgb_to_hsl(r, g, b);
            let back: Color = hsl.into();
            assert!(approx_eq(back.r, r), "{:?} {:?}", (r, g, b), back);
            assert!(approx_eq(back.g, g), "{:?} {:?}", (r, g, b), back);
            assert!(approx_eq(back.b, b), "{:?} {:?}", (r, g, b), back);
        }
    }

    #[test]
    fn test_nan_input_poisons_every_channel() {
        let c = hsl_to_rgb(f64::NAN, 1.0, 0.5, 1.0);
        assert!(c.r.is_nan() && c.g.is_nan() && c.b.is_nan());
        assert_eq!(c.a, 1.0);
        let c = hsl_to_rgb(120.0, f64::NAN, 0.5, 0.25);
        assert!(c.r.is_nan() && c.g.is_nan() && c.b.is_nan());
        assert_eq!(c.a, 0.25);
    }
}
