//! Piecewise-linear color ramps.
//!
//! A ramp is a list of [`GradientStop`]s over `[0, 1]`. Stops do not need to
//! be sorted or unique: [`color_at`] orders them, lets later duplicates win,
//! and extends the outermost colors to the 0.0 and 1.0 boundaries.

use std::cmp::Ordering;

use crate::color::{clamp, Color};
use crate::error::{ColorError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    offset: f64,
    color: Color,
}

impl GradientStop {
    /// Offsets outside `[0, 1]` are clamped. NaN is kept as-is and rejected
    /// later by [`color_at`].
    pub fn new(offset: f64, color: Color) -> Self {
        Self {
            // `+ 0.0` folds -0.0 into 0.0 so both sort as the same offset.
            offset: clamp(0.0, 1.0, offset) + 0.0,
            color,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// Blend the colors of two stops at `position`.
///
/// Red, green, blue and opacity are interpolated independently and clamped to
/// `[0, 1]`. Fails when both stops sit at the same offset.
pub fn interpolate_color(
    lower: &GradientStop,
    upper: &GradientStop,
    position: f64,
) -> Result<Color> {
    if position.is_nan() {
        return Err(ColorError::NotANumber {
            what: "gradient position",
        });
    }
    let span = upper.offset - lower.offset;
    if span == 0.0 {
        return Err(ColorError::CoincidentStops {
            offset: lower.offset,
        });
    }
    let t = (position - lower.offset) / span;

    let from = lower.color;
    let to = upper.color;
    // Exact at both ends of the span.
    let channel = |a: f64, b: f64| {
        let value = if t == 1.0 { b } else { a + (b - a) * t };
        clamp(0.0, 1.0, value)
    };

    Ok(Color::rgba(
        channel(from.r, to.r),
        channel(from.g, to.g),
        channel(from.b, to.b),
        channel(from.a, to.a),
    ))
}

/// Sample the ramp described by `stops` at `position` (clamped to `[0, 1]`).
///
/// An empty list yields opaque black. A position that falls exactly on an
/// interior stop is blended from that stop's neighbours.
pub fn color_at(stops: &[GradientStop], position: f64) -> Result<Color> {
    if position.is_nan() {
        return Err(ColorError::NotANumber {
            what: "gradient position",
        });
    }
    if stops.iter().any(|stop| stop.offset.is_nan()) {
        return Err(ColorError::NotANumber {
            what: "gradient stop offset",
        });
    }

    let ramp = normalize_stops(stops);
    let (Some(&first), Some(&last)) = (ramp.first(), ramp.last()) else {
        return Ok(Color::BLACK);
    };
    if ramp.len() == 1 {
        return Ok(first.color);
    }

    let position = clamp(0.0, 1.0, position);
    let mut lower = first;
    let mut upper = last;
    for stop in &ramp {
        if stop.offset < position {
            lower = *stop;
        }
        if stop.offset > position {
            upper = *stop;
            break;
        }
    }
    interpolate_color(&lower, &upper, position)
}

/// Sort by offset, keep the last stop per offset, and pin both boundaries.
fn normalize_stops(stops: &[GradientStop]) -> Vec<GradientStop> {
    let mut sorted = stops.to_vec();
    // Stable, so equal offsets keep their input order.
    sorted.sort_by(|a, b| a.offset.partial_cmp(&b.offset).unwrap_or(Ordering::Equal));

    let mut ramp: Vec<GradientStop> = Vec::with_capacity(sorted.len() + 2);
    for stop in sorted {
        match ramp.last_mut() {
            Some(previous) if previous.offset == stop.offset => *previous = stop,
            _ => ramp.push(stop),
        }
    }

    if let Some(&first) = ramp.first() {
        if first.offset > 0.0 {
            ramp.insert(0, GradientStop::new(0.0, first.color));
        }
    }
    if let Some(&last) = ramp.last() {
        if last.offset < 1.0 {
            ramp.push(GradientStop::new(1.0, last.color));
        }
    }
    ramp
}

/// An owned list of stops.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gradient {
    stops: Vec<GradientStop>,
}

impl Gradient {
    pub fn new(stops: impl IntoIterator<Item = GradientStop>) -> Self {
        Self {
            stops: stops.into_iter().collect(),
        }
    }

    /// Two-stop ramp from `start` at 0.0 to `end` at 1.0.
    pub fn linear(start: Color, end: Color) -> Self {
        Self::new([GradientStop::new(0.0, start), GradientStop::new(1.0, end)])
    }

    pub fn stop(mut self, offset: f64, color: Color) -> Self {
        self.stops.push(GradientStop::new(offset, color));
        self
    }

    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    pub fn color_at(&self, position: f64) -> Result<Color> {
        color_at(&self.stops, position)
    }

    /// `count` evenly spaced samples from 0.0 to 1.0 inclusive.
    pub fn sample(&self, count: usize) -> Result<Vec<Color>> {
        match count {
            0 => Ok(Vec::new()),
            1 => Ok(vec![self.color_at(0.0)?]),
            _ => (0..count)
                .map(|i| self.color_at(i as f64 / (count - 1) as f64))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

    fn approx_color(a: Color, b: Color) -> bool {
        (a.r - b.r).abs() < 1e-9
            && (a.g - b.g).abs() < 1e-9
            && (a.b - b.b).abs() < 1e-9
            && (a.a - b.a).abs() < 1e-9
    }

    #[test]
    fn test_stop_offset_is_clamped() {
        assert_eq!(GradientStop::new(-2.0, RED).offset(), 0.0);
        assert_eq!(GradientStop::new(3.0, RED).offset(), 1.0);
        assert!(GradientStop::new(-0.0, RED).offset().is_sign_positive());
    }

    #[test]
    fn test_interpolate_quarter() {
        let lower = GradientStop::new(0.2, Color::rgba(0.0, 0.0, 0.0, 0.0));
        let upper = GradientStop::new(0.6, Color::rgba(1.0, 0.5, 0.25, 1.0));
        let c = interpolate_color(&lower, &upper, 0.3).unwrap();
        assert!(approx_color(c, Color::rgba(0.25, 0.125, 0.0625, 0.25)));
    }

    #[test]
    fn test_interpolate_clamps_outside_span() {
        let lower = GradientStop::new(0.0, Color::rgb(0.0, 0.0, 0.0));
        let upper = GradientStop::new(0.5, Color::rgb(1.0, 1.0, 1.0));
        let c = interpolate_color(&lower, &upper, 1.0).unwrap();
        assert_eq!(c, Color::WHITE);
    }

    #[test]
    fn test_interpolate_coincident_stops_fails() {
        let a = GradientStop::new(0.4, RED);
        let b = GradientStop::new(0.4, BLUE);
        let err = interpolate_color(&a, &b, 0.4).unwrap_err();
        assert!(matches!(err, ColorError::CoincidentStops { offset } if offset == 0.4));
    }

    #[test]
    fn test_empty_is_black() {
        assert_eq!(color_at(&[], 0.7).unwrap(), Color::BLACK);
    }

    #[test]
    fn test_midpoint() {
        let stops = [GradientStop::new(0.0, RED), GradientStop::new(1.0, BLUE)];
        assert_eq!(color_at(&stops, 0.5).unwrap(), Color::rgb(0.5, 0.0, 0.5));
    }

    #[test]
    fn test_unsorted_and_duplicate_stops() {
        let stops = [
            GradientStop::new(1.0, BLUE),
            GradientStop::new(0.0, GREEN),
            GradientStop::new(0.0, RED),
        ];
        // The later stop at 0.0 wins.
        assert_eq!(color_at(&stops, 0.0).unwrap(), RED);
        assert_eq!(color_at(&stops, 0.5).unwrap(), Color::rgb(0.5, 0.0, 0.5));
    }

    #[test]
    fn test_boundaries_are_extended() {
        let stops = [GradientStop::new(0.25, RED), GradientStop::new(0.75, BLUE)];
        assert_eq!(color_at(&stops, 0.0).unwrap(), RED);
        assert_eq!(color_at(&stops, 0.1).unwrap(), RED);
        assert_eq!(color_at(&stops, 1.0).unwrap(), BLUE);
        assert!(approx_color(color_at(&stops, 0.9).unwrap(), BLUE));
        assert!(approx_color(
            color_at(&stops, 0.5).unwrap(),
            Color::rgb(0.5, 0.0, 0.5)
        ));
    }

    #[test]
    fn test_single_stop_is_constant() {
        let stops = [GradientStop::new(0.3, GREEN)];
        for p in [-1.0, 0.0, 0.1, 0.3, 0.5, 1.0, 2.0] {
            assert_eq!(color_at(&stops, p).unwrap(), GREEN, "position {}", p);
        }
    }

    #[test]
    fn test_exact_interior_hit_uses_neighbours() {
        let stops = [
            GradientStop::new(0.0, RED),
            GradientStop::new(0.5, GREEN),
            GradientStop::new(1.0, BLUE),
        ];
        let c = color_at(&stops, 0.5).unwrap();
        assert_eq!(c, Color::rgb(0.5, 0.0, 0.5));
        let near = color_at(&stops, 0.25).unwrap();
        assert!(approx_color(near, Color::rgb(0.5, 0.5, 0.0)));
    }

    #[test]
    fn test_nan_is_rejected() {
        let stops = [GradientStop::new(0.0, RED), GradientStop::new(1.0, BLUE)];
        assert!(matches!(
            color_at(&stops, f64::NAN),
            Err(ColorError::NotANumber { .. })
        ));
        let bad = [GradientStop::new(f64::NAN, RED)];
        assert!(matches!(
            color_at(&bad, 0.5),
            Err(ColorError::NotANumber { .. })
        ));
    }

    #[test]
    fn test_gradient_sample() {
        let gradient = Gradient::linear(Color::BLACK, Color::WHITE);
        let samples = gradient.sample(5).unwrap();
        assert_eq!(samples.len(), 5);
        assert_eq!(samples[0], Color::BLACK);
        assert_eq!(samples[2], Color::rgb(0.5, 0.5, 0.5));
        assert_eq!(samples[4], Color::WHITE);
        assert!(gradient.sample(0).unwrap().is_empty());
    }

    #[test]
    fn test_gradient_builder() {
        let gradient = Gradient::default().stop(0.0, RED).stop(1.0, GREEN);
        assert_eq!(gradient.stops().len(), 2);
        assert_eq!(gradient.color_at(0.0).unwrap(), RED);
    }
}
