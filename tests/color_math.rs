use neumorph::prelude::*;

fn channel_grid() -> impl Iterator<Item = (f64, f64, f64)> {
    let steps = [0.0, 0.1, 0.25, 0.333, 0.5, 0.6, 0.75, 0.9, 1.0];
    steps.into_iter().flat_map(move |r| {
        steps
            .into_iter()
            .flat_map(move |g| steps.into_iter().map(move |b| (r, g, b)))
    })
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn clamp_is_idempotent_and_bounded() {
    for v in [-10.0, -0.5, 0.0, 0.3, 1.0, 1.5, 42.0] {
        let once = clamp(0.0, 1.0, v);
        assert_eq!(clamp(0.0, 1.0, once), once);
        assert!((0.0..=1.0).contains(&once));
    }
    for v in [-3, 0, 7, 12] {
        let once = clamp(0, 10, v);
        assert_eq!(clamp(0, 10, once), once);
        assert!((0..=10).contains(&once));
    }
}

#[test]
fn hsl_round_trip() {
    for (r, g, b) in channel_grid() {
        let hsl = rgb_to_hsl(r, g, b);
        let back = hsl_to_rgb(hsl.hue, hsl.saturation, hsl.luminance, 1.0);
        assert!(
            approx(back.r, r) && approx(back.g, g) && approx(back.b, b),
            "({r}, {g}, {b}) came back as {back:?}"
        );
        assert!((0.0..360.0).contains(&hsl.hue));
    }
}

#[test]
fn bright_and_dark_are_complementary() {
    for (r, g, b) in channel_grid() {
        let color = Color::rgb(r, g, b);
        assert_ne!(is_bright(color), is_dark(color), "{color:?}");
    }
    let boundary = Yuv {
        y: 0.5,
        u: 0.0,
        v: 0.0,
    };
    assert!(boundary.is_bright());
    assert!(!boundary.is_dark());
}

#[test]
fn luma_keeps_the_wide_blue_weight() {
    let white = color_to_yuv(Color::WHITE);
    assert_eq!(white.y, 1.0);
    let blue = color_to_yuv(Color::rgb(0.0, 0.0, 1.0));
    assert!(approx(blue.y, 0.144));
    assert!(approx(blue.u, 0.436));
    let red = color_to_yuv(Color::rgb(1.0, 0.0, 0.0));
    assert!(approx(red.v, 0.615));
}

#[test]
fn derive_at_unit_factor_is_identity() {
    for (r, g, b) in channel_grid().filter(|&(r, g, b)| r.max(g).max(b) > 0.0) {
        let color = Color::rgb(r, g, b);
        let same = derive(color, 1.0);
        assert!(
            approx(same.r, r) && approx(same.g, g) && approx(same.b, b),
            "{color:?} became {same:?}"
        );
    }
}

#[test]
fn derive_lifts_black() {
    let lifted = derive(Color::BLACK, 1.0);
    assert_ne!(lifted, Color::BLACK);
    assert!(approx(lifted.brightness(), 0.05));
    assert_eq!(derive(Color::BLACK, 0.0), Color::BLACK);
}

#[test]
fn with_opacity_keeps_rgb() {
    let color = Color::rgb(0.2, 0.4, 0.6);
    assert_eq!(with_opacity(color, 0.3), Color::rgba(0.2, 0.4, 0.6, 0.3));
    assert_eq!(with_opacity(color, 7.0).a, 1.0);
    assert_eq!(with_opacity(color, -1.0).a, 0.0);
}

#[test]
fn color_at_empty_is_opaque_black() {
    for p in [0.0, 0.5, 1.0] {
        assert_eq!(color_at(&[], p).unwrap(), Color::rgba(0.0, 0.0, 0.0, 1.0));
    }
}

#[test]
fn color_at_midpoint_is_mean() {
    let red = Color::rgb(1.0, 0.0, 0.0);
    let blue = Color::rgb(0.0, 0.0, 1.0);
    let stops = [GradientStop::new(0.0, red), GradientStop::new(1.0, blue)];
    let mid = color_at(&stops, 0.5).unwrap();
    assert_eq!(mid, Color::rgb(0.5, 0.0, 0.5));
}

#[test]
fn color_at_hits_boundaries() {
    let ramps = [
        vec![
            GradientStop::new(0.2, Color::rgb(0.1, 0.7, 0.3)),
            GradientStop::new(0.6, Color::rgb(0.9, 0.2, 0.4)),
        ],
        vec![
            GradientStop::new(1.0, Color::rgba(0.3, 0.3, 0.3, 0.5)),
            GradientStop::new(0.0, Color::rgb(0.7, 0.1, 0.9)),
            GradientStop::new(0.5, Color::WHITE),
        ],
    ];
    for stops in &ramps {
        let mut sorted = stops.clone();
        sorted.sort_by(|a, b| a.offset().total_cmp(&b.offset()));
        let first = sorted[0].color();
        let last = sorted[sorted.len() - 1].color();
        assert_eq!(color_at(stops, 0.0).unwrap(), first);
        assert_eq!(color_at(stops, 1.0).unwrap(), last);
    }
}

#[test]
fn single_stop_is_constant() {
    let green = Color::rgb(0.0, 1.0, 0.0);
    let stops = [GradientStop::new(0.3, green)];
    for p in [0.0, 0.15, 0.3, 0.31, 0.8, 1.0] {
        assert_eq!(color_at(&stops, p).unwrap(), green);
    }
}

#[test]
fn coincident_stops_are_an_error() {
    let a = GradientStop::new(0.5, Color::WHITE);
    let b = GradientStop::new(0.5, Color::BLACK);
    assert!(matches!(
        interpolate_color(&a, &b, 0.5),
        Err(ColorError::CoincidentStops { .. })
    ));
}
