//! Prints the derived palette for one or more background colors.
//!
//! `cargo run --example palette_dump -- "#e2e6e8" "#2b2f33"`

use neumorph::prelude::*;

fn hex(color: Color) -> String {
    let [r, g, b, a] = color.to_rgba8();
    if a == 255 {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

fn main() -> Result<(), ColorError> {
    let _ = env_logger::try_init();

    let mut backgrounds: Vec<String> = std::env::args().skip(1).collect();
    if backgrounds.is_empty() {
        backgrounds = vec!["#e2e6e8".into(), "#2b2f33".into()];
    }

    for input in &backgrounds {
        let background = Color::web(input)?;
        let palette = Palette::default().with_background(background);
        let yuv = color_to_yuv(background);
        let hsl = background.to_hsl();
        println!(
            "{} ({}, luma {:.3}, hsl {:.1}/{:.3}/{:.3})",
            hex(background),
            if palette.is_bright() { "bright" } else { "dark" },
            yuv.y,
            hsl.hue,
            hsl.saturation,
            hsl.luminance,
        );
        for (name, color) in [
            ("pressed", palette.pressed),
            ("bright shadow", palette.bright_shadow),
            ("dark shadow", palette.dark_shadow),
            ("text background", palette.text_background),
            ("glow", palette.glow),
        ] {
            println!("  {:<16}{}", name, hex(color));
        }

        let ramp = Gradient::linear(
            palette.dark_shadow.opacity(1.0),
            palette.bright_shadow.opacity(1.0),
        );
        let samples: Vec<String> = ramp.sample(5)?.into_iter().map(hex).collect();
        println!("  {:<16}{}", "ramp", samples.join(" "));
    }
    Ok(())
}
