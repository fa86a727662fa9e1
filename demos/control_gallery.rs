//! Paints every control in its main states, on a light and a dark surface.
//!
//! Run with `cargo run --example control_gallery -- [output-dir]`.

use std::path::PathBuf;

use neumorph::prelude::*;

fn states(kind: ControlKind) -> Vec<(&'static str, ControlState)> {
    let rest = ControlState::default();
    match kind {
        ControlKind::Button => vec![
            ("rest", rest),
            ("pressed", rest | ControlState::PRESSED),
            (
                "selected",
                rest | ControlState::SELECTABLE | ControlState::SELECTED,
            ),
        ],
        ControlKind::ToggleButton | ControlKind::RadioButton | ControlKind::CheckBox => {
            vec![("off", rest), ("on", rest | ControlState::SELECTED)]
        }
        ControlKind::Switch => vec![("off", rest), ("on", rest | ControlState::ON)],
        ControlKind::Container => vec![("embossed", rest), ("sunken", rest | ControlState::SUNKEN)],
        ControlKind::TextField | ControlKind::ChoiceBox => vec![("rest", rest)],
    }
}

fn size(kind: ControlKind) -> (f64, f64) {
    match kind {
        ControlKind::RadioButton | ControlKind::CheckBox => (48.0, 48.0),
        ControlKind::Switch => (120.0, 48.0),
        ControlKind::Container => (160.0, 160.0),
        _ => (160.0, 48.0),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let out = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("gallery"));
    std::fs::create_dir_all(&out)?;

    let themes = [
        ("light", StyleConfig::new()),
        (
            "dark",
            StyleConfig::new()
                .background(Color::web("#2b2f33")?)
                .text(Color::web("#c4c8cc")?),
        ),
    ];
    let shapes = [
        ("rect", Shape::Rectangular),
        ("pill", Shape::Pill),
        ("circle", Shape::Circular),
    ];

    let mut written = 0;
    for (theme, base) in &themes {
        for (shape_name, shape) in shapes {
            let style = base.shape(shape);
            for kind in ControlKind::ALL {
                let (width, height) = size(kind);
                for (state_name, state) in states(kind) {
                    let canvas = match style.render(kind, state, width, height) {
                        Ok(canvas) => canvas,
                        Err(e) => {
                            log::warn!("skipping {:?} {}: {}", kind, state_name, e);
                            continue;
                        }
                    };
                    let name = format!("{theme}-{shape_name}-{kind:?}-{state_name}.png")
                        .to_lowercase();
                    canvas.save_png(out.join(name))?;
                    written += 1;
                }
            }
        }
    }
    log::info!("wrote {} images to {}", written, out.display());
    Ok(())
}
