//! Color math and software shading for neumorphic ("soft UI") controls.
//!
//! The color layer ([`color`], [`gradient`]) is pure math on RGBA values.
//! On top of it, [`palette`] derives the shadow and highlight colors for a
//! background, [`metrics`] sizes corners, shadows and glows per control, and
//! [`raster`] paints the result into an image.
//!
//! ```no_run
//! use neumorph::prelude::*;
//!
//! let style = StyleConfig::new().shape(Shape::Pill);
//! let canvas = style.render(ControlKind::Button, ControlState::default(), 160.0, 48.0)?;
//! canvas.save_png("button.png")?;
//! # Ok::<(), neumorph::error::ColorError>(())
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod gradient;
pub mod metrics;
pub mod palette;
pub mod raster;
pub mod shadow;
pub mod state;

pub mod prelude {
    pub use crate::color::{
        clamp, color_to_yuv, derive, hsl_to_rgb, is_bright, is_dark, rgb_to_hsl, with_opacity,
        Color, Hsl, Yuv,
    };
    pub use crate::config::{ContainerStyle, StyleConfig};
    pub use crate::error::ColorError;
    pub use crate::gradient::{color_at, interpolate_color, Gradient, GradientStop};
    pub use crate::metrics::{ControlKind, Metrics, Shape};
    pub use crate::palette::Palette;
    pub use crate::raster::{paint_control, Canvas};
    pub use crate::state::{Appearance, ControlState, Effect};
}
