//! Size-driven shading parameters.
//!
//! Every control derives its corner radius, shadow radius, shadow offset and
//! glow radius from its smaller side. The formulas are the same linear
//! functions across controls; the clamp ranges differ per control kind.

use crate::color::clamp;
use crate::error::{ColorError, Result};

/// The controls this crate knows how to shade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    Button,
    ToggleButton,
    RadioButton,
    CheckBox,
    Switch,
    Container,
    TextField,
    ChoiceBox,
}

impl ControlKind {
    pub const ALL: [ControlKind; 8] = [
        ControlKind::Button,
        ControlKind::ToggleButton,
        ControlKind::RadioButton,
        ControlKind::CheckBox,
        ControlKind::Switch,
        ControlKind::Container,
        ControlKind::TextField,
        ControlKind::ChoiceBox,
    ];

    /// Controls that lay out a text row and so never get shorter than two lines of font.
    fn grows_to_font(&self) -> bool {
        matches!(
            self,
            ControlKind::ToggleButton
                | ControlKind::RadioButton
                | ControlKind::CheckBox
                | ControlKind::Switch
        )
    }

    pub fn size_hints(&self) -> SizeHints {
        let (pref_width, pref_height) = match self {
            ControlKind::Button | ControlKind::ToggleButton => (24.0, 24.0),
            ControlKind::RadioButton
            | ControlKind::CheckBox
            | ControlKind::TextField
            | ControlKind::ChoiceBox => (120.0, 24.0),
            ControlKind::Switch => (100.0, 24.0),
            ControlKind::Container => (100.0, 100.0),
        };
        let max = match self {
            ControlKind::Container => 2048.0,
            _ => 1024.0,
        };
        SizeHints {
            min_width: 10.0,
            min_height: 10.0,
            pref_width,
            pref_height,
            max_width: max,
            max_height: max,
        }
    }
}

/// Outline of a control's background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Shape {
    #[default]
    Rectangular,
    Pill,
    Circular,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeHints {
    pub min_width: f64,
    pub min_height: f64,
    pub pref_width: f64,
    pub pref_height: f64,
    pub max_width: f64,
    pub max_height: f64,
}

impl SizeHints {
    /// Clamp a requested size into the min/max range.
    pub fn constrain(&self, width: f64, height: f64) -> (f64, f64) {
        (
            clamp(self.min_width, self.max_width, width),
            clamp(self.min_height, self.max_height, height),
        )
    }
}

/// Shading parameters for one control at one size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub width: f64,
    pub height: f64,
    /// The smaller of `width` and `height`.
    pub size: f64,
    pub corner_radius: f64,
    pub shadow_radius: f64,
    pub shadow_offset: f64,
    /// Zero for controls that never glow.
    pub glow_radius: f64,
}

impl Metrics {
    /// Derive metrics for a control laid out at `width` x `height`.
    ///
    /// `font_size` only matters for controls that host a text row: their
    /// height never drops below twice the font size. The size is then kept
    /// within the kind's [`SizeHints`], and a circular switch shrinks to a
    /// `size` square.
    pub fn compute(
        kind: ControlKind,
        shape: Shape,
        width: f64,
        height: f64,
        font_size: f64,
    ) -> Result<Self> {
        if width.is_nan() || height.is_nan() || font_size.is_nan() {
            return Err(ColorError::NotANumber {
                what: "control dimension",
            });
        }
        if width.is_infinite() || height.is_infinite() || font_size.is_infinite() {
            return Err(ColorError::NotFinite {
                what: "control dimension",
            });
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(ColorError::EmptyArea { width, height });
        }

        let height = if kind.grows_to_font() {
            clamp(font_size * 2.0, f64::MAX, height)
        } else {
            height
        };
        let (width, height) = kind.size_hints().constrain(width, height);
        let size = width.min(height);
        let (width, height) = if kind == ControlKind::Switch && shape == Shape::Circular {
            (size, size)
        } else {
            (width, height)
        };

        let corner_radius = corner_radius(kind, shape, size);
        let shadow_max = match kind {
            ControlKind::Switch | ControlKind::ChoiceBox => 6.0,
            ControlKind::Container => 5.0,
            _ => f64::MAX,
        };
        let glow_radius = match kind {
            ControlKind::Container | ControlKind::ChoiceBox => 0.0,
            // Text fields keep a fixed glow regardless of size.
            ControlKind::TextField => 10.0,
            ControlKind::Switch => clamp(4.0, 8.0, size * 0.2),
            _ => clamp(4.0, f64::MAX, size * 0.2),
        };

        Ok(Self {
            width,
            height,
            size,
            corner_radius,
            shadow_radius: clamp(2.0, shadow_max, 0.12 * size),
            shadow_offset: clamp(2.0, shadow_max, 0.04 * size),
            glow_radius,
        })
    }
}

fn corner_radius(kind: ControlKind, shape: Shape, size: f64) -> f64 {
    let radius = match kind {
        ControlKind::Button | ControlKind::ToggleButton => match shape {
            Shape::Rectangular => 0.1 * size,
            Shape::Pill => size / 1.25,
            Shape::Circular => size,
        },
        ControlKind::RadioButton => size,
        ControlKind::CheckBox => 0.1 * size,
        ControlKind::TextField => size / 1.25,
        ControlKind::Switch => match shape {
            Shape::Rectangular => clamp(1.0, 10.0, 0.1 * size),
            Shape::Pill => clamp(1.0, size, size / 1.25),
            Shape::Circular => size,
        },
        ControlKind::Container => match shape {
            Shape::Rectangular => clamp(1.0, 10.0, 0.1 * size),
            Shape::Pill => clamp(1.0, 10.0, size / 1.25),
            Shape::Circular => size,
        },
        ControlKind::ChoiceBox => match shape {
            Shape::Rectangular => clamp(1.0, 10.0, 0.1 * size),
            Shape::Pill | Shape::Circular => clamp(1.0, size, size / 1.25),
        },
    };
    radius.max(1.0)
}
