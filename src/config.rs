use crate::color::Color;
use crate::error::Result;
use crate::metrics::{ControlKind, Metrics, Shape};
use crate::palette::{Palette, DEFAULT_BACKGROUND, DEFAULT_SELECTED, DEFAULT_TEXT};
use crate::raster::{paint_control, Canvas};
use crate::state::ControlState;

/// How a container sits relative to the surface behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContainerStyle {
    #[default]
    Embossed,
    Sunken,
}

/// Shared styling for a set of controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleConfig {
    pub background: Color,
    pub text: Color,
    pub selected: Color,
    pub shape: Shape,
    /// Font size in logical pixels; controls with a text row are at least
    /// twice this tall.
    pub font_size: f64,
    pub container_style: ContainerStyle,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND,
            text: DEFAULT_TEXT,
            selected: DEFAULT_SELECTED,
            shape: Shape::Rectangular,
            font_size: 10.0,
            container_style: ContainerStyle::Embossed,
        }
    }
}

impl StyleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn text(mut self, color: Color) -> Self {
        self.text = color;
        self
    }

    pub fn selected(mut self, color: Color) -> Self {
        self.selected = color;
        self
    }

    pub fn shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    pub fn font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    pub fn container_style(mut self, style: ContainerStyle) -> Self {
        self.container_style = style;
        self
    }

    pub fn palette(&self) -> Palette {
        Palette::new(self.background, self.text, self.selected)
    }

    pub fn metrics(&self, kind: ControlKind, width: f64, height: f64) -> Result<Metrics> {
        Metrics::compute(kind, self.shape, width, height, self.font_size)
    }

    /// `state` with the flags this style implies for `kind` folded in.
    pub fn state_for(&self, kind: ControlKind, state: ControlState) -> ControlState {
        let sunken =
            kind == ControlKind::Container && self.container_style == ContainerStyle::Sunken;
        if sunken {
            state | ControlState::SUNKEN
        } else {
            state
        }
    }

    /// Paint `kind` at `width` x `height` onto a fresh transparent canvas.
    pub fn render(
        &self,
        kind: ControlKind,
        state: ControlState,
        width: f64,
        height: f64,
    ) -> Result<Canvas> {
        let metrics = self.metrics(kind, width, height)?;
        let mut canvas = Canvas::for_metrics(&metrics);
        paint_control(
            &mut canvas,
            kind,
            self.shape,
            self.state_for(kind, state),
            &self.palette(),
            &metrics,
        )?;
        Ok(canvas)
    }
}
