//! Control state and what it looks like.
//!
//! The host owns input handling and flips these flags; [`Appearance::resolve`]
//! turns the flags into the fill, shadow effect and content styling to paint.

use bitflags::bitflags;

use crate::color::Color;
use crate::metrics::ControlKind;
use crate::palette::Palette;

bitflags! {
    /// Interaction state of a control
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ControlState: u8 {
        /// Pointer is held down on the control
        const PRESSED    = 0b0000_0001;
        /// Latched on (toggle, radio, checkbox, selectable button)
        const SELECTED   = 0b0000_0010;
        /// Draw the raised state
        const HOVER      = 0b0000_0100;
        /// A button that latches SELECTED instead of springing back
        const SELECTABLE = 0b0000_1000;
        /// HOVER follows the pointer instead of staying on
        const HOVERABLE  = 0b0001_0000;
        /// Switch is on
        const ON         = 0b0010_0000;
        /// Container is pressed into the surface instead of raised from it
        const SUNKEN     = 0b0100_0000;
    }
}

impl Default for ControlState {
    fn default() -> Self {
        ControlState::HOVER
    }
}

impl ControlState {
    /// Toggle hover tracking. Enabling it drops the permanent HOVER so the
    /// control rests flat until the pointer arrives.
    pub fn set_hoverable(&mut self, hoverable: bool) {
        self.set(ControlState::HOVERABLE, hoverable);
        self.set(ControlState::HOVER, !hoverable);
    }

    pub fn is_down(&self) -> bool {
        self.intersects(ControlState::PRESSED | ControlState::SELECTED)
    }
}

/// Which dual shadow to paint around the background shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    None,
    /// Raised: shadows fall outside the shape
    Outer,
    /// Sunken: shadows fall inside the shape
    Inner,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub fill: Color,
    pub effect: Effect,
    /// Color of the label or selection glyph
    pub content_color: Color,
    pub content_glow: bool,
    /// Whether the selection glyph (dot, checkmark) is drawn
    pub indicator: bool,
    /// Content nudge toward the bottom-right, in logical pixels
    pub content_offset: f64,
}

impl Appearance {
    pub fn resolve(kind: ControlKind, state: ControlState, palette: &Palette) -> Self {
        let selected = state.contains(ControlState::SELECTED);
        let pressed = state.contains(ControlState::PRESSED);
        let hover = state.contains(ControlState::HOVER);
        let raised_or_flat = if hover { Effect::Outer } else { Effect::None };

        let appearance = match kind {
            ControlKind::Button => {
                let sunk = if state.contains(ControlState::SELECTABLE) {
                    selected
                } else {
                    pressed
                };
                Self {
                    fill: if state.is_down() {
                        palette.pressed
                    } else {
                        palette.background
                    },
                    effect: if sunk { Effect::Inner } else { raised_or_flat },
                    content_color: if selected {
                        palette.selected
                    } else {
                        palette.text
                    },
                    content_glow: selected,
                    indicator: false,
                    content_offset: if state.is_down() { 1.0 } else { 0.0 },
                }
            }
            ControlKind::ToggleButton => Self {
                fill: if state.is_down() {
                    palette.pressed
                } else {
                    palette.background
                },
                effect: if selected { Effect::Inner } else { Effect::Outer },
                content_color: if selected {
                    palette.selected
                } else {
                    palette.text
                },
                content_glow: selected,
                indicator: false,
                content_offset: if state.is_down() { 1.0 } else { 0.0 },
            },
            ControlKind::RadioButton | ControlKind::CheckBox => Self {
                fill: palette.background,
                effect: if selected { Effect::Inner } else { Effect::Outer },
                content_color: palette.selected,
                content_glow: selected,
                indicator: selected,
                content_offset: 0.0,
            },
            ControlKind::Switch => Self {
                fill: palette.background,
                effect: Effect::Outer,
                content_color: palette.selected,
                content_glow: true,
                indicator: true,
                content_offset: 0.5,
            },
            ControlKind::Container => Self {
                fill: palette.background,
                effect: if state.contains(ControlState::SUNKEN) {
                    Effect::Inner
                } else {
                    Effect::Outer
                },
                content_color: palette.text,
                content_glow: false,
                indicator: false,
                content_offset: 0.0,
            },
            ControlKind::TextField => Self {
                fill: palette.text_background,
                effect: Effect::Inner,
                content_color: palette.text,
                content_glow: false,
                indicator: false,
                content_offset: 0.0,
            },
            ControlKind::ChoiceBox => Self {
                fill: palette.background,
                effect: Effect::Outer,
                content_color: palette.text,
                content_glow: false,
                indicator: false,
                content_offset: 0.0,
            },
        };
        log::trace!("{:?} in {:?} resolves to {:?}", kind, state, appearance.effect);
        appearance
    }
}
