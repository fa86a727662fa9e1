//! Neumorphic palette derived from a background and an accent color.
//!
//! Controls never store derived colors themselves: when the background,
//! text or selection color changes, the host builds a new [`Palette`].

use crate::color::{derive, is_bright, with_opacity, Color};

pub const DEFAULT_BACKGROUND: Color = Color::from_hex(0xe2e6e8);
pub const DEFAULT_TEXT: Color = Color::from_hex(0x6c737c);
pub const DEFAULT_SELECTED: Color = Color::from_hex(0x236dee);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub selected: Color,
    /// Fill of a pressed or selected button.
    pub pressed: Color,
    /// Highlight layer, offset toward the top-left.
    pub bright_shadow: Color,
    /// Shade layer, offset toward the bottom-right.
    pub dark_shadow: Color,
    /// Fill behind editable text.
    pub text_background: Color,
    /// Halo around selected content.
    pub glow: Color,
}

impl Palette {
    pub fn new(background: Color, text: Color, selected: Color) -> Self {
        let bright = is_bright(background);
        // Dark backgrounds get a wider brightness spread and opaque shadows.
        let (lift, sink, shadow_opacity) = if bright {
            (1.1, 0.9, 0.5)
        } else {
            (1.3, 0.7, 1.0)
        };

        let palette = Self {
            background,
            text,
            selected,
            pressed: derive(background, if bright { 1.0125 } else { 1.05 }),
            bright_shadow: with_opacity(derive(background, lift), shadow_opacity),
            dark_shadow: with_opacity(derive(background, sink), shadow_opacity),
            text_background: derive(background, if bright { 0.99 } else { 1.2 }),
            glow: if bright {
                with_opacity(selected, 0.25)
            } else {
                selected
            },
        };
        log::debug!(
            "palette recomputed for background {:?} ({})",
            background.to_rgba8(),
            if bright { "bright" } else { "dark" }
        );
        palette
    }

    pub fn with_background(self, background: Color) -> Self {
        Self::new(background, self.text, self.selected)
    }

    pub fn with_text(self, text: Color) -> Self {
        Self::new(self.background, text, self.selected)
    }

    pub fn with_selected(self, selected: Color) -> Self {
        Self::new(self.background, self.text, selected)
    }

    pub fn is_bright(&self) -> bool {
        is_bright(self.background)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DEFAULT_BACKGROUND, DEFAULT_TEXT, DEFAULT_SELECTED)
    }
}
