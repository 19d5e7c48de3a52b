// src/color.rs

//! Defines color-related enums (`NamedColor`, `Color`) and conversion functions.

use serde::{Deserialize, Serialize};

/// Basic named colors used by the default color scheme.
///
/// The set is intentionally small: the editor only needs the background,
/// curve, guide-line, and marker colors, plus a few spares for custom schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Grey,
    White,
}

impl NamedColor {
    /// Returns the `(r, g, b)` components of this named color.
    /// Plain 8-bit RGB channel values.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        match self {
            NamedColor::Black => (0, 0, 0),
            NamedColor::Red => (255, 0, 0),
            NamedColor::Green => (0, 255, 0),
            NamedColor::Yellow => (255, 255, 0),
            NamedColor::Blue => (0, 0, 255),
            NamedColor::Magenta => (255, 0, 255),
            NamedColor::Cyan => (0, 255, 255),
            NamedColor::Grey => (128, 128, 128),
            NamedColor::White => (255, 255, 255),
        }
    }
}

/// Represents a color value used in draw commands and the color scheme.
/// Either a named color or an RGB true color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// A color from the small named palette.
    Named(NamedColor),
    /// An RGB true color, with each component from 0 to 255.
    Rgb(u8, u8, u8),
}

impl Default for Color {
    fn default() -> Self {
        Color::Named(NamedColor::Black)
    }
}

impl Color {
    /// Resolves this color to concrete `(r, g, b)` components.
    ///
    /// Backends allocate hardware colors from the result rather than matching
    /// on the enum themselves.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Named(named) => named.to_rgb(),
            Color::Rgb(r, g, b) => (*r, *g, *b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors_resolve_to_expected_rgb() {
        assert_eq!(Color::Named(NamedColor::Black).to_rgb(), (0, 0, 0));
        assert_eq!(Color::Named(NamedColor::Grey).to_rgb(), (128, 128, 128));
        assert_eq!(Color::Named(NamedColor::White).to_rgb(), (255, 255, 255));
        assert_eq!(Color::Rgb(12, 34, 56).to_rgb(), (12, 34, 56));
    }
}
