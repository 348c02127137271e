//! Configuration enum types.

use crate::draw::Color;
use crate::draw::color::{DEFAULT_PALETTE_HEX, name_to_color};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a name/hex string or RGB values.
///
/// # Examples
/// ```toml
/// # Named color or hex code
/// palette = ["coral", "#4ECDC4"]
///
/// # Custom RGB color (0-255 per component)
/// palette = [[255, 128, 0]]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (coral, teal, sky, sage, cream, plum, mint, gold, lavender,
    /// blue, white, black) or a `#RRGGBB` hex code
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Names are tried first, then hex codes. Anything unrecognized falls back
    /// to the first default palette color with a warning.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => name_to_color(name)
                .or_else(|| Color::from_hex(name))
                .unwrap_or_else(|| {
                    warn!("Unknown color '{}', using {}", name, DEFAULT_PALETTE_HEX[0]);
                    fallback_color()
                }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }

    /// Returns true if [`to_color`](Self::to_color) would not need the fallback.
    pub fn is_valid(&self) -> bool {
        match self {
            ColorSpec::Name(name) => {
                name_to_color(name).is_some() || Color::from_hex(name).is_some()
            }
            ColorSpec::Rgb(_) => true,
        }
    }
}

fn fallback_color() -> Color {
    Color::from_hex(DEFAULT_PALETTE_HEX[0]).unwrap_or(crate::draw::color::WHITE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_hex_and_rgb_all_resolve() {
        assert_eq!(ColorSpec::Name("teal".into()).to_color().to_hex(), "#4ECDC4");
        assert_eq!(ColorSpec::Name("#123456".into()).to_color().to_hex(), "#123456");
        assert_eq!(ColorSpec::Rgb([255, 0, 0]).to_color().to_hex(), "#FF0000");
    }

    #[test]
    fn unknown_names_fall_back_to_first_palette_color() {
        let spec = ColorSpec::Name("not-a-color".into());
        assert!(!spec.is_valid());
        assert_eq!(spec.to_color().to_hex(), DEFAULT_PALETTE_HEX[0]);
    }
}
