//! RGBA color type and the default pill palette.

use std::fmt;

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use pillsplitter::draw::Color;
/// let coral = Color::from_hex("#FF6B6B").unwrap();
/// assert_eq!(coral.to_hex(), "#FF6B6B");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Parses `#RRGGBB` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        Some(Self::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Formats the RGB channels as `#RRGGBB`; alpha is not encoded.
    pub fn to_hex(&self) -> String {
        let to_byte = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02X}{:02X}{:02X}",
            to_byte(self.r),
            to_byte(self.g),
            to_byte(self.b)
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ============================================================================
// Default Palette
// ============================================================================

/// Hex codes of the colors new pills are drawn in.
pub const DEFAULT_PALETTE_HEX: [&str; 10] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7", "#DDA0DD", "#98D8C8", "#F7DC6F",
    "#BB8FCE", "#85C1E9",
];

/// Returns the default palette as parsed colors.
pub fn default_palette() -> Vec<Color> {
    DEFAULT_PALETTE_HEX
        .iter()
        .filter_map(|hex| Color::from_hex(hex))
        .collect()
}

/// Predefined white color, used by tests and as a neutral fallback.
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// Predefined black color.
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse palette entries.
///
/// # Supported Names (case-insensitive)
/// - "coral", "teal", "sky", "sage", "cream", "plum", "mint", "gold",
///   "lavender", "blue", "white", "black"
pub fn name_to_color(name: &str) -> Option<Color> {
    let hex = match name.to_lowercase().as_str() {
        "coral" => DEFAULT_PALETTE_HEX[0],
        "teal" => DEFAULT_PALETTE_HEX[1],
        "sky" => DEFAULT_PALETTE_HEX[2],
        "sage" => DEFAULT_PALETTE_HEX[3],
        "cream" => DEFAULT_PALETTE_HEX[4],
        "plum" => DEFAULT_PALETTE_HEX[5],
        "mint" => DEFAULT_PALETTE_HEX[6],
        "gold" => DEFAULT_PALETTE_HEX[7],
        "lavender" => DEFAULT_PALETTE_HEX[8],
        "blue" => DEFAULT_PALETTE_HEX[9],
        "white" => return Some(WHITE),
        "black" => return Some(BLACK),
        _ => return None,
    };
    Color::from_hex(hex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing_accepts_optional_hash() {
        assert_eq!(Color::from_hex("4ECDC4"), Color::from_hex("#4ECDC4"));
        assert_eq!(Color::from_hex("#000000"), Some(BLACK));
    }

    #[test]
    fn hex_parsing_rejects_malformed_input() {
        assert!(Color::from_hex("#FFF").is_none());
        assert!(Color::from_hex("#GG0000").is_none());
        assert!(Color::from_hex("#FF00ÄÄ").is_none());
    }

    #[test]
    fn default_palette_has_ten_colors_that_format_back() {
        let palette = default_palette();
        assert_eq!(palette.len(), 10);
        for (color, hex) in palette.iter().zip(DEFAULT_PALETTE_HEX) {
            assert_eq!(color.to_hex(), hex);
        }
    }

    #[test]
    fn named_colors_resolve_case_insensitively() {
        assert_eq!(name_to_color("Coral").unwrap().to_hex(), "#FF6B6B");
        assert_eq!(name_to_color("WHITE"), Some(WHITE));
        assert!(name_to_color("chartreuse").is_none());
    }
}
