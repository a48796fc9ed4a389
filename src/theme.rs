//! Color schemes for the star field.
//!
//! A [`Theme`] names a (star color, connection color) pair; the `Custom`
//! variant uses one caller-supplied color for both. Opacity stays numeric in
//! [`Rgba`] all the way to the draw call; hex strings are only parsed and
//! formatted at the edges, for callers that store colors as `#rrggbb` text.

use std::fmt;

/// A color with straight (non-premultiplied) alpha, components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb8(0xff, 0xff, 0xff);

    /// Opaque color from 8-bit channels.
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// The same color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn parse_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        // Length and slicing below are in bytes; non-ASCII input is invalid
        // hex anyway and must not panic on a char boundary.
        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        let mut color = Self::rgb8(channel(0)?, channel(2)?, channel(4)?);
        if hex.len() == 8 {
            color.a = channel(6)? as f32 / 255.0;
        }
        Some(color)
    }

    /// Format as `#rrggbbaa`, the alpha-suffix convention web embedders use.
    pub fn to_hex(self) -> String {
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            byte(self.r),
            byte(self.g),
            byte(self.b),
            byte(self.a)
        )
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Colors resolved from a theme: what stars and connection lines are
/// stroked with, before per-element alpha is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColors {
    pub star: Rgba,
    pub connection: Rgba,
}

/// Named color scheme for the background, typically configured per user.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Theme {
    /// Neutral white, the fallback for unknown scheme names.
    #[default]
    Default,
    Blue,
    Purple,
    Green,
    Red,
    Yellow,
    Pink,
    /// One caller-supplied color for both stars and connections.
    Custom(Rgba),
}

impl Theme {
    /// Resolve a scheme name as stored in a user record.
    ///
    /// `"custom"` uses `custom_color` (white when absent); unrecognized names
    /// fall back to the default scheme rather than erroring.
    pub fn from_name(name: &str, custom_color: Option<Rgba>) -> Self {
        match name {
            "blue" => Theme::Blue,
            "purple" => Theme::Purple,
            "green" => Theme::Green,
            "red" => Theme::Red,
            "yellow" => Theme::Yellow,
            "pink" => Theme::Pink,
            "custom" => Theme::Custom(custom_color.unwrap_or(Rgba::WHITE)),
            _ => Theme::Default,
        }
    }

    /// The (star, connection) color pair for this scheme.
    pub fn colors(&self) -> ThemeColors {
        let (star, connection) = match self {
            Theme::Default => (Rgba::WHITE, Rgba::WHITE),
            Theme::Blue => (Rgba::rgb8(0x60, 0xa5, 0xfa), Rgba::rgb8(0x3b, 0x82, 0xf6)),
            Theme::Purple => (Rgba::rgb8(0xa7, 0x8b, 0xfa), Rgba::rgb8(0x8b, 0x5c, 0xf6)),
            Theme::Green => (Rgba::rgb8(0x34, 0xd3, 0x99), Rgba::rgb8(0x10, 0xb9, 0x81)),
            Theme::Red => (Rgba::rgb8(0xf8, 0x71, 0x71), Rgba::rgb8(0xef, 0x44, 0x44)),
            Theme::Yellow => (Rgba::rgb8(0xfb, 0xbf, 0x24), Rgba::rgb8(0xf5, 0x9e, 0x0b)),
            Theme::Pink => (Rgba::rgb8(0xf4, 0x72, 0xb6), Rgba::rgb8(0xec, 0x48, 0x99)),
            Theme::Custom(color) => (*color, *color),
        };
        ThemeColors { star, connection }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_known_schemes() {
        assert_eq!(Theme::from_name("blue", None), Theme::Blue);
        assert_eq!(Theme::from_name("pink", None), Theme::Pink);
        assert_eq!(Theme::from_name("default", None), Theme::Default);
    }

    #[test]
    fn test_from_name_unknown_falls_back() {
        assert_eq!(Theme::from_name("magenta", None), Theme::Default);
        assert_eq!(Theme::from_name("", None), Theme::Default);
    }

    #[test]
    fn test_from_name_custom() {
        let color = Rgba::rgb8(0x12, 0x34, 0x56);
        assert_eq!(
            Theme::from_name("custom", Some(color)),
            Theme::Custom(color)
        );
        // Missing custom color falls back to white, not to an error.
        assert_eq!(
            Theme::from_name("custom", None),
            Theme::Custom(Rgba::WHITE)
        );
    }

    #[test]
    fn test_custom_uses_one_color_for_both() {
        let color = Rgba::rgb8(0x60, 0xa5, 0xfa);
        let colors = Theme::Custom(color).colors();
        assert_eq!(colors.star, colors.connection);
        assert_eq!(colors.star, color);
    }

    #[test]
    fn test_themed_pairs_differ() {
        let colors = Theme::Blue.colors();
        assert_ne!(colors.star, colors.connection);
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(Rgba::parse_hex("#ffffff"), Some(Rgba::WHITE));
        assert_eq!(
            Rgba::parse_hex("60a5fa"),
            Some(Rgba::rgb8(0x60, 0xa5, 0xfa))
        );
        let translucent = Rgba::parse_hex("#ff000080").unwrap();
        assert!((translucent.a - 128.0 / 255.0).abs() < 1.0e-6);

        assert_eq!(Rgba::parse_hex("#fff"), None);
        assert_eq!(Rgba::parse_hex("#gggggg"), None);
    }

    #[test]
    fn test_parse_hex_rejects_non_ascii() {
        // Multi-byte characters must return None, not panic on a byte slice.
        assert_eq!(Rgba::parse_hex("#aé123"), None);
        assert_eq!(Rgba::parse_hex("é23456"), None);
        assert_eq!(Rgba::parse_hex("#ffffé"), None);
    }

    #[test]
    fn test_hex_round_trip() {
        let color = Rgba::rgb8(0x34, 0xd3, 0x99).with_alpha(0.5);
        let parsed = Rgba::parse_hex(&color.to_hex()).unwrap();
        assert!((parsed.a - color.a).abs() < 1.0 / 255.0);
        assert_eq!(color.to_hex(), "#34d39980");
    }

    #[test]
    fn test_to_hex_clamps() {
        let color = Rgba {
            r: 1.5,
            g: -0.2,
            b: 0.0,
            a: 2.0,
        };
        assert_eq!(color.to_hex(), "#ff0000ff");
    }
}
