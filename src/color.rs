//! RGBA colors and the game palette
//!
//! Colors are normalized `[0, 1]` channels. They are only rendering hints;
//! converting to a native pixel format is the renderer's job.

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::settings::Settings;

/// Immutable RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from 8-bit channels
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    /// Parse a `#RRGGBB` literal (hex digits are case-insensitive), alpha = 1
    pub fn hex(s: &str) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidHexColor(s.to_string());

        let digits = s.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |i: usize| -> Result<f32, ParseError> {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| invalid())
        };

        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, 1.0))
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Average of r, g, b on every channel, alpha kept
    pub fn gray_scale(self) -> Self {
        let x = (self.r + self.g + self.b) / 3.0;
        Self::new(x, x, x, self.a)
    }

    /// `1 - c` on r, g, b, alpha kept
    pub fn invert(self) -> Self {
        Self::new(1.0 - self.r, 1.0 - self.g, 1.0 - self.b, self.a)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// CSS `rgba(...)` string with 0-255 color channels
    pub fn to_css(self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            (self.r * 255.0).round(),
            (self.g * 255.0).round(),
            (self.b * 255.0).round(),
            self.a
        )
    }
}

/// Colors used by the render pass and particle bursts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub player: Color,
    pub enemy: Color,
    pub message: Color,
}

impl Palette {
    /// Parse the configured hex colors. Any bad literal is fatal at startup.
    pub fn from_settings(settings: &Settings) -> Result<Self, ParseError> {
        Ok(Self {
            player: Color::hex(&settings.player_color)?,
            enemy: Color::hex(&settings.enemy_color)?,
            message: Color::hex(&settings.message_color)?,
        })
    }
}

impl Palette {
    /// Same colors as the `*_COLOR_HEX` literals
    pub const DEFAULT: Palette = Palette {
        player: Color::rgb8(0xf4, 0x38, 0x41),
        enemy: Color::rgb8(0x9e, 0x95, 0xc7),
        message: Color::WHITE,
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use proptest::prelude::*;

    fn close(a: Color, b: Color) -> bool {
        let eps = 1e-5;
        (a.r - b.r).abs() < eps
            && (a.g - b.g).abs() < eps
            && (a.b - b.b).abs() < eps
            && (a.a - b.a).abs() < eps
    }

    #[test]
    fn test_hex_red() {
        assert_eq!(Color::hex("#ff0000"), Ok(Color::new(1.0, 0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_hex_case_insensitive() {
        assert_eq!(Color::hex("#FFAA00"), Color::hex("#ffaa00"));
        let c = Color::hex("#9E95C7").unwrap();
        assert!((c.r - 158.0 / 255.0).abs() < 1e-6);
        assert!((c.g - 149.0 / 255.0).abs() < 1e-6);
        assert!((c.b - 199.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_hex_rejects_garbage() {
        for bad in ["notacolor", "ff0000", "#ff00", "#ff00000", "#gg0000", "", "#"] {
            assert_eq!(
                Color::hex(bad),
                Err(ParseError::InvalidHexColor(bad.to_string())),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn test_with_alpha() {
        let c = Color::new(0.1, 0.2, 0.3, 1.0).with_alpha(0.25);
        assert_eq!(c, Color::new(0.1, 0.2, 0.3, 0.25));
    }

    #[test]
    fn test_default_palette_matches_hex_literals() {
        let parsed = Palette::from_settings(&Settings::default()).unwrap();
        assert_eq!(parsed, Palette::default());
        assert_eq!(Color::hex(PLAYER_COLOR_HEX).unwrap(), Palette::DEFAULT.player);
        assert_eq!(Color::hex(ENEMY_COLOR_HEX).unwrap(), Palette::DEFAULT.enemy);
        assert_eq!(Palette::DEFAULT.message, Color::WHITE);
    }

    #[test]
    fn test_to_css() {
        let c = Color::hex("#f43841").unwrap().with_alpha(0.5);
        assert_eq!(c.to_css(), "rgba(244, 56, 65, 0.5)");
    }

    proptest! {
        #[test]
        fn gray_scale_is_gray(r in 0.0f32..=1.0, g in 0.0f32..=1.0, b in 0.0f32..=1.0, a in 0.0f32..=1.0) {
            let gray = Color::new(r, g, b, a).gray_scale();
            prop_assert_eq!(gray.r, gray.g);
            prop_assert_eq!(gray.g, gray.b);
            prop_assert_eq!(gray.a, a);
        }

        #[test]
        fn invert_twice_is_identity(r in 0.0f32..=1.0, g in 0.0f32..=1.0, b in 0.0f32..=1.0, a in 0.0f32..=1.0) {
            let c = Color::new(r, g, b, a);
            prop_assert!(close(c.invert().invert(), c));
        }
    }
}
