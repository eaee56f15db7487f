//! SolidColor: a single RGBA color used by the picker and the preview swatch.
//!
//! Stores RGBA as f64 values in the 0.0–1.0 range. Reads any solid form the
//! field can hold (`#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb()`, `rgba()`) and
//! writes `rgba()` for the picker to report back through the normalizer.

use floem::peniko::Color;

use crate::math;
use crate::normalize;

/// RGBA color with components in the 0.0–1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidColor {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl SolidColor {
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    pub fn r(&self) -> f64 {
        self.r
    }
    pub fn g(&self) -> f64 {
        self.g
    }
    pub fn b(&self) -> f64 {
        self.b
    }
    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn from_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        }
    }

    /// Convert to 0–255 RGB.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        (
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
        )
    }

    /// Create from HSB values (all 0.0–1.0).
    pub fn from_hsb(h: f64, s: f64, b: f64, a: f64) -> Self {
        let (r, g, bl) = math::hsb_to_rgb(h, s, b);
        Self::from_rgba(r, g, bl, a)
    }

    /// Convert to HSB (all 0.0–1.0).
    pub fn to_hsb(&self) -> (f64, f64, f64) {
        math::rgb_to_hsb(self.r, self.g, self.b)
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Parse a hex string, `#` optional, in 3, 4, 6 or 8 digit form.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).ok().map(|v| v * 17);
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        match digits.len() {
            3 => Some(Self::from_rgba8(nibble(0)?, nibble(1)?, nibble(2)?, 255)),
            4 => Some(Self::from_rgba8(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
            6 => Some(Self::from_rgba8(byte(0)?, byte(2)?, byte(4)?, 255)),
            8 => Some(Self::from_rgba8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// Parse any solid CSS form the field stores: hex or `rgb()`/`rgba()`.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.starts_with("rgb") {
            let hex = normalize::rgba_to_hex(value);
            // Channels above 255 widen the hex past 8 digits and fail here.
            return Self::from_hex(&hex);
        }
        Self::from_hex(value)
    }

    /// Lowercase `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(&self) -> String {
        normalize::rgba_to_hex(&self.to_css())
    }

    /// `rgba(r, g, b, a)` with alpha rounded to two decimals.
    pub fn to_css(&self) -> String {
        let (r, g, b) = self.to_rgb8();
        let a = (self.a * 100.0).round() / 100.0;
        format!("rgba({r}, {g}, {b}, {a})")
    }

    pub fn to_peniko(&self) -> Color {
        Color::rgba(self.r, self.g, self.b, self.a)
    }
}

impl Default for SolidColor {
    fn default() -> Self {
        Self::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_forms() {
        assert_eq!(SolidColor::from_hex("#fff"), Some(SolidColor::WHITE));
        assert_eq!(SolidColor::from_hex("000000"), Some(SolidColor::BLACK));
        assert_eq!(
            SolidColor::from_hex("#ff000080").map(|c| c.to_rgb8()),
            Some((255, 0, 0))
        );
        assert_eq!(SolidColor::from_hex("#f008").map(|c| c.a()), Some(136.0 / 255.0));
        assert_eq!(SolidColor::from_hex("#12345"), None);
        assert_eq!(SolidColor::from_hex("#gggggg"), None);
    }

    #[test]
    fn parses_rgb_functions() {
        let c = SolidColor::parse("rgba(0, 128, 255, 0.5)").unwrap();
        assert_eq!(c.to_rgb8(), (0, 128, 255));
        assert!((c.a() - 128.0 / 255.0).abs() < 1e-9);
        assert_eq!(SolidColor::parse("rgb(300, 0, 0)"), None);
        assert_eq!(SolidColor::parse("linear-gradient(#000, #fff)"), None);
    }

    #[test]
    fn css_output_round_trips_through_normalizer() {
        let c = SolidColor::from_rgba8(0, 128, 255, 255);
        assert_eq!(c.to_css(), "rgba(0, 128, 255, 1)");
        assert_eq!(normalize::handle_color_change(&c.to_css()), "#0080ff");
        assert_eq!(c.with_alpha(0.5).to_hex(), "#0080ff80");
    }

    #[test]
    fn hsb_constructor_clamps() {
        let c = SolidColor::from_hsb(0.0, 1.0, 1.0, 2.0);
        assert_eq!(c.to_rgb8(), (255, 0, 0));
        assert_eq!(c.a(), 1.0);
    }
}
