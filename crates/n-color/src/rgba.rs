// SPDX-License-Identifier: MIT
//
// Rgba: the common currency of the color pipeline.
//
// Every parser produces an `Rgba`, every palette stop is rendered through
// one, and the cache keys palettes by its canonical hex form. Channels are
// gamma-encoded sRGB in 0.0–1.0; alpha is straight (not premultiplied).

use std::fmt;
use std::str::FromStr;

use crate::error::ParseColorError;

/// A gamma-encoded sRGB color with straight alpha, channels in 0.0–1.0.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Opaque black, the engine's default fallback.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from 0.0–1.0 channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Opaque color from 8-bit channels.
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba8(r, g, b, 255)
    }

    /// Color from 8-bit channels including alpha.
    #[must_use]
    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            f32::from(a) / 255.0,
        )
    }

    /// Return a copy with every channel clamped into 0.0–1.0.
    #[must_use]
    pub const fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    /// Return a copy with the given alpha.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Whether alpha is at least 1.0.
    #[inline]
    #[must_use]
    pub fn is_opaque(self) -> bool {
        self.a >= 1.0
    }

    /// 8-bit color channels, rounded.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        (to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }

    /// 8-bit channels including alpha, rounded.
    #[must_use]
    pub fn to_rgba8(self) -> (u8, u8, u8, u8) {
        let (r, g, b) = self.to_rgb8();
        (r, g, b, to_u8(self.a))
    }

    /// `#rrggbb`, lowercase. Alpha is ignored.
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// `#rrggbbaa`, lowercase, with the given alpha replacing the color's own.
    #[must_use]
    pub fn to_hex_alpha(self, alpha: f32) -> String {
        let (r, g, b) = self.to_rgb8();
        let a = to_u8(alpha);
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }

    /// The color snapped to 8-bit channels, as it would round-trip
    /// through [`canonical`](Self::canonical).
    #[must_use]
    pub fn quantized(self) -> Self {
        let (r, g, b, a) = self.to_rgba8();
        Self::rgba8(r, g, b, a)
    }

    /// Stable string identity: `#rrggbbaa` with the color's own alpha.
    ///
    /// Two inputs that quantize to the same 8-bit color share a canonical
    /// form, which is what the palette cache keys on.
    #[must_use]
    pub fn canonical(self) -> String {
        self.to_hex_alpha(self.a)
    }
}

impl Default for Rgba {
    /// Default is opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            f.write_str(&self.to_hex())
        } else {
            f.write_str(&self.canonical())
        }
    }
}

impl FromStr for Rgba {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_color(s)
    }
}

/// Convert a float (0.0–1.0) to a u8 (0–255) with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn to_u8(v: f32) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_lowercase_six_digits() {
        assert_eq!(Rgba::rgb8(0x3f, 0x9c, 0xdc).to_hex(), "#3f9cdc");
    }

    #[test]
    fn hex_ignores_alpha() {
        assert_eq!(Rgba::rgba8(255, 0, 0, 10).to_hex(), "#ff0000");
    }

    #[test]
    fn hex_alpha_uses_given_alpha() {
        let red = Rgba::rgb8(255, 0, 0);
        assert_eq!(red.to_hex_alpha(0.5), "#ff000080");
        assert_eq!(red.to_hex_alpha(1.0), "#ff0000ff");
        assert_eq!(red.to_hex_alpha(0.0), "#ff000000");
    }

    #[test]
    fn hex_alpha_clamps_out_of_range() {
        assert_eq!(Rgba::BLACK.to_hex_alpha(3.0), "#000000ff");
        assert_eq!(Rgba::BLACK.to_hex_alpha(-1.0), "#00000000");
    }

    #[test]
    fn canonical_keeps_own_alpha() {
        assert_eq!(Rgba::BLACK.canonical(), "#000000ff");
        assert_eq!(Rgba::TRANSPARENT.canonical(), "#00000000");
    }

    #[test]
    fn quantized_matches_canonical_twin() {
        let c = Rgba::new(0.859, 0.243, 0.239, 1.0);
        let twin = Rgba::rgb8(219, 62, 61);
        assert_eq!(c.canonical(), twin.canonical());
        assert_eq!(c.quantized(), twin);
        assert_eq!(twin.quantized(), twin);
    }

    #[test]
    fn display_switches_on_opacity() {
        assert_eq!(Rgba::WHITE.to_string(), "#ffffff");
        assert_eq!(Rgba::WHITE.with_alpha(0.5).to_string(), "#ffffff80");
    }

    #[test]
    fn clamped_bounds_channels() {
        let c = Rgba::new(1.2, -0.1, 0.5, 2.0).clamped();
        assert_eq!(c, Rgba::new(1.0, 0.0, 0.5, 1.0));
    }

    #[test]
    fn from_str_goes_through_parser() {
        let c: Rgba = "#00ff00".parse().unwrap();
        assert_eq!(c.to_rgb8(), (0, 255, 0));
        assert!("nope".parse::<Rgba>().is_err());
    }
}
