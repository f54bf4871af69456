// SPDX-License-Identifier: MIT
//
// HSL: the fast half of the color adapter.
//
// Brand scales only ever swap lightness while holding hue and saturation,
// and HSL makes that a field assignment. The result is not perceptually
// even, which is acceptable for accent colors and much cheaper than the
// OKLCH path.

use std::fmt;

use crate::rgba::Rgba;

/// A color as hue (degrees), saturation and lightness (both 0.0–1.0).
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
    pub alpha: f32,
}

impl Hsl {
    #[inline]
    #[must_use]
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l, alpha: 1.0 }
    }

    /// Replace lightness, clamped to 0.0–1.0. Hue and saturation are kept.
    #[inline]
    #[must_use]
    pub const fn with_lightness(self, l: f32) -> Self {
        Self {
            l: l.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Replace saturation, clamped to 0.0–1.0.
    #[inline]
    #[must_use]
    pub const fn with_saturation(self, s: f32) -> Self {
        Self {
            s: s.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Decompose an sRGB color. Grays get hue 0 and saturation 0.
    #[must_use]
    pub fn from_rgba(rgba: Rgba) -> Self {
        let Rgba { r, g, b, a } = rgba.clamped();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) * 0.5;
        let delta = max - min;

        if delta.abs() < f32::EPSILON {
            return Self { h: 0.0, s: 0.0, l, alpha: a };
        }

        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let h = if (max - r).abs() < f32::EPSILON {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if (max - g).abs() < f32::EPSILON {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        Self {
            h: h * 60.0,
            s,
            l,
            alpha: a,
        }
    }

    #[must_use]
    pub fn to_rgba(self) -> Rgba {
        let s = self.s.clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);
        let alpha = self.alpha.clamp(0.0, 1.0);

        if s <= 0.0 {
            return Rgba::new(l, l, l, alpha);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { s.mul_add(-l, l + s) };
        let p = 2.0f32.mul_add(l, -q);
        let h = self.h.rem_euclid(360.0) / 360.0;

        Rgba::new(
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
            alpha,
        )
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_rgba())
    }
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        ((q - p) * 6.0).mul_add(t, p)
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        ((q - p) * (2.0 / 3.0 - t)).mul_add(6.0, p)
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
        (a - b).abs() < epsilon
    }

    #[test]
    fn decomposes_brand_blue() {
        let hsl = Hsl::from_rgba(Rgba::rgb8(0x3f, 0x9c, 0xdc));
        assert!(approx_eq(hsl.h, 204.5, 0.2), "hue {}", hsl.h);
        assert!(approx_eq(hsl.s, 0.692, 0.005), "saturation {}", hsl.s);
        assert!(approx_eq(hsl.l, 0.555, 0.005), "lightness {}", hsl.l);
    }

    #[test]
    fn primaries_have_expected_hues() {
        assert!(approx_eq(Hsl::from_rgba(Rgba::rgb8(255, 0, 0)).h, 0.0, 0.01));
        assert!(approx_eq(Hsl::from_rgba(Rgba::rgb8(0, 255, 0)).h, 120.0, 0.01));
        assert!(approx_eq(Hsl::from_rgba(Rgba::rgb8(0, 0, 255)).h, 240.0, 0.01));
    }

    #[test]
    fn grays_have_no_saturation() {
        let hsl = Hsl::from_rgba(Rgba::rgb8(0x80, 0x80, 0x80));
        assert!(approx_eq(hsl.s, 0.0, 1e-6));
        assert_eq!(hsl.to_rgba().to_hex(), "#808080");
    }

    #[test]
    fn lightness_extremes_are_black_and_white() {
        let hsl = Hsl::from_rgba(Rgba::rgb8(0x3f, 0x9c, 0xdc));
        assert_eq!(hsl.with_lightness(0.0).to_rgba().to_hex(), "#000000");
        assert_eq!(hsl.with_lightness(1.0).to_rgba().to_hex(), "#ffffff");
    }

    #[test]
    fn with_lightness_keeps_hue_and_saturation() {
        let hsl = Hsl::new(204.0, 0.7, 0.55);
        let darker = hsl.with_lightness(0.2);
        assert!(approx_eq(darker.h, 204.0, 1e-6));
        assert!(approx_eq(darker.s, 0.7, 1e-6));
        assert!(approx_eq(darker.l, 0.2, 1e-6));
    }

    #[test]
    fn alpha_survives_roundtrip() {
        let c = Rgba::rgba8(10, 20, 30, 128);
        assert!(approx_eq(Hsl::from_rgba(c).to_rgba().a, c.a, 1e-6));
    }

    proptest! {
        #[test]
        fn rgb_roundtrip_is_stable(r: u8, g: u8, b: u8) {
            let rgba = Rgba::rgb8(r, g, b);
            prop_assert_eq!(Hsl::from_rgba(rgba).to_rgba().to_rgb8(), (r, g, b));
        }
    }
}
