// SPDX-License-Identifier: MIT
//
// OKLCH: the perceptual half of the color adapter.
//
// Surface palettes are generated here rather than in HSL because equal
// OKLCH lightness steps look like equal steps, which is what keeps the
// "base / border / on" roles readable on any neutral seed.
//
// Conversion pipeline:
//
//   OKLCH ↔ Oklab ↔ Linear sRGB ↔ sRGB
//
// Gamut mapping reduces chroma (never clips channels) so a surface stop
// keeps its hue and lightness when the requested chroma is not
// displayable.

use std::fmt;

use crate::rgba::Rgba;

/// Channel slack allowed by the gamut check; absorbs f32 round-off at the
/// black and white extremes.
const GAMUT_EPSILON: f32 = 1e-4;

/// A color in OKLCH space with alpha.
///
/// # Examples
///
/// ```
/// use n_color::Oklch;
///
/// let surface = Oklch::oklch(0.18, 0.01, 270.0);
/// let border = surface.set_lightness(0.26).to_gamut();
/// assert!(border.in_srgb_gamut());
/// ```
#[derive(Clone, Copy)]
pub struct Oklch {
    /// Lightness: 0.0 (black) to 1.0 (white).
    pub l: f32,

    /// Chroma: 0.0 (gray) to ~0.37 (most vivid displayable).
    pub c: f32,

    /// Hue angle in degrees, 0.0 to 360.0.
    pub h: f32,

    /// Alpha: 0.0 (transparent) to 1.0 (opaque).
    pub alpha: f32,
}

impl Oklch {
    // ─── Constructors ────────────────────────────────────────────────────

    #[inline]
    #[must_use]
    pub const fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self { l, c, h, alpha: 1.0 }
    }

    /// Create from gamma-encoded sRGB (0.0 to 1.0).
    #[must_use]
    pub fn srgb(r: f32, g: f32, b: f32) -> Self {
        Self::srgba(r, g, b, 1.0)
    }

    /// Create from gamma-encoded sRGB with alpha.
    #[must_use]
    pub fn srgba(r: f32, g: f32, b: f32, alpha: f32) -> Self {
        let (l, c, h) = srgb_to_oklch(r, g, b);
        Self { l, c, h, alpha }
    }

    /// Create from 8-bit sRGB.
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba(Rgba::rgb8(r, g, b))
    }

    #[must_use]
    pub fn from_rgba(rgba: Rgba) -> Self {
        Self::srgba(rgba.r, rgba.g, rgba.b, rgba.a)
    }

    // ─── Perceptual Operations ───────────────────────────────────────────

    /// Set lightness to an absolute value (clamped to 0.0–1.0).
    #[inline]
    #[must_use]
    pub const fn set_lightness(self, l: f32) -> Self {
        Self {
            l: l.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Set chroma to an absolute value (clamped to >= 0.0).
    #[inline]
    #[must_use]
    pub const fn set_chroma(self, c: f32) -> Self {
        Self {
            c: c.max(0.0),
            ..self
        }
    }

    /// Whether this color has no visible chroma.
    #[inline]
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.c.abs() < 1e-5
    }

    // ─── Gamut ───────────────────────────────────────────────────────────

    /// Whether this color is representable in sRGB.
    #[must_use]
    pub fn in_srgb_gamut(self) -> bool {
        let (r, g, b) = oklch_to_srgb(self.l, self.c, self.h);
        let range = -GAMUT_EPSILON..=1.0 + GAMUT_EPSILON;
        range.contains(&r) && range.contains(&g) && range.contains(&b)
    }

    /// Reduce chroma until this color fits within the sRGB gamut.
    ///
    /// Lightness is clamped first so a zero-chroma answer always exists;
    /// hue is never touched. Uses binary search for the largest chroma
    /// that stays displayable.
    #[must_use]
    pub fn to_gamut(self) -> Self {
        let this = self.set_lightness(self.l).set_chroma(self.c);
        if this.in_srgb_gamut() {
            return this;
        }

        let mut lo: f32 = 0.0;
        let mut hi: f32 = this.c;

        for _ in 0..20 {
            let mid = (lo + hi) * 0.5;
            let candidate = Self { c: mid, ..this };
            if candidate.in_srgb_gamut() {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        Self { c: lo, ..this }
    }

    // ─── Conversions to sRGB ─────────────────────────────────────────────

    /// Convert to sRGB with channels clamped to 0.0–1.0.
    #[must_use]
    pub fn to_srgb(self) -> (f32, f32, f32) {
        let (r, g, b) = oklch_to_srgb(self.l, self.c, self.h);
        (r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
    }

    #[must_use]
    pub fn to_rgba(self) -> Rgba {
        let (r, g, b) = self.to_srgb();
        Rgba::new(r, g, b, self.alpha.clamp(0.0, 1.0))
    }

    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        self.to_rgba().to_rgb8()
    }
}

impl fmt::Debug for Oklch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alpha >= 1.0 {
            write!(f, "Oklch({:.4}, {:.4}, {:.1})", self.l, self.c, self.h)
        } else {
            write!(
                f,
                "Oklch({:.4}, {:.4}, {:.1}, {:.2})",
                self.l, self.c, self.h, self.alpha
            )
        }
    }
}

impl fmt::Display for Oklch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_rgba())
    }
}

impl PartialEq for Oklch {
    fn eq(&self, other: &Self) -> bool {
        const EPS: f32 = 1e-5;
        (self.l - other.l).abs() < EPS
            && (self.c - other.c).abs() < EPS
            && (self.alpha - other.alpha).abs() < EPS
            && (self.is_achromatic()
                || other.is_achromatic()
                || hue_diff(self.h, other.h) < EPS)
    }
}

impl Default for Oklch {
    /// Default is opaque black.
    fn default() -> Self {
        Self::oklch(0.0, 0.0, 0.0)
    }
}

// ─── Color Space Conversion Functions ────────────────────────────────────────
//
// Oklab math by Björn Ottosson: https://bottosson.github.io/posts/oklab/

/// Absolute hue difference (shortest arc on the color wheel).
#[inline]
pub(crate) fn hue_diff(a: f32, b: f32) -> f32 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

/// Convert OKLCH chroma and hue to Oklab a, b components.
#[inline]
fn oklch_to_oklab_ab(c: f32, h: f32) -> (f32, f32) {
    let h_rad = h.to_radians();
    (c * h_rad.cos(), c * h_rad.sin())
}

/// Convert Oklab a, b components to OKLCH chroma and hue.
#[inline]
fn oklab_ab_to_oklch(a: f32, b: f32) -> (f32, f32) {
    let c = a.hypot(b);
    let h = if c < 1e-8 {
        0.0 // Achromatic: hue is undefined, default to 0
    } else {
        let h = b.atan2(a).to_degrees();
        if h < 0.0 { h + 360.0 } else { h }
    };
    (c, h)
}

/// Convert Oklab (L, a, b) to linear sRGB.
#[inline]
fn oklab_to_linear_srgb(l_ok: f32, a: f32, b: f32) -> (f32, f32, f32) {
    // Oklab → LMS (cube roots)
    let l_ = 0.215_803_76f32.mul_add(b, 0.396_337_78f32.mul_add(a, l_ok));
    let m_ = 0.063_854_17f32.mul_add(-b, 0.105_561_346f32.mul_add(-a, l_ok));
    let s_ = 1.291_485_5f32.mul_add(-b, 0.089_484_18f32.mul_add(-a, l_ok));

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    // LMS → Linear sRGB
    let r = 0.230_969_94f32.mul_add(s, 4.076_741_7f32.mul_add(l, -(3.307_711_6 * m)));
    let g = 0.341_319_38f32.mul_add(-s, (-1.268_438f32).mul_add(l, 2.609_757_4 * m));
    let bl = 1.707_614_7f32.mul_add(s, (-0.004_196_086_3f32).mul_add(l, -(0.703_418_6 * m)));

    (r, g, bl)
}

/// Convert linear sRGB to Oklab (L, a, b).
#[inline]
fn linear_srgb_to_oklab(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    // Linear sRGB → LMS
    let l = 0.051_445_995f32.mul_add(b, 0.412_221_47f32.mul_add(r, 0.536_332_55 * g));
    let m = 0.107_396_96f32.mul_add(b, 0.211_903_5f32.mul_add(r, 0.680_699_5 * g));
    let s = 0.629_978_7f32.mul_add(b, 0.088_302_46f32.mul_add(r, 0.281_718_84 * g));

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    let l_ok = 0.004_072_047f32.mul_add(-s_, 0.210_454_26f32.mul_add(l_, 0.793_617_8 * m_));
    let a = 0.450_593_7f32.mul_add(s_, 1.977_998_5f32.mul_add(l_, -(2.428_592_2 * m_)));
    let b_ok = 0.808_675_77f32.mul_add(-s_, 0.025_904_037f32.mul_add(l_, 0.782_771_77 * m_));

    (l_ok, a, b_ok)
}

/// Convert a single linear sRGB component to sRGB (apply gamma).
#[inline]
#[must_use]
pub fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055f32.mul_add(c.powf(1.0 / 2.4), -0.055)
    }
}

/// Convert a single sRGB component to linear sRGB (remove gamma).
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB (0.0–1.0) → OKLCH.
fn srgb_to_oklch(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let (l, a, b_ok) = linear_srgb_to_oklab(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b));
    let (c, h) = oklab_ab_to_oklch(a, b_ok);
    (l, c, h)
}

/// OKLCH → sRGB (0.0–1.0, may be out of gamut).
fn oklch_to_srgb(l: f32, c: f32, h: f32) -> (f32, f32, f32) {
    let (a, b) = oklch_to_oklab_ab(c, h);
    let (lr, lg, lb) = oklab_to_linear_srgb(l, a, b);
    (linear_to_srgb(lr), linear_to_srgb(lg), linear_to_srgb(lb))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
