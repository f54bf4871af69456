// SPDX-License-Identifier: MIT
//
// Color: one palette stop, in whichever space generated it.
//
// A stop keeps its native representation so that the invariants of the
// strategy that produced it stay observable: an HSL stop still carries
// the seed's exact hue and saturation, an OKLCH stop still carries its
// gamut-mapped chroma. Rendering goes through `Rgba` either way.

use std::fmt;

use crate::hsl::Hsl;
use crate::oklch::Oklch;
use crate::rgba::Rgba;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Color {
    Hsl(Hsl),
    Oklch(Oklch),
}

impl Color {
    #[must_use]
    pub fn to_rgba(self) -> Rgba {
        match self {
            Self::Hsl(c) => c.to_rgba(),
            Self::Oklch(c) => c.to_rgba(),
        }
    }

    /// `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_rgba().to_hex()
    }

    /// `#rrggbbaa` at the given alpha.
    #[must_use]
    pub fn to_hex_alpha(self, alpha: f32) -> String {
        self.to_rgba().to_hex_alpha(alpha)
    }

    /// Same color with its lightness replaced, in its own space.
    #[must_use]
    pub const fn with_lightness(self, l: f32) -> Self {
        match self {
            Self::Hsl(c) => Self::Hsl(c.with_lightness(l)),
            Self::Oklch(c) => Self::Oklch(c.set_lightness(l)),
        }
    }

    /// Lightness in the color's own space.
    #[must_use]
    pub const fn lightness(self) -> f32 {
        match self {
            Self::Hsl(c) => c.l,
            Self::Oklch(c) => c.l,
        }
    }

    /// OKLCH lightness, regardless of representation.
    #[must_use]
    pub fn perceptual_lightness(self) -> f32 {
        match self {
            Self::Hsl(c) => Oklch::from_rgba(c.to_rgba()).l,
            Self::Oklch(c) => c.l,
        }
    }
}

impl From<Hsl> for Color {
    fn from(c: Hsl) -> Self {
        Self::Hsl(c)
    }
}

impl From<Oklch> for Color {
    fn from(c: Oklch) -> Self {
        Self::Oklch(c)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_rgba())
    }
}
