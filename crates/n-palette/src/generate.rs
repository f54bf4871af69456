//! Palette generation: from a seed to eleven concrete stops.
//!
//! Two strategies share one contract: keep the seed's hue and
//! colorfulness, replace its lightness at every stop.
//!
//! - [`Strategy::Fast`] works in HSL. Hue and saturation are copied
//!   verbatim, so a brand scale stays exactly on-hue.
//! - [`Strategy::Perceptual`] works in OKLCH and gamut-maps each stop by
//!   reducing chroma. Used for surfaces, where even lightness steps
//!   matter more than speed.

use std::fmt;

use n_color::{Color, Hsl, Oklch, Rgba};
use serde::{Deserialize, Serialize};

use crate::sequence::{LightnessSequence, STOPS};

// ---------------------------------------------------------------------------
// Strategy / options
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// HSL lightness swap. Brand colors.
    Fast,
    /// OKLCH lightness swap with chroma-reducing gamut mapping. Surfaces.
    Perceptual,
}

impl Strategy {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Perceptual => "perceptual",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tuning knobs for [`generate`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GenerateOptions {
    /// Added to the seed's HSL saturation by the fast strategy. The engine
    /// always passes 0.0.
    pub saturation_delta: f32,
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// An ordered, immutable scale of [`STOPS`] colors derived from one seed.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    stops: [Color; STOPS],
    strategy: Strategy,
    fallback: bool,
}

impl Palette {
    /// A stand-in palette for an unparseable seed: `color` at every stop.
    ///
    /// Lookups through [`get`](Self::get) report nothing, so token rules
    /// render their own fallback instead of a meaningless color.
    #[must_use]
    pub fn fallback(color: Rgba) -> Self {
        Self {
            stops: [Color::Hsl(Hsl::from_rgba(color)); STOPS],
            strategy: Strategy::Fast,
            fallback: true,
        }
    }

    /// The stop at `index`, or `None` if it is out of range or this is a
    /// fallback palette.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Color> {
        if self.fallback {
            return None;
        }
        self.stops.get(index)
    }

    /// `#rrggbb` of the stop at `index`, with the same rules as [`get`](Self::get).
    #[must_use]
    pub fn hex(&self, index: usize) -> Option<String> {
        self.get(index).map(|c| c.to_hex())
    }

    /// All stops, including the placeholder stops of a fallback palette.
    #[must_use]
    pub const fn stops(&self) -> &[Color; STOPS] {
        &self.stops
    }

    /// Always [`STOPS`].
    #[must_use]
    pub const fn len(&self) -> usize {
        STOPS
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.stops.iter()
    }

    #[must_use]
    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.fallback
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Generate a palette from `seed` with one stop per value in `sequence`.
///
/// Pure and deterministic: identical arguments give identical palettes.
#[must_use]
pub fn generate(
    seed: Rgba,
    sequence: &LightnessSequence,
    strategy: Strategy,
    options: GenerateOptions,
) -> Palette {
    let values = sequence.values();
    let stops = match strategy {
        Strategy::Fast => {
            let hsl = Hsl::from_rgba(seed);
            let base = hsl.with_saturation(hsl.s + options.saturation_delta);
            values.map(|l| Color::Hsl(base.with_lightness(l)))
        }
        Strategy::Perceptual => {
            let base = Oklch::from_rgba(seed);
            values.map(|l| Color::Oklch(base.set_lightness(l).to_gamut()))
        }
    };

    Palette {
        stops,
        strategy,
        fallback: false,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
