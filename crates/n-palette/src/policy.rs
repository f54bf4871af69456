//! Adaptive lightness for surface palettes.
//!
//! A surface seed can sit anywhere from near-black to near-white, yet the
//! token catalogs address surface roles by fixed index (see
//! [`SurfaceAlias`](crate::alias::SurfaceAlias)). This module picks the
//! eleven lightness values so those indices keep their meaning:
//!
//! ```text
//! index:   0      1    2     3     4      5       6       7 .. 9     10
//! role:  lowest  low  base  high  highest border  strong  ramp ..    on
//!        ◄── near the page background ──►        ◄── toward text ──►
//! ```
//!
//! In dark mode the sequence climbs from a dark anchor toward light text;
//! in light mode it descends from a light anchor toward dark text. The
//! anchor follows the seed's own lightness when the seed already suits
//! the mode and mirrors it otherwise, so a `#121212` seed and a `#FAFAFA`
//! seed give different tones with the same roles.

use n_color::{Oklch, Rgba};
use tracing::trace;

use crate::mode::Mode;
use crate::sequence::{LightnessSequence, STOPS};

/// Spacing between neighbouring surface tones.
const STEP: f32 = 0.02;

/// Offsets (in steps) of stops 0–6 from the anchor.
const OFFSETS: [f32; 7] = [-2.0, -1.0, 0.0, 1.0, 2.0, 4.0, 7.0];

/// Interpolation positions of stops 7–10 between stop 6 and the text stop.
const RAMP: [f32; 4] = [0.25, 0.5, 0.75, 1.0];

const DARK_ANCHOR: (f32, f32) = (0.12, 0.30);
const LIGHT_ANCHOR: (f32, f32) = (0.88, 0.94);

const DARK_ON: f32 = 0.96;
const LIGHT_ON: f32 = 0.16;

/// Lightness sequence for a surface palette seeded by `seed` in `mode`.
///
/// Strictly monotonic (rising in dark mode, falling in light mode) and
/// bounded to `[0.04, 0.98]`, so every stop survives gamut mapping with
/// its lightness intact.
#[must_use]
pub fn derive_lightness_sequence(seed: Rgba, mode: Mode) -> LightnessSequence {
    let l = Oklch::from_rgba(seed).l.clamp(0.0, 1.0);
    let seed_is_dark = l < 0.5;

    let (anchor, direction, on) = match mode {
        Mode::Dark => {
            let raw = if seed_is_dark { l } else { 1.0 - l };
            (raw.clamp(DARK_ANCHOR.0, DARK_ANCHOR.1), 1.0, DARK_ON)
        }
        Mode::Light => {
            let raw = if seed_is_dark { 1.0 - l } else { l };
            (raw.clamp(LIGHT_ANCHOR.0, LIGHT_ANCHOR.1), -1.0, LIGHT_ON)
        }
    };

    let mut values = [0.0_f32; STOPS];
    for (value, k) in values.iter_mut().zip(OFFSETS) {
        *value = (direction * k).mul_add(STEP, anchor);
    }
    let edge = values[OFFSETS.len() - 1];
    for (value, t) in values[OFFSETS.len()..].iter_mut().zip(RAMP) {
        *value = (on - edge).mul_add(t, edge);
    }

    trace!(%seed, %mode, seed_lightness = l, anchor, "derived surface sequence");
    LightnessSequence::new(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alias::SurfaceAlias;
    use crate::generate::{GenerateOptions, Strategy, generate};

    fn seeds() -> [Rgba; 6] {
        [
            Rgba::BLACK,
            Rgba::rgb8(0x12, 0x12, 0x12),
            Rgba::rgb8(0x1e, 0x22, 0x3a),
            Rgba::rgb8(0x80, 0x80, 0x80),
            Rgba::rgb8(0xfa, 0xfa, 0xfa),
            Rgba::WHITE,
        ]
    }

    fn lightness_at(seed: Rgba, mode: Mode, alias: SurfaceAlias) -> f32 {
        let seq = derive_lightness_sequence(seed, mode);
        let palette = generate(seed, &seq, Strategy::Perceptual, GenerateOptions::default());
        palette.get(alias.index()).map_or(f32::NAN, |c| Oklch::from_rgba(c.to_rgba()).l)
    }

    #[test]
    fn sequences_are_strictly_monotonic() {
        for seed in seeds() {
            let dark = derive_lightness_sequence(seed, Mode::Dark);
            assert!(dark.values().windows(2).all(|w| w[0] < w[1]), "dark {seed}");
            let light = derive_lightness_sequence(seed, Mode::Light);
            assert!(light.values().windows(2).all(|w| w[0] > w[1]), "light {seed}");
        }
    }

    #[test]
    fn sequences_stay_in_range() {
        for seed in seeds() {
            for mode in Mode::ALL {
                let seq = derive_lightness_sequence(seed, mode);
                assert!(
                    seq.values().iter().all(|v| (0.04..=0.98).contains(v)),
                    "{seed} {mode}: {seq:?}"
                );
            }
        }
    }

    #[test]
    fn on_is_lighter_than_base_in_dark_mode() {
        for seed in seeds() {
            let base = lightness_at(seed, Mode::Dark, SurfaceAlias::Base);
            let on = lightness_at(seed, Mode::Dark, SurfaceAlias::On);
            assert!(on > base + 0.5, "{seed}: on {on} base {base}");
        }
    }

    #[test]
    fn on_is_darker_than_base_in_light_mode() {
        for seed in seeds() {
            let base = lightness_at(seed, Mode::Light, SurfaceAlias::Base);
            let on = lightness_at(seed, Mode::Light, SurfaceAlias::On);
            assert!(on < base - 0.5, "{seed}: on {on} base {base}");
        }
    }

    #[test]
    fn border_sits_just_past_base() {
        for seed in seeds() {
            for mode in Mode::ALL {
                let seq = derive_lightness_sequence(seed, mode);
                let base = seq.values()[SurfaceAlias::Base.index()];
                let border = seq.values()[SurfaceAlias::Border.index()];
                let gap = (border - base).abs();
                assert!((0.05..0.10).contains(&gap), "{seed} {mode}: gap {gap}");
            }
        }
    }

    #[test]
    fn near_black_and_near_white_seeds_get_different_anchors() {
        let dark_seed = Rgba::rgb8(0x12, 0x12, 0x12);
        let light_seed = Rgba::rgb8(0xfa, 0xfa, 0xfa);
        for mode in Mode::ALL {
            let a = derive_lightness_sequence(dark_seed, mode);
            let b = derive_lightness_sequence(light_seed, mode);
            assert_ne!(a.fingerprint(), b.fingerprint(), "{mode}");
        }
    }

    #[test]
    fn dark_seed_anchors_on_its_own_lightness() {
        let seed = Rgba::rgb8(0x12, 0x12, 0x12);
        let l = Oklch::from_rgba(seed).l;
        let seq = derive_lightness_sequence(seed, Mode::Dark);
        assert!((seq.values()[SurfaceAlias::Base.index()] - l).abs() < 1e-6);
    }
}
