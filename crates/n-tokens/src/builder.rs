//! Token builder: evaluates token specs against palettes.
//!
//! Rendering is total. Every spec yields a value: literals verbatim,
//! resolvable references as hex, unresolvable ones as their fallback.
//! Nothing here returns an error, so a caller can always style something.

use std::collections::BTreeMap;
use std::sync::Arc;

use n_palette::{Mode, Palette};
use tracing::trace;

use crate::rule::{Rule, Source};
use crate::token::TokenSpec;

/// Token name → rendered value. Ordered for stable output; the order
/// itself carries no meaning.
pub type TokenMap = BTreeMap<String, String>;

/// The two palettes a rule can read in one mode.
#[derive(Debug, Clone)]
pub struct PalettePair {
    pub semantic: Arc<Palette>,
    pub surface: Arc<Palette>,
}

impl PalettePair {
    #[must_use]
    pub fn source(&self, source: Source) -> &Palette {
        match source {
            Source::Semantic => &self.semantic,
            Source::Surface => &self.surface,
        }
    }
}

/// Palettes for both modes. The semantic palette is usually shared; the
/// surface palette differs per mode.
#[derive(Debug, Clone)]
pub struct Palettes {
    pub light: PalettePair,
    pub dark: PalettePair,
}

impl Palettes {
    #[must_use]
    pub const fn for_mode(&self, mode: Mode) -> &PalettePair {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }
}

/// Render a single rule.
#[must_use]
pub fn build_rule(rule: &Rule, pair: &PalettePair) -> String {
    match rule {
        Rule::Literal(value) => (*value).to_owned(),
        Rule::Ref(r) => r.render(pair.source(r.source)),
    }
}

/// Render `specs` into a token map. Hover slots are skipped unless
/// `interactive`.
#[must_use]
pub fn build(specs: &[TokenSpec], palettes: &Palettes, interactive: bool) -> TokenMap {
    let mut tokens = TokenMap::new();
    extend(&mut tokens, specs, palettes, interactive);
    tokens
}

/// Like [`build`], but adds to an existing map. Later specs overwrite
/// earlier ones with the same name.
pub fn extend(tokens: &mut TokenMap, specs: &[TokenSpec], palettes: &Palettes, interactive: bool) {
    for spec in specs {
        if spec.slot.is_hover() && !interactive {
            continue;
        }
        let value = build_rule(&spec.rule, palettes.for_mode(spec.mode));
        trace!(slot = %spec.slot, mode = %spec.mode, %value, "token");
        tokens.insert(spec.name(), value);
    }
}

#[cfg(test)]
mod tests {
    use n_color::Rgba;
    use n_palette::{GenerateOptions, LightnessSequence, Strategy, derive_lightness_sequence, generate};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::token::Slot;

    fn palettes(seed: Rgba) -> Palettes {
        let semantic = Arc::new(generate(
            seed,
            &LightnessSequence::DEFAULT,
            Strategy::Fast,
            GenerateOptions::default(),
        ));
        let surface = |mode: Mode| {
            let seed = Rgba::rgb8(0x12, 0x12, 0x12);
            Arc::new(generate(
                seed,
                &derive_lightness_sequence(seed, mode),
                Strategy::Perceptual,
                GenerateOptions::default(),
            ))
        };
        Palettes {
            light: PalettePair {
                semantic: Arc::clone(&semantic),
                surface: surface(Mode::Light),
            },
            dark: PalettePair {
                semantic,
                surface: surface(Mode::Dark),
            },
        }
    }

    const SPECS: [TokenSpec; 6] = [
        TokenSpec::new(Slot::Bg, Mode::Light, Rule::semantic(4)),
        TokenSpec::new(Slot::Bg, Mode::Dark, Rule::semantic(5)),
        TokenSpec::new(Slot::Text, Mode::Light, Rule::surface(10)),
        TokenSpec::new(Slot::Text, Mode::Dark, Rule::literal("white")),
        TokenSpec::new(Slot::BgHover, Mode::Light, Rule::semantic(3).alpha(0.5)),
        TokenSpec::new(Slot::BgHover, Mode::Dark, Rule::semantic(6)),
    ];

    #[test]
    fn builds_every_static_slot() {
        let p = palettes(Rgba::rgb8(0x3f, 0x9c, 0xdc));
        let tokens = build(&SPECS, &p, false);
        let names: Vec<&str> = tokens.keys().map(String::as_str).collect();
        assert_eq!(names, ["--bg-dark", "--bg-light", "--text-dark", "--text-light"]);
        assert_eq!(tokens["--bg-dark"], p.dark.semantic.hex(5).unwrap());
        assert_eq!(tokens["--text-light"], p.light.surface.hex(10).unwrap());
        assert_eq!(tokens["--text-dark"], "white");
    }

    #[test]
    fn interactive_adds_hover_slots() {
        let p = palettes(Rgba::rgb8(0x3f, 0x9c, 0xdc));
        let tokens = build(&SPECS, &p, true);
        assert_eq!(tokens.len(), 6);
        assert_eq!(tokens["--bg-hover-dark"], p.dark.semantic.hex(6).unwrap());
        assert!(tokens["--bg-hover-light"].ends_with("80"));
    }

    #[test]
    fn surface_source_reads_the_mode_palette() {
        let p = palettes(Rgba::BLACK);
        let specs = [
            TokenSpec::new(Slot::Bg, Mode::Light, Rule::surface(2)),
            TokenSpec::new(Slot::Bg, Mode::Dark, Rule::surface(2)),
        ];
        let tokens = build(&specs, &p, false);
        assert_ne!(tokens["--bg-light"], tokens["--bg-dark"]);
    }

    #[test]
    fn building_twice_is_identical() {
        let p = palettes(Rgba::rgb8(0xdc, 0x3f, 0x4a));
        assert_eq!(build(&SPECS, &p, true), build(&SPECS, &p, true));
    }

    #[test]
    fn fallback_palette_degrades_per_token() {
        let fallback = Arc::new(Palette::fallback(Rgba::BLACK));
        let mut p = palettes(Rgba::BLACK);
        p.light.semantic = Arc::clone(&fallback);
        p.dark.semantic = fallback;

        let tokens = build(&SPECS, &p, true);
        assert_eq!(tokens["--bg-light"], "#000000");
        assert_eq!(tokens["--bg-hover-light"], "#00000000");
        assert_eq!(tokens["--text-dark"], "white");
        assert_ne!(tokens["--text-light"], "#000000");
    }

    #[test]
    fn extend_keeps_existing_tokens() {
        let p = palettes(Rgba::WHITE);
        let mut tokens = TokenMap::new();
        tokens.insert("--keep".to_owned(), "1".to_owned());
        extend(&mut tokens, &SPECS[..2], &p, false);
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens["--keep"], "1");
    }
}
