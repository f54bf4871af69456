//! Token rules: how one token value is produced.
//!
//! A rule is either a literal string copied verbatim, or a reference to a
//! stop in one of the two palettes a render works with. Rules are `const`
//! so catalogs can be plain static data:
//!
//! ```
//! use n_tokens::Rule;
//!
//! const TINT: Rule = Rule::semantic(5).alpha(0.15);
//! const PAGE: Rule = Rule::literal("transparent");
//! ```

use n_palette::{BrandAlias, Mode, Palette, SurfaceAlias};

/// Which palette a reference reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    /// The palette of the semantic color being rendered (primary, error, ..).
    Semantic,
    /// The mode-specific surface palette.
    Surface,
}

/// Output form of a referenced stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// `#rrggbb`
    Hex,
    /// `#rrggbbaa`
    HexAlpha,
}

/// A reference to one palette stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteRef {
    pub source: Source,
    pub index: usize,
    pub alpha: Option<f32>,
    pub format: Format,
    /// Rendered when the stop can't be resolved. `None` means black in the
    /// rule's own format.
    pub fallback: Option<&'static str>,
}

impl PaletteRef {
    #[must_use]
    pub const fn new(source: Source, index: usize) -> Self {
        Self {
            source,
            index,
            alpha: None,
            format: Format::Hex,
            fallback: None,
        }
    }

    /// Whether this reference renders as 8-digit hex.
    #[must_use]
    pub const fn wants_alpha(&self) -> bool {
        self.alpha.is_some() || matches!(self.format, Format::HexAlpha)
    }

    /// The value used when the stop is missing.
    #[must_use]
    pub const fn fallback_value(&self) -> &'static str {
        match self.fallback {
            Some(value) => value,
            None if self.wants_alpha() => "#00000000",
            None => "#000000",
        }
    }

    /// Render against `palette`.
    ///
    /// An out-of-range index or a fallback palette yields
    /// [`fallback_value`](Self::fallback_value).
    #[must_use]
    pub fn render(&self, palette: &Palette) -> String {
        let Some(color) = palette.get(self.index) else {
            return self.fallback_value().to_owned();
        };
        if self.wants_alpha() {
            color.to_hex_alpha(self.alpha.unwrap_or(1.0))
        } else {
            color.to_hex()
        }
    }
}

/// How a token's value is produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// Copied verbatim (`"transparent"`, `"white"`).
    Literal(&'static str),
    /// Looked up in a palette.
    Ref(PaletteRef),
}

impl Rule {
    #[must_use]
    pub const fn literal(value: &'static str) -> Self {
        Self::Literal(value)
    }

    /// Stop `index` of the semantic palette.
    #[must_use]
    pub const fn semantic(index: usize) -> Self {
        Self::Ref(PaletteRef::new(Source::Semantic, index))
    }

    /// Stop `index` of the surface palette.
    #[must_use]
    pub const fn surface(index: usize) -> Self {
        Self::Ref(PaletteRef::new(Source::Surface, index))
    }

    /// The semantic stop `alias` names in `mode`.
    #[must_use]
    pub const fn brand(alias: BrandAlias, mode: Mode) -> Self {
        Self::semantic(alias.index(mode))
    }

    /// The surface stop `alias` names.
    #[must_use]
    pub const fn role(alias: SurfaceAlias) -> Self {
        Self::surface(alias.index())
    }

    /// Render as 8-digit hex at `alpha`. No effect on literals.
    #[must_use]
    pub const fn alpha(self, alpha: f32) -> Self {
        match self {
            Self::Ref(r) => Self::Ref(PaletteRef {
                alpha: Some(alpha),
                ..r
            }),
            Self::Literal(_) => self,
        }
    }

    /// Render as 8-digit hex; alpha stays 1.0 unless set.
    #[must_use]
    pub const fn hex_alpha(self) -> Self {
        match self {
            Self::Ref(r) => Self::Ref(PaletteRef {
                format: Format::HexAlpha,
                ..r
            }),
            Self::Literal(_) => self,
        }
    }

    /// Replace the default black fallback.
    #[must_use]
    pub const fn or(self, fallback: &'static str) -> Self {
        match self {
            Self::Ref(r) => Self::Ref(PaletteRef {
                fallback: Some(fallback),
                ..r
            }),
            Self::Literal(_) => self,
        }
    }

    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }
}

#[cfg(test)]
mod tests {
    use n_color::Rgba;
    use n_palette::{GenerateOptions, LightnessSequence, Strategy, generate};

    use super::*;

    fn brand() -> Palette {
        generate(
            Rgba::rgb8(0x3f, 0x9c, 0xdc),
            &LightnessSequence::DEFAULT,
            Strategy::Fast,
            GenerateOptions::default(),
        )
    }

    fn render(rule: Rule, palette: &Palette) -> String {
        match rule {
            Rule::Literal(value) => value.to_owned(),
            Rule::Ref(r) => r.render(palette),
        }
    }

    #[test]
    fn plain_reference_renders_hex() {
        let p = brand();
        let hex = render(Rule::semantic(5), &p);
        assert_eq!(hex.len(), 7);
        assert_eq!(Some(hex), p.hex(5));
    }

    #[test]
    fn alpha_renders_eight_digits() {
        let p = brand();
        let hex = render(Rule::semantic(5).alpha(0.1), &p);
        assert_eq!(hex.len(), 9);
        assert!(hex.ends_with("1a"), "{hex}");
        assert!(hex.starts_with(&p.hex(5).unwrap()));
    }

    #[test]
    fn hex_alpha_format_defaults_to_opaque() {
        let hex = render(Rule::semantic(2).hex_alpha(), &brand());
        assert!(hex.ends_with("ff"), "{hex}");
        assert_eq!(hex.len(), 9);
    }

    #[test]
    fn out_of_range_uses_format_fallback() {
        let p = brand();
        assert_eq!(render(Rule::semantic(11), &p), "#000000");
        assert_eq!(render(Rule::semantic(11).alpha(0.5), &p), "#00000000");
        assert_eq!(render(Rule::semantic(42).hex_alpha(), &p), "#00000000");
    }

    #[test]
    fn fallback_palette_uses_rule_fallback() {
        let p = Palette::fallback(Rgba::rgb8(0xff, 0x00, 0xff));
        assert_eq!(render(Rule::semantic(5), &p), "#000000");
        assert_eq!(render(Rule::surface(0).or("#123456"), &p), "#123456");
    }

    #[test]
    fn literals_ignore_modifiers() {
        let rule = Rule::literal("transparent").alpha(0.5).hex_alpha().or("x");
        assert_eq!(rule, Rule::Literal("transparent"));
        assert!(rule.is_literal());
        assert_eq!(render(rule, &brand()), "transparent");
    }

    #[test]
    fn aliases_resolve_to_indices() {
        assert_eq!(Rule::brand(BrandAlias::Main, Mode::Dark), Rule::semantic(5));
        assert_eq!(Rule::role(SurfaceAlias::Border), Rule::surface(5));
    }
}
