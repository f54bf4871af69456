//! Variant catalogs: which stop of which palette feeds each token.
//!
//! One table per component family. Variants recur across families with
//! the same meaning, so each variant's rows are defined once and the
//! families pick them up, with or without hover rows.
//!
//! | variant       | background                 | text / border                     |
//! |---------------|----------------------------|-----------------------------------|
//! | `default`     | neutral surface            | surface text, surface border      |
//! | `filled`      | solid semantic color       | contrasting text                  |
//! | `light`       | low-alpha semantic tint    | semantic text                     |
//! | `outline`     | transparent                | semantic border and text          |
//! | `subtle`      | transparent                | muted semantic text               |
//! | `transparent` | none                       | semantic text only                |
//! | `contrast`    | none                       | stronger semantic text            |
//! | `white`       | white in both modes        | semantic text                     |
//!
//! These values are design decisions, not derived from anything. Change
//! them deliberately.

use std::fmt;
use std::str::FromStr;

use n_palette::{BrandAlias, Mode, SurfaceAlias};
use serde::{Deserialize, Serialize};

use crate::builder::{Palettes, TokenMap, extend};
use crate::error::ParseTokenError;
use crate::rule::Rule;
use crate::token::{Slot, TokenSpec};

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

/// A UI component family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    /// Generic box: cards, alerts, panels.
    Container,
    Button,
    Tag,
    /// Text fields.
    Input,
}

impl Family {
    pub const ALL: [Self; 4] = [Self::Container, Self::Button, Self::Tag, Self::Input];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Container => "container",
            Self::Button => "button",
            Self::Tag => "tag",
            Self::Input => "input",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Family {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|family| family.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseTokenError::UnknownFamily(s.to_owned()))
    }
}

/// A named visual treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Default,
    Filled,
    Light,
    Outline,
    Subtle,
    Transparent,
    Contrast,
    White,
}

impl Variant {
    pub const ALL: [Self; 8] = [
        Self::Default,
        Self::Filled,
        Self::Light,
        Self::Outline,
        Self::Subtle,
        Self::Transparent,
        Self::Contrast,
        Self::White,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Filled => "filled",
            Self::Light => "light",
            Self::Outline => "outline",
            Self::Subtle => "subtle",
            Self::Transparent => "transparent",
            Self::Contrast => "contrast",
            Self::White => "white",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseTokenError::UnknownVariant(s.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// VariantStyle
// ---------------------------------------------------------------------------

/// The token table for one (family, variant).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantStyle {
    pub family: Family,
    pub variant: Variant,
    /// Always rendered.
    pub base: &'static [TokenSpec],
    /// Rendered only for interactive components.
    pub hover: &'static [TokenSpec],
}

impl VariantStyle {
    const fn new(
        family: Family,
        variant: Variant,
        base: &'static [TokenSpec],
        hover: &'static [TokenSpec],
    ) -> Self {
        Self {
            family,
            variant,
            base,
            hover,
        }
    }

    /// Rows that apply, hover rows included only when `interactive`.
    pub fn specs(&self, interactive: bool) -> impl Iterator<Item = &'static TokenSpec> + use<> {
        let hover: &'static [TokenSpec] = if interactive { self.hover } else { &[] };
        self.base.iter().chain(hover)
    }

    #[must_use]
    pub const fn has_hover(&self) -> bool {
        !self.hover.is_empty()
    }

    /// Whether `slot` has rows in this style (given interactivity).
    #[must_use]
    pub fn has_slot(&self, slot: Slot, interactive: bool) -> bool {
        self.specs(interactive).any(|spec| spec.slot == slot)
    }

    /// Render every applicable row.
    #[must_use]
    pub fn render(&self, palettes: &Palettes, interactive: bool) -> TokenMap {
        let mut tokens = TokenMap::new();
        extend(&mut tokens, self.base, palettes, interactive);
        if interactive {
            extend(&mut tokens, self.hover, palettes, interactive);
        }
        tokens
    }
}

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

const fn light(slot: Slot, rule: Rule) -> TokenSpec {
    TokenSpec::new(slot, Mode::Light, rule)
}

const fn dark(slot: Slot, rule: Rule) -> TokenSpec {
    TokenSpec::new(slot, Mode::Dark, rule)
}

const fn brand(alias: BrandAlias, mode: Mode) -> Rule {
    Rule::brand(alias, mode)
}

const fn surface(alias: SurfaceAlias) -> Rule {
    Rule::role(alias)
}

const TRANSPARENT: Rule = Rule::literal("transparent");
const WHITE: Rule = Rule::literal("white");

const DEFAULT_ROWS: &[TokenSpec] = &[
    light(Slot::Bg, surface(SurfaceAlias::High)),
    dark(Slot::Bg, surface(SurfaceAlias::High)),
    light(Slot::Text, surface(SurfaceAlias::On)),
    dark(Slot::Text, surface(SurfaceAlias::On)),
    light(Slot::Border, surface(SurfaceAlias::Border)),
    dark(Slot::Border, surface(SurfaceAlias::Border)),
];

const DEFAULT_HOVER: &[TokenSpec] = &[
    light(Slot::BgHover, surface(SurfaceAlias::Highest)),
    dark(Slot::BgHover, surface(SurfaceAlias::Highest)),
];

const FILLED_ROWS: &[TokenSpec] = &[
    light(Slot::Bg, brand(BrandAlias::Main, Mode::Light)),
    dark(Slot::Bg, brand(BrandAlias::Main, Mode::Dark)),
    light(Slot::Text, brand(BrandAlias::On, Mode::Light)),
    dark(Slot::Text, brand(BrandAlias::On, Mode::Dark)),
    light(Slot::Border, brand(BrandAlias::Main, Mode::Light)),
    dark(Slot::Border, brand(BrandAlias::Main, Mode::Dark)),
];

const FILLED_HOVER: &[TokenSpec] = &[
    light(Slot::BgHover, brand(BrandAlias::Hover, Mode::Light)),
    dark(Slot::BgHover, brand(BrandAlias::Hover, Mode::Dark)),
    light(Slot::TextHover, brand(BrandAlias::On, Mode::Light)),
    dark(Slot::TextHover, brand(BrandAlias::On, Mode::Dark)),
    light(Slot::BorderHover, brand(BrandAlias::Hover, Mode::Light)),
    dark(Slot::BorderHover, brand(BrandAlias::Hover, Mode::Dark)),
];

const LIGHT_ROWS: &[TokenSpec] = &[
    light(Slot::Bg, brand(BrandAlias::Main, Mode::Light).alpha(0.1)),
    dark(Slot::Bg, brand(BrandAlias::Main, Mode::Dark).alpha(0.15)),
    light(Slot::Text, brand(BrandAlias::Text, Mode::Light)),
    dark(Slot::Text, brand(BrandAlias::Text, Mode::Dark)),
];

const LIGHT_HOVER: &[TokenSpec] = &[
    light(Slot::BgHover, brand(BrandAlias::Main, Mode::Light).alpha(0.15)),
    dark(Slot::BgHover, brand(BrandAlias::Main, Mode::Dark).alpha(0.2)),
];

const OUTLINE_ROWS: &[TokenSpec] = &[
    light(Slot::Bg, TRANSPARENT),
    dark(Slot::Bg, TRANSPARENT),
    light(Slot::Text, brand(BrandAlias::Text, Mode::Light)),
    dark(Slot::Text, brand(BrandAlias::Text, Mode::Dark)),
    light(Slot::Border, brand(BrandAlias::Main, Mode::Light)),
    dark(Slot::Border, brand(BrandAlias::Main, Mode::Dark)),
];

const OUTLINE_HOVER: &[TokenSpec] = &[
    light(Slot::BgHover, brand(BrandAlias::Main, Mode::Light).alpha(0.05)),
    dark(Slot::BgHover, brand(BrandAlias::Main, Mode::Dark).alpha(0.1)),
];

const SUBTLE_ROWS: &[TokenSpec] = &[
    light(Slot::Bg, TRANSPARENT),
    dark(Slot::Bg, TRANSPARENT),
    light(Slot::Text, brand(BrandAlias::Muted, Mode::Light)),
    dark(Slot::Text, brand(BrandAlias::Muted, Mode::Dark)),
];

const SUBTLE_HOVER: &[TokenSpec] = &[
    light(Slot::BgHover, brand(BrandAlias::Main, Mode::Light).alpha(0.1)),
    dark(Slot::BgHover, brand(BrandAlias::Main, Mode::Dark).alpha(0.15)),
    light(Slot::TextHover, brand(BrandAlias::Text, Mode::Light)),
    dark(Slot::TextHover, brand(BrandAlias::Text, Mode::Dark)),
];

const TRANSPARENT_ROWS: &[TokenSpec] = &[
    light(Slot::Bg, TRANSPARENT),
    dark(Slot::Bg, TRANSPARENT),
    light(Slot::Text, Rule::semantic(4)),
    dark(Slot::Text, Rule::semantic(6)),
    light(Slot::Border, TRANSPARENT),
    dark(Slot::Border, TRANSPARENT),
];

const TRANSPARENT_HOVER: &[TokenSpec] = &[
    light(Slot::TextHover, Rule::semantic(3)),
    dark(Slot::TextHover, Rule::semantic(7)),
];

const CONTRAST_ROWS: &[TokenSpec] = &[
    light(Slot::Bg, TRANSPARENT),
    dark(Slot::Bg, TRANSPARENT),
    light(Slot::Text, Rule::semantic(3)),
    dark(Slot::Text, Rule::semantic(7)),
];

const CONTRAST_HOVER: &[TokenSpec] = &[
    light(Slot::TextHover, Rule::semantic(2)),
    dark(Slot::TextHover, Rule::semantic(8)),
];

const WHITE_ROWS: &[TokenSpec] = &[
    light(Slot::Bg, WHITE),
    dark(Slot::Bg, WHITE),
    light(Slot::Text, Rule::semantic(4)),
    dark(Slot::Text, Rule::semantic(4)),
    light(Slot::Border, WHITE),
    dark(Slot::Border, WHITE),
];

const WHITE_HOVER: &[TokenSpec] = &[
    light(Slot::BgHover, Rule::semantic(9)),
    dark(Slot::BgHover, Rule::semantic(9)),
];

const INPUT_DEFAULT_ROWS: &[TokenSpec] = &[
    light(Slot::Bg, surface(SurfaceAlias::Lowest)),
    dark(Slot::Bg, surface(SurfaceAlias::Lowest)),
    light(Slot::Text, surface(SurfaceAlias::On)),
    dark(Slot::Text, surface(SurfaceAlias::On)),
    light(Slot::Border, surface(SurfaceAlias::Border)),
    dark(Slot::Border, surface(SurfaceAlias::Border)),
];

const INPUT_DEFAULT_HOVER: &[TokenSpec] = &[
    light(Slot::BorderHover, brand(BrandAlias::Main, Mode::Light)),
    dark(Slot::BorderHover, brand(BrandAlias::Main, Mode::Dark)),
];

const INPUT_FILLED_ROWS: &[TokenSpec] = &[
    light(Slot::Bg, surface(SurfaceAlias::High)),
    dark(Slot::Bg, surface(SurfaceAlias::High)),
    light(Slot::Text, surface(SurfaceAlias::On)),
    dark(Slot::Text, surface(SurfaceAlias::On)),
    light(Slot::Border, TRANSPARENT),
    dark(Slot::Border, TRANSPARENT),
];

const INPUT_FILLED_HOVER: &[TokenSpec] = &[
    light(Slot::BgHover, surface(SurfaceAlias::Highest)),
    dark(Slot::BgHover, surface(SurfaceAlias::Highest)),
];

// ---------------------------------------------------------------------------
// Family tables
// ---------------------------------------------------------------------------

const NO_HOVER: &[TokenSpec] = &[];

const CONTAINER: &[VariantStyle] = &[
    VariantStyle::new(Family::Container, Variant::Default, DEFAULT_ROWS, NO_HOVER),
    VariantStyle::new(Family::Container, Variant::Filled, FILLED_ROWS, NO_HOVER),
    VariantStyle::new(Family::Container, Variant::Light, LIGHT_ROWS, NO_HOVER),
    VariantStyle::new(Family::Container, Variant::Outline, OUTLINE_ROWS, NO_HOVER),
    VariantStyle::new(Family::Container, Variant::Subtle, SUBTLE_ROWS, NO_HOVER),
    VariantStyle::new(Family::Container, Variant::Transparent, TRANSPARENT_ROWS, NO_HOVER),
    VariantStyle::new(Family::Container, Variant::Contrast, CONTRAST_ROWS, NO_HOVER),
    VariantStyle::new(Family::Container, Variant::White, WHITE_ROWS, NO_HOVER),
];

const BUTTON: &[VariantStyle] = &[
    VariantStyle::new(Family::Button, Variant::Default, DEFAULT_ROWS, DEFAULT_HOVER),
    VariantStyle::new(Family::Button, Variant::Filled, FILLED_ROWS, FILLED_HOVER),
    VariantStyle::new(Family::Button, Variant::Light, LIGHT_ROWS, LIGHT_HOVER),
    VariantStyle::new(Family::Button, Variant::Outline, OUTLINE_ROWS, OUTLINE_HOVER),
    VariantStyle::new(Family::Button, Variant::Subtle, SUBTLE_ROWS, SUBTLE_HOVER),
    VariantStyle::new(Family::Button, Variant::Transparent, TRANSPARENT_ROWS, TRANSPARENT_HOVER),
    VariantStyle::new(Family::Button, Variant::Contrast, CONTRAST_ROWS, CONTRAST_HOVER),
    VariantStyle::new(Family::Button, Variant::White, WHITE_ROWS, WHITE_HOVER),
];

const TAG: &[VariantStyle] = &[
    VariantStyle::new(Family::Tag, Variant::Default, DEFAULT_ROWS, NO_HOVER),
    VariantStyle::new(Family::Tag, Variant::Filled, FILLED_ROWS, NO_HOVER),
    VariantStyle::new(Family::Tag, Variant::Light, LIGHT_ROWS, NO_HOVER),
    VariantStyle::new(Family::Tag, Variant::Outline, OUTLINE_ROWS, NO_HOVER),
    VariantStyle::new(Family::Tag, Variant::White, WHITE_ROWS, NO_HOVER),
];

const INPUT: &[VariantStyle] = &[
    VariantStyle::new(Family::Input, Variant::Default, INPUT_DEFAULT_ROWS, INPUT_DEFAULT_HOVER),
    VariantStyle::new(Family::Input, Variant::Filled, INPUT_FILLED_ROWS, INPUT_FILLED_HOVER),
];

/// Every variant a family supports, in catalog order.
#[must_use]
pub const fn variants(family: Family) -> &'static [VariantStyle] {
    match family {
        Family::Container => CONTAINER,
        Family::Button => BUTTON,
        Family::Tag => TAG,
        Family::Input => INPUT,
    }
}

/// Look up the style for `variant` in `family`.
///
/// Returns `None` for combinations the family doesn't support (inputs
/// only have `default` and `filled`, for example).
#[must_use]
pub fn catalog(family: Family, variant: Variant) -> Option<&'static VariantStyle> {
    variants(family).iter().find(|style| style.variant == variant)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
