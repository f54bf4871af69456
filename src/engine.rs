// SPDX-License-Identifier: MIT
//
// The engine: a theme configuration plus a palette cache.
//
// Every render resolves the requested semantic color to a seed, fetches
// its brand palette and the two surface palettes through the cache, and
// hands them to the catalog entry for (family, variant):
//
//   SemanticColor ─► ThemeConfig::seed ─► PaletteCache (Fast, default sequence)
//   surface seed ──► derive_lightness_sequence(mode) ─► PaletteCache (Perceptual)
//                                          │
//                     catalog(family, variant).render(..) ─► Rendered
//
// Callers holding a color value rather than a name go through
// `render_seed`, which skips the configuration lookup.
//
// Rendering never fails. Unparseable seeds produce fallback palettes,
// unknown catalog entries produce an empty result.

use std::sync::Arc;

use n_color::contrast::most_readable;
use n_color::{ParseColorError, Rgba, Seed};
use n_palette::{
    BrandAlias, LightnessSequence, Mode, Palette, PaletteCache, STOPS, Strategy, SurfaceAlias,
    derive_lightness_sequence,
};
use n_tokens::{
    Family, PalettePair, Palettes, ParseTokenError, TokenMap, Variant, catalog, class_names,
};
use serde::Serialize;
use tracing::{debug, trace};

use crate::config::ThemeConfig;
use crate::semantic::SemanticColor;

// ---------------------------------------------------------------------------
// Rendered
// ---------------------------------------------------------------------------

/// Tokens for one component plus the classes that read them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Rendered {
    pub tokens: TokenMap,
    pub classes: Vec<String>,
}

impl Rendered {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty() && self.classes.is_empty()
    }

    /// Tokens as an inline `style` attribute value.
    #[must_use]
    pub fn inline_style(&self) -> String {
        self.tokens
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Classes joined for a `class` attribute.
    #[must_use]
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Engine {
    config: ThemeConfig,
    cache: Arc<PaletteCache>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(ThemeConfig::default())
    }
}

impl Engine {
    /// An engine with its own, empty cache.
    #[must_use]
    pub fn new(config: ThemeConfig) -> Self {
        Self::with_cache(config, Arc::new(PaletteCache::new()))
    }

    /// An engine sharing `cache` with other engines.
    #[must_use]
    pub const fn with_cache(config: ThemeConfig, cache: Arc<PaletteCache>) -> Self {
        Self { config, cache }
    }

    #[must_use]
    pub const fn config(&self) -> &ThemeConfig {
        &self.config
    }

    #[must_use]
    pub const fn cache(&self) -> &Arc<PaletteCache> {
        &self.cache
    }

    /// Swap the theme. Cached palettes stay valid since keys carry the seed.
    pub fn set_config(&mut self, config: ThemeConfig) {
        debug!(?config, "theme replaced");
        self.config = config;
    }

    /// Brand palette for `color`, or a fallback palette if its seed does
    /// not parse.
    #[must_use]
    pub fn brand_palette(&self, color: &SemanticColor) -> Arc<Palette> {
        self.seed_palette(&self.config.seed(color))
    }

    /// Brand palette generated straight from `seed`.
    #[must_use]
    pub fn seed_palette(&self, seed: &Seed) -> Arc<Palette> {
        match seed.resolve() {
            Ok(rgba) => self.cache.palette(rgba, &LightnessSequence::DEFAULT, Strategy::Fast),
            Err(err) => self.fallback_palette(seed, &err),
        }
    }

    /// Surface palette for `mode`.
    #[must_use]
    pub fn surface_palette(&self, mode: Mode) -> Arc<Palette> {
        let seed = self.config.seed(&SemanticColor::Surface);
        match seed.resolve() {
            Ok(rgba) => {
                let sequence = derive_lightness_sequence(rgba, mode);
                self.cache.palette(rgba, &sequence, Strategy::Perceptual)
            }
            Err(err) => self.fallback_palette(&seed, &err),
        }
    }

    fn fallback_palette(&self, seed: &Seed, err: &ParseColorError) -> Arc<Palette> {
        let fallback = self.config.fallback_color();
        debug!(?seed, %err, %fallback, "unparseable seed, using fallback palette");
        Arc::new(Palette::fallback(fallback))
    }

    /// Every palette a render of `color` can read.
    #[must_use]
    pub fn palettes(&self, color: &SemanticColor) -> Palettes {
        self.seed_palettes(&self.config.seed(color))
    }

    /// Every palette a render from `seed` can read.
    #[must_use]
    pub fn seed_palettes(&self, seed: &Seed) -> Palettes {
        let semantic = self.seed_palette(seed);
        Palettes {
            light: PalettePair {
                semantic: Arc::clone(&semantic),
                surface: self.surface_palette(Mode::Light),
            },
            dark: PalettePair {
                semantic,
                surface: self.surface_palette(Mode::Dark),
            },
        }
    }

    /// Render `variant` of `family` in `color`.
    ///
    /// Hover tokens and classes are included only when `interactive`.
    /// A variant the family doesn't support renders as empty.
    #[must_use]
    pub fn render(
        &self,
        family: Family,
        variant: Variant,
        color: &SemanticColor,
        interactive: bool,
    ) -> Rendered {
        self.render_seed(family, variant, self.config.seed(color), interactive)
    }

    /// Render `variant` of `family` from a seed the caller already holds,
    /// either a CSS string or a parsed [`Rgba`].
    #[must_use]
    pub fn render_seed(
        &self,
        family: Family,
        variant: Variant,
        seed: impl Into<Seed>,
        interactive: bool,
    ) -> Rendered {
        let Some(style) = catalog(family, variant) else {
            debug!(%family, %variant, "no catalog entry");
            return Rendered::default();
        };

        let seed = seed.into();
        let palettes = self.seed_palettes(&seed);
        let rendered = Rendered {
            tokens: style.render(&palettes, interactive),
            classes: class_names(style, interactive),
        };
        trace!(%family, %variant, ?seed, interactive, tokens = rendered.tokens.len(), "rendered");
        rendered
    }

    /// [`render`](Self::render) from string identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`ParseTokenError`] for an unknown family or variant name.
    /// The color never fails: unknown names are raw seeds.
    pub fn render_named(
        &self,
        family: &str,
        variant: &str,
        color: &str,
        interactive: bool,
    ) -> Result<Rendered, ParseTokenError> {
        let family: Family = family.parse()?;
        let variant: Variant = variant.parse()?;
        Ok(self.render(family, variant, &SemanticColor::from(color), interactive))
    }

    /// Theme-wide custom properties.
    ///
    /// For each brand color: every stop (`--primary-0` .. `--primary-10`),
    /// every alias per mode (`--primary-main-dark`), and the more readable
    /// of white and black over the main stop (`--primary-readable-dark`).
    /// For the surface: every alias per mode (`--surface-base-light`).
    ///
    /// Unparseable seeds emit the fallback color.
    #[must_use]
    pub fn sheet(&self) -> TokenMap {
        let mut sheet = TokenMap::new();

        for color in &SemanticColor::BRAND {
            let palette = self.brand_palette(color);
            let stops = palette.stops();
            for (i, stop) in stops.iter().enumerate() {
                sheet.insert(format!("--{color}-{i}"), stop.to_hex());
            }
            for mode in Mode::ALL {
                for alias in BrandAlias::ALL {
                    let stop = stops[alias.index(mode)];
                    sheet.insert(format!("--{color}-{alias}-{mode}"), stop.to_hex());
                }
                let main = stops[BrandAlias::Main.index(mode)].to_rgba();
                let readable = most_readable(main, Rgba::WHITE, Rgba::BLACK);
                sheet.insert(format!("--{color}-readable-{mode}"), readable.to_hex());
            }
        }

        for mode in Mode::ALL {
            let palette = self.surface_palette(mode);
            for alias in SurfaceAlias::ALL {
                let stop = palette.stops()[alias.index()];
                sheet.insert(format!("--surface-{alias}-{mode}"), stop.to_hex());
            }
        }

        trace!(tokens = sheet.len(), stops = STOPS, "theme sheet");
        sheet
    }
}
