// SPDX-License-Identifier: MIT
//
// Theme configuration: the seed colors an engine renders from.
//
// The engine consumes this, it doesn't own it. Hosts build one in code
// or deserialize it from whatever settings store they have; every field
// is optional on the wire and falls back to the built-in theme.

use n_color::{Rgba, Seed};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::semantic::SemanticColor;

pub const DEFAULT_PRIMARY: &str = "#3F9CDC";
pub const DEFAULT_SECONDARY: &str = "#6C7A89";
pub const DEFAULT_TERTIARY: &str = "#8E6CD8";
pub const DEFAULT_ERROR: &str = "#DC3F4A";
pub const DEFAULT_WARNING: &str = "#DCA03F";
pub const DEFAULT_SURFACE: &str = "#121212";
pub const DEFAULT_FALLBACK: &str = "#000000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub primary: String,
    pub secondary: String,
    pub tertiary: String,
    pub error: String,
    /// Neutral seed for backgrounds, borders and body text.
    pub surface: String,
    /// Defaults to `primary`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    /// Substituted for seeds that fail to parse in the theme sheet.
    pub fallback: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY.to_owned(),
            secondary: DEFAULT_SECONDARY.to_owned(),
            tertiary: DEFAULT_TERTIARY.to_owned(),
            error: DEFAULT_ERROR.to_owned(),
            surface: DEFAULT_SURFACE.to_owned(),
            info: None,
            warning: None,
            fallback: DEFAULT_FALLBACK.to_owned(),
        }
    }
}

impl ThemeConfig {
    /// The seed string configured for `color`. `Raw` colors are their own
    /// seed.
    #[must_use]
    pub fn seed_str<'a>(&'a self, color: &'a SemanticColor) -> &'a str {
        match color {
            SemanticColor::Primary => &self.primary,
            SemanticColor::Secondary => &self.secondary,
            SemanticColor::Tertiary => &self.tertiary,
            SemanticColor::Error => &self.error,
            SemanticColor::Info => self.info.as_deref().unwrap_or(&self.primary),
            SemanticColor::Warning => self.warning.as_deref().unwrap_or(DEFAULT_WARNING),
            SemanticColor::Surface => &self.surface,
            SemanticColor::Raw(raw) => raw,
        }
    }

    #[must_use]
    pub fn seed(&self, color: &SemanticColor) -> Seed {
        Seed::from(self.seed_str(color))
    }

    /// The fallback color, parsed. A broken fallback falls back to black.
    #[must_use]
    pub fn fallback_color(&self) -> Rgba {
        Seed::from(self.fallback.as_str()).resolve_or(Rgba::BLACK)
    }

    /// Replace the seed for one named color. `Raw` has no slot and is
    /// ignored.
    pub fn set(&mut self, color: &SemanticColor, seed: impl Into<String>) {
        let seed = seed.into();
        match color {
            SemanticColor::Primary => self.primary = seed,
            SemanticColor::Secondary => self.secondary = seed,
            SemanticColor::Tertiary => self.tertiary = seed,
            SemanticColor::Error => self.error = seed,
            SemanticColor::Info => self.info = Some(seed),
            SemanticColor::Warning => self.warning = Some(seed),
            SemanticColor::Surface => self.surface = seed,
            SemanticColor::Raw(raw) => debug!(%raw, "raw colors have no config slot"),
        }
    }
}
