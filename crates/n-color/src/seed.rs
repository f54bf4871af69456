// SPDX-License-Identifier: MIT
//
// Seed: the raw color a palette is derived from.
//
// Theme configuration hands the engine strings; embedding callers may
// already hold a parsed color. Both resolve to `Rgba`, and the lenient
// path never fails.

use tracing::debug;

use crate::error::ParseColorError;
use crate::parse::parse_color;
use crate::rgba::Rgba;

#[derive(Clone, Debug, PartialEq)]
pub enum Seed {
    /// Any CSS color string.
    Css(String),
    /// An already parsed color.
    Rgba(Rgba),
}

impl Seed {
    /// Parse the seed.
    ///
    /// # Errors
    ///
    /// Returns the parser's error for an unrecognized CSS string.
    pub fn resolve(&self) -> Result<Rgba, ParseColorError> {
        match self {
            Self::Css(s) => parse_color(s),
            Self::Rgba(c) => Ok(*c),
        }
    }

    /// Parse the seed, substituting `fallback` for anything unparseable.
    #[must_use]
    pub fn resolve_or(&self, fallback: Rgba) -> Rgba {
        self.resolve().unwrap_or_else(|err| {
            debug!(seed = ?self, %err, %fallback, "unparseable seed, using fallback");
            fallback
        })
    }
}

impl From<&str> for Seed {
    fn from(s: &str) -> Self {
        Self::Css(s.to_owned())
    }
}

impl From<String> for Seed {
    fn from(s: String) -> Self {
        Self::Css(s)
    }
}

impl From<Rgba> for Seed {
    fn from(c: Rgba) -> Self {
        Self::Rgba(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_seed_resolves() {
        let seed = Seed::from("#3F9CDC");
        assert_eq!(seed.resolve().map(Rgba::to_hex), Ok("#3f9cdc".to_owned()));
    }

    #[test]
    fn rgba_seed_passes_through() {
        let c = Rgba::rgb8(1, 2, 3);
        assert_eq!(Seed::from(c).resolve(), Ok(c));
    }

    #[test]
    fn bad_seed_errors_strictly() {
        assert!(Seed::from("not-a-color").resolve().is_err());
    }

    #[test]
    fn bad_seed_degrades_leniently() {
        let fallback = Rgba::rgb8(0xff, 0x00, 0xff);
        assert_eq!(Seed::from("not-a-color").resolve_or(fallback), fallback);
        assert_eq!(Seed::from(String::new()).resolve_or(Rgba::BLACK), Rgba::BLACK);
    }
}
