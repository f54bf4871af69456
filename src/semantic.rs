// SPDX-License-Identifier: MIT
//
// Semantic colors: the names components use to pick a palette.
//
// The set is closed except for `Raw`, which lets a caller pass any CSS
// color string straight through as a one-off seed.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SemanticColor {
    Primary,
    Secondary,
    Tertiary,
    Error,
    Info,
    Warning,
    Surface,
    /// Any other string, used as the seed itself.
    Raw(String),
}

impl SemanticColor {
    /// The brand colors a theme sheet emits, in order.
    pub const BRAND: [Self; 6] = [
        Self::Primary,
        Self::Secondary,
        Self::Tertiary,
        Self::Error,
        Self::Info,
        Self::Warning,
    ];

    /// The configured name, or the raw string itself.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
            Self::Error => "error",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Surface => "surface",
            Self::Raw(raw) => raw,
        }
    }

    #[must_use]
    pub const fn is_raw(&self) -> bool {
        matches!(self, Self::Raw(_))
    }
}

impl fmt::Display for SemanticColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SemanticColor {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "primary" => Self::Primary,
            "secondary" => Self::Secondary,
            "tertiary" => Self::Tertiary,
            "error" => Self::Error,
            "info" => Self::Info,
            "warning" => Self::Warning,
            "surface" => Self::Surface,
            _ => Self::Raw(s.to_owned()),
        })
    }
}

impl From<String> for SemanticColor {
    fn from(s: String) -> Self {
        let Ok(color) = s.parse::<Self>();
        color
    }
}

impl From<&str> for SemanticColor {
    fn from(s: &str) -> Self {
        Self::from(s.to_owned())
    }
}

impl From<SemanticColor> for String {
    fn from(color: SemanticColor) -> Self {
        match color {
            SemanticColor::Raw(raw) => raw,
            named => named.as_str().to_owned(),
        }
    }
}
