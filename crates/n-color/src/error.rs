// SPDX-License-Identifier: MIT
//
// Parse errors. These never reach a render call: the engine resolves
// seeds with `Seed::resolve_or` and degrades to a fallback color.

use thiserror::Error;

/// Why a color string could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseColorError {
    /// Input was empty or only whitespace.
    #[error("empty color string")]
    Empty,

    /// `#`-prefixed input with bad digits or a length other than 3, 4, 6, 8.
    #[error("invalid hex color '{0}'")]
    InvalidHex(String),

    /// Bare word that is neither a CSS color name nor hex digits.
    #[error("unknown color name '{0}'")]
    UnknownName(String),

    /// `rgb()`, `hsl()` or `oklch()` with wrong arity or bad components.
    #[error("invalid color function '{0}'")]
    InvalidFunction(String),
}
