// SPDX-License-Identifier: MIT
//
// n-color: the color math underneath n-design.
//
// Everything the token engine knows about color lives here, and all of it
// is pure: parse a CSS color into sRGB, move it into a cylindrical space
// (HSL for brand scales, OKLCH for perceptual surfaces), swap the
// lightness, bring it back into gamut, and print it as hex.
//
//   CSS string ─► Rgba ─► Hsl / Oklch ─► set lightness ─► Rgba ─► #rrggbb[aa]
//
// Nothing in this crate raises on bad input at render time. Parsing
// returns a `Result`, and `Seed::resolve_or` turns that into a fallback
// color for callers that must always produce something.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Hue/lightness/chroma variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod color;
pub mod contrast;
pub mod error;
pub mod hsl;
pub mod oklch;
pub mod parse;
pub mod rgba;
pub mod seed;

pub use color::Color;
pub use error::ParseColorError;
pub use hsl::Hsl;
pub use oklch::Oklch;
pub use parse::parse_color;
pub use rgba::Rgba;
pub use seed::Seed;
