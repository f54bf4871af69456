// SPDX-License-Identifier: MIT
//
// n-design: a design-token engine.
//
// Components describe what they want (a family, a variant, a semantic
// color, whether they react to hover) and get back concrete values:
//
//   ThemeConfig ──► Engine::render(Family::Button, Variant::Filled, &Primary, true)
//                     │
//                     ▼
//   Rendered { tokens: { "--bg-dark": "#1e7ec4", .. }, classes: ["bg-(--bg-light)", ..] }
//
// The work happens in the member crates:
//
//   n-color   → parsing, HSL / OKLCH math, gamut mapping, hex output
//   n-palette → 11-stop palettes, adaptive surface lightness, palette cache
//   n-tokens  → token rules, the builder, per-family variant catalogs
//
// This crate adds the theme configuration and the engine that ties a
// configuration to a cache.

pub mod config;
pub mod engine;
pub mod semantic;

pub use config::ThemeConfig;
pub use engine::{Engine, Rendered};
pub use semantic::SemanticColor;

pub use n_color::{Color, Rgba, Seed};
pub use n_palette::{Mode, Palette, PaletteCache, Strategy};
pub use n_tokens::{Family, ParseTokenError, TokenMap, Variant};

pub use n_color as color;
pub use n_palette as palette;
pub use n_tokens as tokens;
