//! # n-tokens: from palettes to rendered style tokens
//!
//! A component asks for a (family, variant) pair. The catalog answers
//! with a table of [`TokenSpec`] rows, one per slot and mode. The builder
//! evaluates each row's [`Rule`] against the semantic and surface palettes
//! and returns a flat map of custom properties, and [`class_names`] lists
//! the utility classes that read them.
//!
//! ```text
//! catalog(family, variant) ──► VariantStyle { base, hover }
//!                                   │
//!         Palettes { light, dark } ─┤
//!                                   ▼
//!                      build / VariantStyle::render
//!                                   │
//!                                   ▼
//!             TokenMap { "--bg-dark": "#3f9cdc", .. }  +  class_names
//! ```

pub mod builder;
pub mod catalog;
pub mod class;
pub mod error;
pub mod rule;
pub mod token;

pub use builder::{PalettePair, Palettes, TokenMap, build, build_rule, extend};
pub use catalog::{Family, Variant, VariantStyle, catalog, variants};
pub use class::{class_names, slot_classes};
pub use error::ParseTokenError;
pub use n_palette::Mode;
pub use rule::{Format, PaletteRef, Rule, Source};
pub use token::{Slot, TokenSpec, token_name};
