//! # n-palette: 11-stop color scales from a single seed
//!
//! Turns one seed color into an ordered scale of eleven stops that the
//! token layer addresses by index.
//!
//! # Architecture
//!
//! ```text
//! seed color + role
//!     │
//!     ├── brand color ──► LightnessSequence::DEFAULT
//!     │
//!     └── surface ──────► policy.rs: derive_lightness_sequence(seed, mode)
//!     │
//!     ▼
//! cache.rs:    PaletteCache::get_or_compute(key, ..)
//!     │ (miss)
//!     ▼
//! generate.rs: Fast (HSL) | Perceptual (OKLCH + gamut mapping)
//!     │
//!     ▼
//! Palette: [Color; 11], addressed through alias.rs names
//! ```
//!
//! Everything except the cache is a pure function.

// Hue/lightness/chroma variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod alias;
pub mod cache;
pub mod generate;
pub mod mode;
pub mod policy;
pub mod sequence;

pub use alias::{BrandAlias, SurfaceAlias};
pub use cache::{CacheStats, PaletteCache, PaletteKey};
pub use generate::{GenerateOptions, Palette, Strategy, generate};
pub use mode::Mode;
pub use policy::derive_lightness_sequence;
pub use sequence::{LightnessSequence, STOPS};
