//! Palette memoization.
//!
//! Generation is cheap but runs on every render, and a theme has only a
//! handful of seeds. [`PaletteCache`] keeps each distinct palette for the
//! cache's lifetime. There is no eviction: the key space is bounded by
//! the theme configuration, not by render volume.
//!
//! The cache is an ordinary value. Engines share one through an `Arc`,
//! tests create their own and [`clear`](PaletteCache::clear) it.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use n_color::Rgba;
use parking_lot::{RwLock, RwLockUpgradableReadGuard};
use tracing::{debug, trace};

use crate::generate::{GenerateOptions, Palette, Strategy, generate};
use crate::sequence::{LightnessSequence, STOPS};

/// Identity of a generated palette.
///
/// The seed is held in canonical `#rrggbbaa` form, so `"#FFF"`, `"white"`
/// and `Rgba::WHITE` share an entry. The sequence is held by exact bit
/// pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PaletteKey {
    pub seed: String,
    pub strategy: Strategy,
    pub sequence: [u32; STOPS],
}

impl PaletteKey {
    #[must_use]
    pub fn new(seed: Rgba, sequence: &LightnessSequence, strategy: Strategy) -> Self {
        Self {
            seed: seed.canonical(),
            strategy,
            sequence: sequence.fingerprint(),
        }
    }
}

/// Hit/miss counters since creation (not reset by `clear`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

#[derive(Debug, Default)]
pub struct PaletteCache {
    entries: RwLock<HashMap<PaletteKey, Arc<Palette>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl PaletteCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the palette for `key`, running `compute` only if no entry
    /// exists yet.
    ///
    /// `compute` runs at most once per key, even when several threads miss
    /// at the same time: misses serialize on an upgradable read and
    /// re-check before computing.
    pub fn get_or_compute<F>(&self, key: PaletteKey, compute: F) -> Arc<Palette>
    where
        F: FnOnce() -> Palette,
    {
        if let Some(hit) = self.entries.read().get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(seed = %key.seed, strategy = %key.strategy, "palette cache hit");
            return Arc::clone(hit);
        }

        let entries = self.entries.upgradable_read();
        if let Some(hit) = entries.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(seed = %key.seed, strategy = %key.strategy, "palette cache hit after wait");
            return Arc::clone(hit);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!(seed = %key.seed, strategy = %key.strategy, "palette cache miss");
        let palette = Arc::new(compute());
        let mut entries = RwLockUpgradableReadGuard::upgrade(entries);
        entries.insert(key, Arc::clone(&palette));
        palette
    }

    /// Generate (or fetch) the palette for `seed` cut at `sequence`.
    ///
    /// The seed is snapped to 8-bit channels before generating, so every
    /// seed sharing a key yields the same palette whichever arrives first.
    pub fn palette(
        &self,
        seed: Rgba,
        sequence: &LightnessSequence,
        strategy: Strategy,
    ) -> Arc<Palette> {
        let seed = seed.quantized();
        self.get_or_compute(PaletteKey::new(seed, sequence, strategy), || {
            generate(seed, sequence, strategy, GenerateOptions::default())
        })
    }

    /// Drop every entry. Counters are kept.
    pub fn clear(&self) {
        let mut entries = self.entries.write();
        debug!(entries = entries.len(), "palette cache cleared");
        entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}
