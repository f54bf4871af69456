//! Lightness sequences: the eleven lightness values a palette is cut at.

/// Number of stops in every palette and every lightness sequence.
pub const STOPS: usize = 11;

/// Eleven lightness values (0.0–1.0), one per palette stop.
///
/// The fixed-size array is the length invariant; index 0 and index 10 are
/// the extremes of whatever direction the sequence runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightnessSequence([f32; STOPS]);

impl LightnessSequence {
    /// The sequence behind every brand color: index 0 darkest, 10 lightest.
    pub const DEFAULT: Self = Self([0.05, 0.10, 0.20, 0.30, 0.40, 0.50, 0.60, 0.70, 0.80, 0.90, 0.95]);

    #[must_use]
    pub const fn new(values: [f32; STOPS]) -> Self {
        Self(values)
    }

    #[must_use]
    pub const fn values(&self) -> &[f32; STOPS] {
        &self.0
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.0.get(index).copied()
    }

    /// Whether the values run in one direction (ties allowed).
    #[must_use]
    pub fn is_monotonic(&self) -> bool {
        let rising = self.0.windows(2).all(|w| w[0] <= w[1]);
        let falling = self.0.windows(2).all(|w| w[0] >= w[1]);
        rising || falling
    }

    /// Exact bit patterns of the values; two sequences share a fingerprint
    /// only if they are identical.
    #[must_use]
    pub fn fingerprint(&self) -> [u32; STOPS] {
        self.0.map(f32::to_bits)
    }
}

impl Default for LightnessSequence {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_runs_dark_to_light() {
        let seq = LightnessSequence::DEFAULT;
        assert!(seq.is_monotonic());
        assert!(seq.values()[0] < seq.values()[10]);
        assert_eq!(seq.get(5), Some(0.5));
        assert_eq!(seq.get(11), None);
    }

    #[test]
    fn descending_counts_as_monotonic() {
        let mut values = *LightnessSequence::DEFAULT.values();
        values.reverse();
        assert!(LightnessSequence::new(values).is_monotonic());
    }

    #[test]
    fn zigzag_is_not_monotonic() {
        let mut values = *LightnessSequence::DEFAULT.values();
        values.swap(3, 4);
        assert!(!LightnessSequence::new(values).is_monotonic());
    }

    #[test]
    fn fingerprint_distinguishes_tiny_changes() {
        let mut values = *LightnessSequence::DEFAULT.values();
        values[7] += 1e-6;
        assert_ne!(
            LightnessSequence::new(values).fingerprint(),
            LightnessSequence::DEFAULT.fingerprint()
        );
        assert_eq!(LightnessSequence::DEFAULT.fingerprint(), LightnessSequence::default().fingerprint());
    }
}
