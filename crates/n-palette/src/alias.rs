//! Named roles for palette stops.
//!
//! Token rules address stops by number; these enums give the numbers
//! names. The mapping is a fixed table, never derived from the colors, so
//! a role always lands on the same stop whatever the seed.
//!
//! Brand palettes all share [`LightnessSequence::DEFAULT`] (0 darkest,
//! 10 lightest), so a brand role sits on a different stop in each mode.
//! Surface sequences are role-ordered by the policy instead: stop 0 is
//! always the lowest surface for the current mode, stop 10 always the
//! text color on it, so a surface role has one index in both modes.
//!
//! [`LightnessSequence::DEFAULT`]: crate::sequence::LightnessSequence::DEFAULT

use std::fmt;

use crate::mode::Mode;

/// Roles within a brand (semantic color) palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrandAlias {
    /// The solid brand color.
    Main,
    Hover,
    /// Text on top of `Main`.
    On,
    /// Low-emphasis tinted fill.
    Container,
    OnContainer,
    Border,
    Muted,
    /// The brand color used as text on a neutral surface.
    Text,
    TextHover,
}

impl BrandAlias {
    pub const ALL: [Self; 9] = [
        Self::Main,
        Self::Hover,
        Self::On,
        Self::Container,
        Self::OnContainer,
        Self::Border,
        Self::Muted,
        Self::Text,
        Self::TextHover,
    ];

    /// The stop this role maps to in `mode`.
    #[must_use]
    pub const fn index(self, mode: Mode) -> usize {
        let (light, dark) = match self {
            Self::Main => (4, 5),
            Self::Hover => (3, 6),
            Self::On => (10, 10),
            Self::Container => (8, 2),
            Self::OnContainer => (2, 8),
            Self::Border => (6, 4),
            Self::Muted => (5, 6),
            Self::Text => (4, 7),
            Self::TextHover => (3, 8),
        };
        match mode {
            Mode::Light => light,
            Mode::Dark => dark,
        }
    }

    /// Kebab-case name used in custom property names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Hover => "hover",
            Self::On => "on",
            Self::Container => "container",
            Self::OnContainer => "on-container",
            Self::Border => "border",
            Self::Muted => "muted",
            Self::Text => "text",
            Self::TextHover => "text-hover",
        }
    }
}

impl fmt::Display for BrandAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Roles within a surface palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceAlias {
    Lowest,
    Low,
    /// The default page background.
    Base,
    High,
    Highest,
    /// Low-contrast separator just past `Base`.
    Border,
    BorderStrong,
    Disabled,
    Muted,
    OnVariant,
    /// Body text on `Base`.
    On,
    /// Text drawn on an `On`-colored fill.
    OnInverted,
}

impl SurfaceAlias {
    pub const ALL: [Self; 12] = [
        Self::Lowest,
        Self::Low,
        Self::Base,
        Self::High,
        Self::Highest,
        Self::Border,
        Self::BorderStrong,
        Self::Disabled,
        Self::Muted,
        Self::OnVariant,
        Self::On,
        Self::OnInverted,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Lowest | Self::OnInverted => 0,
            Self::Low => 1,
            Self::Base => 2,
            Self::High => 3,
            Self::Highest => 4,
            Self::Border => 5,
            Self::BorderStrong => 6,
            Self::Disabled => 7,
            Self::Muted => 8,
            Self::OnVariant => 9,
            Self::On => 10,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lowest => "lowest",
            Self::Low => "low",
            Self::Base => "base",
            Self::High => "high",
            Self::Highest => "highest",
            Self::Border => "border",
            Self::BorderStrong => "border-strong",
            Self::Disabled => "disabled",
            Self::Muted => "muted",
            Self::OnVariant => "on-variant",
            Self::On => "on",
            Self::OnInverted => "on-inverted",
        }
    }
}

impl fmt::Display for SurfaceAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
