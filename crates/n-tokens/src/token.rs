//! Token slots and per-mode token specifications.

use std::fmt;

use n_palette::Mode;

use crate::rule::Rule;

/// A styled property of a component. Hover slots only render for
/// interactive components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    Bg,
    Text,
    Border,
    BgHover,
    TextHover,
    BorderHover,
}

impl Slot {
    pub const ALL: [Self; 6] = [
        Self::Bg,
        Self::Text,
        Self::Border,
        Self::BgHover,
        Self::TextHover,
        Self::BorderHover,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bg => "bg",
            Self::Text => "text",
            Self::Border => "border",
            Self::BgHover => "bg-hover",
            Self::TextHover => "text-hover",
            Self::BorderHover => "border-hover",
        }
    }

    #[must_use]
    pub const fn is_hover(self) -> bool {
        matches!(self, Self::BgHover | Self::TextHover | Self::BorderHover)
    }

    /// The utility prefix the slot styles (`bg`, `text`, `border`).
    #[must_use]
    pub const fn property(self) -> &'static str {
        match self {
            Self::Bg | Self::BgHover => "bg",
            Self::Text | Self::TextHover => "text",
            Self::Border | Self::BorderHover => "border",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Custom property name for `slot` in `mode`, e.g. `--bg-hover-dark`.
#[must_use]
pub fn token_name(slot: Slot, mode: Mode) -> String {
    format!("--{slot}-{mode}")
}

/// One row of a variant's style table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenSpec {
    pub slot: Slot,
    pub mode: Mode,
    pub rule: Rule,
}

impl TokenSpec {
    #[must_use]
    pub const fn new(slot: Slot, mode: Mode, rule: Rule) -> Self {
        Self { slot, mode, rule }
    }

    #[must_use]
    pub fn name(&self) -> String {
        token_name(self.slot, self.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_carry_slot_and_mode() {
        assert_eq!(token_name(Slot::Bg, Mode::Dark), "--bg-dark");
        assert_eq!(token_name(Slot::BgHover, Mode::Light), "--bg-hover-light");
        assert_eq!(
            TokenSpec::new(Slot::BorderHover, Mode::Dark, Rule::semantic(5)).name(),
            "--border-hover-dark"
        );
    }

    #[test]
    fn hover_slots_share_their_base_property() {
        for slot in Slot::ALL {
            assert!(slot.as_str().starts_with(slot.property()));
        }
        assert_eq!(Slot::ALL.iter().filter(|s| s.is_hover()).count(), 3);
    }
}
