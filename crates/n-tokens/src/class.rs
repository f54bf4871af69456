//! Utility class names that consume rendered tokens.
//!
//! Each slot a style renders gets one class per mode, pointing at the
//! custom property of the same name:
//!
//! ```text
//! bg-(--bg-light)   dark:bg-(--bg-dark)   hover:bg-(--bg-hover-light)   dark:hover:bg-(--bg-hover-dark)
//! ```

use n_palette::Mode;

use crate::catalog::VariantStyle;
use crate::token::{Slot, token_name};

/// The classes for one slot, light then dark.
#[must_use]
pub fn slot_classes(slot: Slot) -> [String; 2] {
    let prefix = if slot.is_hover() { "hover:" } else { "" };
    let property = slot.property();
    [
        format!("{prefix}{property}-({})", token_name(slot, Mode::Light)),
        format!("dark:{prefix}{property}-({})", token_name(slot, Mode::Dark)),
    ]
}

/// Classes for every slot `style` renders, in slot order. Hover classes
/// appear only when `interactive`.
#[must_use]
pub fn class_names(style: &VariantStyle, interactive: bool) -> Vec<String> {
    Slot::ALL
        .into_iter()
        .filter(|&slot| style.has_slot(slot, interactive))
        .flat_map(slot_classes)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use n_color::Rgba;
    use n_palette::Palette;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::builder::{PalettePair, Palettes};
    use crate::catalog::{Family, Variant, catalog, variants};

    #[test]
    fn filled_button_classes() {
        let style = catalog(Family::Button, Variant::Filled).unwrap();
        assert_eq!(
            class_names(style, false),
            [
                "bg-(--bg-light)",
                "dark:bg-(--bg-dark)",
                "text-(--text-light)",
                "dark:text-(--text-dark)",
                "border-(--border-light)",
                "dark:border-(--border-dark)",
            ]
        );
    }

    #[test]
    fn hover_classes_need_interaction() {
        let style = catalog(Family::Button, Variant::Light).unwrap();
        let classes = class_names(style, true);
        assert!(classes.contains(&"hover:bg-(--bg-hover-light)".to_owned()));
        assert!(classes.contains(&"dark:hover:bg-(--bg-hover-dark)".to_owned()));
        assert!(!class_names(style, false).iter().any(|c| c.contains("hover")));
    }

    #[test]
    fn every_class_points_at_a_rendered_token() {
        let placeholder = Arc::new(Palette::fallback(Rgba::BLACK));
        let pair = PalettePair {
            semantic: Arc::clone(&placeholder),
            surface: placeholder,
        };
        let palettes = Palettes {
            light: pair.clone(),
            dark: pair,
        };

        for family in Family::ALL {
            for style in variants(family) {
                for interactive in [false, true] {
                    let tokens = style.render(&palettes, interactive);
                    for class in class_names(style, interactive) {
                        let name = class
                            .split_once('(')
                            .and_then(|(_, rest)| rest.strip_suffix(')'))
                            .unwrap();
                        assert!(tokens.contains_key(name), "{family} {}: {class}", style.variant);
                    }
                    assert_eq!(tokens.len(), class_names(style, interactive).len());
                }
            }
        }
    }
}
