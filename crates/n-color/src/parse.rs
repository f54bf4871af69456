// SPDX-License-Identifier: MIT
//
// CSS color parsing.
//
// The grammar is `csscolorparser`'s: hex with or without `#`, CSS color
// keywords, `transparent`, and the functional forms (`rgb()`, `hsl()`,
// `hwb()`, `oklch()` and friends). This module only shapes the result
// into an `Rgba` and classifies failures.

use tracing::trace;

use crate::error::ParseColorError;
use crate::rgba::Rgba;

/// Parse a CSS color string.
///
/// # Errors
///
/// Returns a [`ParseColorError`] naming the form that was attempted.
pub fn parse_color(input: &str) -> Result<Rgba, ParseColorError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ParseColorError::Empty);
    }

    match csscolorparser::parse(s) {
        Ok(color) => {
            let [r, g, b, a] = color.to_rgba8();
            Ok(Rgba::rgba8(r, g, b, a))
        }
        Err(err) => {
            trace!(input = s, %err, "color rejected");
            Err(classify(s))
        }
    }
}

fn classify(s: &str) -> ParseColorError {
    let owned = s.to_owned();
    if s.starts_with('#') {
        ParseColorError::InvalidHex(owned)
    } else if s.contains('(') {
        ParseColorError::InvalidFunction(owned)
    } else {
        ParseColorError::UnknownName(owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hex(s: &str) -> String {
        parse_color(s).unwrap().to_hex()
    }

    // Alpha survives as an 8-bit channel.
    fn alpha_close(a: f32, b: f32) -> bool {
        (a - b).abs() <= 0.5 / 255.0 + f32::EPSILON
    }

    // ── Hex ──────────────────────────────────────────────────────────────

    #[test]
    fn hex_long_form() {
        assert_eq!(hex("#3F9CDC"), "#3f9cdc");
    }

    #[test]
    fn hex_short_form() {
        assert_eq!(hex("#f80"), "#ff8800");
    }

    #[test]
    fn hex_with_alpha() {
        let c = parse_color("#ff000080").unwrap();
        assert_eq!(c.to_rgba8(), (255, 0, 0, 128));
        let c = parse_color("#f008").unwrap();
        assert_eq!(c.to_rgba8(), (255, 0, 0, 136));
    }

    #[test]
    fn hex_without_hash() {
        assert_eq!(hex("00ff00"), "#00ff00");
    }

    #[test]
    fn hex_invalid() {
        assert_eq!(parse_color("#12345"), Err(ParseColorError::InvalidHex("#12345".into())));
        assert_eq!(parse_color("#gggggg"), Err(ParseColorError::InvalidHex("#gggggg".into())));
    }

    // ── Names ────────────────────────────────────────────────────────────

    #[test]
    fn named_colors_are_case_insensitive() {
        assert_eq!(hex("White"), "#ffffff");
        assert_eq!(hex("  CornflowerBlue "), "#6495ed");
        assert_eq!(hex("rebeccapurple"), "#663399");
    }

    #[test]
    fn bare_hex_digits_and_keywords() {
        assert_eq!(hex("bad"), "#bbaadd");
        assert_eq!(hex("tan"), "#d2b48c");
    }

    #[test]
    fn transparent_keyword() {
        assert_eq!(parse_color("transparent"), Ok(Rgba::TRANSPARENT));
    }

    #[test]
    fn unknown_name() {
        assert_eq!(
            parse_color("not-a-color"),
            Err(ParseColorError::UnknownName("not-a-color".into()))
        );
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse_color("   "), Err(ParseColorError::Empty));
    }

    // ── Functions ────────────────────────────────────────────────────────

    #[test]
    fn rgb_comma_syntax() {
        assert_eq!(hex("rgb(63, 156, 220)"), "#3f9cdc");
    }

    #[test]
    fn rgb_space_syntax_with_alpha() {
        let c = parse_color("rgb(63 156 220 / 50%)").unwrap();
        assert_eq!(c.to_hex(), "#3f9cdc");
        assert!(alpha_close(c.a, 0.5), "{}", c.a);
    }

    #[test]
    fn rgba_percentages() {
        let c = parse_color("rgba(100%, 0%, 0%, 0.25)").unwrap();
        assert_eq!(c.to_hex(), "#ff0000");
        assert!(alpha_close(c.a, 0.25), "{}", c.a);
    }

    #[test]
    fn rgb_clamps_channels() {
        assert_eq!(hex("rgb(300, -5, 0)"), "#ff0000");
    }

    #[test]
    fn hsl_syntax() {
        assert_eq!(hex("hsl(0, 100%, 50%)"), "#ff0000");
        assert_eq!(hex("hsl(120deg 100% 25%)"), "#008000");
    }

    #[test]
    fn hsla_alpha() {
        let c = parse_color("hsla(240, 100%, 50%, 0.5)").unwrap();
        assert_eq!(c.to_hex(), "#0000ff");
        assert!(alpha_close(c.a, 0.5), "{}", c.a);
    }

    #[test]
    fn oklch_syntax() {
        assert_eq!(hex("oklch(1 0 0)"), "#ffffff");
        assert_eq!(hex("oklch(0 0 0)"), "#000000");
    }

    #[test]
    fn oklch_out_of_gamut_still_parses() {
        let c = parse_color("oklch(0.97 0.35 270)").unwrap();
        assert_eq!(c, c.clamped());
    }

    #[test]
    fn parsed_colors_sit_on_the_8_bit_grid() {
        let c = parse_color("hsl(0.2, 69%, 55%)").unwrap();
        assert_eq!(c, c.quantized());
    }

    #[test]
    fn bad_functions() {
        for input in ["rgb(1, 2)", "rgb(1, 2, 3, 4, 5)", "rgb(a, b, c)", "cmyk(1, 2, 3)", "rgb(1, 2, 3"] {
            assert!(
                matches!(parse_color(input), Err(ParseColorError::InvalidFunction(_))),
                "{input} should be rejected"
            );
        }
    }
}
