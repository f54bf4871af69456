// SPDX-License-Identifier: MIT
//
// WCAG contrast, used for exactly one decision: which of two candidate
// text colors reads better on a given background.
//
// Luminance is measured in linear sRGB (the WCAG definition), not in
// OKLCH, so the ratio agrees with browser accessibility tooling.

use crate::oklch::srgb_to_linear;
use crate::rgba::Rgba;

/// Relative luminance per WCAG 2.1, in [0.0, 1.0]. Alpha is ignored.
///
///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
#[must_use]
pub fn relative_luminance(color: Rgba) -> f64 {
    let c = color.clamped();
    let r_lin = f64::from(srgb_to_linear(c.r));
    let g_lin = f64::from(srgb_to_linear(c.g));
    let b_lin = f64::from(srgb_to_linear(c.b));
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// WCAG 2.1 contrast ratio in [1.0, 21.0], symmetric in its arguments.
#[must_use]
pub fn contrast_ratio(a: Rgba, b: Rgba) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Pick whichever of `a` and `b` contrasts more with `background`.
/// Ties go to `a`.
#[must_use]
pub fn most_readable(background: Rgba, a: Rgba, b: Rgba) -> Rgba {
    if contrast_ratio(b, background) > contrast_ratio(a, background) {
        b
    } else {
        a
    }
}
