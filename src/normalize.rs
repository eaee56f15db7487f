//! Color value normalization.
//!
//! Every value the field stores is canonical: no semicolons, no surrounding
//! whitespace, and plain `rgb()`/`rgba()` functions rewritten as hex.
//! Gradient expressions and other strings are opaque here and flow through
//! after cleanup. Nothing in this module fails; unrecognized input is
//! returned as-is.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Value used when the field is mounted without one.
pub const DEFAULT_COLOR: &str = "#000000";

/// `rgb(r, g, b)` or `rgba(r, g, b, a)` with integer channels and an
/// optional decimal alpha. Not anchored.
static RE_RGBA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"rgba?\(([0-9]+),\s*([0-9]+),\s*([0-9]+)(?:,\s*([0-9.]+))?\)").unwrap()
});

/// A single solid `rgb(n, n, n)`, nothing else. Case-insensitive.
static RE_PLAIN_RGB: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^rgb\(([0-9]{1,3},\s?){2}[0-9]{1,3}\)$").unwrap());

/// Any `rgb(...)` / `rgba(...)` function call embedded in a larger string.
static RE_RGB_FUNCTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"rgba?\([^)]+\)").unwrap());

/// Strip every `;` and trim surrounding whitespace.
pub fn clean_value(input: &str) -> String {
    input.replace(';', "").trim().to_string()
}

/// Convert an `rgb()`/`rgba()` expression to lowercase hex.
///
/// Returns `#rrggbb` when alpha is absent or exactly 1, `#rrggbbaa`
/// otherwise. Input without an rgb/rgba expression comes back unchanged.
pub fn rgba_to_hex(input: &str) -> String {
    RE_RGBA
        .captures(input)
        .and_then(|caps| hex_from_captures(&caps))
        .unwrap_or_else(|| input.to_string())
}

fn hex_from_captures(caps: &Captures<'_>) -> Option<String> {
    let r: u64 = caps[1].parse().ok()?;
    let g: u64 = caps[2].parse().ok()?;
    let b: u64 = caps[3].parse().ok()?;
    let a = match caps.get(4) {
        Some(m) => parse_float_prefix(m.as_str())?,
        None => 1.0,
    };

    if a == 1.0 {
        Some(format!("#{r:02x}{g:02x}{b:02x}"))
    } else {
        let alpha = (a * 255.0).round() as u64;
        Some(format!("#{r:02x}{g:02x}{b:02x}{alpha:02x}"))
    }
}

/// Longest leading run of `s` that reads as a decimal number, so `1.2.3`
/// yields 1.2. `None` when no prefix is numeric.
fn parse_float_prefix(s: &str) -> Option<f64> {
    (1..=s.len())
        .rev()
        .find_map(|end| s.get(..end).and_then(|p| p.parse::<f64>().ok()))
}

/// True for exactly one solid `rgb(n, n, n)` with no alpha.
pub fn is_plain_rgb(input: &str) -> bool {
    RE_PLAIN_RGB.is_match(input)
}

/// True when `input` holds at least one `rgb(...)`/`rgba(...)` call.
pub fn contains_rgb_function(input: &str) -> bool {
    RE_RGB_FUNCTION.is_match(input)
}

/// Rewrite every embedded `rgb(...)`/`rgba(...)` call as hex.
///
/// Calls that do not parse (wrong arity, non-numeric channels) are left in
/// place.
pub fn replace_rgb_functions(input: &str) -> Cow<'_, str> {
    RE_RGB_FUNCTION.replace_all(input, |caps: &Captures<'_>| rgba_to_hex(&caps[0]))
}

/// Normalize a value reported by the picker into canonical form.
pub fn handle_color_change(input: &str) -> String {
    let converted = if is_plain_rgb(input) || contains_rgb_function(input) {
        replace_rgb_functions(input)
    } else {
        Cow::Borrowed(input)
    };
    clean_value(&converted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_value_strips_semicolons_and_whitespace() {
        assert_eq!(clean_value("  #fff; "), "#fff");
        assert_eq!(clean_value(";#a;b;c;"), "#abc");
        assert_eq!(clean_value("\t#123456\n"), "#123456");
        assert_eq!(clean_value(""), "");
    }

    #[test]
    fn clean_value_keeps_inner_whitespace() {
        assert_eq!(
            clean_value(" linear-gradient(90deg, #000 0%, #fff 100%); "),
            "linear-gradient(90deg, #000 0%, #fff 100%)"
        );
    }

    #[test]
    fn rgb_converts_to_six_digit_hex() {
        assert_eq!(rgba_to_hex("rgb(255, 0, 0)"), "#ff0000");
        assert_eq!(rgba_to_hex("rgb(1,2,3)"), "#010203");
        assert_eq!(rgba_to_hex("rgb(0, 128, 255)"), "#0080ff");
    }

    #[test]
    fn hex_output_is_a_fixed_point() {
        for (r, g, b) in [(0, 0, 0), (255, 255, 255), (17, 34, 51), (200, 9, 130)] {
            let hex = rgba_to_hex(&format!("rgb({r}, {g}, {b})"));
            assert_eq!(hex.len(), 7);
            assert_eq!(rgba_to_hex(&hex), hex);
            assert_eq!(handle_color_change(&hex), hex);
        }
    }

    #[test]
    fn rgba_alpha_controls_digit_count() {
        assert_eq!(rgba_to_hex("rgba(0, 128, 255, 0.5)"), "#0080ff80");
        assert_eq!(rgba_to_hex("rgba(0, 128, 255, 0)"), "#0080ff00");
        assert_eq!(rgba_to_hex("rgba(10, 20, 30, 1)"), "#0a141e");
        assert_eq!(rgba_to_hex("rgba(10, 20, 30, 1.0)"), "#0a141e");
    }

    #[test]
    fn alpha_rounds_half_away_from_zero() {
        // 0.002 * 255 = 0.51
        assert_eq!(rgba_to_hex("rgba(0, 0, 0, 0.002)"), "#00000001");
        // 0.5 * 255 = 127.5
        assert_eq!(rgba_to_hex("rgba(0, 0, 0, 0.5)"), "#00000080");
    }

    #[test]
    fn alpha_uses_numeric_prefix() {
        assert_eq!(rgba_to_hex("rgba(0, 0, 0, 1.2.3)"), "#000000132");
        assert_eq!(rgba_to_hex("rgba(0, 0, 0, .)"), "rgba(0, 0, 0, .)");
    }

    #[test]
    fn non_matching_input_passes_through() {
        assert_eq!(rgba_to_hex("not a color"), "not a color");
        assert_eq!(rgba_to_hex("rgb(1, 2)"), "rgb(1, 2)");
        assert_eq!(rgba_to_hex("rgb(a, b, c)"), "rgb(a, b, c)");
        assert_eq!(rgba_to_hex("rgb( 1, 2, 3)"), "rgb( 1, 2, 3)");
    }

    #[test]
    fn match_inside_longer_text_yields_only_hex() {
        assert_eq!(rgba_to_hex("color: rgb(1, 2, 3) !important"), "#010203");
    }

    #[test]
    fn plain_rgb_is_strict() {
        assert!(is_plain_rgb("rgb(255, 0, 0)"));
        assert!(is_plain_rgb("RGB(1,2,3)"));
        assert!(!is_plain_rgb("rgb(255,  0, 0)"));
        assert!(!is_plain_rgb("rgba(1, 2, 3, 0.5)"));
        assert!(!is_plain_rgb("rgb(1000, 0, 0)"));
        assert!(!is_plain_rgb(" rgb(1, 2, 3)"));
    }

    #[test]
    fn detects_embedded_functions() {
        assert!(contains_rgb_function("linear-gradient(90deg, rgba(1,2,3,1) 0%)"));
        assert!(!contains_rgb_function("linear-gradient(90deg, #010203 0%)"));
        assert!(!contains_rgb_function("rgb()"));
    }

    #[test]
    fn replaces_every_embedded_function() {
        let input = "linear-gradient(90deg, rgba(2,0,36,1) 0%, rgba(0, 212, 255, 0.5) 100%)";
        assert_eq!(
            replace_rgb_functions(input),
            "linear-gradient(90deg, #020024 0%, #00d4ff80 100%)"
        );
    }

    #[test]
    fn malformed_embedded_function_is_left_alone() {
        let input = "linear-gradient(rgb(1, 2) 0%, rgb(3, 4, 5) 100%)";
        assert_eq!(
            replace_rgb_functions(input),
            "linear-gradient(rgb(1, 2) 0%, #030405 100%)"
        );
    }

    #[test]
    fn handle_color_change_converts_solids() {
        assert_eq!(handle_color_change("rgb(255, 0, 0)"), "#ff0000");
        assert_eq!(handle_color_change("rgba(0, 128, 255, 0.5)"), "#0080ff80");
        assert_eq!(handle_color_change(" rgba(0, 128, 255, 1); "), "#0080ff");
    }

    #[test]
    fn handle_color_change_passes_opaque_strings() {
        assert_eq!(
            handle_color_change("radial-gradient(circle, #fff 0%, #000 100%);"),
            "radial-gradient(circle, #fff 0%, #000 100%)"
        );
        assert_eq!(handle_color_change("  tomato "), "tomato");
    }

    #[test]
    fn uppercase_rgb_is_only_cleaned() {
        assert_eq!(handle_color_change("RGB(1,2,3);"), "RGB(1,2,3)");
    }
}
