//! Color string helpers.
//!
//! The widgets treat colors as plain strings (hex or CSS-named) owned by the
//! host application. Strings are only interpreted at paint time; selection
//! logic compares them case-insensitively without parsing.

use floem::peniko::Color;

/// Fallback fill for strings the parser does not understand (mid-gray).
const FALLBACK: Color = Color::rgb8(128, 128, 128);

/// Resolve a color string to a paintable color.
///
/// Accepts anything `csscolorparser` does: `#RGB`, `#RRGGBB`, `#RRGGBBAA`,
/// CSS named colors, `rgb(..)` forms. Unparseable strings fall back to
/// mid-gray rather than failing; the widgets accept any string as a color.
pub(crate) fn resolve(value: &str) -> Color {
    match csscolorparser::parse(value) {
        Ok(c) => {
            let [r, g, b, a] = c.to_rgba8();
            Color::rgba8(r, g, b, a)
        }
        Err(_) => FALLBACK,
    }
}

/// Case-insensitive color equality, the selection test for swatch cells.
pub(crate) fn matches(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Derive a stable per-cell slug from a color string: strip every `#` and
/// keep the first 6 characters. Tolerates short strings and named colors.
///
/// Used to build inspector/test-hook names for swatch cells.
pub(crate) fn swatch_slug(value: &str) -> String {
    value.replace('#', "").chars().take(6).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_is_case_insensitive() {
        assert!(matches("#FF0000", "#ff0000"));
        assert!(matches("RebeccaPurple", "rebeccapurple"));
        assert!(!matches("#ff0000", "#00ff00"));
    }

    #[test]
    fn slug_strips_marker_and_truncates() {
        assert_eq!(swatch_slug("#AbC123"), "AbC123");
        assert_eq!(swatch_slug("AbC123"), "AbC123");
        assert_eq!(swatch_slug("#ff0000aa"), "ff0000");
        // Embedded markers are stripped before truncation
        assert_eq!(swatch_slug("##ff##0000"), "ff0000");
    }

    #[test]
    fn slug_tolerates_short_and_named_inputs() {
        assert_eq!(swatch_slug("#abc"), "abc");
        assert_eq!(swatch_slug(""), "");
        assert_eq!(swatch_slug("goldenrod"), "golden");
    }

    #[test]
    fn slug_is_idempotent() {
        let once = swatch_slug("#AbC123");
        assert_eq!(swatch_slug(&once), once);
    }

    #[test]
    fn resolve_handles_hex_and_named() {
        assert_eq!(resolve("#ff0000"), Color::rgba8(255, 0, 0, 255));
        assert_eq!(resolve("red"), Color::rgba8(255, 0, 0, 255));
        assert_eq!(resolve("#00FF00"), Color::rgba8(0, 255, 0, 255));
    }

    #[test]
    fn resolve_falls_back_to_gray() {
        assert_eq!(resolve("not a color"), FALLBACK);
        assert_eq!(resolve(""), FALLBACK);
    }
}
