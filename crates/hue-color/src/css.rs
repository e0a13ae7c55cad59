// SPDX-License-Identifier: MIT
//
// CSS color strings: the canonical `oklch(L% C H)` form.
//
// Theme tokens are compared as strings in a few places (the shared
// `base-content`, the black/white fallback check), so every color that ends
// up in a theme goes through `format_oklch`. Shape:
//
//   L  integer percent, clamped to [0, 100]
//   C  at most 3 decimals, trailing zeros trimmed, never negative
//   H  integer degrees in [0, 360); `format_oklch` forces it to 0 when C
//      rounds to 0, `create_oklch_color` keeps the caller's hue
//
// The string helpers at the bottom never fail. Malformed input degrades to
// a fixed fallback color instead.

use std::sync::LazyLock;

use regex::Regex;

use crate::color::{Color, normalize_hue};
use crate::error::ColorError;

/// Returned by [`hex_to_oklch`] when the input is not a hex color.
pub const FALLBACK_OKLCH: &str = "oklch(50% 0 0)";

/// Returned by [`oklch_to_hex`] when the input is not an oklch color.
pub const FALLBACK_HEX: &str = "#ffffff";

/// Percentage chroma reference: CSS Color 4 maps `100%` to 0.4.
pub const CHROMA_PERCENT_REFERENCE: f32 = 0.4;

/// `oklch(<l>[%] <c>[%] <h>[deg] [/ <alpha>])`, case-insensitive.
static OKLCH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*oklch\(\s*([+-]?(?:\d+\.?\d*|\.\d+))(%?)\s+([+-]?(?:\d+\.?\d*|\.\d+))(%?)\s+([+-]?(?:\d+\.?\d*|\.\d+))(?:deg)?\s*(?:/\s*[^)]*)?\)\s*$",
    )
    .expect("oklch pattern is valid")
});

// ─── Formatting ──────────────────────────────────────────────────────────────

/// Format OKLCH components (lightness in percent) as the canonical string.
///
/// An achromatic result prints hue 0, so grays that came out of a color
/// conversion compare equal whatever hue the math left behind.
#[must_use]
pub fn format_oklch(l_percent: f32, c: f32, h: f32) -> String {
    format_components(l_percent, c, h, false)
}

/// Build a canonical OKLCH string from loose components.
///
/// `l` is a percentage and is clamped to [0, 100]; `c` is clamped to >= 0;
/// `h` wraps modulo 360, so `-30`, `330` and `690` all land on `330`. The
/// hue is kept even when the chroma is 0.
#[must_use]
pub fn create_oklch_color(l: f32, c: f32, h: f32) -> String {
    format_components(l, c.max(0.0), h, true)
}

fn format_components(l_percent: f32, c: f32, h: f32, keep_achromatic_hue: bool) -> String {
    let l = if l_percent.is_finite() {
        f64::from(l_percent).clamp(0.0, 100.0).round() + 0.0
    } else {
        0.0
    };

    let c = if c.is_finite() && c > 0.0 {
        (f64::from(c) * 1000.0).round() / 1000.0
    } else {
        0.0
    };

    let h = if !h.is_finite() || (c == 0.0 && !keep_achromatic_hue) {
        0.0
    } else {
        let rounded = f64::from(normalize_hue(h)).round() + 0.0;
        if rounded >= 360.0 { 0.0 } else { rounded }
    };

    format!("oklch({l}% {c} {h})")
}

// ─── Parsing ─────────────────────────────────────────────────────────────────

impl Color {
    /// Parse an `oklch(...)` string.
    ///
    /// Lightness may be a percentage (`62%`) or a fraction (`0.62`); chroma
    /// may be absolute (`0.145`) or a percentage of 0.4 (`36%`). A `deg`
    /// suffix on the hue and a trailing `/ alpha` are accepted.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidOklch`] when the shape doesn't match, and
    /// [`ColorError::NonFinite`] when a component overflows.
    pub fn parse_oklch(s: &str) -> Result<Self, ColorError> {
        let caps = OKLCH_RE
            .captures(s)
            .ok_or_else(|| ColorError::InvalidOklch(s.to_owned()))?;

        let number = |idx: usize| -> Result<f32, ColorError> {
            let v: f32 = caps[idx]
                .parse()
                .map_err(|_| ColorError::InvalidOklch(s.to_owned()))?;
            if v.is_finite() {
                Ok(v)
            } else {
                Err(ColorError::NonFinite(s.to_owned()))
            }
        };

        let l = number(1)?;
        let l = if caps[2].is_empty() { l } else { l / 100.0 };

        let c = number(3)?;
        let c = if caps[4].is_empty() {
            c
        } else {
            c / 100.0 * CHROMA_PERCENT_REFERENCE
        };

        let h = number(5)?;

        Ok(Self::oklch(l.clamp(0.0, 1.0), c.max(0.0), normalize_hue(h)))
    }

    /// Parse either a hex or an `oklch(...)` color.
    ///
    /// # Errors
    ///
    /// Whatever the matching parser reports.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        if s.trim_start().to_ascii_lowercase().starts_with("oklch") {
            Self::parse_oklch(s)
        } else {
            Self::hex(s)
        }
    }
}

impl std::str::FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ─── Fail-closed conversions ─────────────────────────────────────────────────

/// Hex → canonical OKLCH string, or [`FALLBACK_OKLCH`] on bad input.
#[must_use]
pub fn hex_to_oklch(hex: &str) -> String {
    Color::hex(hex).map_or_else(|_| FALLBACK_OKLCH.to_owned(), |color| color.to_string())
}

/// OKLCH string → `#rrggbb`, or [`FALLBACK_HEX`] on bad input.
///
/// Out-of-gamut colors are clamped per channel.
#[must_use]
pub fn oklch_to_hex(oklch: &str) -> String {
    Color::parse_oklch(oklch).map_or_else(|_| FALLBACK_HEX.to_owned(), Color::to_hex)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    // ── Formatting ───────────────────────────────────────────────────────

    #[test]
    fn canonical_shape() {
        assert_eq!(format_oklch(62.4, 0.1454, 250.4), "oklch(62% 0.145 250)");
        assert_eq!(format_oklch(100.0, 0.0, 0.0), "oklch(100% 0 0)");
        assert_eq!(format_oklch(50.0, 0.05, 200.0), "oklch(50% 0.05 200)");
    }

    #[test]
    fn hue_wraps_to_same_value() {
        let a = create_oklch_color(60.0, 0.1, -30.0);
        let b = create_oklch_color(60.0, 0.1, 330.0);
        let c = create_oklch_color(60.0, 0.1, 690.0);
        assert_eq!(a, "oklch(60% 0.1 330)");
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn clamps_lightness_and_chroma() {
        assert_eq!(create_oklch_color(140.0, -1.0, 10.0), "oklch(100% 0 10)");
        assert_eq!(create_oklch_color(-5.0, 0.2, 10.0), "oklch(0% 0.2 10)");
    }

    #[test]
    fn hue_rounding_up_to_360_wraps() {
        assert_eq!(format_oklch(50.0, 0.1, 359.7), "oklch(50% 0.1 0)");
    }

    #[test]
    fn zero_chroma_drops_hue() {
        assert_eq!(format_oklch(40.0, 0.0004, 123.0), "oklch(40% 0 0)");
    }

    #[test]
    fn created_grays_keep_normalized_hue() {
        assert_eq!(create_oklch_color(50.0, 0.0, 330.0), "oklch(50% 0 330)");
        assert_eq!(create_oklch_color(50.0, 0.0, -30.0), "oklch(50% 0 330)");
        assert_eq!(create_oklch_color(50.0, 0.0, 0.0), "oklch(50% 0 0)");
    }

    #[test]
    fn non_finite_components_are_neutralized() {
        assert_eq!(format_oklch(f32::NAN, f32::INFINITY, f32::NAN), "oklch(0% 0 0)");
    }

    // ── Parsing ──────────────────────────────────────────────────────────

    #[test]
    fn parses_canonical_string() {
        let c = Color::parse_oklch("oklch(62% 0.145 250)").unwrap();
        assert!((c.l - 0.62).abs() < 1e-6);
        assert!((c.c - 0.145).abs() < 1e-6);
        assert!((c.h - 250.0).abs() < 1e-6);
    }

    #[test]
    fn parses_css_variants() {
        let frac = Color::parse_oklch("OKLCH(0.62 0.145 250deg / 0.5)").unwrap();
        let pct = Color::parse_oklch("oklch(62% 36.25% 250)").unwrap();
        assert!((frac.l - 0.62).abs() < 1e-6);
        assert!((pct.c - 0.145).abs() < 1e-6);
        assert!((Color::parse_oklch("oklch(50% .1 -90)").unwrap().h - 270.0).abs() < 1e-4);
    }

    #[test]
    fn rejects_malformed_oklch() {
        for bad in ["", "oklch()", "oklch(50% 0.1)", "rgb(1 2 3)", "oklch(a b c)", "oklch(50% 0.1 20"] {
            assert!(Color::parse_oklch(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn parse_dispatches_on_prefix() {
        assert!(Color::parse("#102030").is_ok());
        assert!(Color::parse("oklch(20% 0 0)").is_ok());
        assert!("nope".parse::<Color>().is_err());
    }

    #[test]
    fn display_uses_canonical_form() {
        assert_eq!(Color::oklch(0.5, 0.1, 330.0).to_string(), "oklch(50% 0.1 330)");
        assert_eq!(Color::WHITE.to_string(), "oklch(100% 0 0)");
    }

    // ── Fail-closed helpers ──────────────────────────────────────────────

    #[test]
    fn hex_to_oklch_known_values() {
        assert_eq!(hex_to_oklch("#ffffff"), "oklch(100% 0 0)");
        assert_eq!(hex_to_oklch("#000000"), "oklch(0% 0 0)");
        assert_eq!(hex_to_oklch("#ff0000"), "oklch(63% 0.258 29)");
    }

    #[test]
    fn bad_input_falls_back() {
        assert_eq!(hex_to_oklch("not a color"), FALLBACK_OKLCH);
        assert_eq!(oklch_to_hex("oklch(nope)"), FALLBACK_HEX);
        assert_eq!(oklch_to_hex("#123456"), FALLBACK_HEX);
    }

    #[test]
    fn oklch_to_hex_endpoints() {
        assert_eq!(oklch_to_hex("oklch(100% 0 0)"), "#ffffff");
        assert_eq!(oklch_to_hex("oklch(0% 0 0)"), "#000000");
    }

    #[test]
    fn hex_roundtrip_is_close() {
        let samples = ["#1e40af", "#f59e0b", "#10b981", "#ef4444", "#6b7280", "#fafaf9", "#7c3aed"];
        for hex in samples {
            let back = oklch_to_hex(&hex_to_oklch(hex));
            let a = Color::hex(hex).unwrap();
            let b = Color::hex(&back).unwrap();
            assert!(a.distance(&b) < 0.02, "{hex} came back as {back}");
        }
    }

    proptest! {
        #[test]
        fn created_colors_always_parse(l in -50.0f32..150.0, c in -1.0f32..1.0, h in -1000.0f32..1000.0) {
            let s = create_oklch_color(l, c, h);
            let parsed = Color::parse_oklch(&s).unwrap();
            prop_assert!((0.0..=1.0).contains(&parsed.l));
            prop_assert!(parsed.c >= 0.0);
            prop_assert!((0.0..360.0).contains(&parsed.h));
        }

        #[test]
        fn hue_shift_by_full_turns_is_invisible(h in 0u16..360, turns in -3i16..3) {
            let h = f32::from(h);
            let shifted = 360.0f32.mul_add(f32::from(turns), h);
            prop_assert_eq!(create_oklch_color(50.0, 0.1, h), create_oklch_color(50.0, 0.1, shifted));
        }
    }
}
