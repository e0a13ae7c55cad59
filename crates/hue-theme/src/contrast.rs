//! Contrast scoring: WCAG 2.1 ratio and APCA lightness contrast.
//!
//! Two independent readability metrics:
//!
//! - **WCAG contrast ratio**: `(L_lighter + 0.05) / (L_darker + 0.05)` over
//!   relative luminance, in [1, 21]. AA text needs 4.5, AAA needs 7.
//! - **APCA Lc**: polarity-aware perceptual contrast. Dark-on-light and
//!   light-on-dark use different exponents, so the score depends on which
//!   color is the text. Magnitude tops out near 108; 60 is the usual
//!   body-text floor.
//!
//! Theme generation treats the two as alternatives: a pair is readable when
//! either passes. Luminance is computed in sRGB; color adjustments elsewhere
//! happen in OKLCH.

use hue_color::{Color, srgb_to_linear};

/// WCAG AA minimum for body text.
pub const WCAG_AA: f64 = 4.5;

/// WCAG AAA minimum for body text.
pub const WCAG_AAA: f64 = 7.0;

/// APCA Lc floor accepted as readable.
pub const APCA_MIN: f64 = 60.0;

/// Accessibility standard to check a pair against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Standard {
    /// Contrast ratio >= 4.5.
    WcagAa,
    /// Contrast ratio >= 7.
    WcagAaa,
    /// APCA Lc >= 60.
    Apca,
}

impl Standard {
    /// Minimum passing score for this standard.
    #[must_use]
    pub const fn threshold(self) -> f64 {
        match self {
            Self::WcagAa => WCAG_AA,
            Self::WcagAaa => WCAG_AAA,
            Self::Apca => APCA_MIN,
        }
    }
}

// ---------------------------------------------------------------------------
// WCAG
// ---------------------------------------------------------------------------

/// WCAG 2.1 relative luminance, 0.0 (black) to 1.0 (white).
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    let (r, g, b) = color.to_srgb();
    let r_lin = f64::from(srgb_to_linear(r));
    let g_lin = f64::from(srgb_to_linear(g));
    let b_lin = f64::from(srgb_to_linear(b));
    0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
}

/// WCAG contrast ratio between two parsed colors. Order does not matter.
#[must_use]
pub fn contrast_ratio_colors(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// WCAG contrast ratio between two color strings (hex or `oklch(...)`).
///
/// Returns 1.0 if either string fails to parse.
#[must_use]
pub fn contrast_ratio(a: &str, b: &str) -> f64 {
    match (Color::parse(a), Color::parse(b)) {
        (Ok(a), Ok(b)) => contrast_ratio_colors(a, b),
        _ => 1.0,
    }
}

// ---------------------------------------------------------------------------
// APCA
// ---------------------------------------------------------------------------

// APCA-W3 0.0.98G constants.
const MAIN_TRC: f32 = 2.4;
const NORM_BG: f64 = 0.56;
const NORM_TXT: f64 = 0.57;
const REV_TXT: f64 = 0.62;
const REV_BG: f64 = 0.65;
const BLK_THRS: f64 = 0.022;
const BLK_CLMP: f64 = 1.414;
const SCALE: f64 = 1.14;
const LO_OFFSET: f64 = 0.027;
const LO_CLIP: f64 = 0.1;
const DELTA_Y_MIN: f64 = 0.0005;

/// Screen luminance as APCA estimates it (plain 2.4 power, no linear toe).
fn apca_luminance(color: Color) -> f64 {
    let (r, g, b) = color.to_srgb();
    let y = 0.072_175f32.mul_add(
        b.powf(MAIN_TRC),
        0.212_672_9f32.mul_add(r.powf(MAIN_TRC), 0.715_152_2 * g.powf(MAIN_TRC)),
    );
    let y = f64::from(y);
    // Soft clamp near black so very dark pairs don't explode.
    if y > BLK_THRS {
        y
    } else {
        y + (BLK_THRS - y).powf(BLK_CLMP)
    }
}

/// Signed APCA Lc of `text` over `background`.
///
/// Positive for dark text on a light background, negative for light text
/// on a dark background.
#[must_use]
pub fn apca_lc(text: Color, background: Color) -> f64 {
    let y_txt = apca_luminance(text);
    let y_bg = apca_luminance(background);

    if (y_bg - y_txt).abs() < DELTA_Y_MIN {
        return 0.0;
    }

    let lc = if y_bg > y_txt {
        let sapc = (y_bg.powf(NORM_BG) - y_txt.powf(NORM_TXT)) * SCALE;
        if sapc < LO_CLIP { 0.0 } else { sapc - LO_OFFSET }
    } else {
        let sapc = (y_bg.powf(REV_BG) - y_txt.powf(REV_TXT)) * SCALE;
        if sapc > -LO_CLIP { 0.0 } else { sapc + LO_OFFSET }
    };

    lc * 100.0
}

/// APCA contrast magnitude of `text` over `background` (color strings).
///
/// Returns 0.0 if either string fails to parse.
#[must_use]
pub fn apca_score(text: &str, background: &str) -> f64 {
    match (Color::parse(text), Color::parse(background)) {
        (Ok(text), Ok(background)) => apca_lc(text, background).abs(),
        _ => 0.0,
    }
}

/// Whether `text` over `background` meets `standard`.
#[must_use]
pub fn is_accessible(background: &str, text: &str, standard: Standard) -> bool {
    let score = match standard {
        Standard::WcagAa | Standard::WcagAaa => contrast_ratio(background, text),
        Standard::Apca => apca_score(text, background),
    };
    score >= standard.threshold()
}

/// Either-standard readability check used by generation and validation:
/// WCAG ratio >= `min_ratio` or APCA >= 60.
#[must_use]
pub fn is_readable(background: &str, text: &str, min_ratio: f64) -> bool {
    contrast_ratio(background, text) >= min_ratio || apca_score(text, background) >= APCA_MIN
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── Relative luminance ──────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        let lum = relative_luminance(Color::BLACK);
        assert!(approx_eq(lum, 0.0, 0.001), "Black luminance: {lum}");
    }

    #[test]
    fn luminance_white_is_one() {
        let lum = relative_luminance(Color::WHITE);
        assert!(approx_eq(lum, 1.0, 0.001), "White luminance: {lum}");
    }

    #[test]
    fn luminance_pure_green() {
        let lum = relative_luminance(Color::srgb(0.0, 1.0, 0.0));
        assert!(approx_eq(lum, 0.7152, 0.01), "Green luminance: {lum}");
    }

    // ── Contrast ratio ──────────────────────────────────────────────

    #[test]
    fn contrast_black_white_is_21() {
        let ratio = contrast_ratio("#000000", "#ffffff");
        assert!(approx_eq(ratio, 21.0, 0.1), "B/W contrast: {ratio}");
    }

    #[test]
    fn contrast_accepts_mixed_notation() {
        let ratio = contrast_ratio("oklch(0% 0 0)", "#fff");
        assert!(approx_eq(ratio, 21.0, 0.1), "mixed notation: {ratio}");
    }

    #[test]
    fn contrast_is_symmetric() {
        let ab = contrast_ratio("#cc3344", "oklch(30% 0.1 260)");
        let ba = contrast_ratio("oklch(30% 0.1 260)", "#cc3344");
        assert!(approx_eq(ab, ba, 1e-9), "Asymmetric: {ab} vs {ba}");
    }

    #[test]
    fn contrast_same_color_is_one() {
        assert!(approx_eq(contrast_ratio("#777", "#777"), 1.0, 1e-9));
    }

    #[test]
    fn contrast_unparseable_is_one() {
        assert!(approx_eq(contrast_ratio("garbage", "#fff"), 1.0, 1e-9));
        assert!(approx_eq(contrast_ratio("#000", "oklch(1 2)"), 1.0, 1e-9));
    }

    // ── APCA ────────────────────────────────────────────────────────

    #[test]
    fn apca_black_on_white_near_106() {
        let lc = apca_score("#000000", "#ffffff");
        assert!(approx_eq(lc, 106.0, 1.0), "BoW Lc: {lc}");
    }

    #[test]
    fn apca_white_on_black_near_108() {
        let lc = apca_score("#ffffff", "#000000");
        assert!(approx_eq(lc, 107.9, 1.0), "WoB Lc: {lc}");
    }

    #[test]
    fn apca_polarity() {
        let dark_on_light = apca_lc(Color::BLACK, Color::WHITE);
        let light_on_dark = apca_lc(Color::WHITE, Color::BLACK);
        assert!(dark_on_light > 0.0);
        assert!(light_on_dark < 0.0);
    }

    #[test]
    fn apca_identical_colors_is_zero() {
        assert!(approx_eq(apca_score("#808080", "#808080"), 0.0, 1e-9));
    }

    #[test]
    fn apca_unparseable_is_zero() {
        assert!(approx_eq(apca_score("nope", "#fff"), 0.0, 1e-9));
    }

    #[test]
    fn apca_reference_pair() {
        // #888 on #fff is a published APCA reference value (Lc ≈ 63.1).
        let lc = apca_score("#888888", "#ffffff");
        assert!(approx_eq(lc, 63.1, 0.5), "#888 on #fff: {lc}");
    }

    // ── Standards ───────────────────────────────────────────────────

    #[test]
    fn standards_thresholds() {
        // #767676 on white is the classic 4.54:1 AA edge case.
        assert!(is_accessible("#ffffff", "#767676", Standard::WcagAa));
        assert!(!is_accessible("#ffffff", "#767676", Standard::WcagAaa));
        assert!(is_accessible("#ffffff", "#000000", Standard::WcagAaa));
        assert!(is_accessible("#ffffff", "#000000", Standard::Apca));
        assert!(!is_accessible("#ffffff", "#eeeeee", Standard::Apca));
    }

    #[test]
    fn readable_accepts_either_metric() {
        assert!(is_readable("#ffffff", "#000000", WCAG_AA));
        assert!(!is_readable("#ffffff", "#f0f0f0", WCAG_AA));
    }
}
