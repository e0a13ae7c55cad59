//! Accessible text color search.
//!
//! Given a background, walk a short list of achromatic candidates away from
//! mid-gray and take the first one that reads:
//!
//! ```text
//! background L > 50%   →  dark text:  15%, 13%, 11%, ... floored at 5%
//! background L <= 50%  →  light text: 85%, 87%, 89%, ... capped at 95%
//! ```
//!
//! A candidate is accepted when its WCAG ratio meets the minimum or its APCA
//! score reaches 60. If every attempt fails, the result is pure black or pure
//! white by the same lightness rule. That fallback is returned as-is and is
//! not itself checked.

use hue_color::{Color, create_oklch_color};
use tracing::trace;

use crate::contrast::is_readable;

/// Pure black, the dark-text fallback.
pub const FALLBACK_DARK_TEXT: &str = "oklch(0% 0 0)";

/// Pure white, the light-text fallback.
pub const FALLBACK_LIGHT_TEXT: &str = "oklch(100% 0 0)";

/// Tuning for [`generate_accessible_text_color`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct TextColorOptions {
    /// WCAG ratio a candidate must reach (APCA >= 60 also passes).
    pub min_contrast_ratio: f64,
    /// How many candidates to try before falling back.
    pub max_attempts: u32,
}

impl Default for TextColorOptions {
    fn default() -> Self {
        Self {
            min_contrast_ratio: crate::contrast::WCAG_AA,
            max_attempts: 10,
        }
    }
}

/// Outcome of a text color search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextColor {
    /// A candidate passed the readability check.
    Found(String),
    /// Search exhausted; pure black or white, unverified.
    Fallback(String),
}

impl TextColor {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Found(s) | Self::Fallback(s) => s,
        }
    }

    #[must_use]
    pub fn into_string(self) -> String {
        match self {
            Self::Found(s) | Self::Fallback(s) => s,
        }
    }

    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Whether a background counts as light. Unparseable input counts as dark.
fn is_light_background(background: &str) -> bool {
    let lightness = Color::parse(background).map_or(50.0, |c| c.l * 100.0);
    lightness > 50.0
}

/// Candidate lightness (percent) for attempt `n`.
fn candidate_lightness(light_background: bool, attempt: u32) -> f32 {
    let step = 2.0 * attempt.min(50) as f32;
    if light_background {
        (15.0 - step).max(5.0)
    } else {
        (85.0 + step).min(95.0)
    }
}

/// Search for a readable text color over `background`, reporting whether the
/// fallback was used.
#[must_use]
pub fn search_text_color(background: &str, options: &TextColorOptions) -> TextColor {
    let light = is_light_background(background);

    for attempt in 0..options.max_attempts {
        let candidate = create_oklch_color(candidate_lightness(light, attempt), 0.0, 0.0);
        if is_readable(background, &candidate, options.min_contrast_ratio) {
            return TextColor::Found(candidate);
        }
    }

    let fallback = if light { FALLBACK_DARK_TEXT } else { FALLBACK_LIGHT_TEXT };
    trace!(background, fallback, "no readable text candidate; using fallback");
    TextColor::Fallback(fallback.to_owned())
}

/// A readable text color for `background`, as a canonical OKLCH string.
#[must_use]
pub fn generate_accessible_text_color(background: &str, options: &TextColorOptions) -> String {
    search_text_color(background, options).into_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
