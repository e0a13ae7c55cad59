//! Contrast audit of a theme's background/content pairs.

use std::collections::BTreeMap;

use crate::contrast::{APCA_MIN, WCAG_AA, apca_score, contrast_ratio};
use crate::schema::{COLOR_PAIRS, Token};
use crate::theme::Theme;

/// Outcome of [`validate_theme`]. Score maps are keyed by background token.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ValidationResult {
    pub is_valid: bool,
    pub violations: Vec<String>,
    #[cfg_attr(feature = "serde", serde(serialize_with = "by_name"))]
    pub wcag_results: BTreeMap<Token, f64>,
    #[cfg_attr(feature = "serde", serde(serialize_with = "by_name"))]
    pub apca_results: BTreeMap<Token, f64>,
}

#[cfg(feature = "serde")]
fn by_name<S>(scores: &BTreeMap<Token, f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_map(scores.iter().map(|(t, v)| (t.name(), v)))
}

/// Score every pair whose two sides are set.
///
/// A pair fails only when it misses both bars: WCAG below 4.5 and APCA
/// below 60. Pairs with a missing side are skipped; use
/// [`Theme::missing_tokens`] to audit completeness.
#[must_use]
pub fn validate_theme(theme: &Theme) -> ValidationResult {
    let mut result = ValidationResult::default();

    for pair in COLOR_PAIRS {
        let (Some(bg), Some(fg)) = (theme.get(pair.background), theme.get(pair.content)) else {
            continue;
        };
        let wcag = contrast_ratio(bg, fg);
        let apca = apca_score(fg, bg);
        result.wcag_results.insert(pair.background, wcag);
        result.apca_results.insert(pair.background, apca);

        if wcag < WCAG_AA && apca < APCA_MIN {
            result.violations.push(format!(
                "{}/{}: contrast {wcag:.2}:1, APCA Lc {apca:.1}",
                pair.background, pair.content
            ));
        }
    }

    result.is_valid = result.violations.is_empty();
    result
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
