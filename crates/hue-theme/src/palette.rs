//! Background color selection: from a hue and a mode to concrete colors.
//!
//! Every function here is a pure function of `(hue, is_dark)`:
//!
//! - **Base ramp**: three near-neutral surfaces interpolated in OKLCH
//!   between two lightness endpoints (dark 15% → 8%, light 98% → 92%).
//! - **Brand**: CIE L* 70 (dark) / 50 (light) at C* 60.
//! - **Semantic**: CIE L* 65 (dark) / 55 (light) at C* 50.
//! - **Neutral**: OKLCH 50% (dark) / 60% (light) at chroma 0.01.
//!
//! Brand and status colors are specified in CIE LCh because L* predicts
//! WCAG luminance well; each request is gamut-mapped and stored as OKLCH.
//!
//! [`ColorPalette`] is the caller-supplied swatch pool the assembler falls
//! back on for tokens without a rule.

use std::collections::BTreeMap;

use hue_color::{Color, FALLBACK_OKLCH, create_oklch_color, hex_to_oklch};
use rand::Rng;

use crate::hues::derive_semantic_hues;
use crate::schema::{BaseStep, BrandRole, SemanticRole};

/// OKLCH chroma of the base surfaces.
const BASE_CHROMA: f32 = 0.02;

/// OKLCH chroma of the neutral color.
const NEUTRAL_CHROMA: f32 = 0.01;

// ---------------------------------------------------------------------------
// Base ramp
// ---------------------------------------------------------------------------

/// The three base surface colors, canonical OKLCH strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseColors {
    pub base100: String,
    pub base200: String,
    pub base300: String,
}

impl BaseColors {
    /// Color for one step of the ramp.
    #[must_use]
    pub fn get(&self, step: BaseStep) -> &str {
        match step {
            BaseStep::B100 => &self.base100,
            BaseStep::B200 => &self.base200,
            BaseStep::B300 => &self.base300,
        }
    }
}

/// Lightness endpoints (0–1) of the base ramp for a mode.
const fn base_ramp_endpoints(is_dark: bool) -> (f32, f32) {
    if is_dark { (0.15, 0.08) } else { (0.98, 0.92) }
}

/// Build the base-100/200/300 ramp along `primary_hue`.
///
/// Stops sit at 0, ½ and 1 along the ramp, so base-100 is the endpoint
/// nearest the page and base-300 the deepest surface.
#[must_use]
pub fn generate_base_colors(primary_hue: f32, is_dark: bool) -> BaseColors {
    let (from_l, to_l) = base_ramp_endpoints(is_dark);
    let from = Color::oklch(from_l, BASE_CHROMA, 0.0).set_hue(primary_hue);
    let to = Color::oklch(to_l, BASE_CHROMA, 0.0).set_hue(primary_hue);

    let stop = |t: f32| from.mix(&to, t).to_gamut().to_string();

    BaseColors {
        base100: stop(0.0),
        base200: stop(0.5),
        base300: stop(1.0),
    }
}

// ---------------------------------------------------------------------------
// Brand / semantic / neutral
// ---------------------------------------------------------------------------

/// Brand color for `role` given the theme's primary hue.
#[must_use]
pub fn select_brand_color(role: BrandRole, primary_hue: f32, is_dark: bool) -> String {
    let hue = derive_semantic_hues(primary_hue).brand(role);
    let lightness = if is_dark { 70.0 } else { 50.0 };
    Color::cie_lch(lightness, 60.0, hue).to_string()
}

/// Status color for `role` given the theme's primary hue.
#[must_use]
pub fn select_semantic_color(role: SemanticRole, primary_hue: f32, is_dark: bool) -> String {
    let hue = derive_semantic_hues(primary_hue).semantic(role);
    let lightness = if is_dark { 65.0 } else { 55.0 };
    Color::cie_lch(lightness, 50.0, hue).to_string()
}

/// Near-gray neutral tinted toward the primary hue.
#[must_use]
pub fn select_neutral_color(primary_hue: f32, is_dark: bool) -> String {
    let lightness = if is_dark { 50.0 } else { 60.0 };
    create_oklch_color(lightness, NEUTRAL_CHROMA, primary_hue)
}

// ---------------------------------------------------------------------------
// ColorPalette
// ---------------------------------------------------------------------------

/// Named swatches used as a fallback color source.
///
/// Keys are arbitrary (`"blue-500"`); values are color strings, normally
/// canonical OKLCH.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ColorPalette {
    swatches: BTreeMap<String, String>,
}

impl ColorPalette {
    /// Empty palette.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Material Design 500-weight swatches, converted to OKLCH.
    #[must_use]
    pub fn material() -> Self {
        MATERIAL_500
            .iter()
            .map(|&(name, hex)| (name.to_owned(), hex_to_oklch(hex)))
            .collect()
    }

    /// Add or replace a swatch.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.swatches.insert(key.into(), value.into());
    }

    /// Look up a swatch by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.swatches.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    /// Swatches in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.swatches.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// A uniformly random swatch value, or the fallback gray when empty.
    pub fn random_color<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        if self.swatches.is_empty() {
            return FALLBACK_OKLCH.to_owned();
        }
        let idx = rng.random_range(0..self.swatches.len());
        self.swatches
            .values()
            .nth(idx)
            .cloned()
            .unwrap_or_else(|| FALLBACK_OKLCH.to_owned())
    }
}

impl FromIterator<(String, String)> for ColorPalette {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            swatches: iter.into_iter().collect(),
        }
    }
}

const MATERIAL_500: [(&str, &str); 19] = [
    ("red", "#f44336"),
    ("pink", "#e91e63"),
    ("purple", "#9c27b0"),
    ("deep-purple", "#673ab7"),
    ("indigo", "#3f51b5"),
    ("blue", "#2196f3"),
    ("light-blue", "#03a9f4"),
    ("cyan", "#00bcd4"),
    ("teal", "#009688"),
    ("green", "#4caf50"),
    ("light-green", "#8bc34a"),
    ("lime", "#cddc39"),
    ("yellow", "#ffeb3b"),
    ("amber", "#ffc107"),
    ("orange", "#ff9800"),
    ("deep-orange", "#ff5722"),
    ("brown", "#795548"),
    ("grey", "#9e9e9e"),
    ("blue-grey", "#607d8b"),
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
