//! Theme assembly: from options and randomness to a complete [`Theme`].
//!
//! ```text
//! GenerationOptions ──► mode (forced or coin flip)
//!                   └─► primary hue (fixed or uniform [0, 360))
//!                             │
//!                             ▼
//!          derive hues + base ramp, once per theme
//!                             │
//!                             ▼
//!   for each of the 11 pairs: ColorRole ──► background
//!                             text search ──► content
//!                             │
//!                             ▼
//!          structural tokens, uniform picks from fixed lists
//! ```
//!
//! Every entry point has a `_with` variant taking the random source, so a
//! seeded generator reproduces a theme exactly (apart from its timestamp
//! name).

use std::time::{SystemTime, UNIX_EPOCH};

use hue_color::normalize_hue;
use rand::Rng;
use tracing::debug;

use crate::palette::{
    BaseColors, ColorPalette, generate_base_colors, select_brand_color, select_neutral_color,
    select_semantic_color,
};
use crate::schema::{COLOR_PAIRS, ColorRole, Token};
use crate::text::{TextColorOptions, generate_accessible_text_color};
use crate::theme::{ColorScheme, Theme};

/// Candidate values for the three radius tokens.
pub const RADIUS_CHOICES: [&str; 5] = ["0rem", "0.25rem", "0.5rem", "1rem", "2rem"];

/// Candidate values for the two size tokens.
pub const SIZE_CHOICES: [&str; 5] = ["0.1875rem", "0.21875rem", "0.25rem", "0.28125rem", "0.3125rem"];

/// Candidate values for `--border`.
pub const BORDER_CHOICES: [&str; 4] = ["0.5px", "1px", "1.5px", "2px"];

/// Candidate values for `--depth` and `--noise`.
pub const TOGGLE_CHOICES: [&str; 2] = ["0", "1"];

/// Caller-facing knobs for generation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct GenerationOptions {
    /// Always produce a dark theme. Wins over `force_light_theme`.
    pub force_dark_theme: bool,
    /// Always produce a light theme.
    pub force_light_theme: bool,
    /// Pin the primary hue instead of drawing it.
    pub fixed_hue: Option<f32>,
}

/// A light and a dark theme sharing one primary hue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePair {
    pub light: Theme,
    pub dark: Theme,
}

// ---------------------------------------------------------------------------
// Resolution helpers
// ---------------------------------------------------------------------------

fn resolve_is_dark<R: Rng + ?Sized>(rng: &mut R, options: &GenerationOptions) -> bool {
    if options.force_dark_theme {
        true
    } else if options.force_light_theme {
        false
    } else {
        rng.random_bool(0.5)
    }
}

fn resolve_hue<R: Rng + ?Sized>(rng: &mut R, options: &GenerationOptions) -> f32 {
    options
        .fixed_hue
        .map_or_else(|| rng.random_range(0.0..360.0), normalize_hue)
}

fn timestamp_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis())
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, choices: &[&'a str]) -> &'a str {
    choices[rng.random_range(0..choices.len())]
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Background color for a token's role.
fn select_background<R: Rng + ?Sized>(
    role: ColorRole,
    hue: f32,
    is_dark: bool,
    base: &BaseColors,
    palette: &ColorPalette,
    rng: &mut R,
) -> String {
    match role {
        ColorRole::Base(step) => base.get(step).to_owned(),
        ColorRole::Brand(brand) => select_brand_color(brand, hue, is_dark),
        ColorRole::Semantic(status) => select_semantic_color(status, hue, is_dark),
        ColorRole::Neutral => select_neutral_color(hue, is_dark),
        ColorRole::Other => palette.random_color(rng),
    }
}

/// Build one complete theme for a resolved mode and hue.
fn build_theme<R: Rng + ?Sized>(
    rng: &mut R,
    palette: &ColorPalette,
    name: String,
    is_dark: bool,
    hue: f32,
) -> Theme {
    debug!(name = %name, is_dark, hue, "generating theme");

    let text_options = TextColorOptions::default();
    let base = generate_base_colors(hue, is_dark);
    let mut theme = Theme::new(name, ColorScheme::from_dark(is_dark));

    for pair in COLOR_PAIRS {
        let role = ColorRole::of(pair.background);
        let background = select_background(role, hue, is_dark, &base, palette, rng);
        // base-200/300 share base-100's content color.
        if pair.background == Token::Base100 || pair.content != Token::BaseContent {
            let content = generate_accessible_text_color(&background, &text_options);
            theme.insert(pair.content, content);
        }
        theme.insert(pair.background, background);
    }

    for token in [Token::RadiusSelector, Token::RadiusField, Token::RadiusBox] {
        theme.insert(token, pick(rng, &RADIUS_CHOICES));
    }
    for token in [Token::SizeSelector, Token::SizeField] {
        theme.insert(token, pick(rng, &SIZE_CHOICES));
    }
    theme.insert(Token::Border, pick(rng, &BORDER_CHOICES));
    theme.insert(Token::Depth, pick(rng, &TOGGLE_CHOICES));
    theme.insert(Token::Noise, pick(rng, &TOGGLE_CHOICES));

    theme
}

/// Generate a random theme with the thread-local generator.
#[must_use]
pub fn generate_random_theme(palette: &ColorPalette, options: &GenerationOptions) -> Theme {
    generate_random_theme_with(&mut rand::rng(), palette, options)
}

/// Generate a random theme from an explicit random source.
pub fn generate_random_theme_with<R: Rng + ?Sized>(
    rng: &mut R,
    palette: &ColorPalette,
    options: &GenerationOptions,
) -> Theme {
    let is_dark = resolve_is_dark(rng, options);
    let hue = resolve_hue(rng, options);
    build_theme(rng, palette, format!("theme-{}", timestamp_millis()), is_dark, hue)
}

/// Generate `count` themes with hues spread evenly around the wheel.
///
/// The first theme sits at the base hue (`fixed_hue`, or random); theme `i`
/// is rotated by `360 / count * i`. Each theme resolves its own mode.
#[must_use]
pub fn generate_theme_variations(
    palette: &ColorPalette,
    count: usize,
    options: &GenerationOptions,
) -> Vec<Theme> {
    generate_theme_variations_with(&mut rand::rng(), palette, count, options)
}

/// [`generate_theme_variations`] with an explicit random source.
pub fn generate_theme_variations_with<R: Rng + ?Sized>(
    rng: &mut R,
    palette: &ColorPalette,
    count: usize,
    options: &GenerationOptions,
) -> Vec<Theme> {
    if count == 0 {
        return Vec::new();
    }

    let base_hue = resolve_hue(rng, options);
    let step = 360.0 / count as f32;
    let stamp = timestamp_millis();
    debug!(count, base_hue, "generating theme variations");

    (0..count)
        .map(|i| {
            let hue = normalize_hue(step.mul_add(i as f32, base_hue));
            let is_dark = resolve_is_dark(rng, options);
            build_theme(rng, palette, format!("theme-{stamp}-{i}"), is_dark, hue)
        })
        .collect()
}

/// Generate a light and a dark theme at the same primary hue.
///
/// Force flags in `options` are ignored; `fixed_hue` is honored.
#[must_use]
pub fn generate_theme_pair(palette: &ColorPalette, options: &GenerationOptions) -> ThemePair {
    generate_theme_pair_with(&mut rand::rng(), palette, options)
}

/// [`generate_theme_pair`] with an explicit random source.
pub fn generate_theme_pair_with<R: Rng + ?Sized>(
    rng: &mut R,
    palette: &ColorPalette,
    options: &GenerationOptions,
) -> ThemePair {
    let hue = resolve_hue(rng, options);
    let stamp = timestamp_millis();
    ThemePair {
        light: build_theme(rng, palette, format!("theme-{stamp}-light"), false, hue),
        dark: build_theme(rng, palette, format!("theme-{stamp}-dark"), true, hue),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::is_readable;
    use crate::text::{FALLBACK_DARK_TEXT, FALLBACK_LIGHT_TEXT};
    use hue_color::{Color, FALLBACK_OKLCH};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    fn colors(theme: &Theme) -> Vec<(Token, String)> {
        theme
            .iter()
            .filter(|(t, _)| t.is_color())
            .map(|(t, v)| (t, v.to_owned()))
            .collect()
    }

    fn fixed(hue: f32) -> GenerationOptions {
        GenerationOptions {
            fixed_hue: Some(hue),
            ..GenerationOptions::default()
        }
    }

    // ── Single theme ────────────────────────────────────────────────

    #[test]
    fn theme_is_complete() {
        let theme = generate_random_theme_with(&mut seeded(1), &ColorPalette::material(), &GenerationOptions::default());
        assert!(theme.is_complete(), "missing: {:?}", theme.missing_tokens());
        assert!(theme.name.starts_with("theme-"));
    }

    #[test]
    fn thread_rng_entry_point_works() {
        let theme = generate_random_theme(&ColorPalette::new(), &GenerationOptions::default());
        assert!(theme.is_complete());
    }

    #[test]
    fn every_pair_is_readable_or_flagged() {
        let palette = ColorPalette::material();
        for seed in 0..40 {
            let theme = generate_random_theme_with(&mut seeded(seed), &palette, &GenerationOptions::default());
            for pair in COLOR_PAIRS {
                let bg = theme.get(pair.background).unwrap();
                let fg = theme.get(pair.content).unwrap();
                if pair.background == Token::Base100 || pair.content != Token::BaseContent {
                    let fallback = fg == FALLBACK_DARK_TEXT || fg == FALLBACK_LIGHT_TEXT;
                    assert!(fallback || is_readable(bg, fg, 4.5), "seed {seed}: {} {bg} / {fg}", pair.background);
                }
            }
        }
    }

    #[test]
    fn base_content_comes_from_base100() {
        let theme = generate_random_theme_with(&mut seeded(9), &ColorPalette::new(), &fixed(40.0));
        let expected = generate_accessible_text_color(theme.get(Token::Base100).unwrap(), &TextColorOptions::default());
        assert_eq!(theme.get(Token::BaseContent), Some(expected.as_str()));
    }

    #[test]
    fn structural_tokens_come_from_lists() {
        for seed in 0..20 {
            let theme = generate_random_theme_with(&mut seeded(seed), &ColorPalette::new(), &GenerationOptions::default());
            for token in [Token::RadiusSelector, Token::RadiusField, Token::RadiusBox] {
                assert!(RADIUS_CHOICES.contains(&theme.get(token).unwrap()));
            }
            for token in [Token::SizeSelector, Token::SizeField] {
                assert!(SIZE_CHOICES.contains(&theme.get(token).unwrap()));
            }
            assert!(BORDER_CHOICES.contains(&theme.get(Token::Border).unwrap()));
            assert!(TOGGLE_CHOICES.contains(&theme.get(Token::Depth).unwrap()));
            assert!(TOGGLE_CHOICES.contains(&theme.get(Token::Noise).unwrap()));
        }
    }

    #[test]
    fn fixed_hue_reproduces_colors() {
        let options = GenerationOptions {
            force_light_theme: true,
            fixed_hue: Some(180.0),
            ..GenerationOptions::default()
        };
        let palette = ColorPalette::material();
        let a = generate_random_theme_with(&mut seeded(1), &palette, &options);
        let b = generate_random_theme_with(&mut seeded(2), &palette, &options);
        assert_eq!(colors(&a), colors(&b));
    }

    #[test]
    fn same_seed_same_theme() {
        let palette = ColorPalette::material();
        let mut a = generate_random_theme_with(&mut seeded(77), &palette, &GenerationOptions::default());
        let b = generate_random_theme_with(&mut seeded(77), &palette, &GenerationOptions::default());
        a.name.clone_from(&b.name);
        assert_eq!(a, b);
    }

    #[test]
    fn force_flags() {
        let palette = ColorPalette::new();
        let dark = GenerationOptions { force_dark_theme: true, ..GenerationOptions::default() };
        let light = GenerationOptions { force_light_theme: true, ..GenerationOptions::default() };
        let both = GenerationOptions { force_dark_theme: true, force_light_theme: true, fixed_hue: None };
        for seed in 0..10 {
            assert_eq!(generate_random_theme_with(&mut seeded(seed), &palette, &dark).color_scheme, ColorScheme::Dark);
            assert_eq!(generate_random_theme_with(&mut seeded(seed), &palette, &light).color_scheme, ColorScheme::Light);
            assert_eq!(generate_random_theme_with(&mut seeded(seed), &palette, &both).color_scheme, ColorScheme::Dark);
        }
    }

    #[test]
    fn light_hue0_base_ramp() {
        let options = GenerationOptions { force_light_theme: true, fixed_hue: Some(0.0), ..GenerationOptions::default() };
        let theme = generate_random_theme_with(&mut seeded(3), &ColorPalette::new(), &options);
        let b1 = Color::parse_oklch(theme.get(Token::Base100).unwrap()).unwrap();
        let b3 = Color::parse_oklch(theme.get(Token::Base300).unwrap()).unwrap();
        assert!((b1.l - 0.98).abs() < 0.006);
        assert!((b3.l - 0.92).abs() < 0.006);
        assert!(b1.c < 0.05 && b3.c < 0.05);
    }

    #[test]
    fn other_role_draws_from_palette() {
        let base = generate_base_colors(0.0, true);
        let mut rng = seeded(5);
        let palette: ColorPalette = [("only".to_owned(), "oklch(40% 0.1 100)".to_owned())].into_iter().collect();
        assert_eq!(
            select_background(ColorRole::Other, 0.0, true, &base, &palette, &mut rng),
            "oklch(40% 0.1 100)"
        );
        assert_eq!(
            select_background(ColorRole::Other, 0.0, true, &base, &ColorPalette::new(), &mut rng),
            FALLBACK_OKLCH
        );
    }

    // ── Variations ──────────────────────────────────────────────────

    #[test]
    fn zero_variations_is_empty() {
        assert!(generate_theme_variations_with(&mut seeded(1), &ColorPalette::new(), 0, &GenerationOptions::default()).is_empty());
    }

    #[test]
    fn variations_are_named_and_complete() {
        let themes = generate_theme_variations(&ColorPalette::material(), 4, &GenerationOptions::default());
        assert_eq!(themes.len(), 4);
        for (i, theme) in themes.iter().enumerate() {
            assert!(theme.name.ends_with(&format!("-{i}")), "{}", theme.name);
            assert!(theme.is_complete());
        }
    }

    #[test]
    fn first_variation_sits_at_base_hue() {
        let options = GenerationOptions { force_dark_theme: true, fixed_hue: Some(210.0), ..GenerationOptions::default() };
        let palette = ColorPalette::new();
        let variations = generate_theme_variations_with(&mut seeded(4), &palette, 3, &options);
        let single = generate_random_theme_with(&mut seeded(4), &palette, &options);
        assert_eq!(colors(&variations[0]), colors(&single));

        // 210 + 120 = 330
        let rotated = generate_random_theme_with(&mut seeded(4), &palette, &fixed_dark(330.0));
        assert_eq!(colors(&variations[1]), colors(&rotated));
    }

    fn fixed_dark(hue: f32) -> GenerationOptions {
        GenerationOptions { force_dark_theme: true, fixed_hue: Some(hue), ..GenerationOptions::default() }
    }

    // ── Pair ────────────────────────────────────────────────────────

    #[test]
    fn pair_shares_hue_and_splits_mode() {
        let pair = generate_theme_pair_with(&mut seeded(11), &ColorPalette::new(), &fixed(75.0));
        assert_eq!(pair.light.color_scheme, ColorScheme::Light);
        assert_eq!(pair.dark.color_scheme, ColorScheme::Dark);
        assert_eq!(pair.light.get(Token::Neutral), Some("oklch(60% 0.01 75)"));
        assert_eq!(pair.dark.get(Token::Neutral), Some("oklch(50% 0.01 75)"));

        let light_bg = Color::parse_oklch(pair.light.get(Token::Base100).unwrap()).unwrap();
        let dark_bg = Color::parse_oklch(pair.dark.get(Token::Base100).unwrap()).unwrap();
        assert!(light_bg.l > dark_bg.l);
    }

    #[test]
    fn pair_entry_point_works() {
        let pair = generate_theme_pair(&ColorPalette::material(), &GenerationOptions::default());
        assert!(pair.light.is_complete() && pair.dark.is_complete());
        assert_ne!(pair.light.name, pair.dark.name);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn any_fixed_hue_builds_readable_theme(hue in -720.0f32..720.0, dark in any::<bool>()) {
            let options = GenerationOptions {
                force_dark_theme: dark,
                force_light_theme: !dark,
                fixed_hue: Some(hue),
            };
            let theme = generate_random_theme_with(&mut seeded(0), &ColorPalette::new(), &options);
            prop_assert!(theme.is_complete());
            for pair in COLOR_PAIRS.iter().filter(|p| p.background == Token::Base100 || p.content != Token::BaseContent) {
                let bg = theme.get(pair.background).unwrap();
                let fg = theme.get(pair.content).unwrap();
                prop_assert!(
                    fg == FALLBACK_DARK_TEXT || fg == FALLBACK_LIGHT_TEXT || is_readable(bg, fg, 4.5),
                    "{} {bg} / {fg}", pair.background
                );
            }
        }
    }
}
