//! # hue-theme: accessible theme generation
//!
//! Builds complete design-system themes (11 background/content color pairs
//! plus radius, size, border, depth and noise tokens) from a single seed hue.
//! Every content color is searched for, not guessed, so text stays readable
//! over its background.
//!
//! # Architecture
//!
//! ```text
//! GenerationOptions (+ rng)
//!     │
//!     ▼
//! hues.rs:     primary hue → seven role hues (fixed offsets)
//!     │
//!     ▼
//! palette.rs:  role hues → base ramp, brand, status, neutral backgrounds
//!     │
//!     ▼
//! text.rs:     background → readable achromatic content color
//!     │        (contrast.rs: WCAG ratio OR APCA Lc)
//!     ▼
//! generate.rs: assemble Theme over schema.rs's token set
//!     │
//!     ▼
//! theme.rs:    inline CSS, daisyUI plugin CSS, JSON
//! validate.rs: audit any theme's pairs after the fact
//! ```
//!
//! # Color Space
//!
//! Generation and storage are OKLCH. Brand and status colors are requested
//! in CIE LCh, whose L* tracks WCAG luminance closely, then gamut-mapped and
//! stored as canonical `oklch(L% C H)` strings. Contrast is scored in sRGB.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Loop indices and counts become hue angles.
#![allow(clippy::cast_precision_loss)]
// Hue/lightness/chroma variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod contrast;
pub mod generate;
pub mod hues;
pub mod palette;
pub mod schema;
pub mod text;
pub mod theme;
pub mod validate;

pub use contrast::{Standard, apca_score, contrast_ratio, is_accessible};
pub use generate::{
    GenerationOptions, ThemePair, generate_random_theme, generate_random_theme_with,
    generate_theme_pair, generate_theme_pair_with, generate_theme_variations,
    generate_theme_variations_with,
};
pub use hues::{SemanticHues, derive_semantic_hues};
pub use palette::{
    BaseColors, ColorPalette, generate_base_colors, select_brand_color, select_neutral_color,
    select_semantic_color,
};
pub use schema::{BaseStep, BrandRole, COLOR_GROUPS, COLOR_PAIRS, ColorRole, SemanticRole, Token};
pub use text::{TextColor, TextColorOptions, generate_accessible_text_color, search_text_color};
pub use theme::{ColorScheme, Theme};
pub use validate::{ValidationResult, validate_theme};
