// SPDX-License-Identifier: MIT
//
// hue-color: OKLCH color math for hueforge.
//
// The theme engine thinks in OKLCH and talks in CSS strings. This crate owns
// both halves: the `Color` type (Oklab ↔ sRGB pipeline, gamut mapping,
// CIE LCh input) and the canonical `oklch(L% C H)` codec every theme token
// is written through.
//
// Parsing is split in two layers. `Color::hex` / `Color::parse_oklch` are
// ordinary fallible parsers returning `ColorError`. `hex_to_oklch`,
// `oklch_to_hex` and `create_oklch_color` sit on top and never fail; a broken
// color in a generated theme is cosmetic, so they substitute a fixed
// fallback instead.

pub mod cielab;
pub mod color;
pub mod css;
pub mod error;

pub use color::{Color, hue_diff, linear_to_srgb, normalize_hue, srgb_to_linear};
pub use css::{
    CHROMA_PERCENT_REFERENCE, FALLBACK_HEX, FALLBACK_OKLCH, create_oklch_color, format_oklch,
    hex_to_oklch, oklch_to_hex,
};
pub use error::ColorError;
