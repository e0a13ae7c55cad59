// SPDX-License-Identifier: MIT
//
// Parse errors for color strings.
//
// Only the fallible primitives (`Color::hex`, `Color::parse_oklch`,
// `Color::parse`) return these. The CSS-facing string helpers in `css`
// swallow them and substitute a fixed fallback color.

use thiserror::Error;

/// Why a color string could not be turned into a [`Color`](crate::Color).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Not `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA` (the `#` is optional).
    #[error("invalid hex color `{0}`")]
    InvalidHex(String),

    /// Not of the shape `oklch(L C H)`.
    #[error("invalid oklch color `{0}`")]
    InvalidOklch(String),

    /// A component parsed but was NaN or infinite.
    #[error("non-finite component in `{0}`")]
    NonFinite(String),
}
