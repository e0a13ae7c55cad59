//! Semantic hue derivation: one seed hue, seven role hues.
//!
//! Every role hue is the primary hue plus a fixed angular offset, wrapped
//! into [0, 360). No randomness: pinning the primary hue pins every
//! hue-derived color in the theme.
//!
//! | Role      | Offset |
//! |-----------|--------|
//! | primary   | 0°     |
//! | error     | +15°   |
//! | warning   | +45°   |
//! | secondary | +60°   |
//! | success   | +120°  |
//! | accent    | +180°  |
//! | info      | +240°  |

use hue_color::normalize_hue;

use crate::schema::{BrandRole, SemanticRole};

/// Offset of the secondary brand hue from the primary.
pub const SECONDARY_OFFSET: f32 = 60.0;
/// Offset of the accent hue (complement).
pub const ACCENT_OFFSET: f32 = 180.0;
/// Offset of the info hue.
pub const INFO_OFFSET: f32 = 240.0;
/// Offset of the success hue.
pub const SUCCESS_OFFSET: f32 = 120.0;
/// Offset of the warning hue.
pub const WARNING_OFFSET: f32 = 45.0;
/// Offset of the error hue.
pub const ERROR_OFFSET: f32 = 15.0;

/// Hue angle for every brand and semantic role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SemanticHues {
    pub primary: f32,
    pub secondary: f32,
    pub accent: f32,
    pub info: f32,
    pub success: f32,
    pub warning: f32,
    pub error: f32,
}

impl SemanticHues {
    /// Hue for a brand role.
    #[must_use]
    pub const fn brand(&self, role: BrandRole) -> f32 {
        match role {
            BrandRole::Primary => self.primary,
            BrandRole::Secondary => self.secondary,
            BrandRole::Accent => self.accent,
        }
    }

    /// Hue for a semantic (status) role.
    #[must_use]
    pub const fn semantic(&self, role: SemanticRole) -> f32 {
        match role {
            SemanticRole::Info => self.info,
            SemanticRole::Success => self.success,
            SemanticRole::Warning => self.warning,
            SemanticRole::Error => self.error,
        }
    }
}

/// Derive all role hues from `primary_hue` (any angle; it is normalized).
#[must_use]
pub fn derive_semantic_hues(primary_hue: f32) -> SemanticHues {
    let base = normalize_hue(primary_hue);
    SemanticHues {
        primary: base,
        secondary: normalize_hue(base + SECONDARY_OFFSET),
        accent: normalize_hue(base + ACCENT_OFFSET),
        info: normalize_hue(base + INFO_OFFSET),
        success: normalize_hue(base + SUCCESS_OFFSET),
        warning: normalize_hue(base + WARNING_OFFSET),
        error: normalize_hue(base + ERROR_OFFSET),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
