// SPDX-License-Identifier: MIT
//
// hue-color core type: a color stored in OKLCH.
//
// Single-character variable names (r, g, b, l, c, h, a) follow the usual
// color-science notation so the math can be checked against the published
// Oklab reference.
//
// Everything the theme generator does to a color (offset the hue, walk the
// lightness, interpolate a ramp) happens in OKLCH, because equal numeric
// steps there look like equal visual steps. sRGB only shows up at the edges:
// parsing hex input, computing WCAG luminance, and writing hex output.
//
// Conversion pipeline:
//
//   OKLCH ↔ Oklab ↔ Linear sRGB ↔ sRGB ↔ hex
//
// Gamut mapping reduces chroma (keeping lightness and hue) until the color
// fits in sRGB.

#![allow(clippy::many_single_char_names)]

use std::fmt;

use crate::error::ColorError;

// ─── Color ───────────────────────────────────────────────────────────────────

/// A perceptual color in OKLCH space.
///
/// OKLCH is the polar form of Björn Ottosson's Oklab. Lightness is
/// perceptually linear, which is what makes a ramp like `98% → 92%` read as
/// three evenly spaced surfaces.
///
/// # Examples
///
/// ```
/// use hue_color::Color;
///
/// let brand = Color::oklch(0.55, 0.2, 250.0).to_gamut();
/// let surface = Color::hex("#f5f5f4").unwrap();
/// let midway = brand.mix(&surface, 0.5);
/// assert!(midway.l > brand.l);
/// ```
#[derive(Clone, Copy)]
pub struct Color {
    /// Lightness: 0.0 (black) to 1.0 (white).
    pub l: f32,

    /// Chroma: 0.0 (gray) upward. sRGB tops out around 0.37.
    pub c: f32,

    /// Hue angle in degrees, [0, 360).
    pub h: f32,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from raw OKLCH components (no normalization).
    #[inline]
    #[must_use]
    pub const fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self { l, c, h }
    }

    /// Create a color from sRGB components in 0.0–1.0.
    #[must_use]
    pub fn srgb(r: f32, g: f32, b: f32) -> Self {
        let (l, c, h) = srgb_to_oklch(r, g, b);
        Self { l, c, h }
    }

    /// Create a color from 8-bit sRGB components.
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::srgb(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        )
    }

    /// Parse a hex color: `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`,
    /// with or without the leading `#`. An alpha channel is accepted and
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHex`] for any other input.
    pub fn hex(s: &str) -> Result<Self, ColorError> {
        parse_hex(s.trim()).ok_or_else(|| ColorError::InvalidHex(s.to_owned()))
    }

    /// Achromatic color at the given OKLCH lightness.
    #[inline]
    #[must_use]
    pub const fn gray(lightness: f32) -> Self {
        Self::oklch(lightness, 0.0, 0.0)
    }

    /// Pure black.
    pub const BLACK: Self = Self::oklch(0.0, 0.0, 0.0);

    /// Pure white.
    pub const WHITE: Self = Self::oklch(1.0, 0.0, 0.0);

    /// Whether the chroma is too small for the hue to matter.
    #[inline]
    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.c.abs() < 1e-5
    }

    // ─── Perceptual operations ───────────────────────────────────────────

    /// Replace lightness, clamped to 0.0–1.0.
    #[inline]
    #[must_use]
    pub const fn set_lightness(self, l: f32) -> Self {
        Self {
            l: l.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Replace chroma, clamped to >= 0.0.
    #[inline]
    #[must_use]
    pub const fn set_chroma(self, c: f32) -> Self {
        Self {
            c: c.max(0.0),
            ..self
        }
    }

    /// Replace hue, wrapped into [0, 360).
    #[inline]
    #[must_use]
    pub fn set_hue(self, h: f32) -> Self {
        Self {
            h: normalize_hue(h),
            ..self
        }
    }

    /// Rotate the hue by `degrees`.
    #[inline]
    #[must_use]
    pub fn shift_hue(self, degrees: f32) -> Self {
        self.set_hue(self.h + degrees)
    }

    /// Interpolate toward `other` in OKLCH.
    ///
    /// `t` = 0.0 gives `self`, 1.0 gives `other`. Hue takes the short way
    /// round; an achromatic endpoint borrows the other endpoint's hue.
    #[must_use]
    pub fn mix(self, other: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let inv_t = 1.0 - t;

        let h = if self.is_achromatic() {
            other.h
        } else if other.is_achromatic() {
            self.h
        } else {
            interpolate_hue(self.h, other.h, t)
        };

        Self {
            l: self.l.mul_add(inv_t, other.l * t),
            c: self.c.mul_add(inv_t, other.c * t),
            h,
        }
    }

    /// Euclidean distance in Oklab (ΔE-OK). Below ~0.02 is invisible.
    #[must_use]
    pub fn distance(self, other: &Self) -> f32 {
        let (a1, b1) = oklch_to_oklab_ab(self.c, self.h);
        let (a2, b2) = oklch_to_oklab_ab(other.c, other.h);
        let dl = self.l - other.l;
        let da = a1 - a2;
        let db = b1 - b2;
        db.mul_add(db, dl.mul_add(dl, da * da)).sqrt()
    }

    // ─── sRGB output ─────────────────────────────────────────────────────

    /// sRGB components, clamped into 0.0–1.0.
    #[must_use]
    pub fn to_srgb(self) -> (f32, f32, f32) {
        let (r, g, b) = oklch_to_srgb(self.l, self.c, self.h);
        (r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
    }

    /// 8-bit sRGB components, clamped.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        let (r, g, b) = self.to_srgb();
        (to_u8(r), to_u8(g), to_u8(b))
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Whether the color is displayable in sRGB without clamping.
    #[must_use]
    pub fn in_srgb_gamut(self) -> bool {
        // A hair of slack so colors that round-tripped through sRGB count
        // as inside.
        const EPS: f32 = 1e-4;
        let (r, g, b) = oklch_to_srgb(self.l, self.c, self.h);
        let inside = |v: f32| (-EPS..=1.0 + EPS).contains(&v);
        inside(r) && inside(g) && inside(b)
    }

    /// Bring the color into sRGB by lowering chroma only.
    ///
    /// Bisects for the largest chroma that still fits, so lightness and hue
    /// survive untouched.
    #[must_use]
    pub fn to_gamut(self) -> Self {
        if self.in_srgb_gamut() {
            return self;
        }

        let mut lo: f32 = 0.0;
        let mut hi: f32 = self.c;
        for _ in 0..20 {
            let mid = (lo + hi) * 0.5;
            if (Self { c: mid, ..self }).in_srgb_gamut() {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        Self { c: lo, ..self }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color::oklch({:.4}, {:.4}, {:.1})", self.l, self.c, self.h)
    }
}

impl fmt::Display for Color {
    /// Canonical CSS form, e.g. `oklch(62% 0.145 250)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::css::format_oklch(self.l * 100.0, self.c, self.h))
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        const EPS: f32 = 1e-5;
        (self.l - other.l).abs() < EPS
            && (self.c - other.c).abs() < EPS
            && (self.is_achromatic()
                || other.is_achromatic()
                || hue_diff(self.h, other.h) < EPS)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

// ─── Hue helpers ─────────────────────────────────────────────────────────────

/// Wrap a hue angle into [0, 360). Negative angles wrap from the top.
#[inline]
#[must_use]
pub fn normalize_hue(h: f32) -> f32 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

/// Shortest arc between two hues, in degrees.
#[inline]
#[must_use]
pub fn hue_diff(a: f32, b: f32) -> f32 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

#[inline]
fn interpolate_hue(h1: f32, h2: f32, t: f32) -> f32 {
    let diff = h2 - h1;
    let diff = if diff > 180.0 {
        diff - 360.0
    } else if diff < -180.0 {
        diff + 360.0
    } else {
        diff
    };
    normalize_hue(diff.mul_add(t, h1))
}

// ─── OKLCH ↔ Oklab ──────────────────────────────────────────────────────────

#[inline]
fn oklch_to_oklab_ab(c: f32, h: f32) -> (f32, f32) {
    let h_rad = h.to_radians();
    (c * h_rad.cos(), c * h_rad.sin())
}

#[inline]
fn oklab_ab_to_oklch(a: f32, b: f32) -> (f32, f32) {
    let c = a.hypot(b);
    if c < 1e-8 {
        // Hue is undefined for grays; pin it to 0 so formatting is stable.
        (0.0, 0.0)
    } else {
        (c, normalize_hue(b.atan2(a).to_degrees()))
    }
}

// ─── Oklab ↔ Linear sRGB ────────────────────────────────────────────────────
//
// Through the LMS cone space. Matrices from https://bottosson.github.io/posts/oklab/

#[inline]
fn oklab_to_linear_srgb(l_ok: f32, a: f32, b: f32) -> (f32, f32, f32) {
    let l_ = 0.215_803_76f32.mul_add(b, 0.396_337_78f32.mul_add(a, l_ok));
    let m_ = 0.063_854_17f32.mul_add(-b, 0.105_561_346f32.mul_add(-a, l_ok));
    let s_ = 1.291_485_5f32.mul_add(-b, 0.089_484_18f32.mul_add(-a, l_ok));

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    let r = 0.230_969_94f32.mul_add(s, 4.076_741_7f32.mul_add(l, -(3.307_711_6 * m)));
    let g = 0.341_319_38f32.mul_add(-s, (-1.268_438f32).mul_add(l, 2.609_757_4 * m));
    let bl = 1.707_614_7f32.mul_add(s, (-0.004_196_086_3f32).mul_add(l, -(0.703_418_6 * m)));

    (r, g, bl)
}

#[inline]
fn linear_srgb_to_oklab(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let l = 0.051_445_995f32.mul_add(b, 0.412_221_47f32.mul_add(r, 0.536_332_55 * g));
    let m = 0.107_396_96f32.mul_add(b, 0.211_903_5f32.mul_add(r, 0.680_699_5 * g));
    let s = 0.629_978_7f32.mul_add(b, 0.088_302_46f32.mul_add(r, 0.281_718_84 * g));

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    let l_ok = 0.004_072_047f32.mul_add(-s_, 0.210_454_26f32.mul_add(l_, 0.793_617_8 * m_));
    let a = 0.450_593_7f32.mul_add(s_, 1.977_998_5f32.mul_add(l_, -(2.428_592_2 * m_)));
    let b_ok = 0.808_675_77f32.mul_add(-s_, 0.025_904_037f32.mul_add(l_, 0.782_771_77 * m_));

    (l_ok, a, b_ok)
}

// ─── sRGB transfer function ──────────────────────────────────────────────────

/// Apply the sRGB gamma curve to one linear component.
#[inline]
#[must_use]
pub fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055f32.mul_add(c.powf(1.0 / 2.4), -0.055)
    }
}

/// Remove the sRGB gamma curve from one component.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn srgb_to_oklch(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let (l, a, b_ok) = linear_srgb_to_oklab(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b));
    let (c, h) = oklab_ab_to_oklch(a, b_ok);
    (l, c, h)
}

/// OKLCH → sRGB, unclamped (components may fall outside 0–1).
fn oklch_to_srgb(l: f32, c: f32, h: f32) -> (f32, f32, f32) {
    let (a, b) = oklch_to_oklab_ab(c, h);
    let (lr, lg, lb) = oklab_to_linear_srgb(l, a, b);
    (linear_to_srgb(lr), linear_to_srgb(lg), linear_to_srgb(lb))
}

// ─── Hex ─────────────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<Color> {
    let digits = s.strip_prefix('#').unwrap_or(s).as_bytes();

    match digits.len() {
        // #RGB / #RGBA, each nibble doubles up.
        3 | 4 => {
            let r = parse_hex_digit(digits[0])?;
            let g = parse_hex_digit(digits[1])?;
            let b = parse_hex_digit(digits[2])?;
            if digits.len() == 4 {
                parse_hex_digit(digits[3])?;
            }
            Some(Color::rgb8(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RRGGBB / #RRGGBBAA
        6 | 8 => {
            let r = parse_hex_byte(&digits[0..2])?;
            let g = parse_hex_byte(&digits[2..4])?;
            let b = parse_hex_byte(&digits[4..6])?;
            if digits.len() == 8 {
                parse_hex_byte(&digits[6..8])?;
            }
            Some(Color::rgb8(r, g, b))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    Some(parse_hex_digit(bytes[0])? << 4 | parse_hex_digit(bytes[1])?)
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f32) -> u8 {
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
