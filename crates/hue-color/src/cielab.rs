// SPDX-License-Identifier: MIT
//
// CIE LCh(ab) input, D65 white point.
//
// Brand and status colors are specified as CIE lightness/chroma pairs
// (`L* 50, C* 60`): those numbers track WCAG luminance much more closely than
// OKLCH lightness does, so a fixed L* lands on a predictable contrast band.
// The color is converted once on the way in and lives as OKLCH afterwards.
//
//   LCh → Lab → XYZ (D65) → linear sRGB → sRGB → OKLCH
#![allow(clippy::many_single_char_names)]

use crate::color::{Color, linear_to_srgb};

/// D65 reference white (Y normalized to 1).
const WHITE_X: f64 = 0.950_47;
const WHITE_Y: f64 = 1.0;
const WHITE_Z: f64 = 1.088_83;

/// Lab companding breakpoint, 6/29.
const DELTA: f64 = 6.0 / 29.0;

impl Color {
    /// Build a color from CIE LCh(ab): `l` in 0–100, `c` in Lab units,
    /// `h` in degrees.
    ///
    /// Out-of-gamut requests keep L* and h and lose chroma until the result
    /// fits in sRGB, mirroring [`Color::to_gamut`] on the OKLCH side.
    #[must_use]
    pub fn cie_lch(l: f32, c: f32, h: f32) -> Self {
        let l = f64::from(l.clamp(0.0, 100.0));
        let h = f64::from(h);
        let mut chroma = f64::from(c.max(0.0));

        if cie_lch_to_srgb(l, chroma, h).is_none() {
            let mut lo = 0.0;
            let mut hi = chroma;
            for _ in 0..24 {
                let mid = (lo + hi) * 0.5;
                if cie_lch_to_srgb(l, mid, h).is_some() {
                    lo = mid;
                } else {
                    hi = mid;
                }
            }
            chroma = lo;
        }

        let (r, g, b) = cie_lch_to_srgb(l, chroma, h).unwrap_or_else(|| {
            // Zero chroma is a gray, which always fits.
            let (r, g, b) = cie_lch_to_srgb_unclamped(l, 0.0, h);
            (r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
        });

        #[allow(clippy::cast_possible_truncation)]
        Self::srgb(r as f32, g as f32, b as f32)
    }
}

/// sRGB components, or `None` when any channel leaves [0, 1].
fn cie_lch_to_srgb(l: f64, c: f64, h: f64) -> Option<(f64, f64, f64)> {
    const EPS: f64 = 1e-6;
    let (r, g, b) = cie_lch_to_srgb_unclamped(l, c, h);
    let inside = |v: f64| (-EPS..=1.0 + EPS).contains(&v);
    (inside(r) && inside(g) && inside(b)).then(|| (r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0)))
}

fn cie_lch_to_srgb_unclamped(l: f64, c: f64, h: f64) -> (f64, f64, f64) {
    let h_rad = h.to_radians();
    let a = c * h_rad.cos();
    let b = c * h_rad.sin();

    let fy = (l + 16.0) / 116.0;
    let fx = fy + a / 500.0;
    let fz = fy - b / 200.0;

    let x = WHITE_X * lab_f_inv(fx);
    let y = WHITE_Y * lab_f_inv(fy);
    let z = WHITE_Z * lab_f_inv(fz);

    let lr = 3.240_454_2f64.mul_add(x, (-1.537_138_5f64).mul_add(y, -0.498_531_4 * z));
    let lg = (-0.969_266_0f64).mul_add(x, 1.876_010_8f64.mul_add(y, 0.041_556_0 * z));
    let lb = 0.055_643_4f64.mul_add(x, (-0.204_025_9f64).mul_add(y, 1.057_225_2 * z));

    #[allow(clippy::cast_possible_truncation)]
    let encode = |v: f64| f64::from(linear_to_srgb(v as f32));
    (encode(lr), encode(lg), encode(lb))
}

fn lab_f_inv(t: f64) -> f64 {
    if t > DELTA {
        t * t * t
    } else {
        3.0 * DELTA * DELTA * (t - 4.0 / 29.0)
    }
}
