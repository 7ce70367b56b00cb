//! Conversion routines between representations and canonical 8-bit RGB
//!
//! These are pure functions; [`Color`](crate::Color) calls them on
//! construction and extraction. The HSL and CMYK helpers are not used by
//! `Color` itself: callers bridging from models that carry those encodings
//! normalize through them before constructing a color.

use crate::math::{bound, fractional, max3, min3, round_to_u8};
use crate::repr::{HsvF, Rgb8, RgbF};

/// Quantize float RGB to bytes.
///
/// Each channel is scaled by 255 and rounded with [`round_to_u8`]. Channels
/// are not clamped before scaling; out-of-range values saturate at the
/// rounding step.
#[inline]
pub fn rgbf_to_rgb8(rgb: RgbF) -> Rgb8 {
    Rgb8::new(
        round_to_u8(rgb.r * 255.0),
        round_to_u8(rgb.g * 255.0),
        round_to_u8(rgb.b * 255.0),
    )
}

/// Rescale bytes to float RGB in `0.0..=1.0`.
#[inline]
pub fn rgb8_to_rgbf(rgb: Rgb8) -> RgbF {
    RgbF::new(
        f32::from(rgb.r) / 255.0,
        f32::from(rgb.g) / 255.0,
        f32::from(rgb.b) / 255.0,
    )
}

/// Convert HSV to bytes using the six-sector decomposition.
///
/// Hue is normalized first: negative hues clamp to 0, hues above 1 keep
/// only their fractional part. A hue of exactly 1.0 is left alone and lands
/// in sector 6, which renders the same as sector 0. Saturation and value
/// are clamped to `0.0..=1.0`.
pub fn hsv_to_rgb8(hsv: HsvF) -> Rgb8 {
    let mut h = hsv.h;
    if h < 0.0 {
        h = 0.0;
    } else if h > 1.0 {
        h = fractional(h);
    }
    h *= 6.0;

    let s = bound(0.0, hsv.s, 1.0);
    let v = bound(0.0, hsv.v, 1.0);

    let c = v * s;
    let m = v - c;

    // NaN hue falls through to the sector 0 arm
    let sector = h.floor() as i32;
    let f = h - sector as f32;
    let n = v - c * f;
    let k = v - c * (1.0 - f);

    let iv = round_to_u8(v * 255.0);
    let im = round_to_u8(m * 255.0);
    let in_ = round_to_u8(n * 255.0);
    let ik = round_to_u8(k * 255.0);

    match sector {
        1 => Rgb8::new(in_, iv, im),
        2 => Rgb8::new(im, iv, ik),
        3 => Rgb8::new(im, in_, iv),
        4 => Rgb8::new(ik, im, iv),
        5 => Rgb8::new(iv, im, in_),
        _ => Rgb8::new(iv, ik, im),
    }
}

/// Convert bytes to HSV with hue in turns.
///
/// Follows the usual max/min decomposition with one exception: when red is
/// the largest channel the hue is computed as `g - b / delta` rather than
/// `(g - b) / delta`. The two agree whenever `delta` is 1 or `b` is 0, and
/// differ otherwise. Existing callers depend on the current output, so the
/// expression is kept as is.
pub fn rgb8_to_hsv(rgb: Rgb8) -> HsvF {
    let RgbF { r, g, b } = rgb8_to_rgbf(rgb);

    let cmax = max3(r, g, b);
    let cmin = min3(r, g, b);
    let delta = cmax - cmin;

    let mut h = 0.0;
    if delta > 0.0 {
        h = if cmax == r {
            g - b / delta
        } else if cmax == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        if h < 0.0 {
            h += 6.0;
        }
    }

    let s = if cmax > 0.0 { delta / cmax } else { 0.0 };
    HsvF::new(h / 6.0, s, cmax)
}

/// Convert HSL (all components in `0.0..=1.0`, hue in turns) to HSV.
///
/// Hue passes through unchanged. Saturation and lightness are clamped.
pub fn hsl_to_hsv(h: f32, s: f32, l: f32) -> HsvF {
    let s = bound(0.0, s, 1.0);
    let l = bound(0.0, l, 1.0);

    let v = l + s * l.min(1.0 - l);
    let sv = if v > 0.0 { 2.0 * (1.0 - l / v) } else { 0.0 };
    HsvF::new(h, sv, v)
}

/// Derive RGB bytes from 8-bit CMYK.
///
/// Uses the naive complement model: `r = (255 - c) * (255 - k) / 255`,
/// rounded to nearest.
pub fn cmyk_to_rgb8(c: u8, m: u8, y: u8, k: u8) -> Rgb8 {
    let channel = |ink: u8| {
        let paper = f32::from(255 - ink) * f32::from(255 - k) / 255.0;
        round_to_u8(paper)
    };
    Rgb8::new(channel(c), channel(m), channel(y))
}
