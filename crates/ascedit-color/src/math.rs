//! Numeric helpers shared by the conversion routines
//!
//! The rounding mode here decides exact output bytes, so it is pinned down
//! explicitly instead of relying on whatever a cast happens to do.

/// Round a float to the nearest byte value.
///
/// Ties round half away from zero (`127.5 -> 128`). The result saturates
/// into `0..=255`, so out-of-range inputs clamp instead of wrapping, and
/// NaN maps to 0.
///
/// # Example
/// ```
/// use ascedit_color::math::round_to_u8;
/// assert_eq!(round_to_u8(0.5 * 255.0), 128);
/// assert_eq!(round_to_u8(1.2 * 255.0), 255);
/// assert_eq!(round_to_u8(-3.0), 0);
/// ```
#[inline]
pub fn round_to_u8(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}

/// [`round_to_u8`] for `f64` input, rounded without narrowing first.
#[inline]
pub fn round_f64_to_u8(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}

/// Fractional part of `value`, always in `0.0..1.0` for finite input.
#[inline]
pub fn fractional(value: f32) -> f32 {
    value - value.floor()
}

/// Clamp `value` into `min..=max`.
#[inline]
pub fn bound(min: f32, value: f32, max: f32) -> f32 {
    value.clamp(min, max)
}

#[inline]
pub fn max3(a: f32, b: f32, c: f32) -> f32 {
    a.max(b).max(c)
}

#[inline]
pub fn min3(a: f32, b: f32, c: f32) -> f32 {
    a.min(b).min(c)
}
