//! The [`Color`] value type
//!
//! A `Color` stores canonical 8-bit RGB, an 8-bit alpha and a validity
//! flag. It is `Copy`, immutable once built, and holds no resources, so it
//! can be shared freely between threads.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::convert::{hsv_to_rgb8, rgb8_to_hsv, rgb8_to_rgbf, rgbf_to_rgb8};
use crate::error::{ColorError, ParseColorError};
use crate::math::{round_f64_to_u8, round_to_u8};
use crate::repr::{Format, HsvF, Repr, Rgb8, RgbF};

/// An 8-bit alpha value.
///
/// Integers convert exactly. Floats are treated as a fraction of full
/// opacity and quantized with [`round_to_u8`], so `0.5` becomes 128.
///
/// ```
/// use ascedit_color::Alpha;
///
/// assert_eq!(Alpha::from(4u8), Alpha(4));
/// assert_eq!(Alpha::from(0.5f32), Alpha(128));
/// assert_eq!(Alpha::from(0.4f64), Alpha(102));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alpha(pub u8);

impl Alpha {
    pub const OPAQUE: Alpha = Alpha(255);
    pub const TRANSPARENT: Alpha = Alpha(0);
}

impl Default for Alpha {
    fn default() -> Self {
        Alpha::OPAQUE
    }
}

impl From<u8> for Alpha {
    fn from(value: u8) -> Self {
        Alpha(value)
    }
}

impl From<f32> for Alpha {
    fn from(fraction: f32) -> Self {
        Alpha(round_to_u8(fraction * 255.0))
    }
}

impl From<f64> for Alpha {
    fn from(fraction: f64) -> Self {
        Alpha(round_f64_to_u8(fraction * 255.0))
    }
}

/// A color in canonical 8-bit RGB with alpha, or the invalid color.
///
/// # Equality
///
/// Any two invalid colors are equal, whatever bytes they store. A valid
/// color equals another valid color when all three channels and alpha
/// match exactly. Valid and invalid colors are never equal.
///
/// # Example
///
/// ```
/// use ascedit_color::{Color, HsvF};
///
/// let yellow = Color::from(HsvF::new(1.0 / 6.0, 1.0, 1.0));
/// assert_eq!(yellow, Color::rgb(255, 255, 0));
/// assert_ne!(yellow, yellow.with_alpha(254u8));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Color {
    rgb: Rgb8,
    alpha: u8,
    valid: bool,
}

impl Color {
    /// An opaque color from 8-bit channels.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// A color from 8-bit channels and alpha.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            rgb: Rgb8::new(r, g, b),
            alpha: a,
            valid: true,
        }
    }

    /// The invalid ("no color") value. Same as [`Color::default()`].
    #[inline]
    pub const fn invalid() -> Self {
        Self {
            rgb: Rgb8::new(0, 0, 0),
            alpha: 0,
            valid: false,
        }
    }

    /// An opaque color converted from any representation.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::UnsupportedFormat`] for [`Lab`](crate::Lab)
    /// and [`Xyz`](crate::Xyz), which have no defined conversion.
    pub fn from_repr(repr: impl Into<Repr>) -> Result<Self, ColorError> {
        Self::from_repr_with_alpha(repr, Alpha::OPAQUE)
    }

    /// A color converted from any representation, with the given alpha.
    ///
    /// `alpha` may be a `u8` or a float fraction, see [`Alpha`].
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::UnsupportedFormat`] for [`Lab`](crate::Lab)
    /// and [`Xyz`](crate::Xyz), which have no defined conversion.
    pub fn from_repr_with_alpha(
        repr: impl Into<Repr>,
        alpha: impl Into<Alpha>,
    ) -> Result<Self, ColorError> {
        let rgb = match repr.into() {
            Repr::Rgb(rgb) => rgb,
            Repr::RgbF(rgbf) => rgbf_to_rgb8(rgbf),
            Repr::HsvF(hsv) => hsv_to_rgb8(hsv),
            Repr::Lab(_) => return Err(ColorError::UnsupportedFormat(Format::Lab)),
            Repr::Xyz(_) => return Err(ColorError::UnsupportedFormat(Format::Xyz)),
        };
        let Alpha(a) = alpha.into();
        Ok(Self::rgba(rgb.r, rgb.g, rgb.b, a))
    }

    /// This color with its alpha replaced. The invalid color stays invalid.
    #[must_use]
    pub fn with_alpha(self, alpha: impl Into<Alpha>) -> Self {
        if !self.valid {
            return self;
        }
        Self {
            alpha: alpha.into().0,
            ..self
        }
    }

    #[inline]
    pub const fn red(&self) -> u8 {
        self.rgb.r
    }

    #[inline]
    pub const fn green(&self) -> u8 {
        self.rgb.g
    }

    #[inline]
    pub const fn blue(&self) -> u8 {
        self.rgb.b
    }

    #[inline]
    pub const fn alpha(&self) -> u8 {
        self.alpha
    }

    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// The stored channels. Alpha and validity are not included.
    #[inline]
    pub const fn to_rgb8(&self) -> Rgb8 {
        self.rgb
    }

    /// The stored channels rescaled to `0.0..=1.0`.
    #[inline]
    pub fn to_rgbf(&self) -> RgbF {
        rgb8_to_rgbf(self.rgb)
    }

    /// The stored channels as HSV with hue in turns.
    ///
    /// See [`rgb8_to_hsv`] for a caveat about red-dominant hues.
    #[inline]
    pub fn to_hsvf(&self) -> HsvF {
        rgb8_to_hsv(self.rgb)
    }

    /// Project the stored channels into the requested format.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::UnsupportedFormat`] for [`Format::Lab`] and
    /// [`Format::Xyz`].
    pub fn to_repr(&self, format: Format) -> Result<Repr, ColorError> {
        match format {
            Format::Rgb => Ok(Repr::Rgb(self.to_rgb8())),
            Format::RgbF => Ok(Repr::RgbF(self.to_rgbf())),
            Format::HsvF => Ok(Repr::HsvF(self.to_hsvf())),
            Format::Lab | Format::Xyz => Err(ColorError::UnsupportedFormat(format)),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::invalid()
    }
}

impl From<Rgb8> for Color {
    fn from(rgb: Rgb8) -> Self {
        Self::rgb(rgb.r, rgb.g, rgb.b)
    }
}

impl From<RgbF> for Color {
    fn from(rgbf: RgbF) -> Self {
        Self::from(rgbf_to_rgb8(rgbf))
    }
}

impl From<HsvF> for Color {
    fn from(hsv: HsvF) -> Self {
        Self::from(hsv_to_rgb8(hsv))
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        match (self.valid, other.valid) {
            (false, false) => true,
            (true, true) => self.rgb == other.rgb && self.alpha == other.alpha,
            _ => false,
        }
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.valid.hash(state);
        if self.valid {
            self.rgb.hash(state);
            self.alpha.hash(state);
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb8 { r, g, b } = self.rgb;
        if !self.valid {
            f.write_str("rgb()")
        } else if self.alpha == 255 {
            write!(f, "rgb({r}, {g}, {b})")
        } else {
            write!(f, "rgba({r}, {g}, {b}, {})", self.alpha)
        }
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parse a color from its display form or from hex.
    ///
    /// Accepted forms:
    /// - `rgb()` - the invalid color
    /// - `rgb(R, G, B)` and `rgba(R, G, B, A)` with decimal bytes
    /// - `#RGB`, `#RRGGBB` and `#RRGGBBAA`, with or without the hash
    ///
    /// Function names and hex digits are case-insensitive. Surrounding
    /// whitespace and whitespace around components is ignored.
    ///
    /// ```
    /// use ascedit_color::Color;
    ///
    /// let c: Color = "rgba(1, 2, 3, 4)".parse().unwrap();
    /// assert_eq!(c, Color::rgba(1, 2, 3, 4));
    ///
    /// let c: Color = "#F00".parse().unwrap();
    /// assert_eq!(c, Color::rgb(255, 0, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseColorError::Empty);
        }
        if !s.is_ascii() {
            return Err(ParseColorError::InvalidSyntax(s.to_string()));
        }

        if let Some(open) = s.find('(') {
            return parse_functional(s, open);
        }
        parse_hex(s)
    }
}

fn parse_functional(s: &str, open: usize) -> Result<Color, ParseColorError> {
    let name = s[..open].trim().to_ascii_lowercase();
    let inner = s[open + 1..]
        .strip_suffix(')')
        .ok_or_else(|| ParseColorError::InvalidSyntax(s.to_string()))?
        .trim();

    let expected = match name.as_str() {
        "rgb" => 3,
        "rgba" => 4,
        _ => return Err(ParseColorError::InvalidSyntax(s.to_string())),
    };

    if inner.is_empty() {
        return if expected == 3 {
            Ok(Color::invalid())
        } else {
            Err(ParseColorError::WrongComponentCount { expected, found: 0 })
        };
    }

    let mut components = Vec::with_capacity(expected);
    for part in inner.split(',') {
        let part = part.trim();
        // u8::from_str accepts a leading '+'
        if part.starts_with('+') {
            return Err(ParseColorError::InvalidSyntax(s.to_string()));
        }
        components.push(part.parse::<u8>().map_err(ParseColorError::InvalidComponent)?);
    }

    match components[..] {
        [r, g, b] if expected == 3 => Ok(Color::rgb(r, g, b)),
        [r, g, b, a] if expected == 4 => Ok(Color::rgba(r, g, b, a)),
        _ => Err(ParseColorError::WrongComponentCount {
            expected,
            found: components.len(),
        }),
    }
}

fn parse_hex(s: &str) -> Result<Color, ParseColorError> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    // from_str_radix accepts a sign, which would shift the digit pairs
    if digits.contains('+') {
        return Err(ParseColorError::InvalidSyntax(s.to_string()));
    }
    let byte = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(ParseColorError::InvalidHex)
    };

    match digits.len() {
        3 => {
            // Shorthand: each digit times 17 expands 0xF to 0xFF
            let r = byte(0..1)? * 17;
            let g = byte(1..2)? * 17;
            let b = byte(2..3)? * 17;
            Ok(Color::rgb(r, g, b))
        }
        6 => Ok(Color::rgb(byte(0..2)?, byte(2..4)?, byte(4..6)?)),
        8 => Ok(Color::rgba(
            byte(0..2)?,
            byte(2..4)?,
            byte(4..6)?,
            byte(6..8)?,
        )),
        len => Err(ParseColorError::InvalidLength(len)),
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repr::{Lab, Xyz};
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn test_default_is_invalid() {
        let color = Color::default();
        assert!(!color.is_valid());
        assert_eq!((color.red(), color.green(), color.blue(), color.alpha()), (0, 0, 0, 0));
    }

    #[test]
    fn test_rgb_constructors() {
        let color = Color::rgb(1, 2, 3);
        assert!(color.is_valid());
        assert_eq!((color.red(), color.green(), color.blue(), color.alpha()), (1, 2, 3, 255));

        let color = Color::rgba(1, 2, 3, 4);
        assert!(color.is_valid());
        assert_eq!((color.red(), color.green(), color.blue(), color.alpha()), (1, 2, 3, 4));
    }

    #[test]
    fn test_comparison() {
        assert_eq!(Color::rgb(1, 2, 3), Color::rgb(1, 2, 3));
        assert_ne!(Color::rgb(1, 2, 3), Color::rgba(1, 2, 3, 4));
        assert_eq!(Color::rgba(1, 2, 3, 4), Color::rgba(1, 2, 3, 4));
        assert_ne!(Color::rgb(1, 2, 3), Color::default());
        assert_ne!(Color::default(), Color::rgb(1, 2, 3));
        assert_eq!(Color::default(), Color::default());
        assert_ne!(Color::rgb(1, 2, 3), Color::rgb(1, 2, 0));
        assert_ne!(Color::rgb(1, 2, 3), Color::rgb(1, 0, 3));
        assert_ne!(Color::rgb(1, 2, 3), Color::rgb(0, 2, 3));
    }

    #[test]
    fn test_invalid_never_equals_transparent_black() {
        assert_ne!(Color::invalid(), Color::rgba(0, 0, 0, 0));
        assert_ne!(Color::rgba(0, 0, 0, 0), Color::invalid());
    }

    #[test]
    fn test_invalid_colors_with_different_bytes_are_equal() {
        let odd = Color {
            rgb: Rgb8::new(9, 8, 7),
            alpha: 6,
            valid: false,
        };
        assert_eq!(odd, Color::invalid());
        assert_eq!(odd.to_string(), "rgb()");

        let set: HashSet<Color> = [odd, Color::invalid()].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::default().to_string(), "rgb()");
        assert_eq!(Color::rgb(1, 2, 3).to_string(), "rgb(1, 2, 3)");
        assert_eq!(Color::rgba(1, 2, 3, 4).to_string(), "rgba(1, 2, 3, 4)");
        assert_eq!(Color::rgba(255, 255, 255, 0).to_string(), "rgba(255, 255, 255, 0)");
    }

    #[test]
    fn test_repr_ctor() {
        let a = Color::from_repr(Rgb8::new(1, 2, 3)).unwrap();
        assert!(a.is_valid());
        assert_eq!(a, Color::rgb(1, 2, 3));

        let b = Color::from_repr_with_alpha(Rgb8::new(1, 2, 3), 4u8).unwrap();
        assert_eq!(b, Color::rgba(1, 2, 3, 4));

        let c = Color::from_repr(RgbF::new(0.0, 1.0, 0.0)).unwrap();
        assert_eq!(c, Color::rgb(0, 255, 0));

        let d = Color::from_repr_with_alpha(RgbF::new(0.0, 1.0, 0.0), 0.5).unwrap();
        assert_eq!(d, Color::rgba(0, 255, 0, 128));
    }

    #[test]
    fn test_from_rgbf() {
        let c = Color::from(RgbF::new(0.0, 0.5, 1.0));
        assert!(c.is_valid());
        assert_eq!(c, Color::rgb(0, 128, 255));
    }

    #[test]
    fn test_from_repr_rejects_lab_and_xyz() {
        assert_eq!(
            Color::from_repr(Lab::new(50.0, 0.0, 0.0)),
            Err(ColorError::UnsupportedFormat(Format::Lab))
        );
        assert_eq!(
            Color::from_repr_with_alpha(Xyz::new(0.2, 0.3, 0.4), 0.5),
            Err(ColorError::UnsupportedFormat(Format::Xyz))
        );
    }

    #[test]
    fn test_to_repr() {
        let color = Color::rgba(255, 0, 0, 7);
        assert_eq!(color.to_repr(Format::Rgb), Ok(Repr::Rgb(Rgb8::new(255, 0, 0))));
        assert_eq!(color.to_repr(Format::RgbF), Ok(Repr::RgbF(RgbF::new(1.0, 0.0, 0.0))));
        assert_eq!(color.to_repr(Format::HsvF), Ok(Repr::HsvF(HsvF::new(0.0, 1.0, 1.0))));
        assert_eq!(color.to_repr(Format::Lab), Err(ColorError::UnsupportedFormat(Format::Lab)));
        assert_eq!(color.to_repr(Format::Xyz), Err(ColorError::UnsupportedFormat(Format::Xyz)));
    }

    #[test]
    fn test_extraction_ignores_validity() {
        let invalid = Color::invalid();
        assert_eq!(invalid.to_rgb8(), Rgb8::new(0, 0, 0));
        assert_eq!(invalid.to_rgbf(), RgbF::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_with_alpha() {
        assert_eq!(Color::rgb(1, 2, 3).with_alpha(4u8), Color::rgba(1, 2, 3, 4));
        assert_eq!(Color::rgb(1, 2, 3).with_alpha(0.5f32).alpha(), 128);
        assert!(!Color::invalid().with_alpha(255u8).is_valid());
    }

    #[test]
    fn test_alpha_quantization() {
        assert_eq!(Alpha::from(0.0f32), Alpha::TRANSPARENT);
        assert_eq!(Alpha::from(1.0f32), Alpha::OPAQUE);
        assert_eq!(Alpha::from(0.5f64), Alpha(128));
        assert_eq!(Alpha::from(1.5f32), Alpha::OPAQUE);
        assert_eq!(Alpha::from(-1.0f32), Alpha::TRANSPARENT);
        assert_eq!(Alpha::default(), Alpha::OPAQUE);
    }

    #[test]
    fn test_f64_alpha_rounds_at_full_width() {
        // Narrowed to f32 this becomes exactly 0.5 and would round up to 128
        assert_eq!(Alpha::from(0.499_999_99f64), Alpha(127));
        assert_eq!(Alpha::from(0.4f64), Alpha(102));
        assert_eq!(Alpha::from(2.0f64), Alpha::OPAQUE);
        assert_eq!(Alpha::from(f64::NAN), Alpha::TRANSPARENT);
    }

    #[test]
    fn test_parse_display_forms() {
        assert_eq!("rgb()".parse::<Color>().unwrap(), Color::invalid());
        assert_eq!("rgb( )".parse::<Color>().unwrap(), Color::invalid());
        assert_eq!("rgb(1, 2, 3)".parse::<Color>().unwrap(), Color::rgb(1, 2, 3));
        assert_eq!("RGBA(1,2,3,4)".parse::<Color>().unwrap(), Color::rgba(1, 2, 3, 4));
        assert_eq!(
            "  rgba( 10 , 20 , 30 , 40 )  ".parse::<Color>().unwrap(),
            Color::rgba(10, 20, 30, 40)
        );
    }

    #[test]
    fn test_parse_round_trips_display() {
        for color in [
            Color::invalid(),
            Color::rgb(0, 0, 0),
            Color::rgb(255, 128, 1),
            Color::rgba(9, 99, 199, 0),
        ] {
            assert_eq!(color.to_string().parse::<Color>().unwrap(), color);
        }
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!("#FF8000".parse::<Color>().unwrap(), Color::rgb(255, 128, 0));
        assert_eq!("ff8000".parse::<Color>().unwrap(), Color::rgb(255, 128, 0));
        assert_eq!("#f80".parse::<Color>().unwrap(), Color::rgb(255, 136, 0));
        assert_eq!("#01020304".parse::<Color>().unwrap(), Color::rgba(1, 2, 3, 4));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Color>(), Err(ParseColorError::Empty));
        assert_eq!("   ".parse::<Color>(), Err(ParseColorError::Empty));
        assert_eq!("#1234".parse::<Color>(), Err(ParseColorError::InvalidLength(4)));
        assert!(matches!("#GG0000".parse::<Color>(), Err(ParseColorError::InvalidHex(_))));
        assert!(matches!(
            "rgb(1, 2, 256)".parse::<Color>(),
            Err(ParseColorError::InvalidComponent(_))
        ));
        assert_eq!(
            "rgb(1, 2)".parse::<Color>(),
            Err(ParseColorError::WrongComponentCount {
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            "rgba()".parse::<Color>(),
            Err(ParseColorError::WrongComponentCount {
                expected: 4,
                found: 0
            })
        );
        assert!(matches!(
            "hsv(1, 2, 3)".parse::<Color>(),
            Err(ParseColorError::InvalidSyntax(_))
        ));
        assert!(matches!(
            "rgb(1, 2, 3".parse::<Color>(),
            Err(ParseColorError::InvalidSyntax(_))
        ));
        assert!(matches!("#ÿÿÿ".parse::<Color>(), Err(ParseColorError::InvalidSyntax(_))));
    }

    #[test]
    fn test_parse_rejects_signs() {
        for input in ["#+1+2+3", "+1+2+3", "#+ff", "#ff00+1", "rgb(+1, 2, 3)", "rgba(1, 2, 3, +4)"] {
            assert_eq!(
                input.parse::<Color>(),
                Err(ParseColorError::InvalidSyntax(input.to_string())),
                "{input}"
            );
        }
        assert!(matches!(
            "rgb(-1, 2, 3)".parse::<Color>(),
            Err(ParseColorError::InvalidComponent(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_uses_display_form() {
        let json = serde_json::to_string(&Color::rgba(1, 2, 3, 4)).unwrap();
        assert_eq!(json, "\"rgba(1, 2, 3, 4)\"");

        let back: Color = serde_json::from_str("\"#00ff00\"").unwrap();
        assert_eq!(back, Color::rgb(0, 255, 0));

        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }
}
