//! Color representations
//!
//! Plain numeric encodings of a color. None of them carry alpha or a
//! validity flag; those live on [`Color`](crate::Color).

use std::fmt;
use std::str::FromStr;

/// Tag naming one of the representation types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// 24-bit integer RGB
    Rgb,
    /// Floating-point RGB
    RgbF,
    /// Floating-point HSV
    HsvF,
    /// CIE L*a*b
    Lab,
    /// CIE XYZ
    Xyz,
}

impl Format {
    /// All formats, in declaration order.
    pub const ALL: [Format; 5] = [
        Format::Rgb,
        Format::RgbF,
        Format::HsvF,
        Format::Lab,
        Format::Xyz,
    ];

    /// Whether a [`Color`](crate::Color) can be converted to and from this format.
    pub fn is_supported(self) -> bool {
        matches!(self, Format::Rgb | Format::RgbF | Format::HsvF)
    }

    fn tag(self) -> &'static str {
        match self {
            Format::Rgb => "rgb",
            Format::RgbF => "rgbf",
            Format::HsvF => "hsvf",
            Format::Lab => "lab",
            Format::Xyz => "xyz",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.tag())
    }
}

/// Error returned when a string does not name a [`Format`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color format {0:?} (expected one of rgb, rgbf, hsvf, lab, xyz)")]
pub struct UnknownFormat(pub String);

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Format::ALL
            .into_iter()
            .find(|format| format.tag().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownFormat(wanted.to_string()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Format {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Format {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// 24-bit integer RGB, the canonical storage form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const FORMAT: Format = Format::Rgb;

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Floating-point RGB.
///
/// Channels are nominally in `0.0..=1.0` but are not clamped here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbF {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl RgbF {
    pub const FORMAT: Format = Format::RgbF;

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Floating-point HSV.
///
/// Hue is measured in turns (`0.0..1.0` is one full circle), not degrees.
/// Saturation and value are nominally in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HsvF {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl HsvF {
    pub const FORMAT: Format = Format::HsvF;

    #[inline]
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }
}

/// CIE L*a*b. Declared only; no conversion is defined for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

impl Lab {
    pub const FORMAT: Format = Format::Lab;

    #[inline]
    pub const fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }
}

/// CIE XYZ. Declared only; no conversion is defined for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Xyz {
    pub const FORMAT: Format = Format::Xyz;

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Any one of the representation types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Repr {
    Rgb(Rgb8),
    RgbF(RgbF),
    HsvF(HsvF),
    Lab(Lab),
    Xyz(Xyz),
}

impl Repr {
    pub fn format(&self) -> Format {
        match self {
            Repr::Rgb(_) => Format::Rgb,
            Repr::RgbF(_) => Format::RgbF,
            Repr::HsvF(_) => Format::HsvF,
            Repr::Lab(_) => Format::Lab,
            Repr::Xyz(_) => Format::Xyz,
        }
    }
}

impl From<Rgb8> for Repr {
    fn from(value: Rgb8) -> Self {
        Repr::Rgb(value)
    }
}

impl From<RgbF> for Repr {
    fn from(value: RgbF) -> Self {
        Repr::RgbF(value)
    }
}

impl From<HsvF> for Repr {
    fn from(value: HsvF) -> Self {
        Repr::HsvF(value)
    }
}

impl From<Lab> for Repr {
    fn from(value: Lab) -> Self {
        Repr::Lab(value)
    }
}

impl From<Xyz> for Repr {
    fn from(value: Xyz) -> Self {
        Repr::Xyz(value)
    }
}

impl fmt::Display for Repr {
    /// Renders the channels with the formatter's precision (default 3).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(3);
        match self {
            Repr::Rgb(c) => write!(f, "rgb({}, {}, {})", c.r, c.g, c.b),
            Repr::RgbF(c) => write!(f, "rgbf({:.p$}, {:.p$}, {:.p$})", c.r, c.g, c.b),
            Repr::HsvF(c) => write!(f, "hsvf({:.p$}, {:.p$}, {:.p$})", c.h, c.s, c.v),
            Repr::Lab(c) => write!(f, "lab({:.p$}, {:.p$}, {:.p$})", c.l, c.a, c.b),
            Repr::Xyz(c) => write!(f, "xyz({:.p$}, {:.p$}, {:.p$})", c.x, c.y, c.z),
        }
    }
}
