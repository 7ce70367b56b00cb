//! Conversions to and from a GUI toolkit color model.
//!
//! Toolkit colors remember which model they were specified in. HSV values
//! go through the HSV constructor so the result matches building the color
//! directly; HSL and CMYK are normalized first.

use ascedit_color::convert::{cmyk_to_rgb8, hsl_to_hsv};
use ascedit_color::{Color, HsvF};

/// A toolkit color tagged with the model it was specified in.
///
/// Float channels are in `0.0..=1.0` with hue in turns. Alpha is always
/// an 8-bit value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ToolkitColor {
    #[default]
    Invalid,
    Rgb { r: u8, g: u8, b: u8, a: u8 },
    Hsv { h: f32, s: f32, v: f32, a: u8 },
    Hsl { h: f32, s: f32, l: f32, a: u8 },
    Cmyk { c: u8, m: u8, y: u8, k: u8, a: u8 },
}

impl ToolkitColor {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::Rgb { r, g, b, a }
    }
}

pub fn from_toolkit(color: ToolkitColor) -> Color {
    match color {
        ToolkitColor::Invalid => Color::invalid(),
        ToolkitColor::Rgb { r, g, b, a } => Color::rgba(r, g, b, a),
        ToolkitColor::Hsv { h, s, v, a } => Color::from(HsvF::new(h, s, v)).with_alpha(a),
        ToolkitColor::Hsl { h, s, l, a } => Color::from(hsl_to_hsv(h, s, l)).with_alpha(a),
        ToolkitColor::Cmyk { c, m, y, k, a } => {
            let rgb = cmyk_to_rgb8(c, m, y, k);
            Color::rgba(rgb.r, rgb.g, rgb.b, a)
        }
    }
}

pub fn to_toolkit(color: Color) -> ToolkitColor {
    if !color.is_valid() {
        return ToolkitColor::Invalid;
    }
    ToolkitColor::rgba(color.red(), color.green(), color.blue(), color.alpha())
}

/// Pack the stored bytes as `0xAARRGGBB`.
///
/// Validity is not encoded; the invalid color packs to 0.
pub fn to_packed_argb(color: Color) -> u32 {
    u32::from_be_bytes([color.alpha(), color.red(), color.green(), color.blue()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_toolkit() {
        assert_eq!(from_toolkit(ToolkitColor::rgba(1, 2, 3, 4)), Color::rgba(1, 2, 3, 4));
        assert_eq!(
            from_toolkit(ToolkitColor::Hsv { h: 0.1, s: 0.2, v: 0.3, a: 102 }),
            Color::from_repr_with_alpha(HsvF::new(0.1, 0.2, 0.3), 0.4).unwrap()
        );
        assert_eq!(
            from_toolkit(ToolkitColor::Hsl { h: 0.5, s: 1.0, l: 0.5, a: 102 }),
            Color::from_repr_with_alpha(HsvF::new(0.5, 1.0, 1.0), 0.4).unwrap()
        );
        assert_eq!(
            from_toolkit(ToolkitColor::Cmyk { c: 255, m: 255, y: 0, k: 0, a: 255 }),
            Color::rgb(0, 0, 255)
        );
        assert_eq!(from_toolkit(ToolkitColor::Invalid), Color::invalid());
    }

    #[test]
    fn test_to_toolkit() {
        assert_eq!(to_toolkit(Color::rgba(1, 2, 3, 4)), ToolkitColor::rgba(1, 2, 3, 4));
        assert_eq!(to_toolkit(Color::invalid()), ToolkitColor::Invalid);
        assert_eq!(ToolkitColor::default(), ToolkitColor::Invalid);
    }

    #[test]
    fn test_round_trip_through_toolkit() {
        for color in [Color::rgba(10, 20, 30, 40), Color::invalid(), Color::rgb(255, 0, 0)] {
            assert_eq!(from_toolkit(to_toolkit(color)), color);
        }
    }

    #[test]
    fn test_packed_argb() {
        assert_eq!(to_packed_argb(Color::rgba(1, 2, 3, 4)), 0x0401_0203);
        assert_eq!(to_packed_argb(Color::rgb(255, 128, 0)), 0xFFFF_8000);
        assert_eq!(to_packed_argb(Color::invalid()), 0);
    }
}
