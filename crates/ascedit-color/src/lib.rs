//! ascedit-color: a small color value type with RGB and HSV conversions
//!
//! Every color is stored in one canonical form: 8-bit RGB, an 8-bit alpha
//! and a validity flag. Other representations are converted into that form
//! on construction and projected back out of it on demand.
//!
//! # Quick Start
//!
//! ```
//! use ascedit_color::{Color, HsvF, RgbF};
//!
//! let cyan = Color::from(HsvF::new(0.5, 1.0, 1.0));
//! assert_eq!(cyan, Color::rgb(0, 255, 255));
//! assert_eq!(cyan.to_string(), "rgb(0, 255, 255)");
//!
//! let translucent = Color::from_repr_with_alpha(RgbF::new(0.0, 1.0, 0.0), 0.5).unwrap();
//! assert_eq!(translucent.alpha(), 128);
//! assert_eq!(translucent.to_string(), "rgba(0, 255, 0, 128)");
//! ```
//!
//! # Representations
//!
//! | Type | Channels | Conversion |
//! |------|----------|------------|
//! | [`Rgb8`] | 3 x `u8` | canonical, stored as-is |
//! | [`RgbF`] | 3 x `f32`, nominal 0..=1 | `round(c * 255)`, saturating |
//! | [`HsvF`] | hue in turns, saturation, value | six-sector decomposition |
//! | [`Lab`], [`Xyz`] | 3 x `f32` | none, reported as [`ColorError::UnsupportedFormat`] |
//!
//! The typed `From` impls on [`Color`] only exist for the three supported
//! representations, so handing a [`Lab`] or [`Xyz`] value to `Color::from`
//! is a compile error. The dynamic path through [`Repr`] and
//! [`Color::from_repr`] reports the same situation as an error value.
//!
//! # The Invalid Color
//!
//! [`Color::default()`] is the distinguished "no color" value. All invalid
//! colors compare equal to each other no matter what bytes they hold, and
//! none of them ever equals a valid color, not even opaque black.
//!
//! ```
//! use ascedit_color::Color;
//!
//! assert!(!Color::default().is_valid());
//! assert_eq!(Color::default(), Color::invalid());
//! assert_ne!(Color::default(), Color::rgba(0, 0, 0, 0));
//! assert_eq!(Color::default().to_string(), "rgb()");
//! ```
//!
//! # Rounding
//!
//! All float to byte quantization goes through [`math::round_to_u8`] (or
//! [`math::round_f64_to_u8`] for `f64` alpha):
//! round half away from zero, then saturate into `0..=255`. So `0.5 * 255`
//! becomes 128, and a float channel of 1.2 becomes 255 rather than
//! wrapping.

pub mod color;
pub mod convert;
pub mod error;
pub mod math;
pub mod repr;


pub use color::{Alpha, Color};
pub use error::{ColorError, ParseColorError};
pub use repr::{Format, HsvF, Lab, Repr, Rgb8, RgbF, UnknownFormat, Xyz};
