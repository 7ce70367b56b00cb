//! Assertion helpers for tests.

use ascedit::document::Layer;
use ascedit_color::Color;
use pretty_assertions::assert_eq;

/// Assert a color is valid and has the given bytes
pub fn assert_rgba(color: Color, expected: (u8, u8, u8, u8)) {
    assert!(color.is_valid(), "Expected a valid color, got {color}");
    assert_eq!(
        (color.red(), color.green(), color.blue(), color.alpha()),
        expected,
        "Unexpected channels for {color}"
    );
}

/// Assert the rendered text of a layer
pub fn assert_layer_text(layer: &Layer, expected: &str) {
    assert_eq!(layer.to_string(), expected, "Layer rendered unexpectedly");
}
