//! Document model for character art.

pub mod layer;

pub use layer::{Layer, Position};
