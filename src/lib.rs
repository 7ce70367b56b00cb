//! ascedit - character art editing support
//!
//! Color handling lives in the `ascedit-color` crate. This library wires it
//! to configuration, the character layer model, and host toolkit colors.
//! Modules are exposed for integration testing.

pub mod assets;
pub mod bridge;
pub mod document;
pub mod error;
pub mod models;
pub mod services;
