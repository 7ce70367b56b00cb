//! Adapters between [`Color`](ascedit_color::Color) and host toolkit colors.

pub mod toolkit;

pub use toolkit::{from_toolkit, to_packed_argb, to_toolkit, ToolkitColor};
