pub mod converter;

pub use converter::{Conversion, ConvertService};
