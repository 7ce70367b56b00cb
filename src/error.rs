use ascedit_color::{ColorError, ParseColorError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Color error: {0}")]
    Color(#[from] ColorError),

    #[error("Unknown color {name:?}: not a palette entry ({source})")]
    UnknownColor {
        name: String,
        #[source]
        source: ParseColorError,
    },

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
