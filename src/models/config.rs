use crate::assets::AssetLoader;
use crate::error::{AppError, ConfigError};
use ascedit_color::{Color, Format};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Named colors
    #[serde(default)]
    pub palette: BTreeMap<String, Color>,

    /// Output settings for conversions
    #[serde(default)]
    pub output: OutputConfig,
}

/// How conversions are printed
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OutputConfig {
    /// Representations printed when none are requested explicitly
    #[serde(default = "default_formats")]
    pub formats: Vec<Format>,

    /// Decimal places for float channels
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_formats() -> Vec<Format> {
    vec![Format::Rgb, Format::RgbF, Format::HsvF]
}

fn default_precision() -> usize {
    3
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            formats: default_formats(),
            precision: default_precision(),
        }
    }
}

impl AppConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        colors = config.palette.len(),
                        formats = config.output.formats.len(),
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Look up a palette entry by name (case-insensitive)
    pub fn palette_color(&self, name: &str) -> Option<Color> {
        let name = name.trim();
        self.palette.get(name).copied().or_else(|| {
            self.palette
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, color)| *color)
        })
    }

    /// Resolve a palette name or a color literal
    ///
    /// Palette names win over literals, so a palette may shadow a hex-looking
    /// name such as `bad`.
    pub fn resolve_color(&self, input: &str) -> Result<Color, AppError> {
        if let Some(color) = self.palette_color(input) {
            tracing::debug!(name = input, %color, "Resolved palette color");
            return Ok(color);
        }

        input.parse().map_err(|source| AppError::UnknownColor {
            name: input.trim().to_string(),
            source,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let palette = [
            ("black", Color::rgb(0, 0, 0)),
            ("white", Color::rgb(255, 255, 255)),
            ("none", Color::invalid()),
        ]
        .into_iter()
        .map(|(name, color)| (name.to_string(), color))
        .collect();

        Self {
            palette,
            output: OutputConfig::default(),
        }
    }
}
