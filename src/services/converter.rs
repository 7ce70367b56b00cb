//! Color conversion service used by the `convert` command.

use std::fmt;
use std::sync::Arc;

use ascedit_color::{Alpha, Color, Format};

use crate::error::AppError;
use crate::models::AppConfig;

/// A resolved color and its rendering in each requested format
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub color: Color,
    pub representations: Vec<(Format, String)>,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)?;
        for (format, text) in &self.representations {
            write!(f, "\n  {format:<5} {text}")?;
        }
        Ok(())
    }
}

pub struct ConvertService {
    config: Arc<AppConfig>,
}

impl ConvertService {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Resolve `input` and render it in `formats`.
    ///
    /// An empty `formats` slice uses the configured output formats. Any
    /// unsupported format fails the whole conversion.
    pub fn convert(
        &self,
        input: &str,
        formats: &[Format],
        alpha: Option<Alpha>,
    ) -> Result<Conversion, AppError> {
        let mut color = self.config.resolve_color(input)?;
        if let Some(alpha) = alpha {
            color = color.with_alpha(alpha);
        }

        let formats = if formats.is_empty() {
            &self.config.output.formats[..]
        } else {
            formats
        };
        let precision = self.config.output.precision;

        let representations = formats
            .iter()
            .map(|&format| {
                let repr = color.to_repr(format)?;
                Ok((format, format!("{repr:.precision$}")))
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        tracing::debug!(input, %color, formats = formats.len(), "Converted color");
        Ok(Conversion {
            color,
            representations,
        })
    }
}
