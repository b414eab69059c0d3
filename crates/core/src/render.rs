//! Output formats for the assembled configuration.

use std::str::FromStr;

use thiserror::Error;

use crate::crossseed::CrossSeedConfig;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Unknown output format: {0}")]
    UnknownFormat(String),
}

/// How the configuration is written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// A CommonJS module (`module.exports = {...};`) usable as cross-seed's `config.js`.
    /// Also accepted as `js`.
    Module,
}

impl FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "module" | "js" => Ok(Self::Module),
            other => Err(RenderError::UnknownFormat(other.to_string())),
        }
    }
}

/// Render the configuration in the requested format.
pub fn render(config: &CrossSeedConfig, format: OutputFormat) -> Result<String, RenderError> {
    let json = serde_json::to_string_pretty(config)?;
    Ok(match format {
        OutputFormat::Json => format!("{}\n", json),
        OutputFormat::Module => format!("module.exports = {};\n", json),
    })
}
