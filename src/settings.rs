use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment};
use serde::Deserialize;

use crate::preview::PREVIEW_LINE_LIMIT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

/// Runtime settings, read from `REPORT_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub format: OutputFormat,
    /// Preview line budget, header included.
    pub preview_lines: usize,
    /// Sections shown expanded in text output.
    pub expanded: usize,
    pub title: String,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        with_defaults(Config::builder())?
            .add_source(Environment::with_prefix("REPORT").try_parsing(true))
            .build()?
            .try_deserialize()
    }
}

fn with_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    builder
        .set_default("format", "text")?
        .set_default("preview_lines", PREVIEW_LINE_LIMIT as u64)?
        .set_default("expanded", 2)?
        .set_default("title", "Report")
}
