//! Shared CLI utilities.

use anyhow::{Context, Result};
use clap::ValueEnum;

use cloudinary_config::domain::{ConfigValue, Configuration, API_SECRET};

const SECRET_REDACTED: &str = "[API_SECRET_REDACTED]";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
    Toml,
}

/// Serialize a configuration in the requested format.
pub fn render(config: &Configuration, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Json => serde_json::to_string_pretty(config)?,
        OutputFormat::Yaml => serde_yaml::to_string(config)?,
        // TOML has no null; such keys are left out.
        OutputFormat::Toml => toml::to_string(&without_nulls(config))?,
    };
    Ok(text)
}

fn without_nulls(config: &Configuration) -> Configuration {
    config
        .iter()
        .filter(|(_, value)| !matches!(value, ConfigValue::Null))
        .map(|(key, value)| (key, value.clone()))
        .collect()
}

/// Copy of `config` with `api_secret` masked unless `reveal` is set.
pub fn redact(config: &Configuration, reveal: bool) -> Configuration {
    let mut shown = config.clone();
    if !reveal && shown.contains_key(API_SECRET) {
        shown.insert(API_SECRET, SECRET_REDACTED);
    }
    shown
}

/// Parse a `KEY=VALUE` override. The value may itself contain `=`.
pub fn parse_assignment(raw: &str) -> Result<(String, ConfigValue)> {
    let (key, value) =
        raw.split_once('=').with_context(|| format!("Expected KEY=VALUE, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        anyhow::bail!("Empty key in override '{raw}'");
    }
    Ok((key.to_string(), ConfigValue::infer(value)))
}
