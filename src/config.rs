//! Configuration file support for pseo-content.
//!
//! Provides YAML-based configuration through `pseo-content.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use pseo_content::application::dto::OutputFormat;
use pseo_content::content_selection::domain::has_placeholder;
use pseo_content::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const CONFIG_FILENAME: &str = "pseo-content.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Public host used in canonical URLs
    pub domain: Option<String>,
    /// Brand name used in titles and descriptions
    pub brand: Option<String>,
    /// Data directory, relative to the config file's directory
    pub data_dir: Option<PathBuf>,
    /// Vertical whose copy fills any axis another vertical lacks
    pub fallback_vertical: Option<String>,
    /// Default output format for `resolve` and `export`
    pub format: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parsed `format`, if set. Validated on load.
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format
            .as_deref()
            .and_then(|f| OutputFormat::from_str(f).ok())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let mut config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    if let (Some(data_dir), Some(base)) = (config.data_dir.take(), path.parent()) {
        config.data_dir = Some(base.join(data_dir));
    }

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if let Err(e) = OutputFormat::from_str(format) {
            bail!(
                "Invalid config: format: {}\n\n💡 Hint: Use 'json' or 'markdown'.",
                e
            );
        }
    }

    for (field, value) in [
        ("domain", &config.domain),
        ("brand", &config.brand),
        ("fallback_vertical", &config.fallback_vertical),
    ] {
        if let Some(value) = value {
            if value.trim().is_empty() {
                bail!(
                    "Invalid config: {} must not be empty.\n\n💡 Hint: Remove the field to use the default.",
                    field
                );
            }
            if has_placeholder(value) {
                bail!(
                    "Invalid config: {} '{}' must not contain [SOURCE] or [DEST].",
                    field,
                    value
                );
            }
        }
    }

    if let Some(ref domain) = config.domain {
        if domain.contains("://") || domain.contains('/') {
            bail!(
                "Invalid config: domain '{}' must be a bare host name.\n\n💡 Hint: Use e.g. \"docstandard.co\" without scheme or path.",
                domain
            );
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
