use std::{fs, path::Path};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".pomorc.json";

/// What to do when a source defines the same msgid twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Keep the last definition and warn (msgfmt-like).
    #[default]
    Warn,
    /// Refuse to compile.
    Error,
    /// Keep the last definition silently.
    Allow,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory compiled catalogs are written to. When unset, each
    /// catalog lands next to its source with a `.mo` extension.
    #[serde(default)]
    pub output_dir: Option<String>,
    #[serde(default)]
    pub include_fuzzy: bool,
    #[serde(default)]
    pub on_duplicate: DuplicatePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: None,
            include_fuzzy: false,
            on_duplicate: DuplicatePolicy::Warn,
        }
    }
}

impl Config {
    /// Load `.pomorc.json` from the working directory, falling back to
    /// defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE_NAME))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(dir) = &self.output_dir {
            if dir.trim().is_empty() {
                anyhow::bail!("'outputDir' must not be empty");
            }
        }
        Ok(())
    }
}

/// The JSON written by `pomo init`.
pub fn default_config_json() -> Result<String> {
    let json = serde_json::to_string_pretty(&Config::default())
        .context("Failed to serialize default config")?;
    Ok(format!("{}\n", json))
}
