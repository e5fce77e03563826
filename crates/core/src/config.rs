//! Application configuration.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::{investigation::DEFAULT_THRESHOLD, suspects::DEFAULT_BUCKETS};

/// Directory under the user's config dir holding `config.json`.
pub const CONFIG_DIR: &str = "detective-quest";
/// Prefix for environment overrides, e.g. `DQUEST_EVIDENCE_THRESHOLD=3`.
pub const ENV_PREFIX: &str = "DQUEST";

/// Settings shared by the game core and the terminal frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Number of buckets in the suspect index.
    pub buckets: usize,
    /// Clues that must point at the accused for a conviction.
    pub evidence_threshold: usize,
    /// Where the log file is written.
    pub log_dir: PathBuf,
    /// Accent colour of the interface (a ratatui colour name or `#rrggbb`).
    pub theme_accent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            buckets: DEFAULT_BUCKETS,
            evidence_threshold: DEFAULT_THRESHOLD,
            log_dir: PathBuf::from("logs"),
            theme_accent: "cyan".to_string(),
        }
    }
}

impl AppConfig {
    /// Load defaults, then the user config file, then `DQUEST_*` overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(config_path())
    }

    /// Same layering as [`AppConfig::load`] with an explicit file location.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let settings = Config::builder()
            .add_source(
                Config::try_from(&AppConfig::default())
                    .context("failed to seed configuration defaults")?,
            )
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .with_context(|| format!("failed to read configuration {}", path.display()))?;

        let config: AppConfig = settings
            .try_deserialize()
            .with_context(|| format!("invalid configuration in {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the game cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.buckets == 0 {
            bail!("`buckets` must be at least 1");
        }
        if self.evidence_threshold == 0 {
            bail!("`evidence_threshold` must be at least 1");
        }
        Ok(())
    }
}

/// Default location of `config.json`.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR)
        .join("config.json")
}

/// Write the default configuration if no file exists yet.
pub fn ensure_default_config() -> Result<PathBuf> {
    let path = config_path();
    write_default_config(&path)?;
    Ok(path)
}

fn write_default_config(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create config directory {}", parent.display()))?;
    }
    let serialized = serde_json::to_string_pretty(&AppConfig::default())
        .context("failed to serialize default configuration")?;
    fs::write(path, serialized)
        .with_context(|| format!("failed to write config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() -> Result<()> {
        let dir = tempdir()?;
        let config = AppConfig::load_from(dir.path().join("absent.json"))?;
        assert_eq!(config.buckets, DEFAULT_BUCKETS);
        assert_eq!(config.evidence_threshold, DEFAULT_THRESHOLD);
        Ok(())
    }

    #[test]
    fn file_values_override_defaults() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "buckets": 53, "theme_accent": "magenta" }"#)?;

        let config = AppConfig::load_from(&path)?;
        assert_eq!(config.buckets, 53);
        assert_eq!(config.theme_accent, "magenta");
        assert_eq!(config.evidence_threshold, DEFAULT_THRESHOLD);
        Ok(())
    }

    #[test]
    fn zero_threshold_is_rejected() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "evidence_threshold": 0 }"#)?;

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("evidence_threshold"));
        Ok(())
    }

    #[test]
    fn default_config_is_written_once() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("nested").join("config.json");
        write_default_config(&path)?;
        let written = fs::read_to_string(&path)?;
        assert!(written.contains("\"buckets\": 101"));

        fs::write(&path, r#"{ "buckets": 7 }"#)?;
        write_default_config(&path)?;
        assert_eq!(AppConfig::load_from(&path)?.buckets, 7);
        Ok(())
    }
}
