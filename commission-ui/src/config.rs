//! Optional TOML configuration.
//!
//! Every key may be omitted; missing keys take the defaults below.
//!
//! ```toml
//! default_target = "40000"
//! window_width = 1100.0
//! window_height = 420.0
//!
//! [logging]
//! level = "debug"
//! stdout = true
//! file = "commission.log"
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::state::DEFAULT_TARGET_TEXT;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Initial text of the target input.
    pub default_target: String,
    pub window_width: f32,
    pub window_height: f32,
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_target: DEFAULT_TARGET_TEXT.to_string(),
            window_width: 1100.0,
            window_height: 420.0,
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Any `EnvFilter` directive. `None` keeps `RUST_LOG` or the built-in default.
    pub level: Option<String>,
    pub stdout: bool,
    /// Log file to append to. The directory must already exist.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: None,
            stdout: true,
            file: None,
        }
    }
}

impl AppConfig {
    /// Loads the configuration from `path`, or returns defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            debug!("no config file given, using defaults");
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path)
            .with_context(|| format!("cannot read config file '{}'", path.display()))?;
        let config = Self::from_toml_str(&text)
            .with_context(|| format!("invalid config file '{}'", path.display()))?;

        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.default_target, "40000");
        assert!(config.logging.stdout);
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            default_target = "55.000,00"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.default_target, "55.000,00");
        assert_eq!(config.window_width, 1100.0);
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert_eq!(config.logging.file, None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(AppConfig::from_toml_str("currency = \"USD\"").is_err());
    }

    #[test]
    fn load_without_path_returns_defaults() {
        assert_eq!(AppConfig::load(None).unwrap(), AppConfig::default());
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let err = AppConfig::load(Some(Path::new("does/not/exist.toml"))).unwrap_err();

        assert!(err.to_string().contains("cannot read config file"));
    }
}
