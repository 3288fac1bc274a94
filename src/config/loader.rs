use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/bishun/config.toml` on Unix/macOS, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("bishun").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.word_service.base_url.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "word_service.base_url must not be empty".to_string(),
            });
        }
        if self.image_service.base_url.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "image_service.base_url must not be empty".to_string(),
            });
        }
        if self.word_service.timeout_seconds == 0 || self.image_service.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "service timeouts must be at least 1 second".to_string(),
            });
        }
        Ok(())
    }

    /// Resolve the directory that holds persisted learner data
    /// (mastery set, avatar, log file).
    pub fn data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.storage.data_dir {
            return dir.clone();
        }
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("bishun")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/bishun.toml")).unwrap();
        assert_eq!(config.word_service.model, "gemini-3-flash-preview");
        assert!(config.storage.data_dir.is_none());
    }

    #[test]
    fn partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[word_service]\nmodel = \"gemini-custom\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.word_service.model, "gemini-custom");
        assert_eq!(config.word_service.timeout_seconds, 20);
        assert_eq!(config.image_service.model, "gemini-2.5-flash-image");
    }

    #[test]
    fn zero_timeout_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[word_service]\ntimeout_seconds = 0\n").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "not toml at all [[[").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::ParseError { .. })
        ));
    }
}
