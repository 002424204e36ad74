//! Reading and writing the config file.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::AppConfig;
use crate::error::ConfigError;

/// The config directory name, under the home directory.
pub const CONFIG_DIR: &str = ".marquee";

/// The config file name.
pub const CONFIG_FILE: &str = "config.json";

/// Loads and saves [`AppConfig`] at a fixed path.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Manager for `~/.marquee/config.json`.
    pub fn new() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDirectory)?;
        Ok(Self::with_path(home.join(CONFIG_DIR).join(CONFIG_FILE)))
    }

    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Load the config file, or defaults when there is none.
    pub fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.config_path.exists() {
            tracing::debug!(path = %self.config_path.display(), "no config file, using defaults");
            return Ok(AppConfig::default());
        }

        let file = File::open(&self.config_path).map_err(|source| ConfigError::Io {
            path: self.config_path.clone(),
            source,
        })?;

        serde_json::from_reader(BufReader::new(file)).map_err(|source| ConfigError::Parse {
            path: self.config_path.clone(),
            source,
        })
    }

    /// Load the file, apply environment overrides and validate.
    pub fn load_effective(&self) -> Result<AppConfig, ConfigError> {
        let mut config = self.load()?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Write `config` as pretty JSON, creating the directory if needed.
    pub fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        let io_error = |source| ConfigError::Io {
            path: self.config_path.clone(),
            source,
        };

        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }

        let file = File::create(&self.config_path).map_err(io_error)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, config).map_err(|source| {
            ConfigError::Parse {
                path: self.config_path.clone(),
                source,
            }
        })?;
        writer.flush().map_err(io_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn manager(dir: &TempDir) -> ConfigManager {
        ConfigManager::with_path(dir.path().join("nested").join(CONFIG_FILE))
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        assert_eq!(manager(&dir).load().unwrap(), AppConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let manager = manager(&dir);
        let config = AppConfig {
            api_key: Some("abc".to_string()),
            region: Some("KR".to_string()),
            ..AppConfig::default()
        };

        manager.save(&config).unwrap();
        assert!(manager.config_path().exists());
        assert_eq!(manager.load().unwrap(), config);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let manager = manager(&dir);
        fs::create_dir_all(manager.config_path().parent().unwrap()).unwrap();
        fs::write(manager.config_path(), "{ not json").unwrap();

        assert!(matches!(manager.load(), Err(ConfigError::Parse { .. })));
    }

    #[test]
    #[serial]
    fn test_load_effective_applies_env() {
        let dir = TempDir::new().unwrap();
        let manager = manager(&dir);
        manager.save(&AppConfig::default()).unwrap();

        std::env::set_var(super::super::ENV_API_KEY, "env-key");
        let config = manager.load_effective();
        std::env::remove_var(super::super::ENV_API_KEY);

        assert_eq!(config.unwrap().api_key.as_deref(), Some("env-key"));
    }

    #[test]
    #[serial]
    fn test_load_effective_validates() {
        let dir = TempDir::new().unwrap();
        let manager = manager(&dir);
        manager
            .save(&AppConfig {
                carousel_interval_secs: 0,
                ..AppConfig::default()
            })
            .unwrap();

        assert!(matches!(
            manager.load_effective(),
            Err(ConfigError::InvalidValue {
                field: "carousel_interval_secs",
                ..
            })
        ));
    }
}
