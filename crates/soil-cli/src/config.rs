//! Configuration file management.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use soil_core::DEFAULT_BATCH_SIZE;
use soil_store::ExportFormat;
use tracing::warn;

/// File written by the "Export to CSV" action when nothing else is configured.
pub const DEFAULT_EXPORT_FILE: &str = "soil_health_data.csv";

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// SQLite database file
    #[serde(default)]
    pub database: Option<PathBuf>,

    /// Default export destination
    #[serde(default = "default_export_path")]
    pub export_path: PathBuf,

    /// Default export format
    #[serde(default)]
    pub export_format: ExportFormat,

    /// Readings per random batch
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// GUI-specific settings
    #[serde(default)]
    pub gui: GuiConfig,
}

/// GUI-specific configuration settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuiConfig {
    /// Theme preference: "dark" or "light"
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Initial window width.
    #[serde(default = "default_window_width")]
    pub window_width: f32,

    /// Initial window height.
    #[serde(default = "default_window_height")]
    pub window_height: f32,
}

fn default_export_path() -> PathBuf {
    PathBuf::from(DEFAULT_EXPORT_FILE)
}

fn default_batch_size() -> usize {
    DEFAULT_BATCH_SIZE
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_window_width() -> f32 {
    1000.0
}

fn default_window_height() -> f32 {
    720.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: None,
            export_path: default_export_path(),
            export_format: ExportFormat::default(),
            batch_size: default_batch_size(),
            gui: GuiConfig::default(),
        }
    }
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("soil-health")
            .join("config.toml")
    }

    /// Load config from the default location, or return default if not found
    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    /// Load config from `path`, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => warn!("Failed to parse config {}: {}", path.display(), e),
                },
                Err(e) => warn!("Failed to read config {}: {}", path.display(), e),
            }
        }
        Self::default()
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path())
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Database file to open: command line, then config, then the platform default.
    pub fn resolve_database(&self, arg: Option<PathBuf>) -> PathBuf {
        arg.or_else(|| self.database.clone())
            .unwrap_or_else(soil_store::default_db_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.batch_size, 100);
        assert_eq!(config.export_path, PathBuf::from("soil_health_data.csv"));
        assert_eq!(config.export_format, ExportFormat::Csv);
        assert_eq!(config.gui.theme, "dark");
        assert!(config.database.is_none());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE);
        assert_eq!(config.gui, GuiConfig::default());
    }

    #[test]
    fn test_partial_file() {
        let config: Config = toml::from_str(
            r#"
            batch_size = 25
            export_format = "json"

            [gui]
            theme = "light"
            "#,
        )
        .unwrap();
        assert_eq!(config.batch_size, 25);
        assert_eq!(config.export_format, ExportFormat::Json);
        assert_eq!(config.gui.theme, "light");
        assert_eq!(config.gui.window_width, 1000.0);
    }

    #[test]
    fn test_save_and_load_from() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config {
            database: Some(PathBuf::from("/tmp/soil.db")),
            batch_size: 7,
            ..Config::default()
        };

        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path);
        assert_eq!(loaded.database, config.database);
        assert_eq!(loaded.batch_size, 7);
    }

    #[test]
    fn test_invalid_file_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "batch_size = \"many\"").unwrap();
        assert_eq!(Config::load_from(&path).batch_size, DEFAULT_BATCH_SIZE);
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml"));
        assert_eq!(config.batch_size, DEFAULT_BATCH_SIZE);
    }

    #[test]
    fn test_resolve_database_prefers_arg() {
        let config = Config {
            database: Some(PathBuf::from("config.db")),
            ..Config::default()
        };
        assert_eq!(
            config.resolve_database(Some(PathBuf::from("arg.db"))),
            PathBuf::from("arg.db")
        );
        assert_eq!(config.resolve_database(None), PathBuf::from("config.db"));
    }

    #[test]
    fn test_resolve_database_falls_back_to_default() {
        let config = Config::default();
        assert_eq!(config.resolve_database(None), soil_store::default_db_path());
    }
}
