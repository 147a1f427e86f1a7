//! Configuration management for quire.
//!
//! This crate provides configuration loading, saving, and validation
//! with support for TOML format and XDG directory conventions.

mod settings;
mod xdg;

pub use settings::{Config, EditorSettings, LegacyConfig, LoggingSettings};
pub use xdg::{default_log_file, get_cache_dir, get_config_dir};

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Default values as constants
pub mod defaults {
    pub const AUTO_INDENT: bool = true;
    pub const AUTO_CLOSE_BRACKETS: bool = true;
    pub const TAB_SIZE: usize = 4;
    pub const USE_SPACES: bool = true;
    pub const MIN_LOG_LEVEL: &str = "info";
    pub const MAX_LOG_ENTRIES: usize = 1000;
}

impl Config {
    /// Load configuration from the XDG config file.
    ///
    /// On first run, creates config file with default values.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_file_path()?)
    }

    /// Load configuration from `path`.
    ///
    /// Creates the file with defaults if it does not exist, auto-completes
    /// missing keys, and migrates the legacy flat format.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            // First run - create config file with default values
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let original_content = std::fs::read_to_string(path)?;
        let table: toml::Table = toml::from_str(&original_content)?;

        let config: Self = if is_legacy(&table) {
            let legacy: LegacyConfig = table.try_into()?;
            legacy.into()
        } else {
            table.try_into()?
        };

        // Serialize back to get normalized content
        let normalized_content = toml::to_string_pretty(&config)?;

        // If content changed, save the updated config
        if original_content != normalized_content {
            config.save_to(path)?;
        }

        Ok(config)
    }

    /// Save configuration to the XDG config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(Self::config_file_path()?)
    }

    /// Save configuration to `path`.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get path to config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(get_config_dir()?.join("config.toml"))
    }

    /// Validate config content.
    pub fn validate_content(content: &str) -> Result<Config> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("{}", e))
    }
}

/// Legacy files are flat: plain keys at the top level, no sections.
fn is_legacy(table: &toml::Table) -> bool {
    !table.is_empty() && table.values().all(|value| !value.is_table())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_first_load_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn test_save_load_cycle() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.editor.read_only = true;
        config.editor.tab_size = 2;
        config.logging.min_level = "debug".to_string();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_completes_missing_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[editor]\nauto_indent = false\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(!config.editor.auto_indent);

        let rewritten = std::fs::read_to_string(&path).unwrap();
        assert!(rewritten.contains("auto_close_brackets = true"));
        assert!(rewritten.contains("[logging]"));
    }

    #[test]
    fn test_legacy_flat_format_is_migrated() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "read_only = true\ninsert_bracket = false\nmin_log_level = \"warn\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.editor.read_only);
        assert!(!config.editor.auto_close_brackets);
        assert_eq!(config.logging.min_level, "warn");

        let rewritten = std::fs::read_to_string(&path).unwrap();
        assert!(rewritten.contains("[editor]"));
        assert!(!rewritten.contains("insert_bracket"));
    }

    #[test]
    fn test_validate_content() {
        assert!(Config::validate_content("[editor]\ntab_size = 3\n").is_ok());
        assert!(Config::validate_content("[editor]\ntab_size = \"wide\"\n").is_err());
    }
}
