//! XDG Base Directory support for quire.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "quire";
const LOG_FILE_NAME: &str = "quire.log";

/// Get the configuration directory following XDG conventions.
///
/// Returns `$XDG_CONFIG_HOME/quire` or `~/.config/quire`.
pub fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|p| p.join(APP_NAME))
        .context("Failed to determine config directory")
}

/// Get the cache directory following XDG conventions.
///
/// Returns `$XDG_CACHE_HOME/quire` or `~/.cache/quire`.
pub fn get_cache_dir() -> Result<PathBuf> {
    dirs::cache_dir()
        .map(|p| p.join(APP_NAME))
        .context("Failed to determine cache directory")
}

/// Log file used when the config does not name one.
pub fn default_log_file() -> Result<PathBuf> {
    Ok(get_cache_dir()?.join(LOG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirs_are_app_scoped() {
        // Directories are unavailable without a home directory.
        if let (Ok(config), Ok(cache)) = (get_config_dir(), get_cache_dir()) {
            assert!(config.ends_with(APP_NAME));
            assert!(cache.ends_with(APP_NAME));
            assert_ne!(config, cache);
        }
    }

    #[test]
    fn test_default_log_file_lives_in_cache_dir() {
        if let Ok(path) = default_log_file() {
            assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(LOG_FILE_NAME));
            assert!(path.parent().is_some_and(|p| p.ends_with(APP_NAME)));
        }
    }
}
