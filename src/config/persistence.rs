use std::fs;
use std::path::{Path, PathBuf};

use super::AppConfig;
use crate::error::ConfigError;

/// Returns the platform-specific base config directory.
///
/// Resolution order:
/// 1. `XDG_CONFIG_HOME`
/// 2. `$HOME/.config`
/// 3. `%USERPROFILE%/.config`
pub fn config_base_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg));
    }
    if let Some(home) = std::env::var_os("HOME") {
        return Some(PathBuf::from(home).join(".config"));
    }
    std::env::var_os("USERPROFILE").map(|home| PathBuf::from(home).join(".config"))
}

/// Returns the path to `~/.config/tabpager/config.ron`.
pub fn config_path() -> Option<PathBuf> {
    config_base_dir().map(|base| base.join("tabpager").join("config.ron"))
}

/// Reads and parses a config file.
pub fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ron::from_str(&contents)?)
}

/// Loads the config from the default location.
pub fn try_load_config() -> Result<AppConfig, ConfigError> {
    let path = config_path().ok_or(ConfigError::NoConfigDir)?;
    read_config(&path)
}

/// Loads the config from disk, falling back to defaults on any error.
pub fn load_config() -> AppConfig {
    match try_load_config() {
        Ok(config) => config,
        Err(err) => {
            log::debug!("using default config: {err}");
            AppConfig::default()
        }
    }
}

/// Writes the config to `path` in pretty RON, creating parent directories.
pub fn write_config(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(io_err)?;
    }
    let pretty = ron::ser::PrettyConfig::default();
    let serialized = ron::ser::to_string_pretty(config, pretty)?;
    fs::write(path, serialized).map_err(io_err)
}

/// Persists the config to the default location. Errors are logged and dropped.
pub fn save_config(config: &AppConfig) {
    let Some(path) = config_path() else {
        return;
    };
    if let Err(err) = write_config(&path, config) {
        log::warn!("failed to save config: {err}");
    }
}
