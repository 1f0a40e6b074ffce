use crate::error::{Result, TagverError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name looked up in the current directory
pub const LOCAL_CONFIG: &str = "tagver.toml";

/// File name looked up in the user config directory
pub const USER_CONFIG: &str = ".tagver.toml";

/// Represents the complete configuration for tagver.
///
/// Contains the accepted version prefixes and behavior options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    /// Prefixes accepted in front of the version number, besides "v"
    #[serde(default)]
    pub prefixes: Vec<String>,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// Configuration for behavior customization.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    /// Fill in missing minor/patch numbers when parsing for sort and compare
    #[serde(default)]
    pub lax: bool,
}

impl Config {
    /// Merge extra prefixes given on the command line, keeping order and
    /// dropping duplicates.
    pub fn with_prefixes<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for prefix in extra {
            let prefix = prefix.into();
            if !self.prefixes.contains(&prefix) {
                self.prefixes.push(prefix);
            }
        }
        self
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `tagver.toml` in current directory
/// 3. `.tagver.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(PathBuf::from(path)),
        None => discover_config(),
    };

    let Some(path) = path else {
        debug!("no configuration file found, using defaults");
        return Ok(Config::default());
    };

    let config_str = fs::read_to_string(&path)?;
    let config: Config = toml::from_str(&config_str)
        .map_err(|e| TagverError::config(format!("{}: {}", path.display(), e)))?;

    debug!(path = %path.display(), prefixes = ?config.prefixes, "loaded configuration");
    Ok(config)
}

fn discover_config() -> Option<PathBuf> {
    let local = Path::new(LOCAL_CONFIG);
    if local.exists() {
        return Some(local.to_path_buf());
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG))
        .filter(|path| path.exists())
}
