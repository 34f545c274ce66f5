//! Server-level configuration resolution.
//!
//! Implements hierarchical config resolution:
//! 1. Built-in defaults
//! 2. `settings.json` in the server config directory
//! 3. Environment variables (highest priority)

pub mod world;

pub use world::{WorldConfig, WorldConfiguration};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::commandsys::DispatchSettings;
use crate::error::{Error, Result};

/// Server-wide settings palisade reads at dispatch time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ServerConfig {
    /// Show the generic "unknown command" notice on permission denial.
    pub show_unknown_command: bool,
    /// Directory holding per-world configuration files.
    pub worlds_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            show_unknown_command: true,
            worlds_dir: PathBuf::from("config/worlds"),
        }
    }
}

impl DispatchSettings for ServerConfig {
    fn show_unknown_command(&self) -> bool {
        self.show_unknown_command
    }
}

/// Load server configuration with hierarchical resolution.
pub fn load_config(config_dir: &Path) -> Result<ServerConfig> {
    let mut config = ServerConfig::default();

    let settings_path = config_dir.join("settings.json");
    if settings_path.exists() {
        config = load_config_file(&settings_path)?;
    }

    apply_env_overrides(&mut config);

    Ok(config)
}

fn load_config_file(path: &Path) -> Result<ServerConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        Error::Config(format!("Failed to parse config file {}: {}", path.display(), e))
    })
}

fn apply_env_overrides(config: &mut ServerConfig) {
    if let Ok(val) = std::env::var("PALISADE_SHOW_UNKNOWN_COMMAND")
        && let Ok(flag) = val.parse()
    {
        config.show_unknown_command = flag;
    }
    if let Ok(val) = std::env::var("PALISADE_WORLDS_DIR") {
        config.worlds_dir = PathBuf::from(val);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_shows_unknown_command() {
        let config = ServerConfig::default();
        assert!(config.show_unknown_command);
        assert_eq!(config.worlds_dir, PathBuf::from("config/worlds"));
    }

    #[test]
    fn missing_settings_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(dir.path()).unwrap();
        assert!(config.show_unknown_command);
    }

    #[test]
    fn settings_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"show-unknown-command": false, "worlds-dir": "data/worlds"}"#,
        )
        .unwrap();

        let config = load_config(dir.path()).unwrap();
        assert!(!config.show_unknown_command);
        assert_eq!(config.worlds_dir, PathBuf::from("data/worlds"));
    }

    #[test]
    fn malformed_settings_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("settings.json"), "not json{{{").unwrap();
        assert!(matches!(load_config(dir.path()), Err(Error::Config(_))));
    }
}
