//! Engine configuration.

use crate::Result;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct DiscoveryConfig {
    /// Directory scanned for command-definition documents.
    #[serde(default = "default_commands_dir")]
    pub commands_dir: PathBuf,
    /// Index document that is never treated as a command.
    #[serde(default = "default_reserved_doc")]
    pub reserved_doc: String,
}

fn default_commands_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".wayfinder")
        .join("commands")
}

fn default_reserved_doc() -> String {
    "README.md".to_string()
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            commands_dir: default_commands_dir(),
            reserved_doc: default_reserved_doc(),
        }
    }
}

impl DiscoveryConfig {
    /// Config pointing at a specific command directory, defaults elsewhere.
    pub fn for_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            commands_dir: dir.into(),
            ..Self::default()
        }
    }

    /// Load config from a specific file path.
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: DiscoveryConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load config from `wayfinder.toml` under `dir`, or fall back to defaults.
    pub fn load_or_default(dir: &std::path::Path) -> Result<Self> {
        let config_path = dir.join("wayfinder.toml");
        if config_path.exists() {
            return Self::load_from(&config_path);
        }

        Ok(DiscoveryConfig::default())
    }
}
