//! Error types for Wayfinder.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Command document has no usable name: {0}")]
    InvalidDocumentName(PathBuf),

    #[error("Config error: {0}")]
    ConfigError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
