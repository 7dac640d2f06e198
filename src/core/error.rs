//! Error types for configuration and asset loading.

use thiserror::Error;

/// Errors that can occur when loading a RON data file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },
}

/// Errors raised while resolving textures and sounds on disk.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The asset file does not exist under the assets directory.
    #[error("Asset not found: {0}")]
    Missing(String),

    /// The asset exists but holds no data.
    #[error("Asset '{0}' is empty")]
    Empty(String),
}
