//! Error types for JFrog Apps Config loading and validation

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

/// Errors surfaced by the config loader.
///
/// Both variants carry the underlying error untouched. A missing file is
/// not an error and never produces a value of this type.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] serde_yaml::Error),
}

/// Errors raised while running schema validation itself
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Invalid JSON schema: {0}")]
    InvalidSchema(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML document: {0}")]
    Parse(#[from] serde_yaml::Error),
}
