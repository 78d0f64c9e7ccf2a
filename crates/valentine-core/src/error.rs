//! Error types for Valentine

use thiserror::Error;

/// Main error type for Valentine operations.
///
/// Only configuration and startup can fail. Missing photos, GIFs or music
/// are presentation fallbacks, never errors.
#[derive(Error, Debug)]
pub enum ShowError {
    /// Screen ordinal outside 1..=5
    #[error("Invalid screen: {0} (expected 1-5)")]
    InvalidScreen(u8),

    /// Navigation link text that is not `FROM:TO`
    #[error("Invalid link: {0}")]
    InvalidLink(String),

    /// Config value rejected by validation
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Config file could not be parsed
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using ShowError
pub type ShowResult<T> = Result<T, ShowError>;
