//! Centralized error types for the panel
//!
//! All panel errors are represented by the `PanelError` enum.
//! Use `Result<T>` as shorthand for `std::result::Result<T, PanelError>`.
//!
//! A failed POST is not an error: it is reported through `SendResult`
//! so the continuous-update loop keeps running.

use std::fmt;
use std::path::PathBuf;

/// All panel errors
#[derive(Debug)]
pub enum PanelError {
    // === Input ===
    /// A form field could not be parsed as an integer
    InvalidInput { field: &'static str, value: String },

    // === Network ===
    /// HTTP client could not be built
    HttpClient { source: reqwest::Error },

    // === Config ===
    /// Config file is not valid TOML for our schema
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// Invalid config value
    ConfigValidation { field: &'static str, reason: String },

    // === IO ===
    /// File system operation failed
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    // === OS Commands ===
    /// Failed to spawn an OS command
    OsCommand {
        program: &'static str,
        source: std::io::Error,
    },

    // === Runtime ===
    /// Terminal or tokio runtime failure
    Runtime { source: std::io::Error },
}

impl std::error::Error for PanelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } | Self::OsCommand { source, .. } | Self::Runtime { source } => {
                Some(source)
            }
            Self::HttpClient { source } => Some(source),
            Self::ConfigParse { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for PanelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { field, value } => {
                write!(f, "Invalid {}: '{}' is not a whole number", field, value)
            }
            Self::HttpClient { source } => write!(f, "Cannot create HTTP client: {}", source),
            Self::ConfigParse { path, source } => {
                write!(f, "Config parse error in {}: {}", path.display(), source)
            }
            Self::ConfigValidation { field, reason } => {
                write!(f, "Invalid {}: {}", field, reason)
            }
            Self::Io { path, source } => write!(f, "IO error: {}: {}", path.display(), source),
            Self::OsCommand { program, source } => {
                write!(f, "Command failed: {}: {}", program, source)
            }
            Self::Runtime { source } => write!(f, "Runtime error: {}", source),
        }
    }
}

/// Alias for Result with PanelError
pub type Result<T> = std::result::Result<T, PanelError>;
