//! Error types for halp.
//!
//! Uses `thiserror` for ergonomic error definitions.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the record store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("cannot access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a valid record list: {reason}", .path.display())]
    Format { path: PathBuf, reason: String },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised while resolving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine the user configuration directory")]
    DirectoryNotFound,
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level error for command execution.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to render output: {0}")]
    Render(String),
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::Render(e.to_string())
    }
}

impl From<csv::Error> for CliError {
    fn from(e: csv::Error) -> Self {
        if !e.is_io_error() {
            return Self::Render(e.to_string());
        }
        match e.into_kind() {
            csv::ErrorKind::Io(io) => Self::Io(io),
            other => Self::Render(format!("{:?}", other)),
        }
    }
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_names_file() {
        let err = StoreError::Format {
            path: PathBuf::from("/tmp/config.json"),
            reason: "expected value".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/config.json"));
        assert!(msg.contains("expected value"));
    }

    #[test]
    fn test_csv_io_error_stays_io() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: CliError = csv::Error::from(io).into();
        assert!(matches!(err, CliError::Io(ref e) if e.kind() == std::io::ErrorKind::BrokenPipe));
    }

    #[test]
    fn test_store_error_is_transparent_in_cli_error() {
        let err: CliError = StoreError::io(
            "/nope/config.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        )
        .into();
        assert!(err.to_string().starts_with("cannot access /nope/config.json"));
    }
}
