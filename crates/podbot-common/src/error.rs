//! Error types shared across the podbot workspace.

use thiserror::Error;

/// Result type alias for podbot operations.
pub type Result<T> = std::result::Result<T, PodError>;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for podbot operations.
#[derive(Error, Debug)]
pub enum PodError {
    /// Configuration could not be read, parsed or validated.
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong.
        message: String,
        /// Underlying error, if any.
        #[source]
        source: Option<BoxedSource>,
    },

    /// A command handler failed.
    #[error("Command '{command}' failed: {message}")]
    Command {
        /// Name of the failing command.
        command: String,
        /// Failure reason.
        message: String,
    },

    /// Command registration was rejected.
    #[error("Registry error: {0}")]
    Registry(String),

    /// I/O related errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with custom message.
    #[error("{message}")]
    Generic {
        /// Error message.
        message: String,
        /// Underlying error, if any.
        #[source]
        source: Option<BoxedSource>,
    },
}

impl PodError {
    /// Create a new generic error with a custom message.
    pub fn new(msg: impl Into<String>) -> Self {
        Self::Generic {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new generic error with a custom message and source.
    pub fn with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Generic {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source.
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new command failure.
    pub fn command(command: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Command {
            command: command.into(),
            message: msg.into(),
        }
    }

    /// Whether the error came from configuration loading.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_config_error_display() {
        let err = PodError::config("token missing");
        assert_eq!(err.to_string(), "Configuration error: token missing");
        assert!(err.is_config());
        assert!(err.source().is_none());
    }

    #[test]
    fn test_error_with_source_keeps_chain() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "config.yaml");
        let err = PodError::config_with_source("failed to read config", io);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_command_error_display() {
        let err = PodError::command("args", "boom");
        assert_eq!(err.to_string(), "Command 'args' failed: boom");
        assert!(!err.is_config());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk");
        let err: PodError = io.into();
        assert!(matches!(err, PodError::Io(_)));
    }
}
