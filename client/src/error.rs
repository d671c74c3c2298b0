//! Client error types

use shared::SharedError;
use thiserror::Error;

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Client error types
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{prompt}")]
    MissingInput { field: String, prompt: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{endpoint} returned HTTP {status}")]
    HttpStatus { endpoint: String, status: u16 },

    #[error("Malformed response from {endpoint}: {message}")]
    MalformedResponse { endpoint: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid command: {message}")]
    InvalidCommand { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),
}

impl ClientError {
    pub fn missing_input(field: &str, prompt: &str) -> Self {
        Self::MissingInput {
            field: field.to_string(),
            prompt: prompt.to_string(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError { message: message.into() }
    }

    pub fn invalid_command(message: impl Into<String>) -> Self {
        Self::InvalidCommand { message: message.into() }
    }

    /// Network failure, non-2xx status or undecodable body
    pub fn is_transport_failure(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::HttpStatus { .. } | Self::MalformedResponse { .. }
        )
    }

    pub fn is_missing_input(&self) -> bool {
        matches!(self, Self::MissingInput { .. })
    }
}
