use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Server unavailable ({status}) for {url}")]
    ServerUnavailable { status: StatusCode, url: String },

    #[error("Fetch failed ({status}) for {url}")]
    FetchFailed { status: StatusCode, url: String },

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("No name heading found on record page {url}")]
    MissingName { url: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Upstream,
    Extraction,
    Configuration,
    Io,
}

impl ClientError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ClientError::ServerUnavailable { .. } | ClientError::FetchFailed { .. } => {
                ErrorCategory::Upstream
            }
            ClientError::Request(_) => ErrorCategory::Network,
            ClientError::MissingName { .. } => ErrorCategory::Extraction,
            ClientError::ConfigError { .. } | ClientError::InvalidConfigValue { .. } => {
                ErrorCategory::Configuration
            }
            ClientError::IoError(_) | ClientError::SerializationError(_) => ErrorCategory::Io,
        }
    }

    /// True only for transient upstream failures (503/504). Nothing in this
    /// crate retries; the caller decides.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ClientError::ServerUnavailable { .. })
    }

    /// HTTP status carried by the error, if the origin answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::ServerUnavailable { status, .. }
            | ClientError::FetchFailed { status, .. } => Some(*status),
            ClientError::Request(e) => e.status(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
