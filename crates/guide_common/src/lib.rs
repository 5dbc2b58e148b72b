//! Common types and errors for the guidelines server
//!
//! This crate provides the error model and the shared result types used by the
//! config, core and MCP crates.

pub mod telemetry;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Core error types for guideline retrieval
#[derive(Error, Debug)]
pub enum GuideError {
    /// The configured document location is not a usable URL
    #[error("Invalid source URL: {0}")]
    InvalidSource(String),

    /// The request failed or the server answered with a non-200 status
    #[error("Network error: {0}")]
    TransportFailure(String),

    /// The response body is not valid UTF-8
    #[error("Encoding error: response body is not valid UTF-8")]
    DecodeFailure,

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Invalid input: {0}")]
    ValidationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl GuideError {
    /// Short machine-readable tag for logs and structured error data
    pub fn kind(&self) -> &'static str {
        match self {
            GuideError::InvalidSource(_) => "invalid_source",
            GuideError::TransportFailure(_) => "transport_failure",
            GuideError::DecodeFailure => "decode_failure",
            GuideError::ConfigError(_) => "config",
            GuideError::ValidationError(_) => "validation",
            GuideError::IoError(_) => "io",
            GuideError::JsonError(_) => "json",
        }
    }

    /// True for failures raised while fetching the document
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            GuideError::InvalidSource(_) | GuideError::TransportFailure(_) | GuideError::DecodeFailure
        )
    }
}

/// One replacement rule of the entity table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntityRule {
    /// Literal entity text, e.g. `&lt;`
    pub entity: String,

    /// Text substituted for the entity
    pub replacement: String,
}

impl EntityRule {
    pub fn new(entity: &str, replacement: &str) -> Self {
        Self {
            entity: entity.to_string(),
            replacement: replacement.to_string(),
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, GuideError>;
