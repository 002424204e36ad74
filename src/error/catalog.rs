//! Errors produced by remote catalog calls.
//!
//! A `CatalogError` is the "why" of a failed source. It is logged where
//! the call fails; the view-state only records which source failed.

use std::fmt;

use super::category::ErrorCategory;

/// Catalog call failure variants.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Connection to the catalog failed.
    ConnectionFailed { url: String, message: String },

    /// Request timed out.
    Timeout { operation: String },

    /// Non-2xx response.
    HttpStatus { status: u16, message: String },

    /// Body could not be decoded into the expected shape.
    InvalidResponse { message: String },

    /// No API key configured.
    MissingApiKey,

    /// Anything else.
    Other { message: String },
}

impl CatalogError {
    pub fn other(message: impl Into<String>) -> Self {
        CatalogError::Other {
            message: message.into(),
        }
    }

    /// Check if this error is likely transient.
    pub fn is_retryable(&self) -> bool {
        match self {
            CatalogError::ConnectionFailed { .. } => true,
            CatalogError::Timeout { .. } => true,
            CatalogError::HttpStatus { status, .. } => {
                *status >= 500 || *status == 429 || *status == 408
            }
            CatalogError::InvalidResponse { .. } => false,
            CatalogError::MissingApiKey => false,
            CatalogError::Other { .. } => false,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::ConnectionFailed { .. } | CatalogError::Timeout { .. } => {
                ErrorCategory::Network
            }
            CatalogError::HttpStatus { status, .. } => match *status {
                401 => ErrorCategory::Configuration,
                429 | 500..=599 => ErrorCategory::Server,
                _ => ErrorCategory::Client,
            },
            CatalogError::InvalidResponse { .. } => ErrorCategory::Client,
            CatalogError::MissingApiKey => ErrorCategory::Configuration,
            CatalogError::Other { .. } => ErrorCategory::Network,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            CatalogError::ConnectionFailed { .. } => "E_CAT_CONN",
            CatalogError::Timeout { .. } => "E_CAT_TIMEOUT",
            CatalogError::HttpStatus { .. } => "E_CAT_HTTP",
            CatalogError::InvalidResponse { .. } => "E_CAT_INVALID",
            CatalogError::MissingApiKey => "E_CAT_NO_KEY",
            CatalogError::Other { .. } => "E_CAT_OTHER",
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::ConnectionFailed { url, message } => {
                write!(f, "Connection to {} failed: {}", url, message)
            }
            CatalogError::Timeout { operation } => write!(f, "{} timed out", operation),
            CatalogError::HttpStatus { status, message } => {
                write!(f, "Catalog returned HTTP {}: {}", status, message)
            }
            CatalogError::InvalidResponse { message } => {
                write!(f, "Invalid catalog response: {}", message)
            }
            CatalogError::MissingApiKey => write!(f, "No catalog API key configured"),
            CatalogError::Other { message } => write!(f, "Catalog error: {}", message),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::InvalidResponse {
            message: err.to_string(),
        }
    }
}
