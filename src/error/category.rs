//! Error category classification.
//!
//! Categories decide whether a failure is worth a user-initiated retry
//! and which recovery hint to log.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection, DNS, timeout. Transient.
    Network,

    /// Catalog returned 5xx or throttled us. Transient.
    Server,

    /// Missing API key, bad base URL, unreadable config file.
    Configuration,

    /// Malformed payloads or requests we built wrong.
    Client,
}

impl ErrorCategory {
    /// Returns true if errors in this category are generally transient.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::Client => "client",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check your internet connection and press r to refresh",
            ErrorCategory::Server => "The catalog may be busy. Press r to refresh in a moment",
            ErrorCategory::Configuration => "Check ~/.marquee/config.json or TMDB_API_KEY",
            ErrorCategory::Client => "This may be a bug. Please report it if it persists",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
