//! Error handling for marquee.
//!
//! | Type | Raised by | Retryable |
//! |------|-----------|-----------|
//! | [`CatalogError`] | remote catalog calls | transport and 5xx only |
//! | [`ConfigError`] | config loading | No |
//!
//! Catalog failures never cross the orchestrator boundary as `Err`: they
//! are folded into `ErrorInfo` inside the view-state. See
//! [`crate::orchestrator`].

mod catalog;
mod category;
mod config;

pub use catalog::CatalogError;
pub use category::ErrorCategory;
pub use config::ConfigError;
