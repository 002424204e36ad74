//! Mock implementations for testing.
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`MockCatalogClient`] - catalog with scripted per-source results

pub mod catalog;
pub mod http;

pub use catalog::MockCatalogClient;
pub use http::MockHttpClient;
