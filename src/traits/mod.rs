//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET used by the catalog adapter
//! - [`CatalogClient`] - the remote movie catalog consumed by screens

pub mod catalog;
pub mod http;

pub use catalog::CatalogClient;
pub use http::{Headers, HttpClient, HttpError, Response};
