//! Concrete implementations of the trait abstractions in `crate::traits`.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`TmdbCatalogClient`] - movie catalog over any [`crate::traits::HttpClient`]
//! - [`ImageResolver`] - turns catalog image paths into full URLs
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - configurable HTTP responses
//! - [`mock::MockCatalogClient`] - scripted catalog results with delays

pub mod image;
pub mod mock;
pub mod reqwest_http;
pub mod tmdb;

pub use image::{ImageResolver, DEFAULT_IMAGE_BASE_URL, DEFAULT_IMAGE_SIZE};
pub use mock::{MockCatalogClient, MockHttpClient};
pub use reqwest_http::ReqwestHttpClient;
pub use tmdb::{TmdbCatalogClient, DEFAULT_API_BASE_URL};
