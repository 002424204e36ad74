//! The one network primitive the catalog needs: an HTTP GET.
//!
//! [`crate::adapters::TmdbCatalogClient`] is generic over [`HttpClient`],
//! which keeps the URL building and JSON decoding testable against
//! [`crate::adapters::MockHttpClient`].

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::fmt;

/// Request headers, name to value.
pub type Headers = HashMap<String, String>;

/// Status and body of a finished GET. Catalog responses are small JSON
/// documents, so the body is read fully before this is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as UTF-8, for error messages from servers that don't send JSON.
    pub fn text(&self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.body.to_vec())
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Transport-level failure: no response was received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpError {
    /// The host could not be reached
    ConnectionFailed(String),
    /// The request outlived the client's timeout
    Timeout(String),
    /// Anything else, including malformed URLs
    Other(String),
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpError::ConnectionFailed(msg) => write!(f, "connection failed: {}", msg),
            HttpError::Timeout(msg) => write!(f, "timed out: {}", msg),
            HttpError::Other(msg) => write!(f, "request failed: {}", msg),
        }
    }
}

impl std::error::Error for HttpError {}

#[async_trait]
pub trait HttpClient: Send + Sync {
    /// GET `url`. A non-2xx status is still `Ok`; the caller decides what
    /// it means.
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_2xx_is_success() {
        assert!(Response::new(200, "").is_success());
        assert!(Response::new(204, "").is_success());
        assert!(!Response::new(304, "").is_success());
        assert!(!Response::new(404, "").is_success());
        assert!(!Response::new(500, "").is_success());
    }

    #[test]
    fn test_json_and_text_read_the_body() {
        #[derive(Debug, serde::Deserialize, PartialEq)]
        struct Page {
            page: u32,
        }

        let response = Response::new(200, r#"{"page":1}"#);
        assert_eq!(response.json::<Page>().unwrap(), Page { page: 1 });
        assert_eq!(response.text().unwrap(), r#"{"page":1}"#);
        assert!(Response::new(200, "nope").json::<Page>().is_err());
    }

    #[test]
    fn test_http_error_display() {
        assert_eq!(
            HttpError::ConnectionFailed("refused".to_string()).to_string(),
            "connection failed: refused"
        );
        assert_eq!(HttpError::Timeout("10s".to_string()).to_string(), "timed out: 10s");
    }
}
