//! [`HttpClient`] over reqwest, used by the binary.

use async_trait::async_trait;
use std::time::Duration;

use crate::traits::{Headers, HttpClient, HttpError, Response};

#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every request made through this client gives up after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|err| {
                // Only reachable when the TLS backend fails to initialise.
                tracing::warn!(error = %err, "using HTTP client without timeout");
                reqwest::Client::new()
            });
        Self { client }
    }

    fn classify(err: reqwest::Error) -> HttpError {
        if err.is_timeout() {
            HttpError::Timeout(err.to_string())
        } else if err.is_connect() {
            HttpError::ConnectionFailed(err.to_string())
        } else {
            HttpError::Other(err.to_string())
        }
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        let request = headers
            .iter()
            .fold(self.client.get(url), |request, (name, value)| {
                request.header(name, value)
            });

        let response = request.send().await.map_err(Self::classify)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(Self::classify)?;
        Ok(Response::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_malformed_url_is_other() {
        let client = ReqwestHttpClient::with_timeout(Duration::from_secs(1));
        let result = client.get("not a url", &Headers::new()).await;
        assert!(matches!(result, Err(HttpError::Other(_))));
    }

    #[tokio::test]
    async fn test_closed_port_is_a_transport_error() {
        let client = ReqwestHttpClient::new();
        let result = client
            .get("http://127.0.0.1:59999/movie/popular", &Headers::new())
            .await;
        assert!(matches!(
            result,
            Err(HttpError::ConnectionFailed(_)) | Err(HttpError::Other(_))
        ));
    }
}
