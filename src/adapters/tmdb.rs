//! TMDB-compatible catalog adapter.
//!
//! Implements [`CatalogClient`] over any [`HttpClient`], so the same code
//! path runs against reqwest in production and the mock client in tests.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::CatalogError;
use crate::models::{MovieDetail, MovieId, MoviePage, MovieSummary};
use crate::traits::{CatalogClient, Headers, HttpClient, HttpError};

/// Default TMDB API base.
pub const DEFAULT_API_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Error body TMDB sends with non-2xx responses.
#[derive(Debug, Deserialize)]
struct StatusBody {
    #[serde(default)]
    status_message: Option<String>,
}

/// Catalog client speaking the TMDB v3 REST API.
///
/// # Example
///
/// ```ignore
/// use marquee::adapters::{ReqwestHttpClient, TmdbCatalogClient};
///
/// let catalog = TmdbCatalogClient::new(ReqwestHttpClient::new())
///     .with_api_key("secret")
///     .with_language("ko-KR");
/// let movies = catalog.popular().await?;
/// ```
#[derive(Debug, Clone)]
pub struct TmdbCatalogClient<H> {
    http: H,
    api_base_url: String,
    api_key: Option<String>,
    language: String,
    region: Option<String>,
}

impl<H: HttpClient> TmdbCatalogClient<H> {
    pub fn new(http: H) -> Self {
        Self {
            http,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_key: None,
            language: "en-US".to_string(),
            region: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api_base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        self.api_key = if api_key.is_empty() { None } else { Some(api_key) };
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_region(mut self, region: Option<String>) -> Self {
        self.region = region;
        self
    }

    /// Build the request URL for `path`, adding the query parameters every
    /// call carries. List endpoints also pin the first page and region.
    fn url(&self, path: &str, api_key: &str, list: bool) -> String {
        let mut url = format!(
            "{}{}?api_key={}&language={}",
            self.api_base_url,
            path,
            urlencoding::encode(api_key),
            urlencoding::encode(&self.language)
        );
        if list {
            url.push_str("&page=1");
            if let Some(region) = &self.region {
                url.push_str("&region=");
                url.push_str(&urlencoding::encode(region));
            }
        }
        url
    }

    fn convert_error(operation: &str, url: &str, err: HttpError) -> CatalogError {
        match err {
            HttpError::ConnectionFailed(message) => CatalogError::ConnectionFailed {
                url: redact_api_key(url),
                message,
            },
            HttpError::Timeout(_) => CatalogError::Timeout {
                operation: operation.to_string(),
            },
            HttpError::Other(message) => CatalogError::Other { message },
        }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        operation: &str,
        path: &str,
        list: bool,
    ) -> Result<T, CatalogError> {
        let api_key = self.api_key.as_deref().ok_or(CatalogError::MissingApiKey)?;
        let url = self.url(path, api_key, list);

        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        tracing::debug!(operation, "GET {}", redact_api_key(&url));
        let response = self
            .http
            .get(&url, &headers)
            .await
            .map_err(|err| Self::convert_error(operation, &url, err))?;

        if !response.is_success() {
            let message = response
                .json::<StatusBody>()
                .ok()
                .and_then(|body| body.status_message)
                .or_else(|| response.text().ok())
                .unwrap_or_default();
            return Err(CatalogError::HttpStatus {
                status: response.status,
                message,
            });
        }

        Ok(response.json::<T>()?)
    }

    async fn fetch_list(
        &self,
        operation: &str,
        path: &str,
    ) -> Result<Vec<MovieSummary>, CatalogError> {
        let page: MoviePage = self.fetch(operation, path, true).await?;
        Ok(page.results)
    }
}

#[async_trait]
impl<H: HttpClient> CatalogClient for TmdbCatalogClient<H> {
    async fn now_playing(&self) -> Result<Vec<MovieSummary>, CatalogError> {
        self.fetch_list("now_playing", "/movie/now_playing").await
    }

    async fn popular(&self) -> Result<Vec<MovieSummary>, CatalogError> {
        self.fetch_list("popular", "/movie/popular").await
    }

    async fn upcoming(&self) -> Result<Vec<MovieSummary>, CatalogError> {
        self.fetch_list("upcoming", "/movie/upcoming").await
    }

    async fn details(&self, id: MovieId) -> Result<MovieDetail, CatalogError> {
        self.fetch("details", &format!("/movie/{}", id), false).await
    }
}

/// Strip the API key from a URL before it reaches logs or error text.
fn redact_api_key(url: &str) -> String {
    match url.find("api_key=") {
        Some(start) => {
            let value_start = start + "api_key=".len();
            let value_end = url[value_start..]
                .find('&')
                .map(|offset| value_start + offset)
                .unwrap_or(url.len());
            format!("{}***{}", &url[..value_start], &url[value_end..])
        }
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::http::MockResponse;
    use crate::adapters::mock::MockHttpClient;
    use crate::traits::Response;
    use bytes::Bytes;

    fn client(http: MockHttpClient) -> TmdbCatalogClient<MockHttpClient> {
        TmdbCatalogClient::new(http)
            .with_base_url("https://api.test/3/")
            .with_api_key("k3y")
    }

    #[test]
    fn test_list_url_pins_first_page_and_region() {
        let catalog = client(MockHttpClient::new()).with_region(Some("KR".to_string()));
        assert_eq!(
            catalog.url("/movie/popular", "k3y", true),
            "https://api.test/3/movie/popular?api_key=k3y&language=en-US&page=1&region=KR"
        );
    }

    #[test]
    fn test_detail_url_has_no_page() {
        let catalog = client(MockHttpClient::new()).with_language("ko-KR");
        assert_eq!(
            catalog.url("/movie/7", "k3y", false),
            "https://api.test/3/movie/7?api_key=k3y&language=ko-KR"
        );
    }

    #[test]
    fn test_redact_api_key() {
        assert_eq!(
            redact_api_key("https://a/b?api_key=secret&language=en"),
            "https://a/b?api_key=***&language=en"
        );
        assert_eq!(redact_api_key("https://a/b?api_key=secret"), "https://a/b?api_key=***");
        assert_eq!(redact_api_key("https://a/b"), "https://a/b");
    }

    #[tokio::test]
    async fn test_popular_decodes_results() {
        let http = MockHttpClient::new();
        http.set_response(
            "https://api.test/3/movie/popular",
            MockResponse::Success(Response::new(
                200,
                Bytes::from(
                    r#"{"page":1,"results":[{"id":1,"title":"A","poster_path":"/a.jpg","vote_average":7.0}]}"#,
                ),
            )),
        );
        let movies = client(http.clone()).popular().await.unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "A");

        let requests = http.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].headers.get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_without_request() {
        let http = MockHttpClient::new();
        let catalog = TmdbCatalogClient::new(http.clone());
        let err = catalog.upcoming().await.unwrap_err();
        assert_eq!(err, CatalogError::MissingApiKey);
        assert!(http.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_status_message_is_surfaced() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::Success(Response::new(
            401,
            Bytes::from(r#"{"status_code":7,"status_message":"Invalid API key"}"#),
        )));
        let err = client(http).details(3).await.unwrap_err();
        assert_eq!(
            err,
            CatalogError::HttpStatus {
                status: 401,
                message: "Invalid API key".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_transport_errors_are_classified() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::Error(HttpError::Timeout("10s".into())));
        let err = client(http.clone()).now_playing().await.unwrap_err();
        assert_eq!(
            err,
            CatalogError::Timeout {
                operation: "now_playing".to_string()
            }
        );

        http.set_default_response(MockResponse::Error(HttpError::ConnectionFailed(
            "refused".into(),
        )));
        match client(http).now_playing().await.unwrap_err() {
            CatalogError::ConnectionFailed { url, message } => {
                assert!(url.contains("api_key=***"));
                assert!(!url.contains("k3y"));
                assert_eq!(message, "refused");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_garbage_body_is_invalid_response() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::Success(Response::new(
            200,
            Bytes::from("<html>"),
        )));
        let err = client(http).popular().await.unwrap_err();
        assert!(matches!(err, CatalogError::InvalidResponse { .. }));
    }
}
