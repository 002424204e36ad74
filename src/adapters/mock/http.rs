//! Scripted [`HttpClient`] for adapter tests.
//!
//! Routes are matched by URL prefix, longest first, so a test can script
//! `/movie/popular` without spelling out the query string. Every request
//! is recorded.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A request the mock received.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Headers,
}

/// What a route answers with.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(Response),
    Error(HttpError),
}

#[derive(Debug, Default)]
struct Script {
    routes: Vec<(String, MockResponse)>,
    fallback: Option<MockResponse>,
    requests: Vec<RecordedRequest>,
}

impl Script {
    fn answer(&self, url: &str) -> Option<MockResponse> {
        self.routes
            .iter()
            .filter(|(prefix, _)| url.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, response)| response)
            .or(self.fallback.as_ref())
            .cloned()
    }
}

/// Clones share one script and one request log.
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    script: Arc<Mutex<Script>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every URL starting with `prefix`. Re-scripting a prefix
    /// replaces its answer.
    pub fn set_response(&self, prefix: &str, response: MockResponse) {
        let mut script = self.script.lock().unwrap();
        script.routes.retain(|(existing, _)| existing != prefix);
        script.routes.push((prefix.to_string(), response));
    }

    /// Answer for URLs no route matches.
    pub fn set_default_response(&self, response: MockResponse) {
        self.script.lock().unwrap().fallback = Some(response);
    }

    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.script.lock().unwrap().requests.clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        let answer = {
            let mut script = self.script.lock().unwrap();
            script.requests.push(RecordedRequest {
                url: url.to_string(),
                headers: headers.clone(),
            });
            script.answer(url)
        };

        match answer {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("unscripted GET {}", url))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(body: &'static str) -> MockResponse {
        MockResponse::Success(Response::new(200, body))
    }

    #[tokio::test]
    async fn test_longest_prefix_wins_over_fallback() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::Success(Response::new(404, "")));
        http.set_response("https://api.test/3/movie", ok("any"));
        http.set_response("https://api.test/3/movie/popular", ok("popular"));

        let popular = http
            .get("https://api.test/3/movie/popular?page=1", &Headers::new())
            .await
            .unwrap();
        assert_eq!(popular.text().unwrap(), "popular");

        let details = http
            .get("https://api.test/3/movie/7", &Headers::new())
            .await
            .unwrap();
        assert_eq!(details.text().unwrap(), "any");

        let other = http
            .get("https://api.test/3/genre", &Headers::new())
            .await
            .unwrap();
        assert_eq!(other.status, 404);
    }

    #[tokio::test]
    async fn test_rescripting_replaces_answer() {
        let http = MockHttpClient::new();
        http.set_response("https://api.test/3/movie/7", ok("old"));
        http.set_response(
            "https://api.test/3/movie/7",
            MockResponse::Error(HttpError::Timeout("slow".to_string())),
        );
        let result = http.get("https://api.test/3/movie/7", &Headers::new()).await;
        assert_eq!(result, Err(HttpError::Timeout("slow".to_string())));
    }

    #[tokio::test]
    async fn test_unscripted_url_fails_and_is_recorded() {
        let http = MockHttpClient::new();
        let clone = http.clone();
        let result = clone.get("https://api.test/3/movie/1", &Headers::new()).await;
        assert!(matches!(result, Err(HttpError::Other(_))));

        let requests = http.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "https://api.test/3/movie/1");
    }
}
