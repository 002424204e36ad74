use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Catalog identifier of a movie.
pub type MovieId = u64;

/// A movie as it appears in one of the catalog list endpoints.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct MovieSummary {
    pub id: MovieId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub poster_path: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Average vote, 0 to 10
    #[serde(default, deserialize_with = "null_as_default")]
    pub vote_average: f64,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
}

impl MovieSummary {
    /// Create a summary with the required fields only.
    pub fn new(
        id: MovieId,
        title: impl Into<String>,
        poster_path: impl Into<String>,
        vote_average: f64,
    ) -> Self {
        Self {
            id,
            poster_path: poster_path.into(),
            title: title.into(),
            vote_average: vote_average.clamp(0.0, 10.0),
            backdrop_path: None,
            overview: None,
        }
    }

    pub fn with_backdrop(mut self, path: impl Into<String>) -> Self {
        self.backdrop_path = Some(path.into());
        self
    }

    pub fn with_overview(mut self, overview: impl Into<String>) -> Self {
        self.overview = Some(overview.into());
        self
    }

    /// Overview text, empty when the catalog has none.
    pub fn overview_text(&self) -> &str {
        self.overview.as_deref().unwrap_or("")
    }

    /// Backdrop path, falling back to the poster when no backdrop exists.
    pub fn backdrop_or_poster(&self) -> &str {
        match self.backdrop_path.as_deref() {
            Some(path) if !path.is_empty() => path,
            _ => &self.poster_path,
        }
    }
}

/// Full movie record returned by the details endpoint.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub summary: MovieSummary,
    /// ISO date (`YYYY-MM-DD`) or empty
    #[serde(default, deserialize_with = "null_as_default")]
    pub release_date: String,
}

impl MovieDetail {
    pub fn new(summary: MovieSummary, release_date: impl Into<String>) -> Self {
        Self {
            summary,
            release_date: release_date.into(),
        }
    }

    pub fn id(&self) -> MovieId {
        self.summary.id
    }
}

/// One page of a list endpoint. Only the first page is ever requested.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MoviePage {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<MovieSummary>,
    #[serde(default)]
    pub total_pages: u32,
}

/// Render a vote the way poster cards show it: `⭐ 7.5 / 10`.
pub fn format_vote(vote: f64) -> String {
    format!("⭐ {} / 10", vote)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_deserializes_nulls_as_empty() {
        let json = r#"{
            "id": 42,
            "poster_path": null,
            "title": "Dune",
            "vote_average": 8.1,
            "backdrop_path": null,
            "overview": "Spice."
        }"#;
        let movie: MovieSummary = serde_json::from_str(json).unwrap();
        assert_eq!(movie.id, 42);
        assert_eq!(movie.poster_path, "");
        assert_eq!(movie.backdrop_path, None);
        assert_eq!(movie.overview_text(), "Spice.");
    }

    #[test]
    fn test_detail_flattens_summary_fields() {
        let json = r#"{
            "id": 7,
            "poster_path": "/p.jpg",
            "title": "Arrival",
            "vote_average": 7.6,
            "backdrop_path": "/b.jpg",
            "overview": "Linguistics.",
            "release_date": "2016-11-10",
            "runtime": 116
        }"#;
        let detail: MovieDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.id(), 7);
        assert_eq!(detail.summary.title, "Arrival");
        assert_eq!(detail.release_date, "2016-11-10");
    }

    #[test]
    fn test_detail_missing_release_date_is_empty() {
        let json = r#"{"id": 1, "title": "Untitled", "release_date": null}"#;
        let detail: MovieDetail = serde_json::from_str(json).unwrap();
        assert!(detail.release_date.is_empty());
    }

    #[test]
    fn test_page_parses_results() {
        let json = r#"{"page":1,"results":[{"id":1,"title":"A"},{"id":2,"title":"B"}],"total_pages":9}"#;
        let page: MoviePage = serde_json::from_str(json).unwrap();
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.total_pages, 9);
    }

    #[test]
    fn test_backdrop_falls_back_to_poster() {
        let movie = MovieSummary::new(1, "A", "/poster.jpg", 5.0);
        assert_eq!(movie.backdrop_or_poster(), "/poster.jpg");
        let movie = movie.with_backdrop("/backdrop.jpg");
        assert_eq!(movie.backdrop_or_poster(), "/backdrop.jpg");
    }

    #[test]
    fn test_new_clamps_vote() {
        assert_eq!(MovieSummary::new(1, "A", "", 12.0).vote_average, 10.0);
        assert_eq!(MovieSummary::new(1, "A", "", -1.0).vote_average, 0.0);
    }

    #[test]
    fn test_format_vote() {
        assert_eq!(format_vote(7.5), "⭐ 7.5 / 10");
        assert_eq!(format_vote(8.0), "⭐ 8 / 10");
    }
}
