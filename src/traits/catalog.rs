//! Remote movie catalog boundary.

use async_trait::async_trait;

use crate::error::CatalogError;
use crate::models::{MovieDetail, MovieId, MovieSummary};

/// The four catalog endpoints a screen can draw from.
///
/// Each call yields either a payload or a failure, never both. List
/// endpoints return the first page only.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Movies currently in theaters.
    async fn now_playing(&self) -> Result<Vec<MovieSummary>, CatalogError>;

    /// Most popular movies.
    async fn popular(&self) -> Result<Vec<MovieSummary>, CatalogError>;

    /// Movies about to be released.
    async fn upcoming(&self) -> Result<Vec<MovieSummary>, CatalogError>;

    /// Full record for one movie.
    async fn details(&self, id: MovieId) -> Result<MovieDetail, CatalogError>;
}
