//! Shared fixtures for integration tests.
//!
//! ```ignore
//! mod common;
//! use common::{listing_catalog, movie};
//!
//! let catalog = listing_catalog();
//! catalog.fail(SourceName::Popular, CatalogError::other("network"));
//! ```

#![allow(dead_code)]

use std::sync::Arc;

pub use marquee::adapters::MockCatalogClient;
pub use marquee::error::CatalogError;
pub use marquee::models::{MovieDetail, MovieSummary};
pub use marquee::orchestrator::{DataOrchestrator, SourceName, SourceSet};

use marquee::adapters::ImageResolver;
use marquee::app::App;

/// Ticks per carousel interval used by app-level tests.
pub const INTERVAL_TICKS: u64 = 40;

pub fn movie(id: u64) -> MovieSummary {
    MovieSummary::new(id, format!("Movie {}", id), format!("/poster-{}.jpg", id), 6.5)
        .with_backdrop(format!("/backdrop-{}.jpg", id))
        .with_overview(format!("The story of movie {}.", id))
}

pub fn movies(ids: &[u64]) -> Vec<MovieSummary> {
    ids.iter().copied().map(movie).collect()
}

/// A catalog with five now-playing movies, three popular, two upcoming
/// and details for movie 1.
pub fn listing_catalog() -> MockCatalogClient {
    let catalog = MockCatalogClient::new();
    catalog.set_list(SourceName::NowPlaying, movies(&[1, 2, 3, 4, 5]));
    catalog.set_list(SourceName::Popular, movies(&[10, 11, 12]));
    catalog.set_list(SourceName::Upcoming, movies(&[20, 21]));
    catalog.set_detail(MovieDetail::new(movie(1), "2021-03-05"));
    catalog
}

pub fn listing_orchestrator(catalog: &MockCatalogClient) -> DataOrchestrator {
    DataOrchestrator::new(SourceSet::listing(Arc::new(catalog.clone())))
}

pub fn test_app(catalog: &MockCatalogClient) -> App {
    App::new(
        Arc::new(catalog.clone()),
        ImageResolver::default(),
        INTERVAL_TICKS,
    )
}

/// Receive the next background message and apply it to the app.
pub async fn pump(app: &mut App) {
    let message = app
        .message_rx
        .as_mut()
        .expect("receiver taken")
        .recv()
        .await
        .expect("message channel closed");
    app.handle_message(message);
}
