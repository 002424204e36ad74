//! Named sources and the re-invocable calls behind them.

use futures::future::BoxFuture;
use futures::FutureExt;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use super::view_state::SourceItems;
use crate::error::CatalogError;
use crate::models::MovieId;
use crate::traits::CatalogClient;

/// One independent catalog endpoint a screen draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SourceName {
    NowPlaying,
    Popular,
    Upcoming,
    Details,
}

impl SourceName {
    /// Stable key used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceName::NowPlaying => "now_playing",
            SourceName::Popular => "popular",
            SourceName::Upcoming => "upcoming",
            SourceName::Details => "details",
        }
    }

    /// Section heading shown to the user.
    pub fn title(&self) -> &'static str {
        match self {
            SourceName::NowPlaying => "Now Playing",
            SourceName::Popular => "Popular Movies",
            SourceName::Upcoming => "Coming Soon",
            SourceName::Details => "Details",
        }
    }
}

impl fmt::Display for SourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Future produced by one invocation of a [`SourceCall`].
pub type SourceFuture = BoxFuture<'static, Result<SourceItems, CatalogError>>;

/// A re-invocable asynchronous call for one source.
///
/// Every load and refresh invokes the call again, producing a fresh future.
#[derive(Clone)]
pub struct SourceCall(Arc<dyn Fn() -> SourceFuture + Send + Sync>);

impl SourceCall {
    pub fn new<F, Fut>(call: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<SourceItems, CatalogError>> + Send + 'static,
    {
        Self(Arc::new(move || call().boxed()))
    }

    pub fn invoke(&self) -> SourceFuture {
        (self.0)()
    }
}

impl fmt::Debug for SourceCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SourceCall(..)")
    }
}

/// Ordered mapping from source name to call for one screen.
///
/// Order matters only for reporting: failures are listed in this order.
#[derive(Debug, Clone, Default)]
pub struct SourceSet {
    calls: Vec<(SourceName, SourceCall)>,
}

impl SourceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a source, replacing any existing call with the same name.
    pub fn with(mut self, name: SourceName, call: SourceCall) -> Self {
        match self.calls.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = call,
            None => self.calls.push((name, call)),
        }
        self
    }

    /// The three list sources of the movies screen.
    pub fn listing(client: Arc<dyn CatalogClient>) -> Self {
        let now_playing = client.clone();
        let popular = client.clone();
        let upcoming = client;
        Self::new()
            .with(
                SourceName::NowPlaying,
                SourceCall::new(move || {
                    let client = now_playing.clone();
                    async move { client.now_playing().await.map(SourceItems::List) }
                }),
            )
            .with(
                SourceName::Popular,
                SourceCall::new(move || {
                    let client = popular.clone();
                    async move { client.popular().await.map(SourceItems::List) }
                }),
            )
            .with(
                SourceName::Upcoming,
                SourceCall::new(move || {
                    let client = upcoming.clone();
                    async move { client.upcoming().await.map(SourceItems::List) }
                }),
            )
    }

    /// The single source of a details screen.
    pub fn details(client: Arc<dyn CatalogClient>, id: MovieId) -> Self {
        Self::new().with(
            SourceName::Details,
            SourceCall::new(move || {
                let client = client.clone();
                async move { client.details(id).await.map(SourceItems::Detail) }
            }),
        )
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = SourceName> + '_ {
        self.calls.iter().map(|(name, _)| *name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SourceName, &SourceCall)> + '_ {
        self.calls.iter().map(|(name, call)| (*name, call))
    }
}
