//! Scripted catalog for orchestrator and screen tests.
//!
//! Each source has a queue of replies. A call pops the front reply; the
//! last one stays and is repeated for every further call. Delays use
//! `tokio::time`, so tests running with paused time control them exactly.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

use crate::error::CatalogError;
use crate::models::{MovieDetail, MovieId, MovieSummary};
use crate::orchestrator::{SourceItems, SourceName};
use crate::traits::CatalogClient;

type Reply = Result<SourceItems, CatalogError>;

#[derive(Debug, Default)]
struct Script {
    replies: HashMap<SourceName, VecDeque<Reply>>,
    delays: HashMap<SourceName, Duration>,
    holds: HashMap<SourceName, VecDeque<Arc<Notify>>>,
    calls: HashMap<SourceName, usize>,
    detail_ids: Vec<MovieId>,
}

impl Script {
    fn next_reply(&mut self, source: SourceName) -> Reply {
        let Some(queue) = self.replies.get_mut(&source) else {
            return unscripted(source);
        };
        let reply = if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        };
        reply.unwrap_or_else(|| unscripted(source))
    }
}

fn unscripted(source: SourceName) -> Reply {
    Err(CatalogError::other(format!("no scripted reply for {}", source)))
}

/// In-memory [`CatalogClient`] with scripted, optionally delayed replies.
///
/// # Example
///
/// ```ignore
/// let catalog = MockCatalogClient::new();
/// catalog.set_list(SourceName::Popular, vec![movie]);
/// catalog.fail(SourceName::Upcoming, CatalogError::other("offline"));
/// catalog.set_delay(SourceName::NowPlaying, Duration::from_millis(300));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockCatalogClient {
    script: Arc<Mutex<Script>>,
}

impl MockCatalogClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply for `source`.
    pub fn push_reply(&self, source: SourceName, reply: Result<SourceItems, CatalogError>) {
        let mut script = self.script.lock().unwrap();
        script.replies.entry(source).or_default().push_back(reply);
    }

    /// Replace every queued reply for `source` with a single list.
    pub fn set_list(&self, source: SourceName, movies: Vec<MovieSummary>) {
        self.replace(source, Ok(SourceItems::List(movies)));
    }

    pub fn set_detail(&self, detail: MovieDetail) {
        self.replace(SourceName::Details, Ok(SourceItems::Detail(detail)));
    }

    /// Make every call for `source` fail with `error`.
    pub fn fail(&self, source: SourceName, error: CatalogError) {
        self.replace(source, Err(error));
    }

    /// Delay every call for `source` by `delay`.
    pub fn set_delay(&self, source: SourceName, delay: Duration) {
        let mut script = self.script.lock().unwrap();
        script.delays.insert(source, delay);
    }

    /// Block the next call for `source` until the returned handle is
    /// notified. Notifying before the call arrives lets it pass straight
    /// through.
    pub fn hold_next(&self, source: SourceName) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        let mut script = self.script.lock().unwrap();
        script
            .holds
            .entry(source)
            .or_default()
            .push_back(Arc::clone(&notify));
        notify
    }

    /// Number of calls made for `source` so far.
    pub fn calls(&self, source: SourceName) -> usize {
        let script = self.script.lock().unwrap();
        script.calls.get(&source).copied().unwrap_or(0)
    }

    /// Ids requested from the details endpoint, in call order.
    pub fn detail_ids(&self) -> Vec<MovieId> {
        self.script.lock().unwrap().detail_ids.clone()
    }

    fn replace(&self, source: SourceName, reply: Reply) {
        let mut script = self.script.lock().unwrap();
        script.replies.insert(source, VecDeque::from([reply]));
    }

    async fn call(&self, source: SourceName) -> Reply {
        let (reply, delay, hold) = {
            let mut script = self.script.lock().unwrap();
            *script.calls.entry(source).or_default() += 1;
            let hold = script.holds.get_mut(&source).and_then(VecDeque::pop_front);
            let delay = script.delays.get(&source).copied();
            (script.next_reply(source), delay, hold)
        };

        if let Some(hold) = hold {
            hold.notified().await;
        }
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        reply
    }

    async fn call_list(&self, source: SourceName) -> Result<Vec<MovieSummary>, CatalogError> {
        match self.call(source).await? {
            SourceItems::List(movies) => Ok(movies),
            SourceItems::Detail(_) => Err(CatalogError::InvalidResponse {
                message: format!("{} scripted with a detail record", source),
            }),
        }
    }
}

#[async_trait]
impl CatalogClient for MockCatalogClient {
    async fn now_playing(&self) -> Result<Vec<MovieSummary>, CatalogError> {
        self.call_list(SourceName::NowPlaying).await
    }

    async fn popular(&self) -> Result<Vec<MovieSummary>, CatalogError> {
        self.call_list(SourceName::Popular).await
    }

    async fn upcoming(&self) -> Result<Vec<MovieSummary>, CatalogError> {
        self.call_list(SourceName::Upcoming).await
    }

    async fn details(&self, id: MovieId) -> Result<MovieDetail, CatalogError> {
        self.script.lock().unwrap().detail_ids.push(id);
        match self.call(SourceName::Details).await? {
            SourceItems::Detail(detail) => Ok(detail),
            SourceItems::List(_) => Err(CatalogError::InvalidResponse {
                message: "details scripted with a list".to_string(),
            }),
        }
    }
}
