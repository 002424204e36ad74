//! Screen data orchestration.
//!
//! A [`DataOrchestrator`] owns one screen's [`SourceSet`] and its current
//! [`ViewState`]. Loading is split in three steps so the render loop never
//! waits on the network:
//!
//! ```text
//! load()/refresh()      settle().await          commit()
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │ next gen,    │ ──▶ │ join all     │ ──▶ │ stale gen? drop  │
//! │ fan out calls│     │ source calls │     │ else new snapshot│
//! └──────────────┘     └──────────────┘     └──────────────────┘
//! ```
//!
//! Ordering between overlapping loads is decided at commit time: only the
//! most recently issued generation may replace the snapshot. A slow first
//! load can therefore never clobber a faster refresh that followed it.
//! In-flight calls are not cancelled; their results are simply dropped.

mod fetch;
mod generation;
mod source;
mod view_state;

pub use fetch::{PendingLoad, SettledLoad, SourceOutcome};
pub use generation::{GenerationCounter, RequestGeneration};
pub use source::{SourceCall, SourceFuture, SourceName, SourceSet};
pub use view_state::{ErrorInfo, SourceItems, ViewState};

use std::sync::Arc;

/// Result of offering a settled load to the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The load was the latest one; its snapshot is now current.
    Committed,
    /// A newer load was issued since; the result was dropped.
    Stale,
}

/// Issues concurrent source calls for one screen and merges their results
/// into immutable [`ViewState`] snapshots.
#[derive(Debug)]
pub struct DataOrchestrator {
    sources: SourceSet,
    generations: GenerationCounter,
    view: Arc<ViewState>,
}

impl DataOrchestrator {
    pub fn new(sources: SourceSet) -> Self {
        Self {
            sources,
            generations: GenerationCounter::new(),
            view: Arc::new(ViewState::initial()),
        }
    }

    pub fn sources(&self) -> &SourceSet {
        &self.sources
    }

    /// The current snapshot.
    pub fn view_state(&self) -> Arc<ViewState> {
        Arc::clone(&self.view)
    }

    /// The most recently issued generation.
    pub fn generation(&self) -> RequestGeneration {
        self.generations.latest()
    }

    /// Whether the latest issued load has not been committed yet.
    pub fn is_loading(&self) -> bool {
        self.view.generation() < self.generations.latest()
    }

    /// Issue a new generation and fan out every source call.
    pub fn load(&mut self) -> PendingLoad {
        let generation = self.generations.next();
        tracing::debug!(%generation, sources = self.sources.len(), "load issued");
        PendingLoad::fan_out(generation, &self.sources)
    }

    /// Re-run every source call under a new generation.
    ///
    /// The current snapshot, including `ready`, stays untouched until the
    /// refresh is committed; any load still in flight becomes stale.
    pub fn refresh(&mut self) -> PendingLoad {
        let superseded = self.is_loading();
        let generation = self.generations.next();
        tracing::info!(%generation, superseded, "refresh issued");
        PendingLoad::fan_out(generation, &self.sources)
    }

    /// Offer a settled load. Only the latest generation is committed.
    pub fn commit(&mut self, settled: SettledLoad) -> CommitOutcome {
        if !self.generations.is_current(settled.generation) {
            tracing::debug!(
                stale = %settled.generation,
                current = %self.generations.latest(),
                "stale result discarded"
            );
            return CommitOutcome::Stale;
        }

        let next = ViewState::settle(&self.view, settled);
        match next.error() {
            Some(error) => tracing::info!(
                generation = %next.generation(),
                failed = ?error.failed(),
                "view state committed with failures"
            ),
            None => tracing::debug!(generation = %next.generation(), "view state committed"),
        }
        self.view = Arc::new(next);
        CommitOutcome::Committed
    }

    /// Load, wait for every source, and commit. Returns the snapshot that
    /// is current afterwards.
    pub async fn load_now(&mut self) -> Arc<ViewState> {
        let settled = self.load().settle().await;
        self.commit(settled);
        self.view_state()
    }
}
