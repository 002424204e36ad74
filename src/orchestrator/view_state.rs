//! Immutable view-state snapshots.
//!
//! A [`ViewState`] is never edited in place. Each settled load produces a
//! brand-new snapshot from the previous one plus the load's outcomes, and
//! the orchestrator swaps the `Arc` wholesale.

use std::collections::BTreeMap;

use super::fetch::SettledLoad;
use super::generation::RequestGeneration;
use super::source::SourceName;
use crate::models::{MovieDetail, MovieSummary};

/// The payload of one source.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceItems {
    List(Vec<MovieSummary>),
    Detail(MovieDetail),
}

impl SourceItems {
    pub fn as_list(&self) -> Option<&[MovieSummary]> {
        match self {
            SourceItems::List(movies) => Some(movies),
            SourceItems::Detail(_) => None,
        }
    }

    pub fn as_detail(&self) -> Option<&MovieDetail> {
        match self {
            SourceItems::Detail(detail) => Some(detail),
            SourceItems::List(_) => None,
        }
    }
}

/// Which sources of a load failed.
///
/// All failures of a load are listed, in source-set order. The cause of
/// each failure is logged where the call failed and is not kept here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorInfo {
    /// Some, but not all, sources failed.
    SourceFetchFailure { failed: Vec<SourceName> },
    /// Every requested source failed.
    AllSourcesFailed { failed: Vec<SourceName> },
}

impl ErrorInfo {
    /// Classify the failures of a load over `requested` sources.
    ///
    /// Returns `None` when nothing failed.
    pub fn from_failures(failed: Vec<SourceName>, requested: usize) -> Option<Self> {
        if failed.is_empty() {
            None
        } else if failed.len() >= requested {
            Some(ErrorInfo::AllSourcesFailed { failed })
        } else {
            Some(ErrorInfo::SourceFetchFailure { failed })
        }
    }

    pub fn failed(&self) -> &[SourceName] {
        match self {
            ErrorInfo::SourceFetchFailure { failed } | ErrorInfo::AllSourcesFailed { failed } => {
                failed
            }
        }
    }

    pub fn references(&self, source: SourceName) -> bool {
        self.failed().contains(&source)
    }

    pub fn is_total(&self) -> bool {
        matches!(self, ErrorInfo::AllSourcesFailed { .. })
    }

    /// Short banner text for the screen.
    pub fn user_message(&self) -> String {
        let names = self
            .failed()
            .iter()
            .map(|source| source.title())
            .collect::<Vec<_>>()
            .join(", ");
        match self {
            ErrorInfo::SourceFetchFailure { .. } => {
                format!("Couldn't load {}. Press r to refresh.", names)
            }
            ErrorInfo::AllSourcesFailed { .. } => {
                "Couldn't reach the movie catalog. Press r to refresh.".to_string()
            }
        }
    }
}

/// One coherent snapshot of a screen's data.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    ready: bool,
    generation: RequestGeneration,
    items: BTreeMap<SourceName, SourceItems>,
    error: Option<ErrorInfo>,
}

impl ViewState {
    /// The snapshot a screen starts with, before any load settles.
    pub fn initial() -> Self {
        Self {
            ready: false,
            generation: RequestGeneration::ZERO,
            items: BTreeMap::new(),
            error: None,
        }
    }

    /// Build the snapshot that follows `previous` once `settled` is in.
    ///
    /// Successful sources replace their items. A failed source keeps its
    /// last-known-good items from `previous` when there are any, and is
    /// otherwise absent. The result is always ready.
    pub fn settle(previous: &ViewState, settled: SettledLoad) -> Self {
        let requested = settled.outcomes.len();
        let mut items = BTreeMap::new();
        let mut failed = Vec::new();

        for outcome in settled.outcomes {
            match outcome.result {
                Ok(payload) => {
                    items.insert(outcome.source, payload);
                }
                Err(_) => {
                    failed.push(outcome.source);
                    if let Some(last_good) = previous.items.get(&outcome.source) {
                        items.insert(outcome.source, last_good.clone());
                    }
                }
            }
        }

        Self {
            ready: true,
            generation: settled.generation,
            items,
            error: ErrorInfo::from_failures(failed, requested),
        }
    }

    pub fn ready(&self) -> bool {
        self.ready
    }

    /// Generation of the load this snapshot came from.
    pub fn generation(&self) -> RequestGeneration {
        self.generation
    }

    pub fn error(&self) -> Option<&ErrorInfo> {
        self.error.as_ref()
    }

    pub fn items(&self) -> &BTreeMap<SourceName, SourceItems> {
        &self.items
    }

    pub fn has(&self, source: SourceName) -> bool {
        self.items.contains_key(&source)
    }

    /// Whether `source` failed in the load that produced this snapshot.
    pub fn failed(&self, source: SourceName) -> bool {
        self.error
            .as_ref()
            .map(|error| error.references(source))
            .unwrap_or(false)
    }

    /// Movies of a list source; empty when the source is absent.
    pub fn list(&self, source: SourceName) -> &[MovieSummary] {
        self.items
            .get(&source)
            .and_then(SourceItems::as_list)
            .unwrap_or(&[])
    }

    /// The detail record, if this is a details snapshot that has one.
    pub fn detail(&self) -> Option<&MovieDetail> {
        self.items
            .get(&SourceName::Details)
            .and_then(SourceItems::as_detail)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::initial()
    }
}
