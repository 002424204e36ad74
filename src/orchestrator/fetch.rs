//! Fan-out of a source set and the joint settlement of its calls.

use futures::future::{join_all, BoxFuture};
use futures::FutureExt;
use tokio::task::JoinHandle;

use super::generation::RequestGeneration;
use super::source::{SourceName, SourceSet};
use super::view_state::SourceItems;
use crate::error::CatalogError;

/// How one source call ended.
#[derive(Debug, Clone)]
pub struct SourceOutcome {
    pub source: SourceName,
    pub result: Result<SourceItems, CatalogError>,
}

impl SourceOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Every outcome of one load, tagged with the load's generation.
#[derive(Debug, Clone)]
pub struct SettledLoad {
    pub generation: RequestGeneration,
    pub outcomes: Vec<SourceOutcome>,
}

/// A load whose calls have been issued but not yet jointly awaited.
///
/// Settlement completes only once every call has completed, successfully
/// or not; one slow or failing source never short-circuits the others.
pub struct PendingLoad {
    generation: RequestGeneration,
    joined: BoxFuture<'static, Vec<SourceOutcome>>,
}

impl PendingLoad {
    /// Invoke every call of `sources` back-to-back and join them.
    pub(crate) fn fan_out(generation: RequestGeneration, sources: &SourceSet) -> Self {
        let calls: Vec<_> = sources
            .iter()
            .map(|(source, call)| {
                let future = call.invoke();
                async move {
                    let result = future.await;
                    match &result {
                        Ok(_) => tracing::debug!(%generation, %source, "source settled"),
                        Err(err) => tracing::warn!(
                            %generation,
                            %source,
                            code = err.error_code(),
                            category = %err.category(),
                            retryable = err.is_retryable(),
                            "source failed: {}",
                            err
                        ),
                    }
                    SourceOutcome { source, result }
                }
            })
            .collect();

        Self {
            generation,
            joined: join_all(calls).boxed(),
        }
    }

    pub fn generation(&self) -> RequestGeneration {
        self.generation
    }

    /// Wait for every call of this load to complete.
    pub async fn settle(self) -> SettledLoad {
        let outcomes = self.joined.await;
        SettledLoad {
            generation: self.generation,
            outcomes,
        }
    }

    /// Settle on the tokio runtime and hand the result to `deliver`.
    ///
    /// The render loop never waits on a load; it learns about the
    /// settlement through whatever `deliver` does, typically a channel send.
    pub fn spawn<F>(self, deliver: F) -> JoinHandle<()>
    where
        F: FnOnce(SettledLoad) + Send + 'static,
    {
        tokio::spawn(async move {
            let settled = self.settle().await;
            deliver(settled);
        })
    }
}

impl std::fmt::Debug for PendingLoad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingLoad")
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MovieSummary;
    use crate::orchestrator::SourceCall;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_settles_only_after_slowest_call() {
        let sources = SourceSet::new()
            .with(
                SourceName::NowPlaying,
                SourceCall::new(|| async { Ok(SourceItems::List(vec![])) }),
            )
            .with(
                SourceName::Popular,
                SourceCall::new(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    Ok(SourceItems::List(vec![MovieSummary::new(1, "A", "", 1.0)]))
                }),
            );

        let pending = PendingLoad::fan_out(RequestGeneration::new(1), &sources);
        let started = tokio::time::Instant::now();
        let settled = pending.settle().await;

        assert!(started.elapsed() >= Duration::from_secs(5));
        assert_eq!(settled.outcomes.len(), 2);
        assert!(settled.outcomes.iter().all(SourceOutcome::is_success));
    }

    #[tokio::test]
    async fn test_failure_does_not_block_other_sources() {
        let sources = SourceSet::new()
            .with(
                SourceName::NowPlaying,
                SourceCall::new(|| async { Err(CatalogError::other("network")) }),
            )
            .with(
                SourceName::Upcoming,
                SourceCall::new(|| async { Ok(SourceItems::List(vec![])) }),
            );

        let settled = PendingLoad::fan_out(RequestGeneration::new(3), &sources)
            .settle()
            .await;

        assert_eq!(settled.generation, RequestGeneration::new(3));
        assert_eq!(settled.outcomes[0].source, SourceName::NowPlaying);
        assert!(!settled.outcomes[0].is_success());
        assert_eq!(settled.outcomes[1].source, SourceName::Upcoming);
        assert!(settled.outcomes[1].is_success());
    }

    #[tokio::test(start_paused = true)]
    async fn test_calls_run_concurrently() {
        let running = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));
        let call = {
            let running = running.clone();
            let peak = peak.clone();
            SourceCall::new(move || {
                let running = running.clone();
                let peak = peak.clone();
                async move {
                    let now = running.fetch_add(1, Ordering::SeqCst) + 1;
                    peak.fetch_max(now, Ordering::SeqCst);
                    tokio::time::sleep(Duration::from_secs(1)).await;
                    running.fetch_sub(1, Ordering::SeqCst);
                    Ok(SourceItems::List(vec![]))
                }
            })
        };
        let sources = SourceSet::new()
            .with(SourceName::NowPlaying, call.clone())
            .with(SourceName::Popular, call.clone())
            .with(SourceName::Upcoming, call);

        PendingLoad::fan_out(RequestGeneration::new(1), &sources)
            .settle()
            .await;

        assert_eq!(peak.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_spawn_delivers_settlement() {
        let sources = SourceSet::new().with(
            SourceName::Popular,
            SourceCall::new(|| async { Ok(SourceItems::List(vec![])) }),
        );
        let (tx, rx) = tokio::sync::oneshot::channel();
        PendingLoad::fan_out(RequestGeneration::new(9), &sources).spawn(move |settled| {
            let _ = tx.send(settled.generation);
        });
        assert_eq!(rx.await.unwrap(), RequestGeneration::new(9));
    }
}
