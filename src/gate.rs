//! Readiness gate: spinner until the first load settles, content after.
//!
//! ```text
//!            enter()                  on_commit(ready)
//!  Loading ───────────▶ (load issued) ───────────────▶ Ready
//!                                                    │    ▲
//!                                         refresh()  ▼    │ on_commit(ready)
//!                                                 Refreshing
//! ```
//!
//! `Refreshing` keeps the already rendered content on screen; only the
//! refresh indicator changes. The gate never goes back to `Loading` and
//! never retries on its own.

use crate::orchestrator::{CommitOutcome, DataOrchestrator, PendingLoad, ViewState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
    #[default]
    Loading,
    Ready,
    Refreshing,
}

/// Loading/ready state machine wrapped around one screen's content.
#[derive(Debug, Default)]
pub struct ReadinessGate {
    state: GateState,
    entered: bool,
}

impl ReadinessGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// Issue the screen's initial load. Only the first call does anything.
    pub fn enter(&mut self, orchestrator: &mut DataOrchestrator) -> Option<PendingLoad> {
        if self.entered {
            return None;
        }
        self.entered = true;
        Some(orchestrator.load())
    }

    /// User-initiated refresh.
    ///
    /// Ignored while the initial load is still pending; otherwise moves to
    /// `Refreshing` without hiding content.
    pub fn refresh(&mut self, orchestrator: &mut DataOrchestrator) -> Option<PendingLoad> {
        match self.state {
            GateState::Loading => {
                tracing::debug!("refresh ignored while loading");
                None
            }
            GateState::Ready | GateState::Refreshing => {
                self.state = GateState::Refreshing;
                Some(orchestrator.refresh())
            }
        }
    }

    /// React to a snapshot the orchestrator just committed.
    ///
    /// Any ready snapshot ends `Loading` or `Refreshing`, whether or not it
    /// carries an error.
    pub fn on_commit(&mut self, view: &ViewState) {
        if view.ready() && self.state != GateState::Ready {
            tracing::debug!(from = ?self.state, generation = %view.generation(), "gate ready");
            self.state = GateState::Ready;
        }
    }

    /// Commit `settled` through `orchestrator` and update the gate.
    ///
    /// Stale settlements leave the gate where it is, so a refresh that was
    /// superseded keeps the refresh indicator up until the newest one lands.
    pub fn settle(
        &mut self,
        orchestrator: &mut DataOrchestrator,
        settled: crate::orchestrator::SettledLoad,
    ) -> CommitOutcome {
        let outcome = orchestrator.commit(settled);
        if outcome == CommitOutcome::Committed {
            self.on_commit(&orchestrator.view_state());
        }
        outcome
    }

    pub fn shows_spinner(&self) -> bool {
        self.state == GateState::Loading
    }

    pub fn shows_content(&self) -> bool {
        matches!(self.state, GateState::Ready | GateState::Refreshing)
    }

    pub fn is_refreshing(&self) -> bool {
        self.state == GateState::Refreshing
    }
}
