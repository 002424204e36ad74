//! Per-screen state. Each screen owns its orchestrator and gate; nothing
//! is shared between screens.

use std::sync::Arc;

use super::messages::ScreenKey;
use super::types::Focus;
use crate::carousel::CarouselController;
use crate::gate::ReadinessGate;
use crate::models::{MovieDetail, MovieId, MovieSummary};
use crate::orchestrator::{
    CommitOutcome, DataOrchestrator, SettledLoad, SourceName, SourceSet, ViewState,
};
use crate::traits::CatalogClient;

/// The listing screen: carousel of now-playing movies, popular row and
/// upcoming list.
#[derive(Debug)]
pub struct MoviesScreen {
    pub orchestrator: DataOrchestrator,
    pub gate: ReadinessGate,
    /// Mounted once now-playing movies are known
    pub carousel: Option<CarouselController>,
    pub carousel_interval_ticks: u64,
    pub focus: Focus,
    /// Selected poster in the popular row
    pub popular_index: usize,
}

impl MoviesScreen {
    pub fn new(catalog: Arc<dyn CatalogClient>, carousel_interval_ticks: u64) -> Self {
        Self {
            orchestrator: DataOrchestrator::new(SourceSet::listing(catalog)),
            gate: ReadinessGate::new(),
            carousel: None,
            carousel_interval_ticks,
            focus: Focus::default(),
            popular_index: 0,
        }
    }

    pub fn key(&self) -> ScreenKey {
        ScreenKey::Movies
    }

    pub fn view(&self) -> Arc<ViewState> {
        self.orchestrator.view_state()
    }

    /// Commit a settled load and keep the carousel and popular selection
    /// consistent with the new snapshot.
    pub fn settle(&mut self, settled: SettledLoad, current_tick: u64) -> CommitOutcome {
        let outcome = self.gate.settle(&mut self.orchestrator, settled);
        if outcome == CommitOutcome::Committed {
            self.sync_with_view(current_tick);
        }
        outcome
    }

    /// Mount the carousel for the current slide count. A refresh that
    /// changes the number of slides remounts it; otherwise the running
    /// carousel keeps its position and timer.
    fn sync_with_view(&mut self, current_tick: u64) {
        let view = self.view();
        let slides = view.list(SourceName::NowPlaying).len();
        let remount = self
            .carousel
            .as_ref()
            .map(|carousel| carousel.length() != slides)
            .unwrap_or(true);
        if remount {
            tracing::debug!(slides, "carousel mounted");
            self.carousel = Some(CarouselController::started_at(
                slides,
                self.carousel_interval_ticks,
                current_tick,
            ));
        }

        let popular = view.list(SourceName::Popular).len();
        self.popular_index = self.popular_index.min(popular.saturating_sub(1));
    }

    pub fn carousel_index(&self) -> usize {
        self.carousel
            .as_ref()
            .map(CarouselController::index)
            .unwrap_or(0)
    }

    /// The movie the user is pointing at in the focused section.
    pub fn focused_movie(&self) -> Option<MovieSummary> {
        let view = self.view();
        match self.focus {
            Focus::Carousel => view
                .list(SourceName::NowPlaying)
                .get(self.carousel_index())
                .cloned(),
            Focus::Popular => view.list(SourceName::Popular).get(self.popular_index).cloned(),
        }
    }

    pub fn select_next_popular(&mut self) {
        let count = self.view().list(SourceName::Popular).len();
        if self.popular_index + 1 < count {
            self.popular_index += 1;
        }
    }

    pub fn select_previous_popular(&mut self) {
        self.popular_index = self.popular_index.saturating_sub(1);
    }
}

/// A details screen for one movie.
#[derive(Debug)]
pub struct DetailsScreen {
    pub movie: MovieId,
    pub serial: u64,
    pub orchestrator: DataOrchestrator,
    pub gate: ReadinessGate,
}

impl DetailsScreen {
    pub fn new(catalog: Arc<dyn CatalogClient>, movie: MovieId, serial: u64) -> Self {
        Self {
            movie,
            serial,
            orchestrator: DataOrchestrator::new(SourceSet::details(catalog, movie)),
            gate: ReadinessGate::new(),
        }
    }

    pub fn key(&self) -> ScreenKey {
        ScreenKey::Details {
            movie: self.movie,
            serial: self.serial,
        }
    }

    pub fn view(&self) -> Arc<ViewState> {
        self.orchestrator.view_state()
    }

    pub fn detail(&self) -> Option<MovieDetail> {
        self.view().detail().cloned()
    }

    pub fn settle(&mut self, settled: SettledLoad) -> CommitOutcome {
        self.gate.settle(&mut self.orchestrator, settled)
    }
}
