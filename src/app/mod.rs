//! Application state and logic for the TUI.
//!
//! - [`App`] - screens, navigation stack and the async message channel
//! - [`Screen`] - which screen is on top
//! - [`Focus`] - which movies-screen section takes input
//! - [`AppMessage`] - messages from background loads
//! - [`tick_interval`] - the clock the main loop ticks the app with

mod handlers;
mod messages;
mod navigation;
mod screens;
mod types;

pub use messages::{AppMessage, ScreenKey};
pub use screens::{DetailsScreen, MoviesScreen};
pub use types::{DragStart, Focus, MoviesLayout, Route, Screen};

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Interval, MissedTickBehavior};

use crate::adapters::ImageResolver;
use crate::config::AppConfig;
use crate::orchestrator::PendingLoad;
use crate::traits::CatalogClient;

/// The clock behind [`App::tick`].
///
/// The timer is created once and keeps its own schedule, so input that
/// wins a `select!` race does not push the next tick back. Ticks missed
/// while the loop was busy are skipped, not replayed in a burst.
pub fn tick_interval(rate: Duration) -> Interval {
    let mut ticker = tokio::time::interval(rate);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    ticker
}

/// Main application state.
pub struct App {
    /// Catalog shared by every screen's source calls
    pub catalog: Arc<dyn CatalogClient>,
    pub images: ImageResolver,
    /// The listing screen, always at the bottom of the stack
    pub movies: MoviesScreen,
    /// Details screens pushed on top of the listing
    pub details: Vec<DetailsScreen>,
    next_serial: u64,
    pub should_quit: bool,
    /// Tick counter for the carousel timer and spinner
    pub tick_count: u64,
    /// Dirty flag: set on state changes, cleared after each draw
    pub needs_redraw: bool,
    /// Receiver for async messages; the main loop takes it for `select!`
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    pub terminal_width: u16,
    pub terminal_height: u16,
    /// Regions of the movies screen from the last render
    pub movies_layout: MoviesLayout,
    pub drag_start: Option<DragStart>,
    /// One-line notice shown in the footer until the next key press
    pub status: Option<String>,
}

impl App {
    pub fn new(
        catalog: Arc<dyn CatalogClient>,
        images: ImageResolver,
        carousel_interval_ticks: u64,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            movies: MoviesScreen::new(Arc::clone(&catalog), carousel_interval_ticks),
            catalog,
            images,
            details: Vec::new(),
            next_serial: 0,
            should_quit: false,
            tick_count: 0,
            needs_redraw: true,
            message_rx: Some(message_rx),
            message_tx,
            terminal_width: 80,
            terminal_height: 24,
            movies_layout: MoviesLayout::default(),
            drag_start: None,
            status: None,
        }
    }

    /// Build the app from configuration around an existing catalog.
    pub fn from_config(config: &AppConfig, catalog: Arc<dyn CatalogClient>) -> Self {
        let images = ImageResolver::new(&config.image_base_url, &config.image_size);
        Self::new(catalog, images, config.carousel_interval_ticks())
    }

    /// Issue the listing's initial load and, if given, open a movie's
    /// details on top. Must run inside a tokio runtime.
    pub fn start(&mut self, movie: Option<crate::models::MovieId>) {
        if let Some(pending) = self.movies.gate.enter(&mut self.movies.orchestrator) {
            self.dispatch(ScreenKey::Movies, pending);
        }
        if let Some(movie) = movie {
            self.navigate(Route::Details(movie));
        }
    }

    /// Which screen is on top.
    pub fn screen(&self) -> Screen {
        match self.details.last() {
            Some(details) => Screen::Details(details.movie),
            None => Screen::Movies,
        }
    }

    pub fn current_details(&self) -> Option<&DetailsScreen> {
        self.details.last()
    }

    /// Run `pending` in the background and post its settlement back to
    /// the UI loop tagged with `target`.
    pub(crate) fn dispatch(&self, target: ScreenKey, pending: PendingLoad) {
        let tx = self.message_tx.clone();
        tracing::debug!(%target, generation = %pending.generation(), "dispatching load");
        pending.spawn(move |settled| {
            if tx.send(AppMessage::LoadSettled { target, settled }).is_err() {
                tracing::debug!(%target, "app closed before load settled");
            }
        });
    }

    /// Advance the tick clock: drives the carousel timer and keeps
    /// spinners animating while something is loading.
    pub fn tick(&mut self) {
        self.tick_count += 1;

        if self.screen() == Screen::Movies {
            let tick = self.tick_count;
            if let Some(carousel) = self.movies.carousel.as_mut() {
                if carousel.update(tick) {
                    self.mark_dirty();
                }
            }
        }

        if self.is_busy() {
            self.mark_dirty();
        }
    }

    /// Whether the visible screen is loading or refreshing.
    pub fn is_busy(&self) -> bool {
        let gate = match self.details.last() {
            Some(details) => &details.gate,
            None => &self.movies.gate,
        };
        gate.shows_spinner() || gate.is_refreshing()
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.mark_dirty();
    }
}
