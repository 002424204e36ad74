//! Navigation, refresh and focus for the App.

use super::{App, DetailsScreen, Focus, Route, Screen, ScreenKey};
use crate::models::MovieId;

impl App {
    /// Go somewhere. Fire-and-forget: any load the destination needs runs
    /// in the background.
    pub fn navigate(&mut self, route: Route) {
        match route {
            Route::Details(movie) => self.open_details(movie),
            Route::Back => self.back(),
        }
        self.mark_dirty();
    }

    fn open_details(&mut self, movie: MovieId) {
        self.next_serial += 1;
        let mut screen = DetailsScreen::new(self.catalog.clone(), movie, self.next_serial);
        tracing::info!(movie, serial = screen.serial, "opening details");

        if let Some(carousel) = self.movies.carousel.as_mut() {
            carousel.pause();
        }
        let pending = screen.gate.enter(&mut screen.orchestrator);
        let key = screen.key();
        self.details.push(screen);
        if let Some(pending) = pending {
            self.dispatch(key, pending);
        }
    }

    fn back(&mut self) {
        let Some(closed) = self.details.pop() else {
            return;
        };
        tracing::info!(movie = closed.movie, "closing details");
        if self.details.is_empty() {
            let tick = self.tick_count;
            if let Some(carousel) = self.movies.carousel.as_mut() {
                carousel.resume(tick);
            }
        }
    }

    /// Pull-to-refresh for the visible screen.
    pub fn refresh_current(&mut self) {
        let (key, pending) = match self.details.last_mut() {
            Some(details) => (details.key(), details.gate.refresh(&mut details.orchestrator)),
            None => (
                ScreenKey::Movies,
                self.movies.gate.refresh(&mut self.movies.orchestrator),
            ),
        };
        if let Some(pending) = pending {
            tracing::info!(%key, "refresh requested");
            self.dispatch(key, pending);
            self.mark_dirty();
        }
    }

    pub fn cycle_focus(&mut self) {
        if self.screen() == Screen::Movies {
            self.movies.focus = self.movies.focus.toggle();
            self.mark_dirty();
        }
    }

    /// Left in the focused section: previous slide or previous poster.
    pub fn move_left(&mut self) {
        let tick = self.tick_count;
        match self.movies.focus {
            Focus::Carousel => {
                if let Some(carousel) = self.movies.carousel.as_mut() {
                    carousel.previous(tick);
                }
            }
            Focus::Popular => self.movies.select_previous_popular(),
        }
        self.mark_dirty();
    }

    /// Right in the focused section: next slide or next poster.
    pub fn move_right(&mut self) {
        let tick = self.tick_count;
        match self.movies.focus {
            Focus::Carousel => {
                if let Some(carousel) = self.movies.carousel.as_mut() {
                    carousel.next(tick);
                }
            }
            Focus::Popular => self.movies.select_next_popular(),
        }
        self.mark_dirty();
    }

    /// Open details for the focused slide or poster.
    pub fn open_focused(&mut self) {
        if self.screen() != Screen::Movies {
            return;
        }
        if let Some(movie) = self.movies.focused_movie() {
            self.navigate(Route::Details(movie.id));
        }
    }

    /// Backdrop (or poster) URL of whatever the user is looking at.
    pub fn focused_image_url(&self) -> Option<String> {
        let path = match self.details.last() {
            Some(details) => details.detail()?.summary.backdrop_or_poster().to_string(),
            None => self.movies.focused_movie()?.backdrop_or_poster().to_string(),
        };
        let url = self.images.resolve_image_uri(&path);
        (!url.is_empty()).then_some(url)
    }

    /// Open the focused image in the system browser.
    pub fn open_focused_image(&mut self) {
        let Some(url) = self.focused_image_url() else {
            self.status = Some("No image for this movie".to_string());
            self.mark_dirty();
            return;
        };

        tracing::info!(%url, "opening image");
        let tx = self.message_tx.clone();
        tokio::task::spawn_blocking(move || {
            if let Err(err) = open::that(&url) {
                let _ = tx.send(super::AppMessage::OpenFailed {
                    url,
                    error: err.to_string(),
                });
            }
        });
    }
}
