//! Type definitions for the application state.

use ratatui::layout::Rect;

use crate::models::MovieId;

/// Which screen is on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Movies,
    Details(MovieId),
}

/// Which section of the movies screen takes keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Carousel,
    Popular,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Carousel => Focus::Popular,
            Focus::Popular => Focus::Carousel,
        }
    }
}

/// Where [`super::App::navigate`] should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Details(MovieId),
    Back,
}

/// Screen regions from the last render, used to hit-test mouse events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoviesLayout {
    pub carousel: Rect,
    pub popular: Rect,
}

/// A mouse drag in progress over the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragStart {
    pub column: u16,
    pub row: u16,
}
