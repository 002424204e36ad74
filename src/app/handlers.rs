//! Key, mouse and async message handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use super::{App, AppMessage, DragStart, Route, Screen, ScreenKey};
use crate::orchestrator::CommitOutcome;

/// Minimum horizontal drag, in columns, that counts as a swipe.
pub const SWIPE_MIN_COLUMNS: u16 = 3;

impl App {
    /// Apply a message from a background task.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::LoadSettled { target, settled } => {
                let outcome = match target {
                    ScreenKey::Movies => self.movies.settle(settled, self.tick_count),
                    ScreenKey::Details { .. } => {
                        match self.details.iter_mut().find(|screen| screen.key() == target) {
                            Some(screen) => screen.settle(settled),
                            None => {
                                tracing::debug!(%target, "settlement for closed screen dropped");
                                return;
                            }
                        }
                    }
                };
                if outcome == CommitOutcome::Stale {
                    tracing::debug!(%target, "stale settlement ignored");
                }
            }
            AppMessage::OpenFailed { url, error } => {
                tracing::warn!(%url, %error, "failed to open image");
                self.status = Some(format!("Couldn't open {}: {}", url, error));
            }
        }
    }

    /// Handle a key press.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        self.mark_dirty();
        self.status = None;

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit();
                return;
            }
            KeyCode::Char('q') => {
                self.quit();
                return;
            }
            KeyCode::Char('r') | KeyCode::F(5) => {
                self.refresh_current();
                return;
            }
            KeyCode::Char('o') => {
                self.open_focused_image();
                return;
            }
            KeyCode::Esc | KeyCode::Backspace => {
                self.navigate(Route::Back);
                return;
            }
            _ => {}
        }

        if self.screen() != Screen::Movies {
            return;
        }

        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.move_left(),
            KeyCode::Right | KeyCode::Char('l') => self.move_right(),
            KeyCode::Tab | KeyCode::BackTab => self.cycle_focus(),
            KeyCode::Enter => self.open_focused(),
            _ => {}
        }
    }

    /// Handle mouse input: horizontal drags and scrolls over the carousel
    /// are swipes.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if self.screen() != Screen::Movies {
            self.drag_start = None;
            return;
        }

        let over_carousel = contains(self.movies_layout.carousel, mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if over_carousel => {
                self.drag_start = Some(DragStart {
                    column: mouse.column,
                    row: mouse.row,
                });
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(start) = self.drag_start.take() {
                    self.finish_swipe(start, mouse.column);
                }
            }
            MouseEventKind::ScrollRight if over_carousel => self.swipe(1),
            MouseEventKind::ScrollLeft if over_carousel => self.swipe(-1),
            _ => {}
        }
    }

    fn finish_swipe(&mut self, start: DragStart, end_column: u16) {
        let delta = i32::from(end_column) - i32::from(start.column);
        if delta.unsigned_abs() < u32::from(SWIPE_MIN_COLUMNS) {
            return;
        }
        // Dragging the slide to the left reveals the next one.
        self.swipe(if delta < 0 { 1 } else { -1 });
    }

    fn swipe(&mut self, step: isize) {
        let tick = self.tick_count;
        if let Some(carousel) = self.movies.carousel.as_mut() {
            let target = carousel.index() as isize + step;
            carousel.navigate_to(target, tick);
            tracing::debug!(index = carousel.index(), "carousel swiped");
            self.mark_dirty();
        }
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    area.contains(Position { x: column, y: row })
}
