//! Terminal rendering.
//!
//! Every screen is drawn from its current `ViewState` snapshot; rendering
//! never mutates screen data. The only state written back is the movies
//! layout, which mouse handling uses to hit-test the carousel.

mod details;
mod gate;
mod helpers;
mod movies;
mod theme;

pub use helpers::{clip_lines, spinner_frame, truncate_to_width, SPINNER_FRAMES};
pub use theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_PROGRESS};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Screen};
use details::render_details_screen;
use movies::render_movies_screen;

/// Render the screen on top of the navigation stack.
pub fn render(frame: &mut Frame, app: &mut App) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header, app);
    if let Some(screen) = app.details.last() {
        render_details_screen(frame, body, screen, &app.images, app.tick_count);
    } else {
        render_movies_screen(frame, body, app);
    }
    render_footer(frame, footer, app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let (title, gate) = match app.details.last() {
        Some(screen) => {
            let title = screen
                .detail()
                .map(|detail| detail.summary.title)
                .unwrap_or_else(|| format!("Movie {}", screen.movie));
            (title, &screen.gate)
        }
        None => ("Movies".to_string(), &app.movies.gate),
    };

    let marker = gate::refresh_marker(gate, app.tick_count);
    let marker_width = marker.iter().map(|s| s.width()).sum::<usize>();
    let room = (area.width as usize).saturating_sub(12 + marker_width);

    let mut spans = vec![
        Span::styled(
            " MARQUEE ",
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled("› ", Style::default().fg(COLOR_DIM)),
        Span::styled(
            truncate_to_width(&title, room),
            Style::default().fg(COLOR_HEADER),
        ),
    ];
    let used = spans.iter().map(|s| s.width()).sum::<usize>();
    let pad = (area.width as usize).saturating_sub(used + marker_width);
    spans.push(Span::raw(" ".repeat(pad)));
    spans.extend(marker);

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn key_hints(screen: Screen) -> &'static str {
    match screen {
        Screen::Movies => " ←/→ move  Tab focus  ⏎ details  r refresh  o image  q quit",
        Screen::Details(_) => " Esc back  r refresh  o image  q quit",
    }
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let width = area.width as usize;
    let line = match app.status.as_deref() {
        Some(status) => Line::from(Span::styled(
            truncate_to_width(&format!(" {}", status), width),
            Style::default().fg(COLOR_ERROR),
        )),
        None => Line::from(Span::styled(
            truncate_to_width(key_hints(app.screen()), width),
            Style::default().fg(COLOR_DIM),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}
