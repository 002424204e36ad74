//! Readiness gate presentation: spinner, refresh marker and error banner.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::helpers::{centered_rect, spinner_frame, truncate_to_width};
use super::theme::{COLOR_DIM, COLOR_ERROR, COLOR_PROGRESS};
use crate::gate::ReadinessGate;
use crate::orchestrator::ViewState;

/// Draw what the gate allows in `area`.
///
/// While loading this draws a centered spinner and returns `None`. Once
/// content may show, an error banner takes the top row when the snapshot
/// carries an error, and the rest of `area` is returned for the screen.
pub fn render_gate(
    frame: &mut Frame,
    area: Rect,
    gate: &ReadinessGate,
    view: &ViewState,
    tick: u64,
    label: &str,
) -> Option<Rect> {
    if gate.shows_spinner() {
        render_spinner(frame, area, tick, label);
        return None;
    }

    match view.error() {
        Some(error) if area.height > 1 => {
            let [banner, rest] =
                Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
            let message = format!(" ! {}", error.user_message());
            let text = truncate_to_width(&message, banner.width as usize);
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    text,
                    Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD),
                ))),
                banner,
            );
            Some(rest)
        }
        _ => Some(area),
    }
}

fn render_spinner(frame: &mut Frame, area: Rect, tick: u64, label: &str) {
    let text = format!("{} {}…", spinner_frame(tick), label);
    let width = unicode_width::UnicodeWidthStr::width(text.as_str()) as u16;
    let cell = centered_rect(area, width, 1);
    frame.render_widget(
        Paragraph::new(Span::styled(text, Style::default().fg(COLOR_PROGRESS))),
        cell,
    );
}

/// Header marker shown while a refresh is in flight. Empty otherwise.
pub fn refresh_marker(gate: &ReadinessGate, tick: u64) -> Vec<Span<'static>> {
    if !gate.is_refreshing() {
        return Vec::new();
    }
    vec![
        Span::styled(spinner_frame(tick), Style::default().fg(COLOR_PROGRESS)),
        Span::styled(" refreshing ", Style::default().fg(COLOR_DIM)),
    ]
}
