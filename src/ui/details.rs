//! Details screen for one movie.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::gate::render_gate;
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_VOTE};
use crate::adapters::ImageResolver;
use crate::app::DetailsScreen;
use crate::models::{format_release_date, format_vote, MovieDetail};

pub fn render_details_screen(
    frame: &mut Frame,
    area: Rect,
    screen: &DetailsScreen,
    images: &ImageResolver,
    tick: u64,
) {
    let view = screen.view();
    let Some(content) = render_gate(frame, area, &screen.gate, &view, tick, "Loading details")
    else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(content);
    frame.render_widget(block, content);

    let lines = match view.detail() {
        Some(detail) => detail_lines(detail, images),
        None => vec![Line::from(Span::styled(
            format!("No details for movie {}", screen.movie),
            Style::default().fg(COLOR_DIM),
        ))],
    };
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    ))
}

/// Title and vote, then the optional sections. Overview and release date
/// only appear when the catalog has them.
fn detail_lines(detail: &MovieDetail, images: &ImageResolver) -> Vec<Line<'static>> {
    let movie = &detail.summary;
    let mut lines = vec![
        Line::from(Span::styled(
            movie.title.clone(),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format_vote(movie.vote_average),
            Style::default().fg(COLOR_VOTE),
        )),
    ];

    let overview = movie.overview_text().trim();
    if !overview.is_empty() {
        lines.push(Line::default());
        lines.push(heading("Overview"));
        lines.push(Line::from(overview.to_string()));
    }

    if let Some(date) = format_release_date(&detail.release_date) {
        lines.push(Line::default());
        lines.push(heading("Release Date"));
        lines.push(Line::from(date));
    }

    let uris = [
        ("Backdrop", movie.backdrop_path.as_deref().unwrap_or("")),
        ("Poster", movie.poster_path.as_str()),
    ];
    let mut first = true;
    for (label, path) in uris {
        let uri = images.resolve_image_uri(path);
        if uri.is_empty() {
            continue;
        }
        if first {
            lines.push(Line::default());
            first = false;
        }
        lines.push(Line::from(Span::styled(
            format!("{}: {}", label, uri),
            Style::default().fg(COLOR_DIM),
        )));
    }
    lines
}
