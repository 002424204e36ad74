//! Listing screen: now-playing carousel, popular row and coming-soon list.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::gate::render_gate;
use super::helpers::{clip_lines, truncate_to_width};
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_VOTE};
use crate::adapters::ImageResolver;
use crate::app::{App, Focus, MoviesLayout};
use crate::models::{format_vote, MovieSummary};
use crate::orchestrator::{SourceName, ViewState};

/// Overview lines shown on a slide
const OVERVIEW_LINES: usize = 3;

/// Width of one poster card in the popular row
const CARD_WIDTH: u16 = 22;

pub fn render_movies_screen(frame: &mut Frame, area: Rect, app: &mut App) {
    let view = app.movies.view();
    let Some(content) = render_gate(
        frame,
        area,
        &app.movies.gate,
        &view,
        app.tick_count,
        "Loading movies",
    ) else {
        app.movies_layout = MoviesLayout::default();
        return;
    };

    let [carousel, popular, upcoming] = Layout::vertical([
        Constraint::Ratio(1, 4),
        Constraint::Ratio(1, 4),
        Constraint::Min(0),
    ])
    .areas(content);
    app.movies_layout = MoviesLayout { carousel, popular };

    render_carousel(frame, carousel, app, &view);
    render_popular(frame, popular, app, &view);
    render_upcoming(frame, upcoming, &view);
}

fn section_block(title: &str, focused: bool) -> Block<'_> {
    let color = if focused { COLOR_ACCENT } else { COLOR_BORDER };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ))
}

fn render_carousel(frame: &mut Frame, area: Rect, app: &App, view: &ViewState) {
    let block = section_block(
        SourceName::NowPlaying.title(),
        app.movies.focus == Focus::Carousel,
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let slides = view.list(SourceName::NowPlaying);
    let index = app.movies.carousel_index();
    let Some(movie) = slides.get(index) else {
        frame.render_widget(
            Paragraph::new(Span::styled("Nothing playing", Style::default().fg(COLOR_DIM))),
            inner,
        );
        return;
    };

    let lines = slide_lines(movie, &app.images, inner, index, slides.len());
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Lines of one slide, fitted to `area`. The overview gives up lines first.
fn slide_lines(
    movie: &MovieSummary,
    images: &ImageResolver,
    area: Rect,
    index: usize,
    count: usize,
) -> Vec<Line<'static>> {
    let width = area.width as usize;
    let mut lines = vec![Line::from(vec![
        Span::styled(
            truncate_to_width(&movie.title, width.saturating_sub(16)),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(format_vote(movie.vote_average), Style::default().fg(COLOR_VOTE)),
    ])];

    let fixed = 3;
    let room = (area.height as usize).saturating_sub(fixed).min(OVERVIEW_LINES);
    for text in clip_lines(movie.overview_text(), width, room) {
        lines.push(Line::from(text));
    }

    let hint = "more ⏎";
    let uri = images.resolve_image_uri(&movie.poster_path);
    lines.push(Line::from(vec![
        Span::styled(
            truncate_to_width(&uri, width.saturating_sub(hint.len() + 2)),
            Style::default().fg(COLOR_DIM),
        ),
        Span::raw("  "),
        Span::styled(hint, Style::default().fg(COLOR_ACCENT)),
    ]));
    lines.push(position_dots(index, count));
    lines
}

/// `○ ● ○` style indicator of the current slide.
fn position_dots(index: usize, count: usize) -> Line<'static> {
    let spans = (0..count)
        .map(|i| {
            if i == index {
                Span::styled("● ", Style::default().fg(COLOR_ACCENT))
            } else {
                Span::styled("○ ", Style::default().fg(COLOR_DIM))
            }
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

fn render_popular(frame: &mut Frame, area: Rect, app: &App, view: &ViewState) {
    let focused = app.movies.focus == Focus::Popular;
    let block = section_block(SourceName::Popular.title(), focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let movies = view.list(SourceName::Popular);
    if movies.is_empty() || inner.width == 0 {
        frame.render_widget(
            Paragraph::new(Span::styled("No popular movies", Style::default().fg(COLOR_DIM))),
            inner,
        );
        return;
    }

    // Scroll the row so the selected card stays visible.
    let visible = ((inner.width / CARD_WIDTH).max(1)) as usize;
    let selected = app.movies.popular_index;
    let first = selected.saturating_sub(visible - 1);

    let mut x = inner.x;
    for (i, movie) in movies.iter().enumerate().skip(first).take(visible) {
        let width = CARD_WIDTH.min(inner.right().saturating_sub(x));
        if width == 0 {
            break;
        }
        let card = Rect::new(x, inner.y, width, inner.height);
        render_card(frame, card, movie, focused && i == selected);
        x += CARD_WIDTH;
    }
}

fn render_card(frame: &mut Frame, area: Rect, movie: &MovieSummary, selected: bool) {
    let width = area.width.saturating_sub(2) as usize;
    let title_style = if selected {
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(COLOR_HEADER)
    };
    let lines = vec![
        Line::from(Span::styled(truncate_to_width(&movie.title, width), title_style)),
        Line::from(Span::styled(
            format_vote(movie.vote_average),
            Style::default().fg(COLOR_VOTE),
        )),
    ];
    let padded = Rect::new(area.x + 1, area.y, area.width.saturating_sub(1), area.height);
    frame.render_widget(Paragraph::new(lines), padded);
}

fn render_upcoming(frame: &mut Frame, area: Rect, view: &ViewState) {
    let block = section_block(SourceName::Upcoming.title(), false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let movies = view.list(SourceName::Upcoming);
    let lines: Vec<Line> = if movies.is_empty() {
        vec![Line::from(Span::styled(
            "Nothing announced",
            Style::default().fg(COLOR_DIM),
        ))]
    } else {
        movies
            .iter()
            .take(inner.height as usize)
            .map(|movie| {
                Line::from(vec![
                    Span::styled("• ", Style::default().fg(COLOR_DIM)),
                    Span::raw(truncate_to_width(
                        &movie.title,
                        (inner.width as usize).saturating_sub(2),
                    )),
                ])
            })
            .collect()
    };
    frame.render_widget(Paragraph::new(lines), inner);
}
