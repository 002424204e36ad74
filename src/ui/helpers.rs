//! Rendering helpers shared by the screens.

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Braille spinner, one frame per tick.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick % SPINNER_FRAMES.len() as u64) as usize]
}

/// A `width` x `height` rect centered in `area`, clamped to it.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Cut `text` to at most `max_width` display columns, ending in `…` when
/// anything was dropped.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Word-wrap `text` to `width` columns and keep at most `max_lines` lines.
/// The last kept line ends in `…` if text was cut.
pub fn clip_lines(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut words = text.split_whitespace().peekable();
    let mut truncated = false;

    while let Some(word) = words.peek().copied() {
        let candidate_width = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };

        if candidate_width <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            words.next();
            continue;
        }

        if current.is_empty() {
            // A single word wider than the line.
            current = truncate_to_width(word, width);
            words.next();
        }
        lines.push(std::mem::take(&mut current));
        if lines.len() == max_lines {
            truncated = words.peek().is_some();
            break;
        }
    }

    if !current.is_empty() && lines.len() < max_lines {
        lines.push(current);
    }

    if truncated {
        if let Some(last) = lines.last_mut() {
            let room = width.saturating_sub(1);
            let mut clipped = truncate_to_width(last, room);
            if !clipped.ends_with('…') {
                clipped.push('…');
            }
            *last = clipped;
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_wraps() {
        assert_eq!(spinner_frame(0), spinner_frame(10));
        assert_ne!(spinner_frame(0), spinner_frame(1));
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Dune", 10), "Dune");
        assert_eq!(truncate_to_width("Oppenheimer", 6), "Oppen…");
        assert_eq!(truncate_to_width("기생충 Parasite", 5), "기생…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn test_clip_lines_wraps_words() {
        let lines = clip_lines("a spice war on a desert planet", 12, 3);
        assert_eq!(lines, vec!["a spice war", "on a desert", "planet"]);
    }

    #[test]
    fn test_clip_lines_marks_cut_text() {
        let lines = clip_lines("one two three four five six seven", 9, 2);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "one two");
        assert!(lines[1].ends_with('…'));
        assert!(lines[1].width() <= 9);
    }

    #[test]
    fn test_clip_lines_long_word() {
        let lines = clip_lines("Supercalifragilistic", 8, 3);
        assert_eq!(lines, vec!["Superca…"]);
    }

    #[test]
    fn test_clip_lines_empty() {
        assert!(clip_lines("", 10, 3).is_empty());
        assert!(clip_lines("text", 0, 3).is_empty());
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect(area, 4, 2), Rect::new(8, 4, 4, 2));
        assert_eq!(centered_rect(area, 40, 40), area);
    }
}
