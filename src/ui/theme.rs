//! Color theme constants.

use ratatui::style::Color;

/// Borders and separators
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Highlights: focused section, selected poster
pub const COLOR_ACCENT: Color = Color::Yellow;

/// Titles and headings
pub const COLOR_HEADER: Color = Color::White;

/// Secondary text: URIs, hints, dots
pub const COLOR_DIM: Color = Color::DarkGray;

/// Vote line
pub const COLOR_VOTE: Color = Color::Rgb(245, 197, 24);

/// Spinner and refresh marker
pub const COLOR_PROGRESS: Color = Color::Cyan;

/// Error banner text
pub const COLOR_ERROR: Color = Color::Red;
