//! Messages sent from background tasks to the UI loop.

use std::fmt;

use crate::models::MovieId;
use crate::orchestrator::SettledLoad;

/// Identifies the screen instance a background load belongs to.
///
/// Details screens carry a serial unique to each push, so results for a
/// screen that was closed never reach a later screen for the same movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenKey {
    Movies,
    Details { movie: MovieId, serial: u64 },
}

impl fmt::Display for ScreenKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScreenKey::Movies => f.write_str("movies"),
            ScreenKey::Details { movie, serial } => write!(f, "details:{}#{}", movie, serial),
        }
    }
}

/// Messages received from async operations.
#[derive(Debug)]
pub enum AppMessage {
    /// Every source call of a load has finished
    LoadSettled {
        target: ScreenKey,
        settled: SettledLoad,
    },
    /// Opening an image in the browser failed
    OpenFailed { url: String, error: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_key_display() {
        assert_eq!(ScreenKey::Movies.to_string(), "movies");
        assert_eq!(
            ScreenKey::Details { movie: 550, serial: 2 }.to_string(),
            "details:550#2"
        );
    }
}
