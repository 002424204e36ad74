//! Command-line argument parsing.

use crate::models::MovieId;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI, optionally opening one movie's details on top of the
    /// listing
    RunTui { movie: Option<MovieId> },
    /// Arguments that cannot be acted on
    Invalid(String),
}

/// Parse command-line arguments (program name first).
///
/// Unknown flags are ignored.
///
/// # Examples
///
/// ```
/// use marquee::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["marquee".to_string(), "--movie".to_string(), "550".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::RunTui { movie: Some(550) });
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut movie = None;
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--movie" | "-m" => {
                let Some(value) = args.next() else {
                    return CliCommand::Invalid("--movie needs a movie id".to_string());
                };
                match value.parse::<MovieId>() {
                    Ok(id) => movie = Some(id),
                    Err(_) => {
                        return CliCommand::Invalid(format!("'{}' is not a movie id", value))
                    }
                }
            }
            _ => {}
        }
    }
    CliCommand::RunTui { movie }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliCommand {
        let mut all = vec!["marquee".to_string()];
        all.extend(args.iter().map(|arg| arg.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]), CliCommand::Version);
        assert_eq!(parse(&["-V"]), CliCommand::Version);
    }

    #[test]
    fn test_parse_help_flags() {
        assert_eq!(parse(&["--help"]), CliCommand::Help);
        assert_eq!(parse(&["-h"]), CliCommand::Help);
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), CliCommand::RunTui { movie: None });
    }

    #[test]
    fn test_parse_movie() {
        assert_eq!(
            parse(&["--movie", "550"]),
            CliCommand::RunTui { movie: Some(550) }
        );
        assert_eq!(parse(&["-m", "7"]), CliCommand::RunTui { movie: Some(7) });
    }

    #[test]
    fn test_parse_movie_without_id() {
        assert!(matches!(parse(&["--movie"]), CliCommand::Invalid(_)));
        assert!(matches!(parse(&["--movie", "dune"]), CliCommand::Invalid(_)));
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(parse(&["--unknown"]), CliCommand::RunTui { movie: None });
    }
}
