//! Command-line interface.
//!
//! Flags are handled before the terminal is touched:
//!
//! ```ignore
//! use marquee::cli::{parse_args, run_cli_command, CliCommand};
//!
//! let command = parse_args(std::env::args());
//! if let Some(code) = run_cli_command(&command) {
//!     std::process::exit(code);
//! }
//! // Otherwise start the TUI
//! ```

pub mod args;
pub mod help;
pub mod version;

pub use args::{parse_args, CliCommand};
pub use help::{handle_help_command, usage};
pub use version::{handle_version_command, VERSION};

/// Run a CLI-only command.
///
/// Returns the process exit code, or `None` when the TUI should start.
pub fn run_cli_command(command: &CliCommand) -> Option<i32> {
    match command {
        CliCommand::Version => {
            handle_version_command();
            Some(0)
        }
        CliCommand::Help => {
            handle_help_command();
            Some(0)
        }
        CliCommand::Invalid(reason) => {
            eprintln!("marquee: {}\n", reason);
            eprintln!("{}", usage());
            Some(2)
        }
        CliCommand::RunTui { .. } => None,
    }
}
