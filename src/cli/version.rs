//! `--version` output.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_line() -> String {
    format!("marquee {}", VERSION)
}

pub fn handle_version_command() {
    println!("{}", version_line());
}
