//! Flags handled by the binary before the terminal is touched.

use std::process::Command;

fn marquee() -> Command {
    Command::new(env!("CARGO_BIN_EXE_marquee"))
}

#[test]
fn test_version_flag() {
    let output = marquee().arg("--version").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        format!("marquee {}", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn test_short_version_flag() {
    let output = marquee().arg("-V").output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("marquee "));
}

#[test]
fn test_help_lists_options_and_environment() {
    let output = marquee().arg("--help").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--movie <ID>"));
    assert!(stdout.contains("TMDB_API_KEY"));
    assert!(stdout.contains("MARQUEE_LOG"));
}

#[test]
fn test_bad_movie_id_exits_with_usage_error() {
    let output = marquee().args(["--movie", "dune"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("'dune' is not a movie id"));
    assert!(stderr.contains("Usage: marquee"));
}

#[test]
fn test_missing_movie_id_exits_with_usage_error() {
    let output = marquee().arg("--movie").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}
