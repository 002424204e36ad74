//! `--help` output.

use crate::config::{ENV_API_BASE_URL, ENV_API_KEY, ENV_LANGUAGE};
use crate::logging::LOG_ENV;

pub fn usage() -> String {
    format!(
        "\
Usage: marquee [OPTIONS]

Browse now playing, popular and upcoming movies in the terminal.

Options:
  -m, --movie <ID>   Open the details of a movie on start
  -h, --help         Print help
  -V, --version      Print version

Environment:
  {api_key:<22}Catalog API key (overrides the config file)
  {base_url:<22}Catalog API base URL
  {language:<22}Response language, e.g. ko-KR
  {log:<22}Write logs to this file

Keys:
  ←/→ h/l  move the carousel     Tab     switch carousel / popular row
  Enter    open details          r, F5   refresh
  o        open image in browser Esc     back
  q        quit",
        api_key = ENV_API_KEY,
        base_url = ENV_API_BASE_URL,
        language = ENV_LANGUAGE,
        log = LOG_ENV,
    )
}

pub fn handle_help_command() {
    println!("{}", usage());
}
