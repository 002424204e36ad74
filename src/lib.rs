//! Marquee - a terminal client for browsing a movie catalog
//!
//! This library exposes modules for use in integration tests and benches.

pub mod adapters;
pub mod app;
pub mod carousel;
pub mod cli;
pub mod config;
pub mod error;
pub mod gate;
pub mod logging;
pub mod models;
pub mod orchestrator;
pub mod terminal;
pub mod traits;
pub mod ui;
