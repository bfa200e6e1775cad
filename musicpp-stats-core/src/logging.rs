use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Filter used when `RUST_LOG` is not set. Quiet enough to keep the live
/// table readable.
const DEFAULT_FILTER: &str = "warn";

/// Initialize logging to stderr; stdout carries the statistics themselves.
///
/// JSON lines when stderr is redirected, compact text on a terminal.
pub fn init_logging() {
    if io::stderr().is_terminal() {
        init_terminal_logging();
    } else {
        init_json_logging();
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn init_json_logging() {
    fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .json()
        .flatten_event(true)
        .init();
}

fn init_terminal_logging() {
    fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .compact()
        .init();
}

/// Colors only make sense when a person is looking at stdout.
pub fn default_color_mode() -> ColorMode {
    if io::stdout().is_terminal() {
        ColorMode::Color
    } else {
        ColorMode::Plain
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Color,
    Plain,
}
