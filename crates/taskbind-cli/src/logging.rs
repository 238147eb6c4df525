//! Logging setup for the CLI.
//!
//! Logs go to stderr so stdout only carries the JSON report. `RUST_LOG`
//! overrides the configured level.

use std::env;
use std::io;

use taskbind_core::config::LogFormat;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Parse a level name, falling back to INFO.
pub fn parse_level(level: &str) -> Level {
    match level.to_uppercase().as_str() {
        "ERROR" => Level::ERROR,
        "WARN" => Level::WARN,
        "INFO" => Level::INFO,
        "DEBUG" => Level::DEBUG,
        "TRACE" => Level::TRACE,
        _ => Level::INFO,
    }
}

pub fn init_logging(level: Level, format: LogFormat) {
    let filter = match env::var("RUST_LOG") {
        Ok(rust_log) => EnvFilter::new(rust_log),
        Err(_) => EnvFilter::new(level.to_string()),
    };

    let subscriber = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => {
            let fmt_layer = fmt::layer().json().with_writer(io::stderr);
            subscriber.with(fmt_layer).init();
        }
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer().pretty().with_ansi(true).with_writer(io::stderr);
            subscriber.with(fmt_layer).init();
        }
        LogFormat::Compact => {
            let fmt_layer = fmt::layer()
                .compact()
                .with_ansi(true)
                .with_target(false)
                .with_writer(io::stderr);
            subscriber.with(fmt_layer).init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_level_is_case_insensitive() {
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level("WARN"), Level::WARN);
        assert_eq!(parse_level("Trace"), Level::TRACE);
    }

    #[test]
    fn unknown_level_defaults_to_info() {
        assert_eq!(parse_level("verbose"), Level::INFO);
    }
}
