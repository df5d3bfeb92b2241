//! Tracing setup for the CLI.
//!
//! Logs always go to stderr so stdout stays free for documents and reports.
//! When `logging.file` is configured a second, non-blocking layer mirrors
//! events into that file with its own level.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use mdsection_core::config::types::{LoggingConfig, ResolvedConfig};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Keeps the file writer alive until [`shutdown`] flushes it.
static LOG_GUARD: Mutex<Option<WorkerGuard>> = Mutex::new(None);

pub fn init(cfg: &ResolvedConfig) {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(env_filter(&cfg.logging.level, LevelFilter::INFO));

    let file_layer = cfg.logging.file.as_deref().map(|path| {
        let writer = open_log_file(path);
        fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_file(true)
            .with_line_number(true)
            .with_filter(env_filter(file_level(&cfg.logging), LevelFilter::DEBUG))
    });

    tracing_subscriber::registry().with(stderr_layer).with(file_layer).init();
}

/// Flush the file logger before the process exits
pub fn shutdown() {
    if let Ok(mut guard) = LOG_GUARD.lock() {
        guard.take();
    }
}

fn file_level(logging: &LoggingConfig) -> &str {
    logging.file_level.as_deref().unwrap_or(&logging.level)
}

/// `RUST_LOG` wins over the configured level; an unknown level falls back.
fn env_filter(level: &str, fallback: LevelFilter) -> EnvFilter {
    let default = parse_level(level).unwrap_or(fallback);
    EnvFilter::builder().with_default_directive(default.into()).from_env_lossy()
}

fn open_log_file(path: &Path) -> NonBlocking {
    let file = File::create(path).unwrap_or_else(|e| {
        eprintln!("Failed to create log file {}: {e}", path.display());
        std::process::exit(1);
    });
    let (writer, guard) = tracing_appender::non_blocking(file);
    if let Ok(mut slot) = LOG_GUARD.lock() {
        *slot = Some(guard);
    }
    writer
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.to_lowercase().as_str() {
        "off" => Some(LevelFilter::OFF),
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_parse_case_insensitively() {
        assert_eq!(parse_level("off"), Some(LevelFilter::OFF));
        assert_eq!(parse_level("error"), Some(LevelFilter::ERROR));
        assert_eq!(parse_level("WARN"), Some(LevelFilter::WARN));
        assert_eq!(parse_level("Info"), Some(LevelFilter::INFO));
        assert_eq!(parse_level("debug"), Some(LevelFilter::DEBUG));
        assert_eq!(parse_level("trace"), Some(LevelFilter::TRACE));
        assert_eq!(parse_level("verbose"), None);
        assert_eq!(parse_level(""), None);
    }

    #[test]
    fn file_level_defaults_to_console_level() {
        let mut logging = LoggingConfig::default();
        assert_eq!(file_level(&logging), "info");

        logging.file_level = Some("trace".into());
        assert_eq!(file_level(&logging), "trace");
    }
}
