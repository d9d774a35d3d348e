//! Logging Infrastructure
//!
//! Structured logging setup with an env filter and optional daily rolling
//! file output.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor a configured level is usable
pub const DEFAULT_FILTER: &str = "catalog_server=info,tower_http=info";

/// Initialize the logger with optional file output
///
/// `RUST_LOG` wins over `log_level`. When `log_dir` exists, output goes to a
/// daily rolling file there instead of stdout.
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&str>) {
    let filter = build_filter(log_level);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(true);

    let file_appender = log_dir
        .map(Path::new)
        .filter(|dir| dir.exists())
        .map(|dir| tracing_appender::rolling::daily(dir, "catalog-server"));

    match (json, file_appender) {
        (true, Some(appender)) => subscriber.json().with_writer(appender).init(),
        (true, None) => subscriber.json().init(),
        (false, Some(appender)) => subscriber.with_ansi(false).with_writer(appender).init(),
        (false, None) => subscriber.init(),
    }
}

fn build_filter(log_level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level.unwrap_or(DEFAULT_FILTER)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
