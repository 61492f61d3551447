//! Logging Infrastructure
//!
//! Human readable output in development, JSON lines in production. When
//! `log_dir` exists, logs go to a daily rolling file instead of stdout.

use std::path::Path;

use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Initialize the logger with optional file output
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");

    let writer = match log_dir.map(Path::new) {
        Some(dir) if dir.is_dir() => {
            BoxMakeWriter::new(tracing_appender::rolling::daily(dir, "admin-edge"))
        }
        Some(dir) => {
            eprintln!("LOG_DIR {} does not exist, logging to stdout", dir.display());
            BoxMakeWriter::new(std::io::stdout)
        }
        None => BoxMakeWriter::new(std::io::stdout),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level.parse().unwrap_or(tracing::Level::INFO))
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .with_writer(writer);

    if json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
