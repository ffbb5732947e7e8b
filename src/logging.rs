//! Logging Module
//!
//! Tracing subscriber setup for the embedding application: daily-rolling
//! file output, console output in debug builds.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize logging in the platform-standard log directory.
pub fn init() {
    init_at(default_log_dir());
}

/// Initialize logging with an explicit log directory.
pub fn init_at(log_dir: PathBuf) {
    let _ = std::fs::create_dir_all(&log_dir);

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "ctf-tracker.log");

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hyper=warn,reqwest=warn"));

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(file_appender);

    let subscriber = tracing_subscriber::registry().with(filter).with(file_layer);

    #[cfg(debug_assertions)]
    let subscriber = subscriber.with(fmt::layer().with_target(true).pretty());

    // Keeps the first subscriber if the app initializes twice.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("CTFTracker")
        .join("logs")
}
