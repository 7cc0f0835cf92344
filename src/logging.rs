//! Tracing setup: a non-blocking file writer filtered to this crate.

use std::ffi::OsStr;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;

/// Log file used when none is configured, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "accessible-shades.log";

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Filter directive scoping `level` to this crate's targets.
pub fn filter_directive(level: &str) -> String {
    format!("accessible_shades={level}")
}

/// Filter for `level`, or the default level if it does not parse.
fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(filter_directive(level))
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(DEFAULT_LOG_LEVEL)))
}

/// Directory and file name for the appender.
fn appender_target(path: &Path) -> (&Path, &OsStr) {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let name = path.file_name().unwrap_or(OsStr::new(DEFAULT_LOG_FILE));
    (dir, name)
}

/// Open (or create) the log file at `path`, never rotating it.
fn file_appender(path: &Path) -> Result<RollingFileAppender, InitError> {
    let (dir, name) = appender_target(path);
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name.to_string_lossy())
        .build(dir)
}

/// Install the global subscriber described by `settings`.
///
/// Fails if the log file cannot be created. Hold the returned guard until
/// exit; dropping it flushes buffered events. Debug builds also record when
/// each variant search span closes.
pub fn init_logging(settings: &LoggingConfig) -> Result<WorkerGuard, InitError> {
    let path = settings
        .file
        .as_deref()
        .unwrap_or(Path::new(DEFAULT_LOG_FILE));
    let (writer, guard) = tracing_appender::non_blocking(file_appender(path)?);

    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    #[cfg(debug_assertions)]
    let layer = layer.with_span_events(fmt::format::FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(build_filter(&settings.level))
        .with(layer)
        .init();

    Ok(guard)
}
