use tracing::{
    Level,
    subscriber::{SetGlobalDefaultError, set_global_default},
};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::layer::SubscriberExt;

use crate::directories::config_dir;

const LOG_FILE: &str = "affinity-inspector.log";

/// Keeps the log writers flushing until dropped.
pub struct LoggerGuards {
    _file: WorkerGuard,
    _stderr: Option<WorkerGuard>,
}

/// Log to a file in the config directory, and to stderr if debugging.
pub fn setup_logger(debug: bool) -> Result<LoggerGuards, SetGlobalDefaultError> {
    let level = if debug { Level::DEBUG } else { Level::INFO };
    let filter = tracing_subscriber::filter::Targets::new().with_default(level);

    // File logger
    let (file_writer, file_guard) =
        tracing_appender::non_blocking(rolling::never(config_dir(), LOG_FILE));
    let file_logger = tracing_subscriber::fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(false);

    // stderr logger, stdout holds the report
    let (stderr_logger, stderr_guard) = if debug {
        let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
        let logger = tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_target(false);

        (Some(logger), Some(guard))
    } else {
        (None, None)
    };

    // Register loggers
    let collector = tracing_subscriber::registry()
        .with(file_logger)
        .with(stderr_logger)
        .with(filter);

    set_global_default(collector)?;

    Ok(LoggerGuards {
        _file: file_guard,
        _stderr: stderr_guard,
    })
}
