use tracing_appender::non_blocking::WorkerGuard;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{filter::LevelFilter, prelude::*};

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("invalid log level {0:?}")]
    InvalidLevel(String),
    #[error(transparent)]
    Logger(#[from] tracing_log::log::SetLoggerError),
    #[error(transparent)]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),
}

/// Installs the process-wide bunyan JSON subscriber writing to stdout.
///
/// The returned guard flushes the non-blocking writer when dropped, so keep it
/// alive until the program exits.
pub fn init(app_name: &str, log_level: &str) -> Result<WorkerGuard, LoggingError> {
    let filter = parse_level(log_level)?;

    LogTracer::init()?;
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(std::io::stdout());
    let bunyan_formatting_layer = BunyanFormattingLayer::new(app_name.to_owned(), non_blocking_writer);

    tracing_subscriber::registry()
        .with(filter)
        .with(JsonStorageLayer)
        .with(bunyan_formatting_layer)
        .try_init()?;

    Ok(guard)
}

fn parse_level(log_level: &str) -> Result<LevelFilter, LoggingError> {
    log_level
        .parse::<LevelFilter>()
        .map_err(|_| LoggingError::InvalidLevel(log_level.to_owned()))
}
