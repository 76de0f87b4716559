use crate::config::{AppConfig, LogRotation};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn file_appender(config: &AppConfig) -> RollingFileAppender {
    match config.rotation {
        LogRotation::Hourly => tracing_appender::rolling::hourly(&config.log_dir, &config.log_file),
        LogRotation::Daily => tracing_appender::rolling::daily(&config.log_dir, &config.log_file),
        LogRotation::Never => tracing_appender::rolling::never(&config.log_dir, &config.log_file),
    }
}

/// Install the global subscriber. Keep the guard alive for the whole process,
/// dropping it flushes and stops the background writer.
pub fn init_logging(config: &AppConfig) -> WorkerGuard {
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender(config));

    // RUST_LOG wins over the configured level
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if config.use_json {
        let file_layer = fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_writer(non_blocking)
            .with_ansi(false);
        registry.with(file_layer).init();
    } else {
        let file_layer = fmt::layer()
            .with_target(false)
            .with_writer(non_blocking)
            .with_ansi(false);
        let stdout_layer = fmt::layer().with_target(false).with_ansi(true);
        registry.with(file_layer).with(stdout_layer).init();
    }

    guard
}
