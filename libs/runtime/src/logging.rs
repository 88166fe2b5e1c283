use crate::config::LoggingConfig;
use std::path::Path;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

fn parse_tracing_level(s: &str) -> Option<Level> {
    match s.to_ascii_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        "off" | "none" => None,
        _ => Some(Level::INFO),
    }
}

/// Initialize the global tracing subscriber: a console layer filtered by
/// `RUST_LOG` (falling back to the configured console level) and an optional
/// daily-rolling file layer.
///
/// The returned guard must stay alive for the lifetime of the process, or
/// buffered file output is lost on shutdown.
pub fn init_logging(config: &LoggingConfig, base_dir: &Path) -> Option<WorkerGuard> {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.console_level.clone()));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_filter(console_filter);

    let mut guard = None;
    let file_layer = config.file.as_ref().and_then(|file| {
        let level = parse_tracing_level(&config.file_level)?;
        let path = base_dir.join(file);
        let dir = path.parent()?.to_path_buf();
        let name = path.file_name()?.to_os_string();
        std::fs::create_dir_all(&dir).ok()?;

        let appender = tracing_appender::rolling::daily(dir, name);
        let (writer, worker_guard) = tracing_appender::non_blocking(appender);
        guard = Some(worker_guard);

        Some(
            fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(LevelFilter::from_level(level)),
        )
    });

    // try_init: tests may initialize more than once, later calls are no-ops.
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_parse_case_insensitively() {
        assert_eq!(parse_tracing_level("DEBUG"), Some(Level::DEBUG));
        assert_eq!(parse_tracing_level("warn"), Some(Level::WARN));
        assert_eq!(parse_tracing_level("off"), None);
        assert_eq!(parse_tracing_level("none"), None);
        // Unknown strings fall back to info rather than erroring.
        assert_eq!(parse_tracing_level("chatty"), Some(Level::INFO));
    }

    #[test]
    fn file_layer_requires_a_parseable_level() {
        let tmp = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            console_level: "info".to_string(),
            file: Some("logs/test.log".to_string()),
            file_level: "debug".to_string(),
        };
        let guard = init_logging(&config, tmp.path());
        assert!(guard.is_some());
        assert!(tmp.path().join("logs").is_dir());
    }
}
