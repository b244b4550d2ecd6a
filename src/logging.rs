use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system
///
/// # Arguments
/// * `verbose` - Enable verbose (DEBUG) logging
/// * `log_file` - Optional path to log file. If None, logs only to stderr
///
/// Fails if the log directory cannot be created or the file cannot be opened.
pub fn init(verbose: bool, log_file: Option<PathBuf>) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    if let Some(log_path) = log_file {
        let file_appender = file_appender(&log_path)?;
        let file_layer = fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .json();

        subscriber.with(file_layer).init();
    } else {
        subscriber.init();
    }
    Ok(())
}

/// Opens a daily-rolled appender writing `<file name>.<date>` next to `log_path`.
fn file_appender(log_path: &Path) -> Result<RollingFileAppender> {
    let (dir, file_name) = split_log_path(log_path);
    std::fs::create_dir_all(&dir)?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(file_name)
        .build(dir)?;
    Ok(appender)
}

/// Filter used when `RUST_LOG` is unset. Query execution spans are emitted
/// under the `async_graphql` target, so they follow the same level.
fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "warn" };
    format!("bookshelf={level},async_graphql={level}")
}

fn split_log_path(log_path: &Path) -> (PathBuf, String) {
    let dir = match log_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = log_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "bookshelf.log".to_string());
    (dir, file_name)
}
