use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Install the global subscriber.
///
/// Stdout gets plain messages unless `quiet`; `log_file`, when set, always
/// gets everything. Keep the returned guard alive until exit or buffered
/// lines are lost.
pub fn init(log_file: Option<&Path>, quiet: bool) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stdout_layer = (!quiet).then(|| {
        fmt::layer()
            .without_time()
            .with_target(false)
            .with_writer(std::io::stdout)
    });

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(file_appender(path)?);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    Registry::default()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .context("Cannot install log subscriber")?;

    Ok(guard)
}

/// Appends to `path`, creating it if needed. Never rotates.
fn file_appender(path: &Path) -> Result<RollingFileAppender> {
    let name = path
        .file_name()
        .with_context(|| format!("log_file {} has no file name", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name.to_string_lossy())
        .build(dir)
        .with_context(|| format!("Cannot open log file {}", path.display()))
}
