pub mod config;
pub mod file_writer;
pub mod formatter;

use anyhow::Result;
use config::{LoggingConfig, DEFAULT_LEVEL, LOG_FILE_ENV};
use formatter::LogFormat;
use std::path::PathBuf;
use tracing::Subscriber;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

/// Initialize logging system with the given configuration
///
/// Console output goes to stderr so that stdout stays reserved for command output.
pub fn init(config: LoggingConfig) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Registry};

    let env_filter = env_filter(&config);

    let console = config
        .console
        .then(|| fmt_layer(config.format, BoxMakeWriter::new(std::io::stderr), true));
    let file = config.file.clone().map(|path| {
        fmt_layer(
            config.format,
            BoxMakeWriter::new(file_writer::FileWriter::new(path)),
            false,
        )
    });

    Registry::default()
        .with(env_filter)
        .with(console)
        .with(file)
        .try_init()?;

    Ok(())
}

/// `RUST_LOG` wins over `config.level` only when `env_override` is set
fn env_filter(config: &LoggingConfig) -> tracing_subscriber::EnvFilter {
    use tracing_subscriber::EnvFilter;

    if config.env_override {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
    } else {
        EnvFilter::new(&config.level)
    }
}

/// Builds one formatting layer; file layers get UTC timestamps and no colors
fn fmt_layer<S>(format: LogFormat, writer: BoxMakeWriter, ansi: bool) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    use tracing_subscriber::fmt;

    let layer = fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(ansi);

    match (format, ansi) {
        (LogFormat::Json, _) => layer
            .json()
            .with_timer(fmt::time::ChronoUtc::rfc_3339())
            .boxed(),
        (LogFormat::Text, true) => layer.boxed(),
        (LogFormat::Text, false) => layer.with_timer(fmt::time::ChronoUtc::rfc_3339()).boxed(),
    }
}

/// Initialize logging with default configuration
pub fn init_default() -> Result<()> {
    init(LoggingConfig::default())
}

/// Initialize logging from environment variables and CLI arguments
///
/// An explicit `log_level` or `verbose` takes precedence over `RUST_LOG`.
pub fn init_from_args(
    log_level: Option<String>,
    log_file: Option<PathBuf>,
    verbose: bool,
    format: LogFormat,
) -> Result<()> {
    let explicit = if verbose {
        Some("debug".to_string())
    } else {
        log_level
    };

    let file = log_file.or_else(|| std::env::var(LOG_FILE_ENV).ok().map(PathBuf::from));

    let config = match explicit {
        Some(level) => LoggingConfig::new(level, file, true, format).with_env_override(false),
        None => LoggingConfig::new(DEFAULT_LEVEL.to_string(), file, true, format),
    };
    init(config)
}
