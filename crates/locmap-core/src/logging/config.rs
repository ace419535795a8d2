use crate::logging::formatter::LogFormat;
use std::path::PathBuf;

/// Environment variable naming an optional log file
pub const LOG_FILE_ENV: &str = "LOCMAP_LOG_FILE";

/// Level used when neither a flag nor `RUST_LOG` sets one
pub const DEFAULT_LEVEL: &str = "warn";

/// Configuration for logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level or filter directive (error, warn, info, debug, trace)
    pub level: String,
    /// Path to log file (None = no file logging)
    pub file: Option<PathBuf>,
    /// Log to stderr (true) or only to file (false)
    pub console: bool,
    pub format: LogFormat,
    /// Let a set `RUST_LOG` replace `level`
    pub env_override: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.to_string(),
            file: std::env::var(LOG_FILE_ENV).ok().map(PathBuf::from),
            console: true,
            format: LogFormat::Text,
            env_override: true,
        }
    }
}

impl LoggingConfig {
    pub fn new(level: String, file: Option<PathBuf>, console: bool, format: LogFormat) -> Self {
        Self {
            level,
            file,
            console,
            format,
            env_override: true,
        }
    }

    pub fn with_env_override(mut self, env_override: bool) -> Self {
        self.env_override = env_override;
        self
    }
}
