use std::str::FromStr;

use thiserror::Error;
use time::{UtcOffset, format_description::well_known::Rfc3339};
use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter, fmt, fmt::time::OffsetTime, layer::SubscriberExt, util::SubscriberInitExt,
};

#[derive(Debug, Error)]
pub enum ObserveError {
    #[error("invalid log format: {0} (expected: text|json)")]
    InvalidFormat(String),
    #[error("invalid log level: {0}")]
    InvalidLevel(String),
    #[error("logger has already been initialized")]
    AlreadyInitialized,
    #[error("failed to initialize logger: {0}")]
    InitFailed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ObserveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase();
        match norm.as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(ObserveError::InvalidFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// EnvFilter directive string, e.g. `"info"` or `"taskdeck_core=debug"`.
    pub level: String,
    pub format: LogFormat,
    pub with_targets: bool,
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        let use_color = cfg!(test) || atty::is(atty::Stream::Stdout);
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
            with_targets: true,
            use_color,
        }
    }
}

/// Install the global tracing subscriber.
pub fn logger_init(cfg: &LoggerConfig) -> Result<(), ObserveError> {
    let filter =
        EnvFilter::try_new(&cfg.level).map_err(|_| ObserveError::InvalidLevel(cfg.level.clone()))?;
    let timer = OffsetTime::new(
        UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC),
        Rfc3339,
    );

    match cfg.format {
        LogFormat::Text => {
            let layer = fmt::layer()
                .with_ansi(cfg.use_color)
                .with_target(cfg.with_targets)
                .with_timer(timer);
            init_with(tracing_subscriber::registry().with(filter).with(layer))
        }
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_ansi(false)
                .with_target(cfg.with_targets)
                .with_timer(timer);
            init_with(tracing_subscriber::registry().with(filter).with(layer))
        }
    }
}

fn init_with<S>(subscriber: S) -> Result<(), ObserveError>
where
    S: Subscriber + Send + Sync + 'static,
{
    subscriber.try_init().map_err(|e| {
        let s = e.to_string();
        if s.contains("already been set") {
            ObserveError::AlreadyInitialized
        } else {
            ObserveError::InitFailed(s)
        }
    })
}
