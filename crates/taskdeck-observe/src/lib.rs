mod logger;
pub use logger::{LogFormat, LoggerConfig, ObserveError, logger_init};
