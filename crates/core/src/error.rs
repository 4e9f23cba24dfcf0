use thiserror::Error;

/// Top-level error type used across the entire application.
///
/// Deliberately small: an unreadable temperature sensor is *not* an error
/// (it degrades to an absent reading), and nothing here is fatal — export
/// failures are reported and the sampling loop carries on.
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = MonitorError> = std::result::Result<T, E>;
