use thiserror::Error;

/// Top-level error type used across the entire workspace.
#[derive(Debug, Error)]
pub enum BattError {
    #[error("config error: {0}")]
    Config(String),

    #[error("icon error: {0}")]
    Icon(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("system error: {0}")]
    System(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = BattError> = std::result::Result<T, E>;
