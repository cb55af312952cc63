use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecoveryError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Summary statistics requested on an empty result set")]
    EmptyResultSet,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type RecoveryResult<T> = Result<T, RecoveryError>;
