use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO_FAILURE: {0}")]
    Io(String),
    #[error("STORE_CORRUPT: {0}")]
    StoreCorrupt(String),
    #[error("NOT_FOUND: {0}")]
    NotFound(String),
    #[error("HOST_REJECTED: {0}")]
    Host(String),
    #[error("INVALID_ARGUMENT: {0}")]
    InvalidArgument(String),
    #[error("INVALID_RECORD: {0}")]
    InvalidRecord(String),
    #[error("UNKNOWN_COMMAND: {0}")]
    UnknownCommand(String),
    #[error("INTERNAL: {0}")]
    Internal(String),
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Internal(value.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
