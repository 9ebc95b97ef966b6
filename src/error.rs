use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Invalid grouping mode '{0}'. Valid modes: status, assignee, priority")]
    InvalidGroupingMode(String),

    #[error("Invalid sorting mode '{0}'. Valid modes: none, priority, title")]
    InvalidSortingMode(String),

    #[error("Malformed dataset: {0}")]
    MalformedDataset(String),

    #[error("Data source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
