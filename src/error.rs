use thiserror::Error;

pub type Result<T> = std::result::Result<T, DispatchError>;

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid request: {0}")]
    ValidationError(String),
    #[error("No handler registered for '{0}'")]
    UnknownRouteError(String),
    #[error("Duplicate handler registered for '{0}'")]
    DuplicateRouteError(String),
}
