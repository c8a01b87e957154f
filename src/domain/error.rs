use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A required request field is missing or empty.
    #[error("validation: {0}")]
    Validation(String),

    /// No record in the collection matches the given id.
    #[error("no entry found with the given ID")]
    NotFound,

    /// The record store is unreachable or rejected the operation.
    #[error("record store: {0}")]
    Backend(String),

    #[error("serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        Self::Backend(err.to_string())
    }
}
