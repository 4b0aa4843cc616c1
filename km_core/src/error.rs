use thiserror::Error;

#[derive(Debug, Error)]
pub enum ErrorCore {
    #[error("Failed to parse JSON {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),
}
