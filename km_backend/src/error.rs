use thiserror::Error;

pub type Result<T> = std::result::Result<T, ErrorBackend>;

#[derive(Debug, Error)]
pub enum ErrorBackend {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
