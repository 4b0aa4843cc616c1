use thiserror::Error;
pub type Result<T> = std::result::Result<T, ErrorCli>;

#[derive(Error, Debug)]
pub enum ErrorCli {
    #[error(transparent)]
    Core(#[from] km_core::error::ErrorCore),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Could not connect to server at {0} — is it running?")]
    ConnectionRefused(String),
}
