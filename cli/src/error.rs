use thiserror::Error;

pub(crate) type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("certificate error: {0}")]
    Certs(#[from] certs::error::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
