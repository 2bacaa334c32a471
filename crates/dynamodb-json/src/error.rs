use thiserror::Error;

/// Errors at the text boundary. Decoding a parsed tree never fails.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
