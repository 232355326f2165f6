use thiserror::Error;

#[derive(Error, Debug)]
pub enum HealthError {
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("malformed score file: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("no usable data directory")]
    DataDir,

    #[error("invalid colour literal: {0}")]
    InvalidColour(String),
}
