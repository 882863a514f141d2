use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Stored snapshot is not valid JSON: {0}")]
    MalformedSnapshot(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, SessionError>;
