use thiserror::Error;

#[derive(Debug, Error)]
pub enum VqliteError {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("vectors_tag length mismatch: vectors={vectors}, tags={tags}")]
    TagMismatch { vectors: usize, tags: usize },
}
