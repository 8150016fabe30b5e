use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaserecError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unknown vocabulary: {0}")]
    UnknownVocabulary(String),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, CaserecError>;
