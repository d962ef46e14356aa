use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid canonical name: {0:?}")]
    InvalidCanonicalName(String),
    #[error("invalid tag value: {0:?}")]
    InvalidTagValue(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
