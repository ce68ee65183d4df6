use crate::model::ProductId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("Product already exists: {0}")]
    DuplicateId(ProductId),

    #[error("Product not found: {0}")]
    NotFound(ProductId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Stored state under key '{key}' is malformed: {reason}")]
    MalformedState { key: String, reason: String },

    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Config error: {0}")]
    Config(String),
}

impl ShelfError {
    /// True for failures of the underlying key-value storage.
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            ShelfError::Io(_) | ShelfError::Serialization(_) | ShelfError::Persistence(_)
        )
    }

    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        ShelfError::Validation {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShelfError>;
