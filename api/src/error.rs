use thiserror::Error;

/// Failure reported by a [`crate::ContentRepository`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("content source unavailable: {0}")]
    Unavailable(String),
}
