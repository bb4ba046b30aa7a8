//! Error types for the trivia domain

use crate::{CategoryId, QuestionId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TriviaError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriviaError {
    #[error("Question not found: {0}")]
    QuestionNotFound(QuestionId),

    #[error("Category not found: {0}")]
    CategoryNotFound(CategoryId),

    /// A new question references a category that does not exist
    #[error("Unknown category for new question: {0}")]
    UnknownCategory(CategoryId),

    #[error("Page {0} is out of range")]
    PageOutOfRange(u32),

    #[error("No questions match the search term")]
    NoMatches,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl TriviaError {
    pub fn invalid(message: impl Into<String>) -> Self {
        TriviaError::InvalidInput(message.into())
    }

    pub fn storage(error: impl std::fmt::Display) -> Self {
        TriviaError::Storage(error.to_string())
    }
}
