//! Trivia Core Library
//!
//! Domain logic for the trivia API: pagination, quiz selection, request
//! validation and the storage ports the server implements.

// Re-export pure types from trivia-types
pub use trivia_types::*;

pub mod error;
pub mod paging;
pub mod ports;
pub mod quiz;
pub mod validation;

pub use error::{Result, TriviaError};
pub use paging::{page_count, paginate};
pub use quiz::{next_question, next_question_with, CategoryFilter, QuizOutcome};
