//! Trivia Types - Pure type definitions shared by the store, the domain core
//! and the HTTP layer.
//!
//! Field names follow the JSON wire format the trivia frontend expects.

pub mod category;
pub mod question;
pub mod quiz;

pub use category::*;
pub use question::*;
pub use quiz::*;

/// Store-assigned question identifier
pub type QuestionId = i64;

/// Category identifier
pub type CategoryId = i64;
