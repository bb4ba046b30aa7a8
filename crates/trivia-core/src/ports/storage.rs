//! Storage traits for persistence

use crate::{Category, CategoryId, NewQuestion, Question, QuestionId, Result};
use async_trait::async_trait;

/// Question store
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// All questions ordered by id
    async fn list_questions(&self) -> Result<Vec<Question>>;
    async fn questions_in_category(&self, category: CategoryId) -> Result<Vec<Question>>;
    /// Case-insensitive substring match on question text, ordered by id
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>>;
    async fn get_question(&self, id: QuestionId) -> Result<Option<Question>>;
    /// Insert and return the stored record with its assigned id
    async fn insert_question(&self, question: &NewQuestion) -> Result<Question>;
    /// Returns false if no such question existed
    async fn delete_question(&self, id: QuestionId) -> Result<bool>;
    async fn count_questions(&self) -> Result<usize>;
}

/// Category store
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// All categories ordered by id
    async fn list_categories(&self) -> Result<Vec<Category>>;
    async fn get_category(&self, id: CategoryId) -> Result<Option<Category>>;
    async fn insert_category(&self, kind: &str) -> Result<Category>;
}

/// Everything the trivia services need from a backend
pub trait TriviaStore: QuestionStore + CategoryStore {}

impl<T: QuestionStore + CategoryStore> TriviaStore for T {}
