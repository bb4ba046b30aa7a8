//! Request validation
//!
//! Schema shape is enforced by serde; these checks cover the value rules
//! serde cannot express.

use crate::quiz::CategoryFilter;
use crate::{CategoryKey, NewQuestion, QuizRequest, Result, SearchRequest, TriviaError};

pub const MIN_DIFFICULTY: i32 = 1;
pub const MAX_DIFFICULTY: i32 = 5;

pub fn validate_new_question(new: &NewQuestion) -> Result<()> {
    if new.question.trim().is_empty() {
        return Err(TriviaError::invalid("question text must not be blank"));
    }
    if new.answer.trim().is_empty() {
        return Err(TriviaError::invalid("answer text must not be blank"));
    }
    if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&new.difficulty) {
        return Err(TriviaError::invalid(format!(
            "difficulty must be between {} and {}, got {}",
            MIN_DIFFICULTY, MAX_DIFFICULTY, new.difficulty
        )));
    }
    Ok(())
}

/// Returns the trimmed search term
pub fn validate_search(request: &SearchRequest) -> Result<&str> {
    let term = request.search_term.trim();
    if term.is_empty() {
        return Err(TriviaError::invalid("search_term must not be blank"));
    }
    Ok(term)
}

pub fn validate_page(page: Option<u32>) -> Result<u32> {
    match page {
        None => Ok(1),
        Some(0) => Err(TriviaError::invalid("page numbers start at 1")),
        Some(page) => Ok(page),
    }
}

/// Resolve the quiz category selection. Missing or id 0 means all categories.
pub fn quiz_filter(request: &QuizRequest) -> Result<CategoryFilter> {
    let Some(category) = &request.quiz_category else {
        return Ok(CategoryFilter::All);
    };

    let id = match category.key() {
        CategoryKey::Number(id) => *id,
        CategoryKey::Text(text) => text.trim().parse().map_err(|_| {
            TriviaError::invalid(format!("quiz_category id is not a number: {:?}", text))
        })?,
    };

    Ok(match id {
        0 => CategoryFilter::All,
        id => CategoryFilter::Only(id),
    })
}
