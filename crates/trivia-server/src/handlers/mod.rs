//! HTTP handlers

pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;

pub use health::health;

use crate::error::ApiError;
use serde::Deserialize;
use trivia_core::validation::validate_page;

/// `?page=N` on list endpoints
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    page: Option<u32>,
}

impl PageParams {
    pub fn page(&self) -> Result<u32, ApiError> {
        Ok(validate_page(self.page)?)
    }
}

/// Fallback for unmatched routes
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
