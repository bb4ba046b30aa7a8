//! Category handlers

use super::PageParams;
use crate::error::ApiError;
use crate::extractors::{IdPath, ValidQuery};
use crate::AppState;
use axum::{extract::State, Json};
use serde::Serialize;
use trivia_core::{Category, CategoryId, Question};

#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    success: bool,
    categories: Vec<Category>,
    total_categories: usize,
}

pub async fn list(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<PageParams>,
) -> Result<Json<CategoryListResponse>, ApiError> {
    let page = state.question_bank.list_categories(params.page()?).await?;

    Ok(Json(CategoryListResponse {
        success: true,
        categories: page.categories,
        total_categories: page.total_categories,
    }))
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: CategoryId,
}

pub async fn questions(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidQuery(params): ValidQuery<PageParams>,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let listing = state
        .question_bank
        .questions_in_category(id, params.page()?)
        .await?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: listing.page.questions,
        total_questions: listing.page.total_questions,
        current_category: listing.category.id,
    }))
}
