//! Question handlers

use super::PageParams;
use crate::error::ApiError;
use crate::extractors::{IdPath, ValidJson, ValidQuery};
use crate::AppState;
use axum::{extract::State, Json};
use serde::Serialize;
use trivia_core::{Category, CategoryId, NewQuestion, Question, QuestionId, SearchRequest};

#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    categories: Vec<Category>,
    /// Plain listings span every category
    current_category: Option<CategoryId>,
}

pub async fn list(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<PageParams>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let listing = state.question_bank.list_questions(params.page()?).await?;

    Ok(Json(QuestionListResponse {
        success: true,
        questions: listing.page.questions,
        total_questions: listing.page.total_questions,
        categories: listing.categories,
        current_category: None,
    }))
}

#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    success: bool,
    questions: Question,
}

pub async fn get(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<QuestionResponse>, ApiError> {
    let question = state.question_bank.get_question(id).await?;

    Ok(Json(QuestionResponse {
        success: true,
        questions: question,
    }))
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    success: bool,
    deleted: QuestionId,
    questions: Vec<Question>,
    total_questions: usize,
}

pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidQuery(params): ValidQuery<PageParams>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let page = state
        .question_bank
        .delete_question(id, params.page()?)
        .await?;

    Ok(Json(DeleteResponse {
        success: true,
        deleted: id,
        questions: page.questions,
        total_questions: page.total_questions,
    }))
}

#[derive(Debug, Serialize)]
pub struct CreateResponse {
    success: bool,
    created: QuestionId,
    questions: Vec<Question>,
    total_questions: usize,
}

pub async fn create(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<PageParams>,
    ValidJson(new): ValidJson<NewQuestion>,
) -> Result<Json<CreateResponse>, ApiError> {
    let (question, page) = state
        .question_bank
        .create_question(&new, params.page()?)
        .await?;

    Ok(Json(CreateResponse {
        success: true,
        created: question.id,
        questions: page.questions,
        total_questions: page.total_questions,
    }))
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
}

pub async fn search(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<PageParams>,
    ValidJson(request): ValidJson<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let page = state
        .question_bank
        .search(&request, params.page()?)
        .await?;

    Ok(Json(SearchResponse {
        success: true,
        questions: page.questions,
        total_questions: page.total_questions,
    }))
}
