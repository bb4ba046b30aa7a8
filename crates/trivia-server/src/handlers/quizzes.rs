//! Quiz handler

use crate::error::ApiError;
use crate::extractors::ValidJson;
use crate::AppState;
use axum::{extract::State, Json};
use serde::Serialize;
use trivia_core::{Question, QuizOutcome, QuizRequest};

/// `{success, quiz}` while questions remain, `{success, questions_left: null}` once exhausted
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum QuizResponse {
    Next {
        success: bool,
        quiz: Question,
    },
    Exhausted {
        success: bool,
        questions_left: Option<usize>,
    },
}

pub async fn play(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let response = match state.quiz_master.play(&request).await? {
        QuizOutcome::Next(quiz) => QuizResponse::Next {
            success: true,
            quiz,
        },
        QuizOutcome::Exhausted => QuizResponse::Exhausted {
            success: true,
            questions_left: None,
        },
    };

    Ok(Json(response))
}
