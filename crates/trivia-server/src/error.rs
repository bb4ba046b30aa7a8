//! HTTP error envelope
//!
//! Every failure is reported as `{success: false, error: <status>, message}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, error};
use trivia_core::TriviaError;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    #[error("Bad Request")]
    BadRequest,

    #[error("resource not found")]
    NotFound,

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("Unprocessable Entity")]
    UnprocessableEntity,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::UnprocessableEntity => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({
            "success": false,
            "error": status.as_u16(),
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}

impl From<TriviaError> for ApiError {
    fn from(e: TriviaError) -> Self {
        match e {
            TriviaError::InvalidInput(reason) => {
                debug!("Rejected request: {}", reason);
                ApiError::BadRequest
            }
            TriviaError::QuestionNotFound(_)
            | TriviaError::CategoryNotFound(_)
            | TriviaError::PageOutOfRange(_)
            | TriviaError::NoMatches => {
                debug!("{}", e);
                ApiError::NotFound
            }
            TriviaError::UnknownCategory(id) => {
                debug!("New question references unknown category {}", id);
                ApiError::UnprocessableEntity
            }
            TriviaError::Storage(reason) => {
                error!("Storage failure: {}", reason);
                ApiError::UnprocessableEntity
            }
        }
    }
}
