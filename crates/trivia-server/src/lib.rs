//! Trivia API Server
//!
//! HTTP API for the trivia app: paginated question and category listings,
//! add/delete/search of questions, and quiz rounds.
//!
//! Uses SQLite (embedded) for storage.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod services;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use trivia_core::ports::TriviaStore;

pub use crate::config::ServerConfig;
pub use crate::error::ApiError;
use crate::services::{QuestionBank, QuizMaster};
use crate::storage::Database;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub question_bank: Arc<QuestionBank>,
    pub quiz_master: Arc<QuizMaster>,
}

impl AppState {
    pub fn new(store: Arc<dyn TriviaStore>, page_size: usize) -> Self {
        Self {
            question_bank: Arc::new(QuestionBank::new(store.clone(), page_size)),
            quiz_master: Arc::new(QuizMaster::new(store)),
        }
    }
}

/// Open the store described by `config`, seed it if asked, and build the router
pub async fn build_app(config: &ServerConfig) -> Result<Router> {
    config.validate()?;

    info!("Initializing SQLite database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to initialize database")?;

    if config.seed {
        storage::seed_if_empty(&db)
            .await
            .context("Failed to seed database")?;
    }

    let store: Arc<dyn TriviaStore> = Arc::new(db);
    Ok(router(AppState::new(store, config.page_size)))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        .route("/categories", get(handlers::categories::list))
        .route(
            "/categories/:id/questions",
            get(handlers::categories::questions),
        )
        .route(
            "/questions",
            get(handlers::questions::list).post(handlers::questions::create),
        )
        .route("/questions/search", post(handlers::questions::search))
        .route(
            "/questions/:id",
            get(handlers::questions::get).delete(handlers::questions::delete),
        )
        .route("/quizzes", post(handlers::quizzes::play))
        .route("/quiz", post(handlers::quizzes::play))
        .fallback(handlers::not_found)
        // Layers
        .layer(middleware::map_response(envelope_method_not_allowed))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Routing answers a wrong method with an empty 405; give it the error envelope
async fn envelope_method_not_allowed(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED || is_json(&response) {
        return response;
    }

    let allow = response.headers().get(header::ALLOW).cloned();
    let mut enveloped = ApiError::MethodNotAllowed.into_response();
    if let Some(allow) = allow {
        enveloped.headers_mut().insert(header::ALLOW, allow);
    }
    enveloped
}

fn is_json(response: &Response) -> bool {
    response.headers().get(header::CONTENT_TYPE)
        == Some(&HeaderValue::from_static("application/json"))
}
