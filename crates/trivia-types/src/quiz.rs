//! Quiz round types

use crate::{CategoryId, QuestionId};
use serde::{Deserialize, Serialize};

/// One quiz round request (POST /quizzes).
///
/// The caller holds the session: every request carries the full list of
/// questions already asked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Vec<QuestionId>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

/// Category selection for a quiz.
///
/// Accepts a bare id (`2`) or the frontend's selection object
/// (`{"type": "Art", "id": "2"}`). Id `0` means every category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuizCategory {
    Id(CategoryKey),
    Selection {
        id: CategoryKey,
        #[serde(rename = "type", default)]
        kind: Option<String>,
    },
}

impl QuizCategory {
    pub fn key(&self) -> &CategoryKey {
        match self {
            QuizCategory::Id(key) => key,
            QuizCategory::Selection { id, .. } => id,
        }
    }
}

/// Category id as sent by clients: a number or a numeric string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryKey {
    Number(CategoryId),
    Text(String),
}
