//! Quiz rounds

use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;
use trivia_core::ports::TriviaStore;
use trivia_core::validation::quiz_filter;
use trivia_core::{next_question, CategoryFilter, QuestionId, QuizOutcome, QuizRequest, Result};

pub struct QuizMaster {
    store: Arc<dyn TriviaStore>,
}

impl QuizMaster {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    /// Pick the next unseen question for the caller's session
    pub async fn play(&self, request: &QuizRequest) -> Result<QuizOutcome> {
        let filter = quiz_filter(request)?;

        let candidates = match filter {
            CategoryFilter::All => self.store.list_questions().await?,
            CategoryFilter::Only(category) => self.store.questions_in_category(category).await?,
        };
        let seen: HashSet<QuestionId> = request.previous_questions.iter().copied().collect();

        let outcome = next_question(filter, &seen, &candidates);
        match &outcome {
            QuizOutcome::Next(question) => debug!(
                "Quiz {:?}: serving question {} ({} seen)",
                filter,
                question.id,
                seen.len()
            ),
            QuizOutcome::Exhausted => debug!("Quiz {:?}: no unseen questions left", filter),
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{seed_if_empty, Database};
    use tokio_test::assert_ok;
    use trivia_core::{CategoryKey, QuizCategory};

    async fn seeded_master() -> QuizMaster {
        let db = assert_ok!(Database::connect("sqlite::memory:").await);
        assert_ok!(seed_if_empty(&db).await);
        QuizMaster::new(Arc::new(db))
    }

    fn round(previous: Vec<QuestionId>, category: Option<i64>) -> QuizRequest {
        QuizRequest {
            previous_questions: previous,
            quiz_category: category.map(|id| QuizCategory::Id(CategoryKey::Number(id))),
        }
    }

    #[tokio::test]
    async fn test_category_round_skips_previous() {
        let master = seeded_master().await;

        for _ in 0..20 {
            match assert_ok!(master.play(&round(vec![14], Some(2))).await) {
                QuizOutcome::Next(q) => {
                    assert_ne!(q.id, 14);
                    assert_eq!(q.category, 2);
                }
                QuizOutcome::Exhausted => panic!("art still has unseen questions"),
            }
        }
    }

    #[tokio::test]
    async fn test_category_exhausted() {
        let master = seeded_master().await;
        let outcome = assert_ok!(master.play(&round(vec![12, 13, 14, 15], Some(2))).await);
        assert_eq!(outcome, QuizOutcome::Exhausted);
    }

    #[tokio::test]
    async fn test_unknown_category_is_exhausted() {
        let master = seeded_master().await;
        let outcome = assert_ok!(master.play(&round(vec![], Some(50))).await);
        assert_eq!(outcome, QuizOutcome::Exhausted);
    }

    #[tokio::test]
    async fn test_all_categories() {
        let master = seeded_master().await;
        let seen: Vec<QuestionId> = (1..=18).collect();

        match assert_ok!(master.play(&round(seen, None)).await) {
            QuizOutcome::Next(q) => assert_eq!(q.id, 19),
            QuizOutcome::Exhausted => panic!("question 19 is unseen"),
        }
    }
}
