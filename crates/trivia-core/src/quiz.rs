//! Quiz question selection
//!
//! Selection is stateless: the caller passes the ids it has already been
//! shown on every round, and exhaustion is an ordinary outcome rather than
//! an error.

use crate::{CategoryId, Question, QuestionId};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Which categories a quiz draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(CategoryId),
}

impl CategoryFilter {
    pub fn admits(&self, category: CategoryId) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(id) => *id == category,
        }
    }
}

/// Result of one quiz round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOutcome {
    Next(Question),
    /// No unseen question remains for the filter
    Exhausted,
}

/// Pick a random unseen question admitted by `filter`
pub fn next_question(
    filter: CategoryFilter,
    previously_seen: &HashSet<QuestionId>,
    candidates: &[Question],
) -> QuizOutcome {
    next_question_with(filter, previously_seen, candidates, &mut rand::thread_rng())
}

/// [`next_question`] with an explicit random source
pub fn next_question_with<R: Rng + ?Sized>(
    filter: CategoryFilter,
    previously_seen: &HashSet<QuestionId>,
    candidates: &[Question],
    rng: &mut R,
) -> QuizOutcome {
    let unseen: Vec<&Question> = candidates
        .iter()
        .filter(|q| filter.admits(q.category) && !previously_seen.contains(&q.id))
        .collect();

    match unseen.choose(rng) {
        Some(question) => QuizOutcome::Next((*question).clone()),
        None => QuizOutcome::Exhausted,
    }
}
