//! Sample trivia data loaded into an empty store

use anyhow::{Context, Result};
use trivia_core::ports::TriviaStore;
use trivia_core::NewQuestion;

const CATEGORIES: &[&str] = &[
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// (question, answer, difficulty, category position in CATEGORIES, 1-based)
const QUESTIONS: &[(&str, &str, i32, usize)] = &[
    (
        "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?",
        "Apollo 13",
        4,
        5,
    ),
    (
        "What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?",
        "Tom Cruise",
        4,
        5,
    ),
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 2, 4),
    (
        "What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?",
        "Edward Scissorhands",
        3,
        5,
    ),
    ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 1, 4),
    ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 3, 6),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 4, 6),
    ("Who invented Peanut Butter?", "George Washington Carver", 2, 4),
    ("What is the largest lake in Africa?", "Lake Victoria", 2, 3),
    ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
    ("The Taj Mahal is located in which Indian city?", "Agra", 2, 3),
    ("Which Dutch graphic artist-initials M C was a creator of optical illusions?", "Escher", 1, 2),
    ("La Giaconda is better known as what?", "Mona Lisa", 3, 2),
    ("How many paintings did Van Gogh sell in his lifetime?", "One", 4, 2),
    (
        "Which American artist was a pioneer of Abstract Expressionism, and a leading exponent of action painting?",
        "Jackson Pollock",
        2,
        2,
    ),
    ("What is the heaviest organ in the human body?", "The Liver", 4, 1),
    ("Who discovered penicillin?", "Alexander Fleming", 3, 1),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", 4, 1),
    ("Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, 4),
];

/// Seed categories and questions unless the store already holds data.
/// Returns whether anything was inserted.
pub async fn seed_if_empty(store: &dyn TriviaStore) -> Result<bool> {
    let has_categories = !store
        .list_categories()
        .await
        .context("Failed to inspect categories")?
        .is_empty();
    let has_questions = store
        .count_questions()
        .await
        .context("Failed to count questions")?
        > 0;
    if has_categories || has_questions {
        tracing::info!("Store already populated, skipping seed data");
        return Ok(false);
    }

    let mut category_ids = Vec::with_capacity(CATEGORIES.len());
    for kind in CATEGORIES {
        let category = store
            .insert_category(kind)
            .await
            .with_context(|| format!("Failed to seed category {}", kind))?;
        category_ids.push(category.id);
    }

    for (question, answer, difficulty, position) in QUESTIONS {
        let new = NewQuestion {
            question: question.to_string(),
            answer: answer.to_string(),
            category: category_ids[position - 1],
            difficulty: *difficulty,
        };
        store
            .insert_question(&new)
            .await
            .with_context(|| format!("Failed to seed question {:?}", question))?;
    }

    tracing::info!(
        "Seeded {} categories and {} questions",
        CATEGORIES.len(),
        QUESTIONS.len()
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Database;
    use tokio_test::assert_ok;
    use trivia_core::ports::{CategoryStore, QuestionStore};

    #[tokio::test]
    async fn test_seed_runs_once() {
        let db = assert_ok!(Database::connect("sqlite::memory:").await);

        assert!(assert_ok!(seed_if_empty(&db).await));
        assert!(!assert_ok!(seed_if_empty(&db).await));

        assert_eq!(assert_ok!(db.count_questions().await), 19);
        assert_eq!(assert_ok!(db.list_categories().await).len(), 6);
    }

    #[tokio::test]
    async fn test_seeded_art_category() {
        let db = assert_ok!(Database::connect("sqlite::memory:").await);
        assert_ok!(seed_if_empty(&db).await);

        let art = assert_ok!(db.questions_in_category(2).await);
        assert_eq!(art.len(), 4);
        assert!(art.iter().any(|q| q.id == 14));
    }
}
