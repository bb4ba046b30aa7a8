//! Question and category listing, search, add and delete

use std::sync::Arc;
use tracing::{debug, info};
use trivia_core::ports::TriviaStore;
use trivia_core::validation::{validate_new_question, validate_search};
use trivia_core::{
    paginate, Category, CategoryId, NewQuestion, Question, QuestionId, Result, SearchRequest,
    TriviaError,
};

/// One page of categories
#[derive(Debug, Clone)]
pub struct CategoryPage {
    pub categories: Vec<Category>,
    pub total_categories: usize,
}

/// One page of questions plus the size of the full selection
#[derive(Debug, Clone)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Clone)]
pub struct QuestionListing {
    pub page: QuestionPage,
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone)]
pub struct CategoryQuestions {
    pub page: QuestionPage,
    pub category: Category,
}

pub struct QuestionBank {
    store: Arc<dyn TriviaStore>,
    page_size: usize,
}

impl QuestionBank {
    pub fn new(store: Arc<dyn TriviaStore>, page_size: usize) -> Self {
        Self { store, page_size }
    }

    pub async fn list_categories(&self, page: u32) -> Result<CategoryPage> {
        let all = self.store.list_categories().await?;
        let categories = paginate(&all, page, self.page_size).to_vec();
        if categories.is_empty() {
            return Err(TriviaError::PageOutOfRange(page));
        }

        Ok(CategoryPage {
            categories,
            total_categories: all.len(),
        })
    }

    pub async fn list_questions(&self, page: u32) -> Result<QuestionListing> {
        let all = self.store.list_questions().await?;
        let page = self.non_empty_page(&all, page)?;
        let categories = self.store.list_categories().await?;

        Ok(QuestionListing { page, categories })
    }

    pub async fn get_question(&self, id: QuestionId) -> Result<Question> {
        self.store
            .get_question(id)
            .await?
            .ok_or(TriviaError::QuestionNotFound(id))
    }

    /// Store a new question and return it with the requested page of all questions
    pub async fn create_question(
        &self,
        new: &NewQuestion,
        page: u32,
    ) -> Result<(Question, QuestionPage)> {
        validate_new_question(new)?;

        if self.store.get_category(new.category).await?.is_none() {
            return Err(TriviaError::UnknownCategory(new.category));
        }

        let question = self.store.insert_question(new).await?;
        info!(
            "Created question {} in category {}",
            question.id, question.category
        );

        let page = self.page_of_all(page).await?;
        Ok((question, page))
    }

    /// Delete a question and return the requested page of what remains.
    /// The page may be empty.
    pub async fn delete_question(&self, id: QuestionId, page: u32) -> Result<QuestionPage> {
        if !self.store.delete_question(id).await? {
            return Err(TriviaError::QuestionNotFound(id));
        }
        info!("Deleted question {}", id);

        self.page_of_all(page).await
    }

    pub async fn search(&self, request: &SearchRequest, page: u32) -> Result<QuestionPage> {
        let term = validate_search(request)?;
        let matches = self.store.search_questions(term).await?;
        debug!("Search {:?} matched {} questions", term, matches.len());

        let questions = paginate(&matches, page, self.page_size).to_vec();
        if questions.is_empty() {
            return Err(TriviaError::NoMatches);
        }

        Ok(QuestionPage {
            questions,
            total_questions: matches.len(),
        })
    }

    pub async fn questions_in_category(
        &self,
        id: CategoryId,
        page: u32,
    ) -> Result<CategoryQuestions> {
        let category = self
            .store
            .get_category(id)
            .await?
            .ok_or(TriviaError::CategoryNotFound(id))?;

        let questions = self.store.questions_in_category(id).await?;
        let page = self.non_empty_page(&questions, page)?;

        Ok(CategoryQuestions { page, category })
    }

    async fn page_of_all(&self, page: u32) -> Result<QuestionPage> {
        let all = self.store.list_questions().await?;
        Ok(QuestionPage {
            questions: paginate(&all, page, self.page_size).to_vec(),
            total_questions: all.len(),
        })
    }

    fn non_empty_page(&self, selection: &[Question], page: u32) -> Result<QuestionPage> {
        let questions = paginate(selection, page, self.page_size).to_vec();
        if questions.is_empty() {
            return Err(TriviaError::PageOutOfRange(page));
        }

        Ok(QuestionPage {
            questions,
            total_questions: selection.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{seed_if_empty, Database};
    use tokio_test::assert_ok;

    async fn seeded_bank() -> QuestionBank {
        let db = assert_ok!(Database::connect("sqlite::memory:").await);
        assert_ok!(seed_if_empty(&db).await);
        QuestionBank::new(Arc::new(db), 10)
    }

    fn new_question(category: CategoryId, difficulty: i32) -> NewQuestion {
        NewQuestion {
            question: "how are you?".to_string(),
            answer: "good".to_string(),
            category,
            difficulty,
        }
    }

    #[tokio::test]
    async fn test_question_pages() {
        let bank = seeded_bank().await;

        let first = assert_ok!(bank.list_questions(1).await);
        assert_eq!(first.page.questions.len(), 10);
        assert_eq!(first.page.total_questions, 19);
        assert_eq!(first.categories.len(), 6);

        let second = assert_ok!(bank.list_questions(2).await);
        assert_eq!(second.page.questions.len(), 9);

        assert_eq!(
            bank.list_questions(3).await.unwrap_err(),
            TriviaError::PageOutOfRange(3)
        );
    }

    #[tokio::test]
    async fn test_category_pages() {
        let bank = seeded_bank().await;

        let page = assert_ok!(bank.list_categories(1).await);
        assert_eq!(page.total_categories, 6);
        assert_eq!(page.categories[1].kind, "Art");
        assert!(bank.list_categories(2).await.is_err());
    }

    #[tokio::test]
    async fn test_create_question() {
        let bank = seeded_bank().await;

        let (created, page) = assert_ok!(bank.create_question(&new_question(1, 1), 2).await);
        assert_eq!(created.id, 20);
        assert_eq!(page.total_questions, 20);
        assert_eq!(page.questions.last(), Some(&created));

        assert_eq!(
            bank.create_question(&new_question(50, 1), 1).await.unwrap_err(),
            TriviaError::UnknownCategory(50)
        );
        assert!(matches!(
            bank.create_question(&new_question(1, 9), 1).await,
            Err(TriviaError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_question() {
        let bank = seeded_bank().await;

        let page = assert_ok!(bank.delete_question(3, 1).await);
        assert_eq!(page.total_questions, 18);
        assert!(page.questions.iter().all(|q| q.id != 3));

        assert_eq!(
            bank.get_question(3).await.unwrap_err(),
            TriviaError::QuestionNotFound(3)
        );
        assert_eq!(
            bank.delete_question(3, 1).await.unwrap_err(),
            TriviaError::QuestionNotFound(3)
        );
    }

    #[tokio::test]
    async fn test_search() {
        let bank = seeded_bank().await;
        let search = |term: &str| SearchRequest {
            search_term: term.to_string(),
        };

        // "title" and "entitled"
        let found = assert_ok!(bank.search(&search("TITLE"), 1).await);
        assert_eq!(found.total_questions, 2);
        assert!(found
            .questions
            .iter()
            .all(|q| q.question.to_lowercase().contains("title")));

        assert_eq!(
            bank.search(&search("zzzznomatch"), 1).await.unwrap_err(),
            TriviaError::NoMatches
        );
    }

    #[tokio::test]
    async fn test_questions_in_category() {
        let bank = seeded_bank().await;

        let art = assert_ok!(bank.questions_in_category(2, 1).await);
        assert_eq!(art.category.kind, "Art");
        assert_eq!(art.page.total_questions, 4);

        assert_eq!(
            bank.questions_in_category(50, 1).await.unwrap_err(),
            TriviaError::CategoryNotFound(50)
        );
    }
}
