//! SQLite database layer (embedded, no external dependencies)

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::str::FromStr;
use trivia_core::ports::{CategoryStore, QuestionStore};
use trivia_core::{Category, CategoryId, NewQuestion, Question, QuestionId, TriviaError};

#[derive(Debug)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to `database_url` (`sqlite://path/to.db` or `sqlite::memory:`)
    /// and create the schema if needed.
    pub async fn connect(database_url: &str) -> Result<Self> {
        tracing::info!("Opening SQLite database at: {}", database_url);

        if !database_url.starts_with("sqlite:") {
            anyhow::bail!("Unsupported database URL (expected sqlite:): {}", database_url);
        }

        let in_memory = is_in_memory(database_url);
        let mut options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("Invalid database URL: {}", database_url))?
            .create_if_missing(true);

        let mut pool_options = SqlitePoolOptions::new();
        if in_memory {
            // Every connection to :memory: is a separate database
            pool_options = pool_options
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        } else {
            // Create parent directory if needed
            let parent = database_file(database_url)
                .and_then(|path| path.parent().map(PathBuf::from))
                .filter(|parent| !parent.as_os_str().is_empty());
            if let Some(parent) = parent {
                tracing::info!("Creating parent directory: {}", parent.display());
                tokio::fs::create_dir_all(&parent).await.with_context(|| {
                    format!("Failed to create database directory: {}", parent.display())
                })?;
            }
            options = options.journal_mode(SqliteJournalMode::Wal);
            pool_options = pool_options.max_connections(5);
        }

        let pool = pool_options
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to connect to SQLite database at: {}", database_url))?;

        tracing::info!("SQLite connection established, running migrations...");

        Self::run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;

        tracing::info!("Database initialization complete");

        Ok(Self { pool })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS categories (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                type TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        // AUTOINCREMENT keeps deleted ids from being handed out again
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS questions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                question TEXT NOT NULL,
                answer TEXT NOT NULL,
                category INTEGER NOT NULL,
                difficulty INTEGER NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_questions_category ON questions (category)
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl QuestionStore for Database {
    async fn list_questions(&self) -> trivia_core::Result<Vec<Question>> {
        let rows: Vec<QuestionRow> = sqlx::query_as(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(TriviaError::storage)?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn questions_in_category(
        &self,
        category: CategoryId,
    ) -> trivia_core::Result<Vec<Question>> {
        let rows: Vec<QuestionRow> = sqlx::query_as(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions WHERE category = ?1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await
        .map_err(TriviaError::storage)?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn search_questions(&self, term: &str) -> trivia_core::Result<Vec<Question>> {
        // Unicode case folding; SQLite LIKE only folds ASCII
        let needle = term.to_lowercase();

        let rows: Vec<QuestionRow> = sqlx::query_as(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(TriviaError::storage)?;

        Ok(rows
            .into_iter()
            .filter(|r| r.question.to_lowercase().contains(&needle))
            .map(|r| r.into())
            .collect())
    }

    async fn get_question(&self, id: QuestionId) -> trivia_core::Result<Option<Question>> {
        let row: Option<QuestionRow> = sqlx::query_as(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(TriviaError::storage)?;

        Ok(row.map(|r| r.into()))
    }

    async fn insert_question(&self, question: &NewQuestion) -> trivia_core::Result<Question> {
        let result = sqlx::query(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .execute(&self.pool)
        .await
        .map_err(TriviaError::storage)?;

        Ok(question.clone().with_id(result.last_insert_rowid()))
    }

    async fn delete_question(&self, id: QuestionId) -> trivia_core::Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM questions WHERE id = ?1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(TriviaError::storage)?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_questions(&self) -> trivia_core::Result<usize> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await
            .map_err(TriviaError::storage)?;

        Ok(count.max(0) as usize)
    }
}

#[async_trait]
impl CategoryStore for Database {
    async fn list_categories(&self) -> trivia_core::Result<Vec<Category>> {
        let rows: Vec<CategoryRow> = sqlx::query_as(
            r#"
            SELECT id, type FROM categories ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(TriviaError::storage)?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn get_category(&self, id: CategoryId) -> trivia_core::Result<Option<Category>> {
        let row: Option<CategoryRow> = sqlx::query_as(
            r#"
            SELECT id, type FROM categories WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(TriviaError::storage)?;

        Ok(row.map(|r| r.into()))
    }

    async fn insert_category(&self, kind: &str) -> trivia_core::Result<Category> {
        let result = sqlx::query(
            r#"
            INSERT INTO categories (type) VALUES (?1)
            "#,
        )
        .bind(kind)
        .execute(&self.pool)
        .await
        .map_err(TriviaError::storage)?;

        Ok(Category::new(result.last_insert_rowid(), kind))
    }
}

// Helper structs for sqlx query_as
#[derive(sqlx::FromRow)]
struct QuestionRow {
    id: i64,
    question: String,
    answer: String,
    category: i64,
    difficulty: i32,
}

impl From<QuestionRow> for Question {
    fn from(r: QuestionRow) -> Self {
        Question {
            id: r.id,
            question: r.question,
            answer: r.answer,
            category: r.category,
            difficulty: r.difficulty,
        }
    }
}

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: i64,
    #[sqlx(rename = "type")]
    kind: String,
}

impl From<CategoryRow> for Category {
    fn from(r: CategoryRow) -> Self {
        Category::new(r.id, r.kind)
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

fn database_file(database_url: &str) -> Option<PathBuf> {
    let path = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return None;
    }
    Some(PathBuf::from(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    async fn memory_db() -> Database {
        assert_ok!(Database::connect("sqlite::memory:").await)
    }

    fn new_question(question: &str, category: CategoryId) -> NewQuestion {
        NewQuestion {
            question: question.to_string(),
            answer: "answer".to_string(),
            category,
            difficulty: 2,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let db = memory_db().await;

        let first = assert_ok!(db.insert_question(&new_question("first?", 1)).await);
        let second = assert_ok!(db.insert_question(&new_question("second?", 1)).await);
        assert!(second.id > first.id);

        let listed = assert_ok!(db.list_questions().await);
        assert_eq!(listed, vec![first, second]);
        assert_eq!(assert_ok!(db.count_questions().await), 2);
    }

    #[tokio::test]
    async fn test_delete_is_visible_and_ids_are_not_reused() {
        let db = memory_db().await;

        let first = assert_ok!(db.insert_question(&new_question("first?", 1)).await);
        let second = assert_ok!(db.insert_question(&new_question("second?", 1)).await);

        assert!(assert_ok!(db.delete_question(second.id).await));
        assert!(!assert_ok!(db.delete_question(second.id).await));
        assert_eq!(assert_ok!(db.get_question(second.id).await), None);

        let third = assert_ok!(db.insert_question(&new_question("third?", 1)).await);
        assert!(third.id > second.id);
        assert_eq!(
            assert_ok!(db.list_questions().await)
                .iter()
                .map(|q| q.id)
                .collect::<Vec<_>>(),
            vec![first.id, third.id]
        );
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_and_literal() {
        let db = memory_db().await;

        assert_ok!(db.insert_question(&new_question("What is the TITLE of it?", 1)).await);
        assert_ok!(db.insert_question(&new_question("Who won 100% of games?", 1)).await);
        assert_ok!(db.insert_question(&new_question("Nothing here", 1)).await);

        assert_eq!(assert_ok!(db.search_questions("title").await).len(), 1);
        assert_eq!(assert_ok!(db.search_questions("100%").await).len(), 1);
        assert_eq!(assert_ok!(db.search_questions("%").await).len(), 1);
        assert!(assert_ok!(db.search_questions("zzzznomatch").await).is_empty());
    }

    #[tokio::test]
    async fn test_search_folds_non_ascii_case() {
        let db = memory_db().await;

        let summer = assert_ok!(db.insert_question(&new_question("Qui a peint l'Été?", 1)).await);
        assert_ok!(db.insert_question(&new_question("Who painted winter?", 1)).await);

        assert_eq!(assert_ok!(db.search_questions("été").await), vec![summer.clone()]);
        assert_eq!(assert_ok!(db.search_questions("ÉTÉ").await), vec![summer]);
    }

    #[tokio::test]
    async fn test_category_filter_and_lookup() {
        let db = memory_db().await;

        let science = assert_ok!(db.insert_category("Science").await);
        let art = assert_ok!(db.insert_category("Art").await);
        assert_ok!(db.insert_question(&new_question("liver?", science.id)).await);
        assert_ok!(db.insert_question(&new_question("escher?", art.id)).await);
        assert_ok!(db.insert_question(&new_question("pollock?", art.id)).await);

        let in_art = assert_ok!(db.questions_in_category(art.id).await);
        assert_eq!(in_art.len(), 2);
        assert!(in_art.iter().all(|q| q.category == art.id));

        assert_eq!(assert_ok!(db.get_category(art.id).await), Some(art.clone()));
        assert_eq!(assert_ok!(db.get_category(99).await), None);
        assert_eq!(assert_ok!(db.list_categories().await), vec![science, art]);
    }

    #[tokio::test]
    async fn test_invalid_url_is_rejected() {
        assert_err!(Database::connect("postgres://localhost/trivia").await);
    }

    #[test]
    fn test_database_file_from_url() {
        assert_eq!(
            database_file("sqlite://data/trivia.db"),
            Some(PathBuf::from("data/trivia.db"))
        );
        assert_eq!(
            database_file("sqlite:trivia.db?mode=rwc"),
            Some(PathBuf::from("trivia.db"))
        );
        assert!(is_in_memory("sqlite::memory:"));
        assert!(!is_in_memory("sqlite://data/trivia.db"));
    }
}
