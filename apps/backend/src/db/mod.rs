//! PostgreSQL database operations

use std::collections::HashSet;

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::error::{ApiError, Result};
use crate::models::*;

const WORD_COLUMNS: &str = "id, english, russian, example_english, example_russian, is_favorite, created_at, updated_at";

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL and create connection pool
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Create a pool that connects on first use
    pub fn connect_lazy(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect_lazy(database_url)?;

        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::Migration(e.to_string()))?;
        Ok(())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Word Repository ===

    /// Insert a new word
    pub async fn create_word(&self, word: &NewWord) -> Result<Word> {
        let row = sqlx::query_as::<_, DbWord>(&format!(
            r#"
            INSERT INTO words (english, russian, example_english, example_russian, is_favorite)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {WORD_COLUMNS}
            "#
        ))
        .bind(&word.english)
        .bind(&word.russian)
        .bind(&word.example_english)
        .bind(&word.example_russian)
        .bind(word.is_favorite)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    /// Get word by ID
    pub async fn get_word(&self, word_id: i64) -> Result<Option<Word>> {
        let row = sqlx::query_as::<_, DbWord>(&format!(
            r#"
            SELECT {WORD_COLUMNS}
            FROM words
            WHERE id = $1
            "#
        ))
        .bind(word_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Word::from))
    }

    /// List words oldest first
    pub async fn list_words(&self, filter: &WordFilter) -> Result<Vec<Word>> {
        let rows = sqlx::query_as::<_, DbWord>(&format!(
            r#"
            SELECT {WORD_COLUMNS}
            FROM words w
            WHERE ($1 = FALSE OR w.is_favorite)
              AND ($2::BOOLEAN IS NULL OR $2 = EXISTS (
                    SELECT 1 FROM answers a WHERE a.word_id = w.id AND a.is_correct
                  ))
            ORDER BY w.created_at, w.id
            "#
        ))
        .bind(filter.favorite_only)
        .bind(filter.mastered)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Word::from).collect())
    }

    /// Apply a partial update. Blank example texts clear the example.
    pub async fn update_word(&self, word_id: i64, update: &UpdateWordRequest) -> Result<Option<Word>> {
        let row = sqlx::query_as::<_, DbWord>(&format!(
            r#"
            UPDATE words
            SET english = COALESCE($2, english),
                russian = COALESCE($3, russian),
                example_english = CASE WHEN $4::TEXT IS NULL THEN example_english ELSE NULLIF($4, '') END,
                example_russian = CASE WHEN $5::TEXT IS NULL THEN example_russian ELSE NULLIF($5, '') END,
                is_favorite = COALESCE($6, is_favorite),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {WORD_COLUMNS}
            "#
        ))
        .bind(word_id)
        .bind(&update.english)
        .bind(&update.russian)
        .bind(&update.example_english)
        .bind(&update.example_russian)
        .bind(update.is_favorite)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Word::from))
    }

    /// Flip the favorite flag in a single statement
    pub async fn toggle_favorite(&self, word_id: i64) -> Result<Option<Word>> {
        let row = sqlx::query_as::<_, DbWord>(&format!(
            r#"
            UPDATE words
            SET is_favorite = NOT is_favorite,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {WORD_COLUMNS}
            "#
        ))
        .bind(word_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Word::from))
    }

    /// Count words matching a filter
    pub async fn count_words(&self, filter: &WordFilter) -> Result<u64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM words w
            WHERE ($1 = FALSE OR w.is_favorite)
              AND ($2::BOOLEAN IS NULL OR $2 = EXISTS (
                    SELECT 1 FROM answers a WHERE a.word_id = w.id AND a.is_correct
                  ))
            "#,
        )
        .bind(filter.favorite_only)
        .bind(filter.mastered)
        .fetch_one(&self.pool)
        .await?;

        Ok(count as u64)
    }

    // === Answer Repository ===

    /// Append an answer record
    pub async fn insert_answer(&self, answer: &NewAnswer) -> Result<Answer> {
        let row = sqlx::query_as::<_, DbAnswer>(
            r#"
            INSERT INTO answers (word_id, answer, is_correct, is_synonym)
            VALUES ($1, $2, $3, $4)
            RETURNING id, word_id, answer, is_correct, is_synonym, created_at
            "#,
        )
        .bind(answer.word_id)
        .bind(&answer.answer)
        .bind(answer.is_correct)
        .bind(answer.is_synonym)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    /// Answer history for a word, newest first
    pub async fn list_answers(&self, word_id: i64) -> Result<Vec<Answer>> {
        let rows = sqlx::query_as::<_, DbAnswer>(
            r#"
            SELECT id, word_id, answer, is_correct, is_synonym, created_at
            FROM answers
            WHERE word_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(word_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Answer::from).collect())
    }

    /// Whether a word has at least one correct answer
    pub async fn has_correct_answer(&self, word_id: i64) -> Result<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (SELECT 1 FROM answers WHERE word_id = $1 AND is_correct)
            "#,
        )
        .bind(word_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    /// IDs of all words with at least one correct answer
    pub async fn mastered_word_ids(&self) -> Result<HashSet<i64>> {
        let ids: Vec<i64> = sqlx::query_scalar(
            r#"
            SELECT DISTINCT word_id
            FROM answers
            WHERE is_correct
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(ids.into_iter().collect())
    }

    /// Count answers matching a filter
    pub async fn count_answers(&self, filter: &AnswerFilter) -> Result<u64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM answers
            WHERE ($1::BOOLEAN IS NULL OR is_correct = $1)
              AND ($2::BOOLEAN IS NULL OR is_synonym = $2)
            "#,
        )
        .bind(filter.correct)
        .bind(filter.synonym)
        .fetch_one(&self.pool)
        .await?;

        Ok(count as u64)
    }
}
