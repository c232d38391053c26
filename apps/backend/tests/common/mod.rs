//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for setting up test environment with database
//! - Helper functions for creating test data
//!
//! # Requirements
//! Integration tests require a PostgreSQL database (set DATABASE_URL env var).

pub mod fixtures;

use std::sync::Arc;

use axum::Router;

use vocab_backend::db::Database;
use vocab_backend::models::{Word, WordFilter};
use vocab_backend::{app, AppState, BUNDLED_SYNONYMS};
use vocab_core::SynonymIndex;

/// Test context containing database connection and router.
///
/// Requires DATABASE_URL environment variable to be set.
pub struct TestContext {
    pub db: Arc<Database>,
    app: Router,
}

impl TestContext {
    /// Create a new test context.
    ///
    /// # Panics
    /// Panics if DATABASE_URL is not set or database connection fails.
    pub async fn new() -> Self {
        dotenvy::dotenv().ok();

        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

        let db = Database::connect(&database_url, 5)
            .await
            .expect("Failed to connect to test database");

        db.run_migrations()
            .await
            .expect("Failed to run migrations");

        let db = Arc::new(db);
        let synonyms = SynonymIndex::from_json(BUNDLED_SYNONYMS).expect("bundled synonyms");

        let state = AppState {
            db: db.clone(),
            synonyms: Arc::new(synonyms),
        };

        Self {
            db,
            app: app(state),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Remove all words and answers so each test starts from an empty store.
    ///
    /// Tests using this must not run concurrently against the same database
    /// (`cargo test -- --ignored --test-threads=1`).
    pub async fn reset(&self) {
        sqlx::query("TRUNCATE answers, words RESTART IDENTITY")
            .execute(self.db.pool())
            .await
            .expect("Failed to reset tables");
    }

    /// Insert a word directly through the database layer.
    pub async fn create_word(&self, english: &str, russian: &str, is_favorite: bool) -> Word {
        self.db
            .create_word(&fixtures::new_word(english, russian, is_favorite))
            .await
            .expect("Failed to create test word")
    }

    /// Number of words currently stored.
    pub async fn word_count(&self) -> u64 {
        self.db
            .count_words(&WordFilter::all())
            .await
            .expect("Failed to count words")
    }
}
