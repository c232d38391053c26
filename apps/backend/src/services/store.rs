//! Storage interface used by the study services.

use std::collections::HashSet;
use std::future::Future;

use crate::db::Database;
use crate::error::Result;
use crate::models::{Answer, AnswerFilter, NewAnswer, Word, WordFilter};

/// Word and answer storage needed to select words, record answers and
/// compute progress.
pub trait WordStore: Send + Sync {
    fn find_word(&self, word_id: i64) -> impl Future<Output = Result<Option<Word>>> + Send;

    /// Words matching `filter`, oldest first.
    fn list_words(&self, filter: WordFilter) -> impl Future<Output = Result<Vec<Word>>> + Send;

    /// IDs of words with at least one correct answer.
    fn mastered_word_ids(&self) -> impl Future<Output = Result<HashSet<i64>>> + Send;

    fn has_correct_answer(&self, word_id: i64) -> impl Future<Output = Result<bool>> + Send;

    fn append_answer(&self, answer: NewAnswer) -> impl Future<Output = Result<Answer>> + Send;

    fn count_words(&self, filter: WordFilter) -> impl Future<Output = Result<u64>> + Send;

    fn count_answers(&self, filter: AnswerFilter) -> impl Future<Output = Result<u64>> + Send;
}

impl WordStore for Database {
    async fn find_word(&self, word_id: i64) -> Result<Option<Word>> {
        self.get_word(word_id).await
    }

    async fn list_words(&self, filter: WordFilter) -> Result<Vec<Word>> {
        Database::list_words(self, &filter).await
    }

    async fn mastered_word_ids(&self) -> Result<HashSet<i64>> {
        Database::mastered_word_ids(self).await
    }

    async fn has_correct_answer(&self, word_id: i64) -> Result<bool> {
        Database::has_correct_answer(self, word_id).await
    }

    async fn append_answer(&self, answer: NewAnswer) -> Result<Answer> {
        self.insert_answer(&answer).await
    }

    async fn count_words(&self, filter: WordFilter) -> Result<u64> {
        Database::count_words(self, &filter).await
    }

    async fn count_answers(&self, filter: AnswerFilter) -> Result<u64> {
        Database::count_answers(self, &filter).await
    }
}
