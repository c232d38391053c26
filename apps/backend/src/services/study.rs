//! Study session services: next word, answer checking and progress.

use vocab_core::{evaluate, select_next, Progress, ProgressCounts, SynonymIndex};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::services::store::WordStore;

/// Evaluation of a submitted answer together with the stored record.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub evaluation: Evaluation,
    pub answer: Answer,
}

/// Pick the next word to study.
pub async fn next_word<S: WordStore>(store: &S, criteria: SelectionCriteria) -> Result<Word> {
    let filter = WordFilter {
        favorite_only: criteria.favorite_only,
        mastered: None,
    };
    let words = store.list_words(filter).await?;
    let mastered = store.mastered_word_ids().await?;

    let word = select_next(&words, &mastered, &criteria)
        .cloned()
        .ok_or_else(|| ApiError::NotFound("No words available to study".to_string()))?;

    tracing::debug!(
        word_id = word.id,
        candidates = words.len(),
        mastered = mastered.contains(&word.id),
        "selected next word"
    );
    Ok(word)
}

/// Evaluate a submission for a word and record it as an answer.
pub async fn check_answer<S: WordStore>(
    store: &S,
    synonyms: &SynonymIndex,
    word_id: i64,
    submitted: &str,
) -> Result<CheckOutcome> {
    if submitted.trim().is_empty() {
        return Err(ApiError::BadRequest("answer must not be empty".to_string()));
    }
    if submitted.trim().chars().count() > MAX_TEXT_CHARS {
        return Err(ApiError::BadRequest(format!(
            "answer must be at most {MAX_TEXT_CHARS} characters"
        )));
    }

    let word = store
        .find_word(word_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Word {word_id} not found")))?;

    let evaluation = evaluate(submitted, &word.english, synonyms.get(&word.english));
    let answer = store
        .append_answer(NewAnswer::from_evaluation(word.id, &evaluation))
        .await?;

    tracing::debug!(
        word_id = word.id,
        answer_id = answer.id,
        outcome = evaluation.outcome.as_str(),
        "answer checked"
    );

    Ok(CheckOutcome { evaluation, answer })
}

/// Aggregate learner progress.
pub async fn progress<S: WordStore>(store: &S) -> Result<Progress> {
    let counts = ProgressCounts {
        total_words: store.count_words(WordFilter::all()).await?,
        favorite_words: store.count_words(WordFilter::favorites()).await?,
        learned_words: store.count_words(WordFilter::mastered()).await?,
        total_answers: store.count_answers(AnswerFilter::all()).await?,
        correct_answers: store.count_answers(AnswerFilter::correct()).await?,
        synonym_answers: store.count_answers(AnswerFilter::synonym()).await?,
    };

    Ok(Progress::from_counts(counts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;
    use std::sync::Mutex;

    /// In-memory store for exercising the services without PostgreSQL.
    #[derive(Default)]
    struct MemoryStore {
        words: Vec<Word>,
        answers: Mutex<Vec<Answer>>,
    }

    impl MemoryStore {
        fn with_words(words: Vec<Word>) -> Self {
            Self {
                words,
                answers: Mutex::new(Vec::new()),
            }
        }

        fn answers(&self) -> Vec<Answer> {
            self.answers.lock().unwrap().clone()
        }

        fn is_mastered(&self, word_id: i64) -> bool {
            self.answers
                .lock()
                .unwrap()
                .iter()
                .any(|a| a.word_id == word_id && a.is_correct)
        }

        fn matches(&self, word: &Word, filter: &WordFilter) -> bool {
            (!filter.favorite_only || word.is_favorite)
                && filter.mastered.map_or(true, |m| m == self.is_mastered(word.id))
        }
    }

    impl WordStore for MemoryStore {
        async fn find_word(&self, word_id: i64) -> Result<Option<Word>> {
            Ok(self.words.iter().find(|w| w.id == word_id).cloned())
        }

        async fn list_words(&self, filter: WordFilter) -> Result<Vec<Word>> {
            let mut words: Vec<Word> = self
                .words
                .iter()
                .filter(|w| self.matches(w, &filter))
                .cloned()
                .collect();
            words.sort_by_key(|w| (w.created_at, w.id));
            Ok(words)
        }

        async fn mastered_word_ids(&self) -> Result<HashSet<i64>> {
            Ok(self
                .answers
                .lock()
                .unwrap()
                .iter()
                .filter(|a| a.is_correct)
                .map(|a| a.word_id)
                .collect())
        }

        async fn has_correct_answer(&self, word_id: i64) -> Result<bool> {
            Ok(self.is_mastered(word_id))
        }

        async fn append_answer(&self, answer: NewAnswer) -> Result<Answer> {
            let mut answers = self.answers.lock().unwrap();
            let stored = Answer {
                id: answers.len() as i64 + 1,
                word_id: answer.word_id,
                answer: answer.answer,
                is_correct: answer.is_correct,
                is_synonym: answer.is_synonym,
                created_at: Utc::now(),
            };
            answers.push(stored.clone());
            Ok(stored)
        }

        async fn count_words(&self, filter: WordFilter) -> Result<u64> {
            Ok(self.words.iter().filter(|w| self.matches(w, &filter)).count() as u64)
        }

        async fn count_answers(&self, filter: AnswerFilter) -> Result<u64> {
            Ok(self
                .answers
                .lock()
                .unwrap()
                .iter()
                .filter(|a| filter.correct.map_or(true, |c| a.is_correct == c))
                .filter(|a| filter.synonym.map_or(true, |s| a.is_synonym == s))
                .count() as u64)
        }
    }

    fn word(id: i64, english: &str, age_minutes: i64, is_favorite: bool) -> Word {
        let base = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let created_at = base - Duration::minutes(age_minutes);
        Word {
            id,
            english: english.to_string(),
            russian: format!("перевод {id}"),
            example_english: None,
            example_russian: None,
            is_favorite,
            created_at,
            updated_at: created_at,
        }
    }

    fn store() -> MemoryStore {
        MemoryStore::with_words(vec![
            word(1, "apple", 10, false),
            word(2, "happy", 30, true),
            word(3, "house", 20, false),
        ])
    }

    fn synonyms() -> SynonymIndex {
        SynonymIndex::from_json(r#"{ "happy": [{ "word": "glad", "context": "I am glad." }] }"#)
            .unwrap()
    }

    #[tokio::test]
    async fn test_check_exact_records_correct_answer() {
        let store = store();
        let outcome = check_answer(&store, &synonyms(), 1, " Apple ").await.unwrap();

        assert_eq!(outcome.evaluation.outcome, Outcome::Exact);
        assert!(outcome.answer.is_correct);
        assert_eq!(outcome.answer.answer, "apple");
        assert!(store.has_correct_answer(1).await.unwrap());
    }

    #[tokio::test]
    async fn test_check_partial_records_incorrect_answer() {
        let store = store();
        let outcome = check_answer(&store, &synonyms(), 1, "appl").await.unwrap();

        assert_eq!(outcome.evaluation.outcome, Outcome::Prefix { remaining: 1 });
        assert!(!outcome.answer.is_correct);
        assert!(!outcome.answer.is_synonym);
        assert_eq!(store.answers().len(), 1);
    }

    #[tokio::test]
    async fn test_check_synonym_uses_word_synonyms() {
        let store = store();
        let outcome = check_answer(&store, &synonyms(), 2, "GLAD").await.unwrap();

        assert_eq!(outcome.evaluation.outcome, Outcome::Synonym);
        assert_eq!(outcome.evaluation.synonym_context.as_deref(), Some("I am glad."));
        assert!(outcome.answer.is_synonym);
        assert!(!outcome.answer.is_correct);
    }

    #[tokio::test]
    async fn test_check_incorrect_reports_correct_answer() {
        let store = store();
        let outcome = check_answer(&store, &synonyms(), 1, "xyz").await.unwrap();

        assert_eq!(outcome.evaluation.outcome, Outcome::Incorrect);
        assert_eq!(outcome.evaluation.correct_answer, "apple");
    }

    #[tokio::test]
    async fn test_check_rejects_blank_answer_without_recording() {
        let store = store();
        let err = check_answer(&store, &synonyms(), 1, "   ").await.unwrap_err();

        assert!(matches!(err, ApiError::BadRequest(_)));
        assert!(store.answers().is_empty());
    }

    #[tokio::test]
    async fn test_check_rejects_overlong_answer_without_recording() {
        let store = store();
        let long = format!("b{}", "a".repeat(39_999));
        let err = check_answer(&store, &synonyms(), 1, &long).await.unwrap_err();

        assert!(matches!(err, ApiError::BadRequest(msg) if msg.contains("at most")));
        assert!(store.answers().is_empty());
    }

    #[tokio::test]
    async fn test_check_unknown_word_is_not_found() {
        let store = store();
        let err = check_answer(&store, &synonyms(), 42, "apple").await.unwrap_err();

        assert!(matches!(err, ApiError::NotFound(_)));
        assert!(store.answers().is_empty());
    }

    #[tokio::test]
    async fn test_next_word_prefers_oldest_unmastered() {
        let store = store();
        check_answer(&store, &synonyms(), 2, "happy").await.unwrap();

        let next = next_word(&store, SelectionCriteria::default()).await.unwrap();
        assert_eq!(next.id, 3);

        let criteria = SelectionCriteria {
            favorite_only: false,
            exclude_id: Some(3),
        };
        assert_eq!(next_word(&store, criteria).await.unwrap().id, 1);
    }

    #[tokio::test]
    async fn test_next_word_falls_back_when_all_mastered() {
        let store = store();
        for (id, text) in [(1, "apple"), (2, "happy"), (3, "house")] {
            check_answer(&store, &synonyms(), id, text).await.unwrap();
        }

        let next = next_word(&store, SelectionCriteria::default()).await.unwrap();
        assert_eq!(next.id, 2);
    }

    #[tokio::test]
    async fn test_next_word_favorites() {
        let store = store();
        let criteria = SelectionCriteria {
            favorite_only: true,
            exclude_id: None,
        };
        assert_eq!(next_word(&store, criteria).await.unwrap().id, 2);
    }

    #[tokio::test]
    async fn test_next_word_empty_is_not_found() {
        let store = MemoryStore::default();
        let err = next_word(&store, SelectionCriteria::default()).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_progress() {
        let store = store();
        check_answer(&store, &synonyms(), 1, "apple").await.unwrap();
        check_answer(&store, &synonyms(), 1, "apple").await.unwrap();
        check_answer(&store, &synonyms(), 2, "glad").await.unwrap();
        check_answer(&store, &synonyms(), 3, "hous").await.unwrap();

        let progress = progress(&store).await.unwrap();
        assert_eq!(
            progress.counts,
            ProgressCounts {
                total_words: 3,
                favorite_words: 1,
                learned_words: 1,
                total_answers: 4,
                correct_answers: 2,
                synonym_answers: 1,
            }
        );
        assert_eq!(progress.accuracy, 0.5);
    }
}
