//! Test fixtures and factory functions for creating test data.

use serde_json::json;

use vocab_backend::models::NewWord;

/// Validated word ready to insert.
pub fn new_word(english: &str, russian: &str, is_favorite: bool) -> NewWord {
    NewWord {
        english: english.to_string(),
        russian: russian.to_string(),
        example_english: Some(format!("This is an example with {english}.")),
        example_russian: Some(format!("Это пример со словом {russian}.")),
        is_favorite,
    }
}

/// Create a word request body.
pub fn create_word_request(english: &str, russian: &str) -> serde_json::Value {
    json!({
        "english": english,
        "russian": russian,
        "example_english": format!("I like {english}."),
        "example_russian": format!("Мне нравится {russian}."),
    })
}

/// Create an update word request body.
pub fn update_word_request(english: Option<&str>, example_english: Option<&str>) -> serde_json::Value {
    let mut obj = serde_json::Map::new();
    if let Some(e) = english {
        obj.insert("english".to_string(), json!(e));
    }
    if let Some(e) = example_english {
        obj.insert("example_english".to_string(), json!(e));
    }
    serde_json::Value::Object(obj)
}

/// Create a check answer request body.
pub fn check_answer_request(word_id: i64, answer: &str) -> serde_json::Value {
    json!({ "word_id": word_id, "answer": answer })
}
