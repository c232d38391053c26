//! Word endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

fn word_not_found(word_id: i64) -> ApiError {
    ApiError::NotFound(format!("Word {word_id} not found"))
}

/// GET /api/words
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<WordListQuery>,
) -> Result<Json<WordListResponse>> {
    let filter = WordFilter {
        favorite_only: query.favorite_only,
        mastered: None,
    };
    let words = state.db.list_words(&filter).await?;
    Ok(Json(WordListResponse { words }))
}

/// POST /api/words
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateWordRequest>,
) -> Result<(StatusCode, Json<Word>)> {
    let new_word = payload.validate()?;
    let word = state.db.create_word(&new_word).await?;

    tracing::info!(word_id = word.id, "Created word");

    Ok((StatusCode::CREATED, Json(word)))
}

/// GET /api/words/:id
pub async fn get(State(state): State<AppState>, Path(word_id): Path<i64>) -> Result<Json<Word>> {
    let word = state
        .db
        .get_word(word_id)
        .await?
        .ok_or_else(|| word_not_found(word_id))?;
    Ok(Json(word))
}

/// PUT /api/words/:id
pub async fn update(
    State(state): State<AppState>,
    Path(word_id): Path<i64>,
    Json(payload): Json<UpdateWordRequest>,
) -> Result<Json<Word>> {
    let update = payload.validate()?;
    let word = state
        .db
        .update_word(word_id, &update)
        .await?
        .ok_or_else(|| word_not_found(word_id))?;
    Ok(Json(word))
}

/// POST /api/words/:id/favorite
pub async fn toggle_favorite(
    State(state): State<AppState>,
    Path(word_id): Path<i64>,
) -> Result<Json<Word>> {
    let word = state
        .db
        .toggle_favorite(word_id)
        .await?
        .ok_or_else(|| word_not_found(word_id))?;

    tracing::debug!(word_id, is_favorite = word.is_favorite, "Toggled favorite");

    Ok(Json(word))
}

/// GET /api/words/:id/answers
pub async fn answers(
    State(state): State<AppState>,
    Path(word_id): Path<i64>,
) -> Result<Json<AnswerListResponse>> {
    if state.db.get_word(word_id).await?.is_none() {
        return Err(word_not_found(word_id));
    }
    let answers = state.db.list_answers(word_id).await?;
    Ok(Json(AnswerListResponse { answers }))
}
