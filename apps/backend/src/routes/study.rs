//! Study endpoints

use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::Result;
use crate::models::*;
use crate::services::study;
use crate::AppState;

/// GET /api/study/next
pub async fn next(
    State(state): State<AppState>,
    Query(query): Query<NextWordQuery>,
) -> Result<Json<Word>> {
    let word = study::next_word(state.db.as_ref(), query.into()).await?;
    Ok(Json(word))
}

/// POST /api/study/check
pub async fn check(
    State(state): State<AppState>,
    Json(payload): Json<CheckAnswerRequest>,
) -> Result<Json<CheckAnswerResponse>> {
    let submitted = payload.answer.unwrap_or_default();
    let outcome =
        study::check_answer(state.db.as_ref(), &state.synonyms, payload.word_id, &submitted)
            .await?;

    Ok(Json(CheckAnswerResponse {
        answer_id: outcome.answer.id,
        evaluation: outcome.evaluation,
    }))
}
