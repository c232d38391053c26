//! Progress statistics endpoint

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::Progress;
use crate::services::study;
use crate::AppState;

/// GET /api/stats
pub async fn get(State(state): State<AppState>) -> Result<Json<Progress>> {
    let progress = study::progress(state.db.as_ref()).await?;
    Ok(Json(progress))
}
