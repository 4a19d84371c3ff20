//! Axum route handlers for the Matching API.

use axum::{extract::State, Json};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::ranking::{rank_open_jobs, JobMatch};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub candidate_id: Uuid,
}

/// POST /api/v1/match
///
/// Scores the candidate against every open job and returns the list ordered
/// by descending match score.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<Vec<JobMatch>>, AppError> {
    let matches = rank_open_jobs(&state.db, state.scorer.as_ref(), request.candidate_id).await?;
    Ok(Json(matches))
}
