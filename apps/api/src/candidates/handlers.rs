//! Axum route handlers for candidate profiles.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::candidate::{CandidateRow, EducationEntry, ExperienceEntry};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct CandidateUpsertRequest {
    pub user_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
}

/// POST /api/v1/candidates
///
/// Creates the candidate profile for a user, or replaces its fields if one
/// already exists.
pub async fn handle_upsert_candidate(
    State(state): State<AppState>,
    Json(request): Json<CandidateUpsertRequest>,
) -> Result<Json<CandidateRow>, AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }

    let candidate: CandidateRow = sqlx::query_as(
        r#"
        INSERT INTO candidates (user_id, name, skills, experience, education)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (user_id) DO UPDATE SET
            name = EXCLUDED.name,
            skills = EXCLUDED.skills,
            experience = EXCLUDED.experience,
            education = EXCLUDED.education,
            updated_at = now()
        RETURNING *
        "#,
    )
    .bind(request.user_id)
    .bind(&request.name)
    .bind(&request.skills)
    .bind(sqlx::types::Json(&request.experience))
    .bind(sqlx::types::Json(&request.education))
    .fetch_one(&state.db)
    .await?;

    Ok(Json(candidate))
}

/// GET /api/v1/candidates?user_id=
pub async fn handle_get_candidate(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<CandidateRow>, AppError> {
    let candidate: Option<CandidateRow> =
        sqlx::query_as("SELECT * FROM candidates WHERE user_id = $1")
            .bind(params.user_id)
            .fetch_optional(&state.db)
            .await?;

    let candidate =
        candidate.ok_or_else(|| AppError::NotFound("Candidate profile not found".to_string()))?;

    Ok(Json(candidate))
}

#[derive(Debug, Deserialize)]
pub struct AttachResumeRequest {
    pub user_id: Uuid,
    /// Stored filename or URL of the uploaded resume.
    pub resume: String,
}

/// PATCH /api/v1/candidates/resume
pub async fn handle_attach_resume(
    State(state): State<AppState>,
    Json(request): Json<AttachResumeRequest>,
) -> Result<Json<CandidateRow>, AppError> {
    if request.resume.trim().is_empty() {
        return Err(AppError::Validation("resume cannot be empty".to_string()));
    }

    let candidate: Option<CandidateRow> = sqlx::query_as(
        "UPDATE candidates SET resume = $1, updated_at = now() WHERE user_id = $2 RETURNING *",
    )
    .bind(&request.resume)
    .bind(request.user_id)
    .fetch_optional(&state.db)
    .await?;

    let candidate =
        candidate.ok_or_else(|| AppError::NotFound("Candidate profile not found".to_string()))?;

    Ok(Json(candidate))
}
