//! Axum route handlers for job applications.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::scorer::{candidate_document, job_document};
use crate::models::application::{ApplicationRow, ApplicationStatus};
use crate::models::candidate::CandidateRow;
use crate::models::job::JobRow;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CandidateIdQuery {
    pub candidate_id: Uuid,
}

#[derive(Deserialize)]
pub struct CompanyIdQuery {
    pub company_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct CreateApplicationRequest {
    pub candidate_id: Uuid,
    pub job_id: Uuid,
    #[serde(default)]
    pub cover_letter: Option<String>,
}

/// POST /api/v1/applications
///
/// Submits an application and snapshots the relevance score between the
/// candidate and the job at submission time. The snapshot never changes
/// afterwards, even if the profile or the listing does.
pub async fn handle_create_application(
    State(state): State<AppState>,
    Json(request): Json<CreateApplicationRequest>,
) -> Result<Json<ApplicationRow>, AppError> {
    let candidate: CandidateRow = sqlx::query_as("SELECT * FROM candidates WHERE id = $1")
        .bind(request.candidate_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Candidate {} not found", request.candidate_id))
        })?;

    let job: JobRow = sqlx::query_as("SELECT * FROM jobs WHERE id = $1")
        .bind(request.job_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {} not found", request.job_id)))?;

    if state.config.reject_duplicate_applications {
        let existing: Option<(Uuid,)> = sqlx::query_as(
            "SELECT id FROM applications WHERE candidate_id = $1 AND job_id = $2 LIMIT 1",
        )
        .bind(request.candidate_id)
        .bind(request.job_id)
        .fetch_optional(&state.db)
        .await?;
        if existing.is_some() {
            return Err(AppError::Conflict(
                "Candidate has already applied to this job".to_string(),
            ));
        }
    }

    let candidate_doc = candidate_document(&candidate);
    let job_doc = job_document(&job.title, &job.description, &job.requirements, &job.keywords);
    let match_score = state.scorer.score(&candidate_doc, &job_doc) as i32;

    let application: ApplicationRow = sqlx::query_as(
        r#"
        INSERT INTO applications (job_id, candidate_id, cover_letter, match_score)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(request.job_id)
    .bind(request.candidate_id)
    .bind(&request.cover_letter)
    .bind(match_score)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(application))
}

/// GET /api/v1/applications/candidate?candidate_id=
pub async fn handle_list_candidate_applications(
    State(state): State<AppState>,
    Query(params): Query<CandidateIdQuery>,
) -> Result<Json<Vec<ApplicationRow>>, AppError> {
    let applications: Vec<ApplicationRow> = sqlx::query_as(
        "SELECT * FROM applications WHERE candidate_id = $1 ORDER BY created_at DESC",
    )
    .bind(params.candidate_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(applications))
}

/// GET /api/v1/applications/company?company_id=
///
/// Applications submitted against any of the company's listings.
pub async fn handle_list_company_applications(
    State(state): State<AppState>,
    Query(params): Query<CompanyIdQuery>,
) -> Result<Json<Vec<ApplicationRow>>, AppError> {
    let applications: Vec<ApplicationRow> = sqlx::query_as(
        r#"
        SELECT a.*
        FROM applications a
        JOIN jobs j ON j.id = a.job_id
        WHERE j.company_id = $1
        ORDER BY a.created_at DESC
        "#,
    )
    .bind(params.company_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(applications))
}

#[derive(Debug, Deserialize)]
pub struct ApplicationStatusUpdate {
    pub status: ApplicationStatus,
}

/// PATCH /api/v1/applications/:id/status
pub async fn handle_update_application_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ApplicationStatusUpdate>,
) -> Result<Json<ApplicationRow>, AppError> {
    let application: Option<ApplicationRow> =
        sqlx::query_as("UPDATE applications SET status = $1 WHERE id = $2 RETURNING *")
            .bind(request.status)
            .bind(id)
            .fetch_optional(&state.db)
            .await?;

    let application =
        application.ok_or_else(|| AppError::NotFound(format!("Application {id} not found")))?;

    Ok(Json(application))
}
