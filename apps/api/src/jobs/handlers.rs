//! Axum route handlers for job listings.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::{JobRow, JobStatus, JobType};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CompanyIdQuery {
    pub company_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct CreateJobRequest {
    pub company_id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    pub location: String,
    #[serde(default)]
    pub salary: Option<String>,
    pub job_type: JobType,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// POST /api/v1/jobs
///
/// Creates a listing for a company. New listings start as `Open`.
pub async fn handle_create_job(
    State(state): State<AppState>,
    Json(request): Json<CreateJobRequest>,
) -> Result<Json<JobRow>, AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    if request.description.trim().is_empty() {
        return Err(AppError::Validation(
            "description cannot be empty".to_string(),
        ));
    }

    let company_exists: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM companies WHERE id = $1")
        .bind(request.company_id)
        .fetch_optional(&state.db)
        .await?;
    if company_exists.is_none() {
        return Err(AppError::NotFound(format!(
            "Company {} not found",
            request.company_id
        )));
    }

    let job: JobRow = sqlx::query_as(
        r#"
        INSERT INTO jobs
            (company_id, title, description, requirements, location, salary, job_type, keywords)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(request.company_id)
    .bind(&request.title)
    .bind(&request.description)
    .bind(&request.requirements)
    .bind(&request.location)
    .bind(&request.salary)
    .bind(request.job_type)
    .bind(&request.keywords)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(job))
}

/// GET /api/v1/jobs
///
/// All listings, newest first.
pub async fn handle_list_jobs(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobRow>>, AppError> {
    let jobs: Vec<JobRow> = sqlx::query_as("SELECT * FROM jobs ORDER BY created_at DESC")
        .fetch_all(&state.db)
        .await?;

    Ok(Json(jobs))
}

/// GET /api/v1/jobs/company?company_id=
pub async fn handle_list_company_jobs(
    State(state): State<AppState>,
    Query(params): Query<CompanyIdQuery>,
) -> Result<Json<Vec<JobRow>>, AppError> {
    let jobs: Vec<JobRow> =
        sqlx::query_as("SELECT * FROM jobs WHERE company_id = $1 ORDER BY created_at DESC")
            .bind(params.company_id)
            .fetch_all(&state.db)
            .await?;

    Ok(Json(jobs))
}

#[derive(Debug, Deserialize)]
pub struct JobStatusUpdate {
    pub status: JobStatus,
}

/// PATCH /api/v1/jobs/:id/status
///
/// Transitions a listing between Open, Paused and Closed.
pub async fn handle_update_job_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<JobStatusUpdate>,
) -> Result<Json<JobRow>, AppError> {
    let job: Option<JobRow> =
        sqlx::query_as("UPDATE jobs SET status = $1 WHERE id = $2 RETURNING *")
            .bind(request.status)
            .bind(id)
            .fetch_optional(&state.db)
            .await?;

    let job = job.ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;

    Ok(Json(job))
}
