//! Axum route handlers for company profiles.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::company::CompanyRow;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct CompanyUpsertRequest {
    pub user_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
}

/// POST /api/v1/companies
///
/// Creates the company profile for a user, or replaces its fields if one
/// already exists.
pub async fn handle_upsert_company(
    State(state): State<AppState>,
    Json(request): Json<CompanyUpsertRequest>,
) -> Result<Json<CompanyRow>, AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }

    let company: CompanyRow = sqlx::query_as(
        r#"
        INSERT INTO companies
            (user_id, name, website, location, industry, description,
             logo, contact_email, contact_phone)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        ON CONFLICT (user_id) DO UPDATE SET
            name = EXCLUDED.name,
            website = EXCLUDED.website,
            location = EXCLUDED.location,
            industry = EXCLUDED.industry,
            description = EXCLUDED.description,
            logo = EXCLUDED.logo,
            contact_email = EXCLUDED.contact_email,
            contact_phone = EXCLUDED.contact_phone
        RETURNING *
        "#,
    )
    .bind(request.user_id)
    .bind(&request.name)
    .bind(&request.website)
    .bind(&request.location)
    .bind(&request.industry)
    .bind(&request.description)
    .bind(&request.logo)
    .bind(&request.contact_email)
    .bind(&request.contact_phone)
    .fetch_one(&state.db)
    .await?;

    Ok(Json(company))
}

/// GET /api/v1/companies
pub async fn handle_list_companies(
    State(state): State<AppState>,
) -> Result<Json<Vec<CompanyRow>>, AppError> {
    let companies: Vec<CompanyRow> =
        sqlx::query_as("SELECT * FROM companies ORDER BY created_at")
            .fetch_all(&state.db)
            .await?;

    Ok(Json(companies))
}

/// GET /api/v1/companies/me?user_id=
pub async fn handle_get_my_company(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<CompanyRow>, AppError> {
    let company: Option<CompanyRow> =
        sqlx::query_as("SELECT * FROM companies WHERE user_id = $1")
            .bind(params.user_id)
            .fetch_optional(&state.db)
            .await?;

    let company =
        company.ok_or_else(|| AppError::NotFound("Company profile not found".to_string()))?;

    Ok(Json(company))
}

/// GET /api/v1/companies/:id
pub async fn handle_get_company(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CompanyRow>, AppError> {
    let company: Option<CompanyRow> = sqlx::query_as("SELECT * FROM companies WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.db)
        .await?;

    let company = company.ok_or_else(|| AppError::NotFound(format!("Company {id} not found")))?;

    Ok(Json(company))
}
