//! Axum route handlers for the search and resume enrichment endpoints.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::enrichment::query::expand_query;
use crate::enrichment::resume::{extract_resume_fields, ParsedResume};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct OptimizeSearchRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct OptimizeSearchResponse {
    pub original: String,
    pub optimized: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ParseResumeRequest {
    pub resume_text: String,
}

/// POST /api/v1/search/optimize
///
/// Expands a free-text search query into related terms via the LLM.
pub async fn handle_optimize_search(
    State(state): State<AppState>,
    Json(request): Json<OptimizeSearchRequest>,
) -> Result<Json<OptimizeSearchResponse>, AppError> {
    if request.query.trim().is_empty() {
        return Err(AppError::Validation("query cannot be empty".to_string()));
    }

    let optimized = expand_query(&request.query, &state.llm).await?;

    Ok(Json(OptimizeSearchResponse {
        original: request.query,
        optimized,
    }))
}

/// POST /api/v1/resume/parse
///
/// Extracts structured skills, experience and education from resume text.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    Json(request): Json<ParseResumeRequest>,
) -> Result<Json<ParsedResume>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }

    let parsed = extract_resume_fields(&request.resume_text, &state.llm).await?;

    Ok(Json(parsed))
}
