pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::state::AppState;
use crate::{applications, candidates, companies, enrichment, jobs, matching};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Matching API
        .route("/api/v1/match", post(matching::handlers::handle_match))
        // Search + resume enrichment
        .route(
            "/api/v1/search/optimize",
            post(enrichment::handlers::handle_optimize_search),
        )
        .route(
            "/api/v1/resume/parse",
            post(enrichment::handlers::handle_parse_resume),
        )
        // Candidate profiles
        .route(
            "/api/v1/candidates",
            post(candidates::handlers::handle_upsert_candidate)
                .get(candidates::handlers::handle_get_candidate),
        )
        .route(
            "/api/v1/candidates/resume",
            patch(candidates::handlers::handle_attach_resume),
        )
        // Company profiles
        .route(
            "/api/v1/companies",
            post(companies::handlers::handle_upsert_company)
                .get(companies::handlers::handle_list_companies),
        )
        .route(
            "/api/v1/companies/me",
            get(companies::handlers::handle_get_my_company),
        )
        .route(
            "/api/v1/companies/:id",
            get(companies::handlers::handle_get_company),
        )
        // Job listings
        .route(
            "/api/v1/jobs",
            post(jobs::handlers::handle_create_job).get(jobs::handlers::handle_list_jobs),
        )
        .route(
            "/api/v1/jobs/company",
            get(jobs::handlers::handle_list_company_jobs),
        )
        .route(
            "/api/v1/jobs/:id/status",
            patch(jobs::handlers::handle_update_job_status),
        )
        // Applications
        .route(
            "/api/v1/applications",
            post(applications::handlers::handle_create_application),
        )
        .route(
            "/api/v1/applications/candidate",
            get(applications::handlers::handle_list_candidate_applications),
        )
        .route(
            "/api/v1/applications/company",
            get(applications::handlers::handle_list_company_applications),
        )
        .route(
            "/api/v1/applications/:id/status",
            patch(applications::handlers::handle_update_application_status),
        )
        .with_state(state)
}
