//! Ranks all open job listings for one candidate by relevance.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::scorer::{candidate_document, job_document, RelevanceScorer};
use crate::models::candidate::CandidateRow;
use crate::models::job::JobType;

/// Minimal job projection returned with each match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSummary {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: JobType,
    pub salary: Option<String>,
}

/// One scored (candidate, job) pair. Computed on demand, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMatch {
    pub job: JobSummary,
    pub match_score: u32,
}

/// Open listing joined with its company name, in store discovery order.
#[derive(Debug, sqlx::FromRow)]
struct OpenJobRow {
    id: Uuid,
    title: String,
    description: String,
    requirements: Vec<String>,
    location: String,
    salary: Option<String>,
    job_type: JobType,
    keywords: Vec<String>,
    company_name: String,
}

/// Scores the candidate against every open job and returns the matches
/// ordered by descending score. Read-only; applications are never touched.
pub async fn rank_open_jobs(
    pool: &PgPool,
    scorer: &dyn RelevanceScorer,
    candidate_id: Uuid,
) -> Result<Vec<JobMatch>, AppError> {
    let candidate: Option<CandidateRow> = sqlx::query_as("SELECT * FROM candidates WHERE id = $1")
        .bind(candidate_id)
        .fetch_optional(pool)
        .await?;
    let candidate = candidate
        .ok_or_else(|| AppError::NotFound(format!("Candidate {candidate_id} not found")))?;

    let jobs: Vec<OpenJobRow> = sqlx::query_as(
        r#"
        SELECT j.id, j.title, j.description, j.requirements, j.location,
               j.salary, j.job_type, j.keywords, c.name AS company_name
        FROM jobs j
        JOIN companies c ON c.id = j.company_id
        WHERE j.status = 'Open'
        ORDER BY j.created_at
        "#,
    )
    .fetch_all(pool)
    .await?;

    let candidate_doc = candidate_document(&candidate);
    let scored = jobs
        .into_iter()
        .map(|job| {
            let job_doc = job_document(&job.title, &job.description, &job.requirements, &job.keywords);
            JobMatch {
                match_score: scorer.score(&candidate_doc, &job_doc),
                job: JobSummary {
                    id: job.id,
                    title: job.title,
                    company: job.company_name,
                    location: job.location,
                    job_type: job.job_type,
                    salary: job.salary,
                },
            }
        })
        .collect();

    Ok(rank_matches(scored))
}

/// Sorts matches by descending score. `sort_by` is stable, so equal scores
/// keep their input order and no secondary key is needed.
pub fn rank_matches(mut matches: Vec<JobMatch>) -> Vec<JobMatch> {
    matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_match(title: &str, match_score: u32) -> JobMatch {
        JobMatch {
            job: JobSummary {
                id: Uuid::new_v4(),
                title: title.to_string(),
                company: "Acme".to_string(),
                location: "Remote".to_string(),
                job_type: JobType::FullTime,
                salary: None,
            },
            match_score,
        }
    }

    #[test]
    fn test_rank_matches_sorts_by_descending_score() {
        let ranked = rank_matches(vec![
            make_match("low", 10),
            make_match("high", 90),
            make_match("mid", 40),
        ]);
        let scores: Vec<u32> = ranked.iter().map(|m| m.match_score).collect();
        assert_eq!(scores, vec![90, 40, 10]);
    }

    #[test]
    fn test_rank_matches_preserves_store_order_on_ties() {
        let ranked = rank_matches(vec![
            make_match("job-a", 70),
            make_match("job-b", 70),
            make_match("job-c", 90),
        ]);
        assert_eq!(ranked[0].job.title, "job-c");
        assert_eq!(ranked[1].job.title, "job-a");
        assert_eq!(ranked[2].job.title, "job-b");
    }

    #[test]
    fn test_rank_matches_handles_empty_input() {
        assert!(rank_matches(vec![]).is_empty());
    }

    #[test]
    fn test_output_is_non_increasing() {
        let ranked = rank_matches(vec![
            make_match("a", 5),
            make_match("b", 100),
            make_match("c", 55),
            make_match("d", 55),
            make_match("e", 0),
        ]);
        for window in ranked.windows(2) {
            assert!(window[0].match_score >= window[1].match_score);
        }
    }
}
