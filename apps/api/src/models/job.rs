use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Employment arrangement advertised on a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "job_type")]
pub enum JobType {
    #[serde(rename = "Full-time")]
    #[sqlx(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    #[sqlx(rename = "Part-time")]
    PartTime,
    Contract,
    Internship,
    Remote,
}

/// Lifecycle of a listing. Only `Open` jobs are considered for matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "job_status")]
pub enum JobStatus {
    #[default]
    Open,
    Closed,
    Paused,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub company_id: Uuid,
    pub title: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub location: String,
    pub salary: Option<String>,
    pub job_type: JobType,
    pub keywords: Vec<String>,
    pub status: JobStatus,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_type_serializes_with_hyphenated_names() {
        assert_eq!(
            serde_json::to_string(&JobType::FullTime).unwrap(),
            r#""Full-time""#
        );
        assert_eq!(
            serde_json::to_string(&JobType::PartTime).unwrap(),
            r#""Part-time""#
        );
    }

    #[test]
    fn test_job_type_round_trips() {
        for (json, variant) in [
            (r#""Full-time""#, JobType::FullTime),
            (r#""Part-time""#, JobType::PartTime),
            (r#""Contract""#, JobType::Contract),
            (r#""Internship""#, JobType::Internship),
            (r#""Remote""#, JobType::Remote),
        ] {
            let parsed: JobType = serde_json::from_str(json).unwrap();
            assert_eq!(parsed, variant);
        }
    }

    #[test]
    fn test_job_status_default_is_open() {
        assert_eq!(JobStatus::default(), JobStatus::Open);
    }
}
