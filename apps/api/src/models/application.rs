use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Review pipeline stage of an application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "application_status")]
pub enum ApplicationStatus {
    #[default]
    Applied,
    #[serde(rename = "Under Review")]
    #[sqlx(rename = "Under Review")]
    UnderReview,
    Shortlisted,
    Rejected,
    Hired,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationRow {
    pub id: Uuid,
    pub job_id: Uuid,
    pub candidate_id: Uuid,
    pub status: ApplicationStatus,
    pub cover_letter: Option<String>,
    /// Relevance score snapshot taken when the application was submitted.
    pub match_score: i32,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_status_under_review_wire_name() {
        assert_eq!(
            serde_json::to_string(&ApplicationStatus::UnderReview).unwrap(),
            r#""Under Review""#
        );
        let parsed: ApplicationStatus = serde_json::from_str(r#""Under Review""#).unwrap();
        assert_eq!(parsed, ApplicationStatus::UnderReview);
    }

    #[test]
    fn test_application_status_default_is_applied() {
        assert_eq!(ApplicationStatus::default(), ApplicationStatus::Applied);
    }
}
