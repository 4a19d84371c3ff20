//! Relevance scoring between a candidate profile and a job listing.
//!
//! Default backend: `OverlapScorer`, a lexical token-overlap score (pure,
//! fast, deterministic). The trait seam exists so a smarter backend such as
//! TF-IDF cosine similarity can be swapped in without touching handlers.

use crate::models::candidate::CandidateRow;

/// Scores one candidate document against one job document on a 0-100 scale.
///
/// Carried in `AppState` as `Arc<dyn RelevanceScorer>`.
pub trait RelevanceScorer: Send + Sync {
    fn score(&self, candidate_doc: &str, job_doc: &str) -> u32;
}

/// Lexical overlap scorer.
///
/// Counts candidate tokens that occur as case-insensitive substrings of the
/// job document and normalizes by the candidate token count:
/// `min(100, round(100 * matched / total))`. A candidate with no tokens
/// scores 0 against any job.
pub struct OverlapScorer;

impl RelevanceScorer for OverlapScorer {
    fn score(&self, candidate_doc: &str, job_doc: &str) -> u32 {
        let tokens = tokenize(candidate_doc);
        if tokens.is_empty() {
            return 0;
        }

        let job_doc = job_doc.to_lowercase();
        let matched = tokens
            .iter()
            .filter(|token| job_doc.contains(token.as_str()))
            .count();

        let score = (matched as f64 / tokens.len() as f64 * 100.0).round() as u32;
        score.min(100)
    }
}

/// Splits text into lowercase word tokens on non-alphanumeric boundaries.
/// Empty tokens are discarded.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Concatenates the searchable text of a candidate profile: skills plus
/// experience titles and descriptions.
pub fn candidate_document(candidate: &CandidateRow) -> String {
    let mut parts: Vec<String> = candidate.skills.clone();
    for exp in candidate.experience.iter() {
        match &exp.description {
            Some(description) => parts.push(format!("{} {}", exp.title, description)),
            None => parts.push(exp.title.clone()),
        }
    }
    parts.join(" ")
}

/// Concatenates the searchable text of a job listing: title, description,
/// requirements and keywords.
pub fn job_document(
    title: &str,
    description: &str,
    requirements: &[String],
    keywords: &[String],
) -> String {
    let mut parts = vec![title.to_string(), description.to_string()];
    parts.extend(requirements.iter().cloned());
    parts.extend(keywords.iter().cloned());
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::candidate::ExperienceEntry;
    use chrono::{NaiveDate, Utc};
    use sqlx::types::Json;
    use uuid::Uuid;

    fn make_candidate(skills: Vec<&str>, experience: Vec<(&str, Option<&str>)>) -> CandidateRow {
        CandidateRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "Test Candidate".to_string(),
            skills: skills.into_iter().map(String::from).collect(),
            experience: Json(
                experience
                    .into_iter()
                    .map(|(title, description)| ExperienceEntry {
                        title: title.to_string(),
                        company: "Acme".to_string(),
                        location: None,
                        from: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
                        to: None,
                        current: true,
                        description: description.map(String::from),
                    })
                    .collect(),
            ),
            education: Json(vec![]),
            resume: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_tokenize_splits_on_non_alphanumeric() {
        assert_eq!(
            tokenize("Rust, C++ & distributed-systems!"),
            vec!["rust", "c", "distributed", "systems"]
        );
    }

    #[test]
    fn test_tokenize_lowercases_and_drops_empty_tokens() {
        assert_eq!(tokenize("  Python   React  "), vec!["python", "react"]);
        assert!(tokenize("...!!!").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_empty_candidate_scores_zero_against_any_job() {
        let scorer = OverlapScorer;
        assert_eq!(scorer.score("", "Senior Rust Engineer"), 0);
        assert_eq!(scorer.score("...", "Senior Rust Engineer"), 0);
        assert_eq!(scorer.score("", ""), 0);
    }

    #[test]
    fn test_full_containment_scores_one_hundred() {
        let scorer = OverlapScorer;
        let score = scorer.score("rust tokio", "Rust engineer working with tokio services");
        assert_eq!(score, 100);
    }

    #[test]
    fn test_half_match_scores_fifty() {
        // "python" matches, "react" does not: 1 of 2 tokens.
        let scorer = OverlapScorer;
        let score = scorer.score("python react", "Backend engineer with Python and Node");
        assert_eq!(score, 50);
    }

    #[test]
    fn test_match_is_substring_containment_not_exact() {
        // "react" occurs inside "reactive"
        let scorer = OverlapScorer;
        let score = scorer.score("react", "Building reactive frontends");
        assert_eq!(score, 100);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let scorer = OverlapScorer;
        assert_eq!(scorer.score("PYTHON", "python shop"), 100);
        assert_eq!(scorer.score("python", "PYTHON SHOP"), 100);
    }

    #[test]
    fn test_score_stays_in_bounds() {
        let scorer = OverlapScorer;
        let score = scorer.score(
            "rust rust rust rust",
            "rust rust rust rust rust rust rust rust",
        );
        assert!(score <= 100);
    }

    #[test]
    fn test_rounding_of_partial_ratios() {
        // 1 of 3 tokens: round(33.33) = 33
        let scorer = OverlapScorer;
        assert_eq!(scorer.score("python react vue", "Python backend"), 33);
        // 2 of 3 tokens: round(66.67) = 67
        assert_eq!(scorer.score("python react vue", "Python and React"), 67);
    }

    #[test]
    fn test_candidate_document_joins_skills_and_experience() {
        let candidate = make_candidate(
            vec!["Python", "React"],
            vec![("Backend Engineer", Some("Built APIs in Django"))],
        );
        assert_eq!(
            candidate_document(&candidate),
            "Python React Backend Engineer Built APIs in Django"
        );
    }

    #[test]
    fn test_candidate_document_omits_missing_descriptions() {
        let candidate = make_candidate(vec!["Go"], vec![("SRE", None)]);
        assert_eq!(candidate_document(&candidate), "Go SRE");
    }

    #[test]
    fn test_job_document_concatenates_all_fields() {
        let doc = job_document(
            "Platform Engineer",
            "Own the deploy pipeline",
            &["Kubernetes".to_string(), "Terraform".to_string()],
            &["devops".to_string()],
        );
        assert_eq!(
            doc,
            "Platform Engineer Own the deploy pipeline Kubernetes Terraform devops"
        );
    }
}
