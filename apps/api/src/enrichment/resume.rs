//! Structured field extraction from raw resume text.

use serde::{Deserialize, Serialize};

use crate::enrichment::prompts::RESUME_EXTRACTION_PROMPT_TEMPLATE;
use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::LlmClient;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeExperience {
    pub title: String,
    pub company: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeEducation {
    pub school: String,
    pub degree: String,
}

/// Fields extracted from a resume. The collaborator must return this exact
/// shape; anything else fails the request with no partial result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedResume {
    pub skills: Vec<String>,
    pub experience: Vec<ResumeExperience>,
    pub education: Vec<ResumeEducation>,
}

/// Extracts skills, experience and education entries from resume text.
pub async fn extract_resume_fields(
    resume_text: &str,
    llm: &LlmClient,
) -> Result<ParsedResume, AppError> {
    let prompt = RESUME_EXTRACTION_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);
    llm.call_json::<ParsedResume>(&prompt, JSON_ONLY_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Resume extraction failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsed_resume_deserializes_expected_shape() {
        let json = r#"{
            "skills": ["Python", "React", "SQL"],
            "experience": [
                {"title": "Backend Engineer", "company": "Acme"},
                {"title": "Intern", "company": "Globex"}
            ],
            "education": [
                {"school": "State University", "degree": "BSc Computer Science"}
            ]
        }"#;

        let parsed: ParsedResume = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.skills.len(), 3);
        assert_eq!(parsed.experience[0].title, "Backend Engineer");
        assert_eq!(parsed.education[0].school, "State University");
    }

    #[test]
    fn test_non_json_response_is_an_error() {
        let text = "Sure! Here are the extracted fields: skills are Python and React.";
        assert!(serde_json::from_str::<ParsedResume>(text).is_err());
    }

    #[test]
    fn test_shape_mismatch_is_an_error_not_a_partial_result() {
        // Valid JSON, wrong shape: no partial object comes back.
        let json = r#"{"skills": "Python, React"}"#;
        assert!(serde_json::from_str::<ParsedResume>(json).is_err());
    }
}
