//! Free-text search query expansion via the text-completion collaborator.

use crate::enrichment::prompts::{QUERY_EXPANSION_PROMPT_TEMPLATE, QUERY_EXPANSION_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::LlmClient;

/// Expands a search query into related terms. Single shot; a collaborator
/// failure surfaces as an LLM error with no local fallback.
pub async fn expand_query(query: &str, llm: &LlmClient) -> Result<Vec<String>, AppError> {
    let prompt = QUERY_EXPANSION_PROMPT_TEMPLATE.replace("{query}", query);
    let response = llm
        .call(&prompt, QUERY_EXPANSION_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Query expansion failed: {e}")))?;
    let text = response
        .text()
        .ok_or_else(|| AppError::Llm("Query expansion returned empty content".to_string()))?;
    Ok(parse_term_list(text))
}

/// Splits a comma-separated completion into trimmed, non-empty terms.
pub fn parse_term_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_term_list_splits_and_trims() {
        assert_eq!(
            parse_term_list("remote, python, backend"),
            vec!["remote", "python", "backend"]
        );
    }

    #[test]
    fn test_parse_term_list_drops_empty_terms() {
        assert_eq!(
            parse_term_list("rust,, tokio ,  ,axum,"),
            vec!["rust", "tokio", "axum"]
        );
    }

    #[test]
    fn test_parse_term_list_handles_single_term() {
        assert_eq!(parse_term_list("kubernetes"), vec!["kubernetes"]);
    }

    #[test]
    fn test_parse_term_list_empty_input() {
        assert!(parse_term_list("").is_empty());
        assert!(parse_term_list("   ").is_empty());
    }

    #[test]
    fn test_parse_term_list_preserves_multi_word_terms() {
        assert_eq!(
            parse_term_list("machine learning, data engineering"),
            vec!["machine learning", "data engineering"]
        );
    }
}
