// Prompts for the search and resume enrichment calls.

/// System prompt for query expansion. The completion must be a bare
/// comma-separated list so `parse_term_list` can split it.
pub const QUERY_EXPANSION_SYSTEM: &str = "You are a job search assistant. \
    Respond with a single comma-separated list of search terms. \
    Do NOT number the terms. \
    Do NOT add any text before or after the list.";

pub const QUERY_EXPANSION_PROMPT_TEMPLATE: &str = "\
Expand this job search query with relevant keywords and skills to improve search results:

Original query: \"{query}\"

Optimized search terms (comma-separated):";

/// Paired with `JSON_ONLY_SYSTEM`; the shape below must deserialize into
/// `ParsedResume` exactly.
pub const RESUME_EXTRACTION_PROMPT_TEMPLATE: &str = "\
Extract the following information from this resume:

1. skills: a list of skill strings
2. experience: a list of objects, each with \"title\" and \"company\"
3. education: a list of objects, each with \"school\" and \"degree\"

Resume text:
{resume_text}

Respond with a JSON object of the shape:
{\"skills\": [\"...\"], \"experience\": [{\"title\": \"...\", \"company\": \"...\"}], \"education\": [{\"school\": \"...\", \"degree\": \"...\"}]}";
