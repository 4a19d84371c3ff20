use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Panics at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub anthropic_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Request timeout for the text-completion collaborator, in seconds.
    pub llm_timeout_secs: u64,
    /// Attempt budget for one collaborator call. 1 means no retry.
    pub llm_max_attempts: u32,
    /// When true, a second application for the same (candidate, job) pair
    /// is rejected with a conflict.
    pub reject_duplicate_applications: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            llm_timeout_secs: env_or("LLM_TIMEOUT_SECS", "30")
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a number of seconds")?,
            llm_max_attempts: env_or("LLM_MAX_ATTEMPTS", "1")
                .parse::<u32>()
                .context("LLM_MAX_ATTEMPTS must be a positive integer")?,
            reject_duplicate_applications: env_or("REJECT_DUPLICATE_APPLICATIONS", "false")
                .parse::<bool>()
                .context("REJECT_DUPLICATE_APPLICATIONS must be true or false")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
