use std::time::Duration;

use anyhow::{Context, Result};

use crate::questions::bank::PickStrategy;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Optional; the LLM question generator is only wired when this is set.
    pub anthropic_api_key: Option<String>,
    pub enable_llm_questions: bool,
    pub llm_timeout: Duration,
    pub question_pick: PickStrategy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            enable_llm_questions: optional_env("ENABLE_LLM_QUESTIONS")
                .map(|v| parse_bool(&v))
                .transpose()
                .context("ENABLE_LLM_QUESTIONS must be true or false")?
                .unwrap_or(false),
            llm_timeout: Duration::from_secs(
                std::env::var("LLM_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse::<u64>()
                    .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            question_pick: optional_env("QUESTION_PICK")
                .map(|v| v.parse::<PickStrategy>())
                .transpose()
                .map_err(anyhow::Error::msg)
                .context("QUESTION_PICK must be 'random' or 'first'")?
                .unwrap_or_default(),
        })
    }

    /// The API key to use for question generation, if the LLM path is enabled.
    pub fn llm_questions_key(&self) -> Option<&str> {
        if self.enable_llm_questions {
            self.anthropic_api_key.as_deref()
        } else {
            None
        }
    }
}

/// Returns the variable's value, treating unset and blank as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("invalid boolean '{other}'"),
    }
}
