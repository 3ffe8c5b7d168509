//! Question generators — pluggable external sources of technical questions.
//!
//! Implemented: `LlmQuestionGenerator`, which asks Claude for a numbered list.
//!
//! The planner holds an optional `Arc<dyn QuestionGenerator>` and treats every
//! error as a signal to use the static keyword bank instead.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::llm_client::prompts::PLAIN_LIST_INSTRUCTION;
use crate::llm_client::{LlmClient, LlmError};
use crate::questions::prompts::{QUESTION_PROMPT_TEMPLATE, QUESTION_SYSTEM};

/// Parsed lines shorter than this are treated as noise.
pub const MIN_QUESTION_LEN: usize = 10;

static LIST_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\d+\s*[.):]|[-*•])\s*").expect("list marker pattern compiles"));

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("question generator unavailable: {0}")]
    Unavailable(String),

    #[error("question generator returned no usable questions")]
    MalformedOutput,
}

impl From<LlmError> for GeneratorError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::EmptyContent => GeneratorError::MalformedOutput,
            other => GeneratorError::Unavailable(other.to_string()),
        }
    }
}

#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    /// Short backend name for logs.
    fn backend(&self) -> &'static str;

    async fn generate(
        &self,
        skills: &[String],
        experience: &str,
    ) -> Result<Vec<String>, GeneratorError>;
}

/// Asks the LLM for questions. Any transport or parse problem is an error.
pub struct LlmQuestionGenerator(pub LlmClient);

#[async_trait]
impl QuestionGenerator for LlmQuestionGenerator {
    fn backend(&self) -> &'static str {
        "llm"
    }

    async fn generate(
        &self,
        skills: &[String],
        experience: &str,
    ) -> Result<Vec<String>, GeneratorError> {
        let prompt = build_question_prompt(skills, experience);
        let text = self.0.call_text(&prompt, QUESTION_SYSTEM).await?;

        let questions = parse_question_lines(&text);
        if questions.is_empty() {
            return Err(GeneratorError::MalformedOutput);
        }
        Ok(questions)
    }
}

pub fn build_question_prompt(skills: &[String], experience: &str) -> String {
    QUESTION_PROMPT_TEMPLATE
        .replace("{skills}", &skills.join(", "))
        .replace("{experience}", experience)
        .replace("{list_instruction}", PLAIN_LIST_INSTRUCTION)
}

/// Splits generator output into questions: strips list markers ("1. ", "2) ",
/// "- ", "* ") and drops lines shorter than `MIN_QUESTION_LEN` or ending in `:`.
/// When any line carries a list marker, unmarked lines are treated as preamble
/// or commentary and dropped.
pub fn parse_question_lines(text: &str) -> Vec<String> {
    let lines: Vec<(bool, String)> = text
        .lines()
        .map(str::trim)
        .map(|line| {
            let marked = LIST_MARKER.is_match(line);
            (marked, LIST_MARKER.replace(line, "").trim().to_string())
        })
        .collect();
    let any_marked = lines.iter().any(|(marked, _)| *marked);

    lines
        .into_iter()
        .filter(|(marked, line)| {
            (*marked || !any_marked)
                && !line.ends_with(':')
                && line.chars().count() >= MIN_QUESTION_LEN
        })
        .map(|(_, line)| line)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_numbered_markers() {
        let text = "1. [Python] Explain generators vs iterators.\n2) [SQL] When would you denormalize?";
        assert_eq!(
            parse_question_lines(text),
            vec![
                "[Python] Explain generators vs iterators.",
                "[SQL] When would you denormalize?",
            ]
        );
    }

    #[test]
    fn test_parse_strips_bullets_and_drops_short_lines() {
        let text = "- How do you profile a slow endpoint?\n* Why?\n• Explain CAP theorem.";
        assert_eq!(
            parse_question_lines(text),
            vec!["How do you profile a slow endpoint?", "Explain CAP theorem."]
        );
    }

    #[test]
    fn test_parse_drops_preamble_and_closing_remarks() {
        let text = "Here are some questions for the candidate:\n\n\
                    1. [Rust] What does the borrow checker enforce?\n\
                    2. [Rust] When is Box<dyn Trait> preferable to generics?\n\n\
                    Good luck with the interview, these should be useful";
        assert_eq!(
            parse_question_lines(text),
            vec![
                "[Rust] What does the borrow checker enforce?",
                "[Rust] When is Box<dyn Trait> preferable to generics?",
            ]
        );
    }

    #[test]
    fn test_parse_unmarked_output_keeps_plain_lines() {
        let text = "Questions:\nHow do you size a thread pool?\nWhat is backpressure?";
        assert_eq!(
            parse_question_lines(text),
            vec!["How do you size a thread pool?", "What is backpressure?"]
        );
    }

    #[test]
    fn test_parse_empty_output() {
        assert!(parse_question_lines("").is_empty());
        assert!(parse_question_lines("1.\n2. ok\n-").is_empty());
    }

    #[test]
    fn test_prompt_mentions_skills_and_experience() {
        let prompt = build_question_prompt(&["Rust".to_string(), "Kafka".to_string()], "7");
        assert!(prompt.contains("Rust, Kafka"));
        assert!(prompt.contains("7 years"));
        assert!(prompt.contains("numbered list"));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn test_llm_error_mapping() {
        assert!(matches!(
            GeneratorError::from(LlmError::EmptyContent),
            GeneratorError::MalformedOutput
        ));
        assert!(matches!(
            GeneratorError::from(LlmError::Api {
                status: 401,
                message: "invalid x-api-key".to_string()
            }),
            GeneratorError::Unavailable(_)
        ));
    }
}
