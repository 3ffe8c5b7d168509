//! Question planner — the engine's single entry point for producing the
//! technical question list.
//!
//! Flow: optional generator (bounded by a timeout) → cap/pad → done.
//! Any generator failure degrades to the keyword bank. The planner never fails.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::questions::bank::{pad_with_generic, select_questions, PickStrategy, MAX_QUESTIONS};
use crate::questions::generator::QuestionGenerator;

#[derive(Clone)]
pub struct QuestionPlanner {
    generator: Option<Arc<dyn QuestionGenerator>>,
    timeout: Duration,
    pick: PickStrategy,
}

impl QuestionPlanner {
    /// Planner that only uses the keyword bank.
    pub fn keyword_only(pick: PickStrategy) -> Self {
        Self {
            generator: None,
            timeout: Duration::ZERO,
            pick,
        }
    }

    /// Planner that tries `generator` first and falls back to the keyword bank.
    pub fn with_generator(
        generator: Arc<dyn QuestionGenerator>,
        timeout: Duration,
        pick: PickStrategy,
    ) -> Self {
        Self {
            generator: Some(generator),
            timeout,
            pick,
        }
    }

    pub fn backend(&self) -> &'static str {
        self.generator
            .as_ref()
            .map(|g| g.backend())
            .unwrap_or("keyword")
    }

    /// Produces 3–5 questions for the given skills and experience.
    pub async fn plan(&self, skills: &[String], experience: &str) -> Vec<String> {
        if let Some(generator) = &self.generator {
            let attempt =
                tokio::time::timeout(self.timeout, generator.generate(skills, experience)).await;

            match attempt {
                Ok(Ok(mut questions)) => {
                    questions.truncate(MAX_QUESTIONS);
                    let questions = pad_with_generic(questions);
                    info!(
                        "Generated {} questions via {} backend",
                        questions.len(),
                        generator.backend()
                    );
                    return questions;
                }
                Ok(Err(e)) => {
                    warn!("{} question generator failed, using keyword bank: {e}", generator.backend());
                }
                Err(_) => {
                    warn!(
                        "{} question generator timed out after {}ms, using keyword bank",
                        generator.backend(),
                        self.timeout.as_millis()
                    );
                }
            }
        }

        let questions = select_questions(skills, self.pick);
        info!("Selected {} questions from keyword bank", questions.len());
        questions
    }
}
