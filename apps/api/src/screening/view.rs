//! Screening view — what the presentation layer renders after each event.

use serde::Serialize;
use uuid::Uuid;

use crate::screening::engine::next_prompt;
use crate::screening::fields::FIELD_COUNT;
use crate::screening::report::{build_report, candidate_profile, ProfileItem, ScreeningReport};
use crate::screening::session::{Phase, Session};

#[derive(Debug, Clone, Serialize)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
    /// 0.0 – 1.0, share of steps already finished.
    pub fraction: f32,
    pub caption: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScreeningView {
    pub session_id: Uuid,
    pub phase: Phase,
    pub prompt: Option<String>,
    pub placeholder: Option<String>,
    pub error: Option<String>,
    pub progress: Option<Progress>,
    pub profile: Vec<ProfileItem>,
    pub questions: Vec<String>,
    pub report: Option<ScreeningReport>,
}

impl ScreeningView {
    pub fn from_session(session: &Session) -> Self {
        let placeholder = match session.phase {
            Phase::Collecting => session.current_field().map(|f| f.placeholder().to_string()),
            Phase::Questioning => {
                Some("Provide a detailed answer with examples if possible...".to_string())
            }
            Phase::Ended | Phase::Completed => None,
        };

        Self {
            session_id: session.id,
            phase: session.phase,
            prompt: next_prompt(session),
            placeholder,
            error: session.last_error.clone(),
            progress: progress(session),
            profile: candidate_profile(session),
            questions: session.questions.clone(),
            report: build_report(session),
        }
    }
}

fn progress(session: &Session) -> Option<Progress> {
    match session.phase {
        Phase::Collecting => {
            let done = session.field_index.min(FIELD_COUNT);
            Some(Progress {
                current: done + 1,
                total: FIELD_COUNT,
                fraction: done as f32 / FIELD_COUNT as f32,
                caption: format!(
                    "Step {} of {} - Information Collection",
                    done + 1,
                    FIELD_COUNT
                ),
            })
        }
        Phase::Questioning if !session.questions.is_empty() => {
            let total = session.questions.len();
            let done = session.question_index.min(total);
            Some(Progress {
                current: done + 1,
                total,
                fraction: done as f32 / total as f32,
                caption: format!("Question {} of {} - Technical Screening", done + 1, total),
            })
        }
        _ => None,
    }
}
