//! Screening report — the read-only summary shown once a run is completed.

use serde::Serialize;

use crate::screening::fields::{Field, FIELD_SEQUENCE};
use crate::screening::session::{Phase, Session};

#[derive(Debug, Clone, Serialize)]
pub struct ProfileItem {
    pub field: String,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionOutcome {
    pub number: usize,
    pub question: String,
    /// `None` when the candidate skipped the question.
    pub answer: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScreeningReport {
    pub candidate: Vec<ProfileItem>,
    /// Tech stack exactly as typed.
    pub tech_stack_raw: Option<String>,
    pub skills: Vec<String>,
    pub questions: Vec<QuestionOutcome>,
    pub answered: usize,
    pub skipped: usize,
    pub total_questions: usize,
}

/// Fields collected so far, in intake order. The tech stack is shown as the
/// normalised skill list once it has been parsed.
pub fn candidate_profile(session: &Session) -> Vec<ProfileItem> {
    FIELD_SEQUENCE
        .iter()
        .filter_map(|field| {
            let raw = session.fields.get(field)?;
            let value = if *field == Field::TechStack && !session.skills.is_empty() {
                session.skills.join(", ")
            } else {
                raw.clone()
            };
            Some(ProfileItem {
                field: field.key().to_string(),
                label: field.label().to_string(),
                value,
            })
        })
        .collect()
}

/// Builds the report for a completed session; `None` in any other phase.
pub fn build_report(session: &Session) -> Option<ScreeningReport> {
    if session.phase != Phase::Completed {
        return None;
    }

    let questions: Vec<QuestionOutcome> = session
        .questions
        .iter()
        .enumerate()
        .map(|(i, q)| QuestionOutcome {
            number: i + 1,
            question: q.clone(),
            answer: session.answers.get(&i).cloned(),
        })
        .collect();

    let answered = session.answers.len();
    let total_questions = session.questions.len();

    Some(ScreeningReport {
        candidate: candidate_profile(session),
        tech_stack_raw: session.tech_stack_raw().map(str::to_string),
        skills: session.skills.clone(),
        questions,
        answered,
        skipped: total_questions.saturating_sub(answered),
        total_questions,
    })
}
