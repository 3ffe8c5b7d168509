//! Conversation engine — the screening state machine.
//!
//! States: Collecting(field_index) → Questioning(question_index) → Completed,
//! and any non-terminal state → Ended on an exit keyword. Every event either
//! applies all of its mutations or none of them.

use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use crate::questions::planner::QuestionPlanner;
use crate::screening::fields::{parse_skills, Field};
use crate::screening::session::{Phase, Session, Speaker};
use crate::screening::validation::validate_field;

/// Words that end the screening from any non-terminal phase.
pub const EXIT_KEYWORDS: [&str; 7] = ["exit", "quit", "bye", "goodbye", "stop", "end", "cancel"];

/// Answers longer than this are shortened in the transcript only.
const TRANSCRIPT_ANSWER_CHARS: usize = 150;

const GREETING: &str = "Hello! I'm the TalentScout hiring assistant. I'll help with your \
    initial screening. You can type 'exit' anytime to end.";
const FAREWELL: &str = "Thank you! Screening ended. We'll contact you if needed.";
const COMPLETION: &str = "Screening successfully completed! Thank you for your participation.\n\n\
    Next steps:\n\
    1. Our team will review your responses\n\
    2. You'll hear back within 3-5 business days\n\
    3. Next interview round (if selected)";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScreeningError {
    #[error("Please enter a response.")]
    EmptyInput,

    #[error("{reason}")]
    InvalidField { field: Field, reason: String },

    #[error("This screening has {0}. Start a new screening to continue.")]
    SessionClosed(Phase),

    #[error("There is no question to skip right now.")]
    SkipUnavailable,
}

impl ScreeningError {
    /// Input errors re-prompt the same step; the others reject the event outright.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ScreeningError::EmptyInput | ScreeningError::InvalidField { .. }
        )
    }

    /// The field whose validator rejected the input, if any.
    pub fn field(&self) -> Option<Field> {
        match self {
            ScreeningError::InvalidField { field, .. } => Some(*field),
            _ => None,
        }
    }
}

/// What an accepted event did to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    NextField(Field),
    QuestionsReady { count: usize },
    NextQuestion(usize),
    Completed,
    Ended,
}

impl std::fmt::Display for Advance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Advance::NextField(field) => write!(f, "next field {field}"),
            Advance::QuestionsReady { count } => write!(f, "{count} questions ready"),
            Advance::NextQuestion(index) => write!(f, "question {}", index + 1),
            Advance::Completed => f.write_str("completed"),
            Advance::Ended => f.write_str("ended"),
        }
    }
}

pub fn is_exit_keyword(text: &str) -> bool {
    let lowered = text.trim().to_lowercase();
    EXIT_KEYWORDS.contains(&lowered.as_str())
}

/// Creates a fresh session with the greeting and first prompt in its transcript.
pub fn begin(id: Uuid) -> Session {
    let mut session = Session::new(id);
    session.say(Speaker::Assistant, GREETING);
    session.say(Speaker::Assistant, Field::Name.prompt());
    session
}

/// Discards everything and re-enters `Collecting(0)`, keeping the session id.
pub fn restart(session: &mut Session) {
    info!("Restarting screening {}", session.id);
    *session = begin(session.id);
}

/// The prompt the candidate should see next, if any.
pub fn next_prompt(session: &Session) -> Option<String> {
    match session.phase {
        Phase::Collecting => session.current_field().map(|f| f.prompt().to_string()),
        Phase::Questioning => session.current_question().map(|q| {
            format!(
                "Question {} of {}: {}",
                session.question_index + 1,
                session.questions.len(),
                q
            )
        }),
        Phase::Ended | Phase::Completed => None,
    }
}

/// Applies one line of candidate text.
///
/// Retryable errors are also recorded in `session.last_error`; rejected events
/// leave the session untouched.
pub async fn submit(
    session: &mut Session,
    raw: &str,
    planner: &QuestionPlanner,
) -> Result<Advance, ScreeningError> {
    if session.phase.is_terminal() {
        return Err(ScreeningError::SessionClosed(session.phase));
    }

    let result = apply_submit(session, raw, planner).await;
    match &result {
        Ok(advance) => {
            session.last_error = None;
            debug!("Screening {} advanced: {advance}", session.id);
        }
        Err(e) => {
            match e.field() {
                Some(field) => debug!("Screening {} rejected {field}: {e}", session.id),
                None => debug!("Screening {} rejected input: {e}", session.id),
            }
            session.last_error = Some(e.to_string());
        }
    }
    result
}

async fn apply_submit(
    session: &mut Session,
    raw: &str,
    planner: &QuestionPlanner,
) -> Result<Advance, ScreeningError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(ScreeningError::EmptyInput);
    }

    if is_exit_keyword(text) {
        session.say(Speaker::Candidate, text);
        session.say(Speaker::Assistant, FAREWELL);
        session.phase = Phase::Ended;
        info!("Screening {} ended by candidate", session.id);
        return Ok(Advance::Ended);
    }

    match session.phase {
        Phase::Collecting => collect_field(session, text, planner).await,
        Phase::Questioning => Ok(record_answer(session, text)),
        Phase::Ended | Phase::Completed => Err(ScreeningError::SessionClosed(session.phase)),
    }
}

async fn collect_field(
    session: &mut Session,
    text: &str,
    planner: &QuestionPlanner,
) -> Result<Advance, ScreeningError> {
    let Some(field) = session.current_field() else {
        return Err(ScreeningError::SessionClosed(session.phase));
    };

    let check = validate_field(field, text);
    if !check.passed {
        return Err(ScreeningError::InvalidField {
            field,
            reason: check
                .reason
                .unwrap_or_else(|| format!("Invalid {}", field.label())),
        });
    }

    if let Some(next) = Field::at(session.field_index + 1) {
        session.fields.insert(field, text.to_string());
        session.field_index += 1;
        session.say(Speaker::Candidate, text);
        session.say(Speaker::Assistant, next.prompt());
        return Ok(Advance::NextField(next));
    }

    // Last field: plan questions before touching the session so a slow or
    // failing generator cannot leave it half-updated.
    let skills = parse_skills(text);
    let experience = session
        .fields
        .get(&Field::Experience)
        .cloned()
        .unwrap_or_default();
    let questions = planner.plan(&skills, &experience).await;

    session.fields.insert(field, text.to_string());
    session.field_index += 1;
    session.skills = skills;
    session.say(Speaker::Candidate, text);

    let count = questions.len();
    session.say(Speaker::Assistant, questions_ready_message(&questions));
    session.questions = questions;
    session.question_index = 0;
    session.phase = Phase::Questioning;
    if let Some(prompt) = next_prompt(session) {
        session.say(Speaker::Assistant, prompt);
    }

    info!(
        "Screening {} collected all fields; {} questions via {}",
        session.id,
        count,
        planner.backend()
    );
    Ok(Advance::QuestionsReady { count })
}

fn record_answer(session: &mut Session, text: &str) -> Advance {
    let index = session.question_index;
    session.answers.insert(index, text.to_string());
    session.say(
        Speaker::Candidate,
        format!("Answer {}: {}", index + 1, truncate_for_display(text)),
    );
    advance_question(session)
}

/// Advances past the current question without recording an answer.
pub fn skip(session: &mut Session) -> Result<Advance, ScreeningError> {
    match session.phase {
        Phase::Questioning => {}
        Phase::Collecting => return Err(ScreeningError::SkipUnavailable),
        Phase::Ended | Phase::Completed => {
            return Err(ScreeningError::SessionClosed(session.phase))
        }
    }

    session.say(
        Speaker::Assistant,
        format!("Question {} skipped.", session.question_index + 1),
    );
    session.last_error = None;
    Ok(advance_question(session))
}

fn advance_question(session: &mut Session) -> Advance {
    session.question_index += 1;

    if session.question_index >= session.questions.len() {
        session.phase = Phase::Completed;
        session.say(Speaker::Assistant, COMPLETION);
        info!(
            "Screening {} completed: {}/{} answered",
            session.id,
            session.answers.len(),
            session.questions.len()
        );
        return Advance::Completed;
    }

    if let Some(prompt) = next_prompt(session) {
        session.say(Speaker::Assistant, prompt);
    }
    Advance::NextQuestion(session.question_index)
}

fn questions_ready_message(questions: &[String]) -> String {
    let mut msg = format!(
        "Information collection complete!\n\nTechnical questions ({}):",
        questions.len()
    );
    for (i, q) in questions.iter().enumerate() {
        msg.push_str(&format!("\n{}. {}", i + 1, q));
    }
    msg.push_str("\n\nPlease answer each question. Type 'exit' to end.");
    msg
}

fn truncate_for_display(text: &str) -> String {
    if text.chars().count() <= TRANSCRIPT_ANSWER_CHARS {
        return text.to_string();
    }
    let head: String = text.chars().take(TRANSCRIPT_ANSWER_CHARS).collect();
    format!("{head}...")
}
