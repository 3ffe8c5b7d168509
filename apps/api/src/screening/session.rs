//! Screening session state — one candidate's run from greeting to report.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::screening::fields::Field;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Collecting,
    Questioning,
    Ended,
    Completed,
}

impl Phase {
    /// Ended and Completed accept nothing but a restart.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Ended | Phase::Completed)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Phase::Collecting => "collecting",
            Phase::Questioning => "questioning",
            Phase::Ended => "ended",
            Phase::Completed => "completed",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    Assistant,
    Candidate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub speaker: Speaker,
    pub text: String,
    pub at: DateTime<Utc>,
}

/// All mutable state for one screening run.
///
/// Fields are only mutated through `engine`; handlers read them for views.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub phase: Phase,
    pub field_index: usize,
    /// Validated values only, keyed in intake order.
    pub fields: BTreeMap<Field, String>,
    pub skills: Vec<String>,
    /// Set once when intake finishes; never regenerated.
    pub questions: Vec<String>,
    pub question_index: usize,
    /// Sparse: skipped questions have no entry.
    pub answers: BTreeMap<usize, String>,
    pub transcript: Vec<TranscriptEntry>,
    pub last_error: Option<String>,
}

impl Session {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            created_at: Utc::now(),
            phase: Phase::Collecting,
            field_index: 0,
            fields: BTreeMap::new(),
            skills: Vec::new(),
            questions: Vec::new(),
            question_index: 0,
            answers: BTreeMap::new(),
            transcript: Vec::new(),
            last_error: None,
        }
    }

    /// The field currently being asked for, while collecting.
    pub fn current_field(&self) -> Option<Field> {
        match self.phase {
            Phase::Collecting => Field::at(self.field_index),
            _ => None,
        }
    }

    /// The question currently being asked, while questioning.
    pub fn current_question(&self) -> Option<&str> {
        match self.phase {
            Phase::Questioning => self.questions.get(self.question_index).map(String::as_str),
            _ => None,
        }
    }

    /// Raw comma-separated tech stack as the candidate typed it.
    pub fn tech_stack_raw(&self) -> Option<&str> {
        self.fields.get(&Field::TechStack).map(String::as_str)
    }

    pub(crate) fn say(&mut self, speaker: Speaker, text: impl Into<String>) {
        self.transcript.push(TranscriptEntry {
            speaker,
            text: text.into(),
            at: Utc::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_collecting_name() {
        let session = Session::new(Uuid::new_v4());
        assert_eq!(session.phase, Phase::Collecting);
        assert_eq!(session.field_index, 0);
        assert_eq!(session.current_field(), Some(Field::Name));
        assert!(session.current_question().is_none());
        assert!(session.fields.is_empty());
        assert!(session.answers.is_empty());
    }

    #[test]
    fn test_terminal_phases() {
        assert!(Phase::Ended.is_terminal());
        assert!(Phase::Completed.is_terminal());
        assert!(!Phase::Collecting.is_terminal());
        assert!(!Phase::Questioning.is_terminal());
    }

    #[test]
    fn test_current_question_only_while_questioning() {
        let mut session = Session::new(Uuid::new_v4());
        session.questions = vec!["What is a closure?".to_string()];
        assert!(session.current_question().is_none());
        session.phase = Phase::Questioning;
        assert_eq!(session.current_question(), Some("What is a closure?"));
        session.question_index = 1;
        assert!(session.current_question().is_none());
    }

    #[test]
    fn test_fields_serialize_with_snake_case_keys() {
        let mut session = Session::new(Uuid::new_v4());
        session.fields.insert(Field::TechStack, "Rust".to_string());
        session.fields.insert(Field::Name, "Jane Doe".to_string());
        let json = serde_json::to_value(&session.fields).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 2);
        assert!(keys.contains(&"name".to_string()));
        assert!(keys.contains(&"tech_stack".to_string()));
    }
}
