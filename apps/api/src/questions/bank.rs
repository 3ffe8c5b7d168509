//! Static keyword question bank — the deterministic path for technical questions.
//!
//! Each skill is lowercased and substring-matched against the keyword table in
//! table order; the first hit wins. `javascript` precedes `java` so that
//! "JavaScript" is not claimed by the shorter keyword.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

pub const MIN_QUESTIONS: usize = 3;
pub const MAX_QUESTIONS: usize = 5;
/// Only the first few declared skills are considered.
pub const MAX_SKILLS_CONSIDERED: usize = 5;

pub const GENERIC_QUESTIONS: [&str; 3] = [
    "Describe a technical project you worked on.",
    "How do you debug complex issues?",
    "How do you stay current with technology?",
];

/// A technology keyword and its candidate questions.
#[derive(Debug, Clone, Copy)]
pub struct KeywordEntry {
    pub keyword: &'static str,
    pub label: &'static str,
    pub questions: [&'static str; 3],
}

pub const KEYWORD_TABLE: &[KeywordEntry] = &[
    KeywordEntry {
        keyword: "python",
        label: "Python",
        questions: [
            "Explain Python decorators.",
            "What is the difference between a list and a tuple?",
            "What is the GIL in Python?",
        ],
    },
    KeywordEntry {
        keyword: "javascript",
        label: "JavaScript",
        questions: [
            "What is a closure?",
            "Explain the event loop.",
            "What is the difference between var, let and const?",
        ],
    },
    KeywordEntry {
        keyword: "java",
        label: "Java",
        questions: [
            "What is polymorphism?",
            "Explain the Java collections framework.",
            "How does multithreading work in Java?",
        ],
    },
    KeywordEntry {
        keyword: "react",
        label: "React",
        questions: [
            "What are React hooks?",
            "What is the virtual DOM?",
            "What is the difference between state and props?",
        ],
    },
    KeywordEntry {
        keyword: "aws",
        label: "AWS",
        questions: [
            "What is the difference between EC2 and Lambda?",
            "What is S3 and when would you use it?",
            "Describe what a VPC is.",
        ],
    },
    KeywordEntry {
        keyword: "sql",
        label: "SQL",
        questions: [
            "What types of SQL joins are there?",
            "What are indexes and when do they help?",
            "Explain database normalization.",
        ],
    },
    KeywordEntry {
        keyword: "docker",
        label: "Docker",
        questions: [
            "How do Docker containers differ from VMs?",
            "What is a Dockerfile?",
            "What is the difference between an image and a container?",
        ],
    },
    KeywordEntry {
        keyword: "node",
        label: "Node.js",
        questions: [
            "What is event-driven programming?",
            "What is callback hell and how do you avoid it?",
            "How does Node.js handle async operations?",
        ],
    },
];

/// How one question is chosen from a matched keyword's candidates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickStrategy {
    /// Uniformly random, so repeat candidates see different questions.
    #[default]
    Random,
    /// Always the first candidate. Reproducible.
    First,
}

impl std::str::FromStr for PickStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(PickStrategy::Random),
            "first" => Ok(PickStrategy::First),
            other => Err(format!("unknown question pick strategy '{other}'")),
        }
    }
}

/// First keyword entry whose keyword occurs in `skill`, case-insensitively.
pub fn match_keyword(skill: &str) -> Option<&'static KeywordEntry> {
    let skill_lower = skill.trim().to_lowercase();
    if skill_lower.is_empty() {
        return None;
    }
    KEYWORD_TABLE
        .iter()
        .find(|entry| skill_lower.contains(entry.keyword))
}

/// Picks one labelled question per matched skill, then pads with generic
/// questions. Always returns between `MIN_QUESTIONS` and `MAX_QUESTIONS` items.
///
/// Skills that hit the same keyword each get a question; the pick prefers a
/// candidate not already asked, so "Python, Django (Python)" yields two
/// different Python questions.
pub fn select_questions(skills: &[String], pick: PickStrategy) -> Vec<String> {
    let mut rng = rand::thread_rng();
    let mut questions: Vec<String> = Vec::new();

    for skill in skills.iter().take(MAX_SKILLS_CONSIDERED) {
        if questions.len() >= MAX_QUESTIONS {
            break;
        }
        let Some(entry) = match_keyword(skill) else {
            continue;
        };

        let labelled = |q: &str| format!("[{}] {}", entry.label, q);
        let fresh: Vec<&'static str> = entry
            .questions
            .iter()
            .copied()
            .filter(|q| !questions.contains(&labelled(*q)))
            .collect();
        let candidates: &[&'static str] = if fresh.is_empty() {
            &entry.questions
        } else {
            &fresh
        };

        let question = match pick {
            PickStrategy::First => candidates[0],
            PickStrategy::Random => candidates
                .choose(&mut rng)
                .copied()
                .unwrap_or(candidates[0]),
        };
        questions.push(labelled(question));
    }

    pad_with_generic(questions)
}

/// Pads `questions` with generic questions up to `MIN_QUESTIONS` and truncates
/// to `MAX_QUESTIONS`.
pub fn pad_with_generic(mut questions: Vec<String>) -> Vec<String> {
    for generic in GENERIC_QUESTIONS {
        if questions.len() >= MIN_QUESTIONS {
            break;
        }
        if !questions.iter().any(|q| q == generic) {
            questions.push(generic.to_string());
        }
    }
    questions.truncate(MAX_QUESTIONS);
    questions
}
