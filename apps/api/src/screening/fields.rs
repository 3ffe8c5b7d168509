//! The fixed candidate field sequence collected during the intake phase.

use serde::{Deserialize, Serialize};

/// One piece of candidate information. Declaration order is question order,
/// so the derived `Ord` keeps a `BTreeMap<Field, _>` in intake order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    Email,
    Phone,
    Experience,
    Position,
    Location,
    TechStack,
}

/// Intake order. `Session::field_index` indexes into this.
pub const FIELD_SEQUENCE: [Field; 7] = [
    Field::Name,
    Field::Email,
    Field::Phone,
    Field::Experience,
    Field::Position,
    Field::Location,
    Field::TechStack,
];

pub const FIELD_COUNT: usize = FIELD_SEQUENCE.len();

impl Field {
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Experience => "experience",
            Field::Position => "position",
            Field::Location => "location",
            Field::TechStack => "tech_stack",
        }
    }

    /// Human-facing label used in the profile sidebar and the report.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Experience => "Experience",
            Field::Position => "Position",
            Field::Location => "Location",
            Field::TechStack => "Tech Stack",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            Field::Name => "What is your full name?",
            Field::Email => "What is your email address?",
            Field::Phone => "What is your phone number? (10 digits)",
            Field::Experience => "How many years of experience do you have? (number)",
            Field::Position => "What position are you applying for?",
            Field::Location => "Where are you currently located?",
            Field::TechStack => {
                "What is your tech stack? (comma separated, e.g., Python, React, AWS)"
            }
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Email => "your.email@example.com",
            Field::Phone => "1234567890",
            Field::Experience => "e.g., 3",
            Field::TechStack => "Python, JavaScript, AWS, Docker",
            Field::Name | Field::Position | Field::Location => "Type here...",
        }
    }

    /// Field at `index` in the intake sequence, if any.
    pub fn at(index: usize) -> Option<Field> {
        FIELD_SEQUENCE.get(index).copied()
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Splits the raw tech-stack answer into trimmed, non-empty skills.
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
