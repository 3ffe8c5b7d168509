// LLM prompt constants for technical question generation.

/// System prompt for question generation.
pub const QUESTION_SYSTEM: &str = "You are a senior technical interviewer at a recruitment agency. \
    You write short, concrete screening questions that assess practical proficiency. \
    Each question must stand alone and be answerable in a few paragraphs.";

/// Question generation prompt. Replace `{skills}`, `{experience}` and
/// `{list_instruction}` before sending.
pub const QUESTION_PROMPT_TEMPLATE: &str = r#"A candidate declared the following tech stack: {skills}.
They have {experience} years of professional experience.

Write between 3 and 5 technical screening questions that cover the listed technologies.
Calibrate difficulty to the candidate's experience level.
Prefix each question with the technology it targets in square brackets, e.g. "[Python] ...".

{list_instruction}"#;
