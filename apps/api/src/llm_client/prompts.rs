// Shared prompt fragments. Each feature that calls the LLM keeps its own
// prompts.rs alongside it and composes these.

/// Instruction appended to prompts whose output is parsed line by line.
pub const PLAIN_LIST_INSTRUCTION: &str = "\
    Respond with a numbered list only, one item per line. \
    Do NOT include a preamble, headings, explanations, or closing remarks. \
    Do NOT use markdown formatting.";
