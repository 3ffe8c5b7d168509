// Technical question selection: static keyword bank, optional LLM generator,
// and the planner that combines them with a deterministic fallback.

pub mod bank;
pub mod generator;
pub mod planner;
pub mod prompts;
