use crate::questions::planner::QuestionPlanner;
use crate::screening::store::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    /// Keyword bank, optionally fronted by the LLM generator. Chosen at startup.
    pub planner: QuestionPlanner,
}
