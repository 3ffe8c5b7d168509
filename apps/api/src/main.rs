mod config;
mod errors;
mod llm_client;
mod questions;
mod routes;
mod screening;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::questions::generator::LlmQuestionGenerator;
use crate::questions::planner::QuestionPlanner;
use crate::routes::build_router;
use crate::screening::store::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting TalentScout API v{}", env!("CARGO_PKG_VERSION"));

    let planner = build_planner(&config)?;
    info!(
        "Question planner ready (backend: {}, pick: {:?})",
        planner.backend(),
        config.question_pick
    );

    let state = AppState {
        sessions: SessionStore::new(),
        planner,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the candidate UI has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Keyword bank only, unless LLM questions are enabled and a key is configured.
fn build_planner(config: &Config) -> Result<QuestionPlanner> {
    let Some(api_key) = config.llm_questions_key() else {
        if config.enable_llm_questions {
            tracing::warn!("ENABLE_LLM_QUESTIONS is set but ANTHROPIC_API_KEY is missing; using keyword bank");
        }
        return Ok(QuestionPlanner::keyword_only(config.question_pick));
    };

    let llm = LlmClient::new(api_key.to_string(), config.llm_timeout)
        .context("Failed to build LLM HTTP client")?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    Ok(QuestionPlanner::with_generator(
        Arc::new(LlmQuestionGenerator(llm)),
        config.llm_timeout,
        config.question_pick,
    ))
}
