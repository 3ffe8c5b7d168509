//! Axum route handlers for the Screening API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::screening::engine;
use crate::screening::report::{build_report, ScreeningReport};
use crate::screening::session::TranscriptEntry;
use crate::screening::store::SessionHandle;
use crate::screening::view::ScreeningView;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub session_id: Uuid,
    pub entries: Vec<TranscriptEntry>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

async fn find_session(state: &AppState, id: Uuid) -> Result<SessionHandle, AppError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Screening {id} not found")))
}

/// POST /api/v1/screenings
///
/// Starts a new screening at the first intake question.
pub async fn handle_create(
    State(state): State<AppState>,
) -> (StatusCode, Json<ScreeningView>) {
    let session = state.sessions.create().await;
    (StatusCode::CREATED, Json(ScreeningView::from_session(&session)))
}

/// GET /api/v1/screenings/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ScreeningView>, AppError> {
    let handle = find_session(&state, id).await?;
    let session = handle.lock().await;
    Ok(Json(ScreeningView::from_session(&session)))
}

/// DELETE /api/v1/screenings/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Screening {id} not found")))
    }
}

/// POST /api/v1/screenings/:id/messages
///
/// Submits one line of candidate text. Input the current step rejects comes back
/// as 200 with `error` set and the same prompt; events the phase does not accept
/// at all are 409.
pub async fn handle_submit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SubmitRequest>,
) -> Result<Json<ScreeningView>, AppError> {
    let handle = find_session(&state, id).await?;
    let mut session = handle.lock().await;

    match engine::submit(&mut session, &request.text, &state.planner).await {
        Ok(_) => {}
        Err(e) if e.is_retryable() => {}
        Err(e) => return Err(e.into()),
    }

    Ok(Json(ScreeningView::from_session(&session)))
}

/// POST /api/v1/screenings/:id/skip
pub async fn handle_skip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ScreeningView>, AppError> {
    let handle = find_session(&state, id).await?;
    let mut session = handle.lock().await;
    engine::skip(&mut session)?;
    Ok(Json(ScreeningView::from_session(&session)))
}

/// POST /api/v1/screenings/:id/restart
///
/// Discards all collected data and starts over under the same id.
pub async fn handle_restart(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ScreeningView>, AppError> {
    let handle = find_session(&state, id).await?;
    let mut session = handle.lock().await;
    engine::restart(&mut session);
    Ok(Json(ScreeningView::from_session(&session)))
}

/// GET /api/v1/screenings/:id/transcript
pub async fn handle_transcript(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TranscriptResponse>, AppError> {
    let handle = find_session(&state, id).await?;
    let session = handle.lock().await;
    Ok(Json(TranscriptResponse {
        session_id: session.id,
        entries: session.transcript.clone(),
    }))
}

/// GET /api/v1/screenings/:id/report
///
/// Only available once the screening is completed.
pub async fn handle_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ScreeningReport>, AppError> {
    let handle = find_session(&state, id).await?;
    let session = handle.lock().await;
    build_report(&session).map(Json).ok_or_else(|| {
        AppError::Conflict(format!(
            "Screening {id} is {}; the report is available once it is completed",
            session.phase
        ))
    })
}
