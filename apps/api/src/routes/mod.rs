pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::screening::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/screenings", post(handlers::handle_create))
        .route(
            "/api/v1/screenings/:id",
            get(handlers::handle_get).delete(handlers::handle_delete),
        )
        .route(
            "/api/v1/screenings/:id/messages",
            post(handlers::handle_submit),
        )
        .route("/api/v1/screenings/:id/skip", post(handlers::handle_skip))
        .route(
            "/api/v1/screenings/:id/restart",
            post(handlers::handle_restart),
        )
        .route(
            "/api/v1/screenings/:id/transcript",
            get(handlers::handle_transcript),
        )
        .route("/api/v1/screenings/:id/report", get(handlers::handle_report))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::questions::bank::PickStrategy;
    use crate::questions::planner::QuestionPlanner;
    use crate::screening::store::SessionStore;

    fn app() -> Router {
        build_router(AppState {
            sessions: SessionStore::new(),
            planner: QuestionPlanner::keyword_only(PickStrategy::First),
        })
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                builder = builder.header("content-type", "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };
        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn create(app: &Router) -> String {
        let (status, view) = send(app, "POST", "/api/v1/screenings", None).await;
        assert_eq!(status, StatusCode::CREATED);
        view["session_id"].as_str().unwrap().to_string()
    }

    async fn say(app: &Router, id: &str, text: &str) -> (StatusCode, Value) {
        send(
            app,
            "POST",
            &format!("/api/v1/screenings/{id}/messages"),
            Some(json!({ "text": text })),
        )
        .await
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(&app(), "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["question_backend"], "keyword");
    }

    #[tokio::test]
    async fn test_full_screening_over_http() {
        let app = app();
        let id = create(&app).await;

        for text in [
            "Jane Doe",
            "jane@example.com",
            "1234567890",
            "5",
            "Backend Engineer",
            "Remote",
        ] {
            let (status, view) = say(&app, &id, text).await;
            assert_eq!(status, StatusCode::OK);
            assert!(view["error"].is_null(), "{text}: {view}");
            assert_eq!(view["phase"], "collecting");
        }

        let (_, view) = say(&app, &id, "Python, SQL").await;
        assert_eq!(view["phase"], "questioning");
        assert_eq!(view["questions"].as_array().unwrap().len(), 3);
        assert_eq!(
            view["progress"]["caption"],
            "Question 1 of 3 - Technical Screening"
        );

        let (status, _) = send(&app, "GET", &format!("/api/v1/screenings/{id}/report"), None).await;
        assert_eq!(status, StatusCode::CONFLICT);

        say(&app, &id, "Decorators wrap a function.").await;
        send(&app, "POST", &format!("/api/v1/screenings/{id}/skip"), None).await;
        let (_, view) = say(&app, &id, "Step through with a debugger.").await;
        assert_eq!(view["phase"], "completed");
        assert_eq!(view["report"]["answered"], 2);
        assert_eq!(view["report"]["skipped"], 1);

        let (status, report) =
            send(&app, "GET", &format!("/api/v1/screenings/{id}/report"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(report["candidate"][0]["value"], "Jane Doe");
        assert_eq!(report["skills"], json!(["Python", "SQL"]));
    }

    #[tokio::test]
    async fn test_invalid_input_returns_view_with_error() {
        let app = app();
        let id = create(&app).await;
        let (status, view) = say(&app, &id, "J4ne").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(view["phase"], "collecting");
        assert_eq!(view["prompt"], "What is your full name?");
        assert!(view["error"].as_str().unwrap().contains("letters"));
    }

    #[tokio::test]
    async fn test_closed_session_conflicts_until_restart() {
        let app = app();
        let id = create(&app).await;
        let (_, view) = say(&app, &id, "EXIT").await;
        assert_eq!(view["phase"], "ended");

        let (status, body) = say(&app, &id, "Jane Doe").await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "CONFLICT");

        let (status, view) =
            send(&app, "POST", &format!("/api/v1/screenings/{id}/restart"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(view["phase"], "collecting");
        assert_eq!(view["session_id"], id.as_str());
    }

    #[tokio::test]
    async fn test_skip_while_collecting_conflicts() {
        let app = app();
        let id = create(&app).await;
        let (status, _) = send(&app, "POST", &format!("/api/v1/screenings/{id}/skip"), None).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_transcript_and_delete() {
        let app = app();
        let id = create(&app).await;
        say(&app, &id, "Jane Doe").await;

        let (status, body) =
            send(&app, "GET", &format!("/api/v1/screenings/{id}/transcript"), None).await;
        assert_eq!(status, StatusCode::OK);
        let entries = body["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[2]["speaker"], "candidate");
        assert_eq!(entries[2]["text"], "Jane Doe");

        let (status, _) = send(&app, "DELETE", &format!("/api/v1/screenings/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, body) = send(&app, "GET", &format!("/api/v1/screenings/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let (status, _) = say(&app(), &Uuid::new_v4().to_string(), "hello").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
