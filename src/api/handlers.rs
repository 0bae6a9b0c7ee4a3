//! HTTP request handlers for the compliance notification engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::pipeline::run_evaluation;

use super::request::EvaluateRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/evaluate", post(evaluate_handler))
        .with_state(state)
}

/// Handler for GET / endpoint.
///
/// A plain-text liveness line for load balancers and humans.
async fn home_handler() -> &'static str {
    "Drug test compliance tracker is running!"
}

/// Handler for POST /evaluate endpoint.
///
/// Runs one evaluation cycle on demand and returns the notification set.
async fn evaluate_handler(
    State(state): State<AppState>,
    payload: Result<Json<EvaluateRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing evaluation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::malformed_json(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let reference_date = request
        .reference_date
        .unwrap_or_else(|| Utc::now().date_naive());
    let deliver = !request.dry_run;

    match run_evaluation(state.config(), reference_date, deliver).await {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                reference_date = %reference_date,
                initial_tests = result.initial_tests.len(),
                followup_tests = result.followup_tests.len(),
                "Evaluation request completed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Evaluation request failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrackerConfig;
    use crate::models::EvaluationResult;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use std::io::Write;
    use tower::ServiceExt;

    fn write_roster(rows: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "First Name,Last Name,Account Id,Employee Status,Date Hired,Date Re-Hired\n{}",
            rows
        )
        .unwrap();
        file
    }

    fn create_test_state(roster: &tempfile::NamedTempFile) -> AppState {
        AppState::new(TrackerConfig {
            roster_path: roster.path().display().to_string(),
            webhook_url: None,
            notify_hour: 9,
            bind_addr: "127.0.0.1:0".to_string(),
        })
    }

    async fn post_evaluate(router: Router, body: &str) -> (StatusCode, Vec<u8>) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/evaluate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_home_returns_liveness_line() {
        let roster = write_roster("");
        let router = create_router(create_test_state(&roster));

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"Drug test compliance tracker is running!");
    }

    #[tokio::test]
    async fn test_evaluate_with_pinned_reference_date() {
        let roster = write_roster("Dana,Reyes,acct_1042,Active,2024-01-01,\n");
        let router = create_router(create_test_state(&roster));

        let (status, body) =
            post_evaluate(router, r#"{"reference_date": "2024-03-17"}"#).await;

        assert_eq!(status, StatusCode::OK);
        let result: EvaluationResult = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.initial_tests.len(), 1);
        assert_eq!(result.initial_tests[0].employee_id, "acct_1042");
    }

    #[tokio::test]
    async fn test_evaluate_accepts_timestamp_reference() {
        let roster = write_roster("Dana,Reyes,acct_1042,Active,2024-01-01,\n");
        let router = create_router(create_test_state(&roster));

        let (status, body) =
            post_evaluate(router, r#"{"reference_date": "2024-03-17T08:15:00Z"}"#).await;

        assert_eq!(status, StatusCode::OK);
        let result: EvaluationResult = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.initial_tests.len(), 1);
    }

    #[tokio::test]
    async fn test_evaluate_empty_object_is_valid() {
        let roster = write_roster("Dana,Reyes,acct_1042,Active,2014-01-01,\n");
        let router = create_router(create_test_state(&roster));

        // Today's date is far from any window for a 2014 hire on most days,
        // but the request itself must always be accepted.
        let (status, _body) = post_evaluate(router, "{}").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_evaluate_malformed_json_returns_400() {
        let roster = write_roster("");
        let router = create_router(create_test_state(&roster));

        let (status, body) = post_evaluate(router, "{invalid json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_evaluate_bad_reference_date_returns_400() {
        let roster = write_roster("");
        let router = create_router(create_test_state(&roster));

        let (status, body) =
            post_evaluate(router, r#"{"reference_date": "next tuesday"}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
        assert!(error.message.contains("reference_date"));
    }

    #[tokio::test]
    async fn test_evaluate_missing_roster_returns_500() {
        let state = AppState::new(TrackerConfig {
            roster_path: "/nonexistent/roster.csv".to_string(),
            webhook_url: None,
            notify_hour: 9,
            bind_addr: "127.0.0.1:0".to_string(),
        });
        let router = create_router(state);

        let (status, body) =
            post_evaluate(router, r#"{"reference_date": "2024-03-17"}"#).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "ROSTER_ERROR");
    }

    #[tokio::test]
    async fn test_evaluate_dry_run_never_touches_the_webhook() {
        let roster = write_roster("Dana,Reyes,acct_1042,Active,2024-01-01,\n");
        let state = AppState::new(TrackerConfig {
            roster_path: roster.path().display().to_string(),
            // Unreachable on purpose; a dry run must not try it.
            webhook_url: Some("http://127.0.0.1:1/hook".to_string()),
            notify_hour: 9,
            bind_addr: "127.0.0.1:0".to_string(),
        });
        let router = create_router(state);

        let (status, body) = post_evaluate(
            router,
            r#"{"reference_date": "2024-03-17", "dry_run": true}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let result: EvaluationResult = serde_json::from_slice(&body).unwrap();
        assert_eq!(result.initial_tests.len(), 1);
    }
}
