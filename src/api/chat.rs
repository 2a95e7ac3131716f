//! Turn submission endpoint
//!
//! POST /api/chat - run one meeting turn and return the outcome.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use roundtable_core::{Meeting, TurnOutcome};
use serde::Deserialize;
use std::sync::Arc;

use super::ApiResponse;

/// Request to run a meeting turn.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The user's message
    pub message: String,
    /// Optional explicit participant list; empty or absent means the
    /// supervisor plus a random sample joins
    #[serde(default)]
    pub selected_members: Option<Vec<String>>,
}

/// Run one meeting turn.
///
/// Empty messages are rejected here; the core never sees them.
pub async fn submit_turn(
    State(meeting): State<Arc<Meeting>>,
    Json(request): Json<ChatRequest>,
) -> (StatusCode, Json<ApiResponse<TurnOutcome>>) {
    if request.message.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("Message is required")),
        );
    }

    let outcome = meeting
        .run_turn(&request.message, request.selected_members)
        .await;
    (StatusCode::OK, Json(ApiResponse::success(outcome)))
}
