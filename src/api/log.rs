//! Conversation log and member introspection endpoints
//!
//! GET /api/conversation-log       - every turn record since start
//! GET /api/member-memory/:name    - one member's memory and history

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use roundtable_core::{Meeting, MemberIntrospection, TurnRecord};
use std::sync::Arc;

use super::ApiResponse;

/// Full conversation log.
pub async fn conversation_log(
    State(meeting): State<Arc<Meeting>>,
) -> Json<ApiResponse<Vec<TurnRecord>>> {
    Json(ApiResponse::success(meeting.conversation_log().await))
}

/// One member's memory and history.
pub async fn member_memory(
    State(meeting): State<Arc<Meeting>>,
    Path(name): Path<String>,
) -> (StatusCode, Json<ApiResponse<MemberIntrospection>>) {
    match meeting.member_introspection(&name).await {
        Ok(view) => (StatusCode::OK, Json(ApiResponse::success(view))),
        Err(e) => (StatusCode::NOT_FOUND, Json(ApiResponse::error(e.to_string()))),
    }
}
