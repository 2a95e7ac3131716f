//! Web API module for Roundtable
//!
//! Provides REST API endpoints for:
//! - Team roster listing
//! - Submitting a meeting turn
//! - Conversation log retrieval
//! - Per-member memory introspection

pub mod chat;
pub mod health;
pub mod log;
pub mod members;

use axum::routing::{get, post};
use axum::Router;
use roundtable_core::Meeting;
use serde::Serialize;
use std::sync::Arc;

/// Standard API response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Payload on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Message on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying `data`.
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Failed response carrying an error message.
    pub fn error(message: impl Into<String>) -> ApiResponse<T> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Create the API router with all endpoints.
pub fn api_router(meeting: Arc<Meeting>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/team-members", get(members::list_members))
        .route("/api/chat", post(chat::submit_turn))
        .route("/api/conversation-log", get(log::conversation_log))
        .route("/api/member-memory/:name", get(log::member_memory))
        .with_state(meeting)
}
