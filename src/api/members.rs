//! Team roster endpoint
//!
//! GET /api/team-members - public identity of every member, keyed by name.
//! Memory and history never appear here; see the member-memory endpoint.

use axum::extract::State;
use axum::Json;
use roundtable_core::{Meeting, MemberProfile};
use std::collections::HashMap;
use std::sync::Arc;

use super::ApiResponse;

/// List every team member's public identity fields.
pub async fn list_members(
    State(meeting): State<Arc<Meeting>>,
) -> Json<ApiResponse<HashMap<String, MemberProfile>>> {
    let members: HashMap<String, MemberProfile> = meeting
        .member_profiles()
        .into_iter()
        .map(|profile| (profile.name.clone(), profile))
        .collect();
    Json(ApiResponse::success(members))
}
