//! Prompt context rendering
//!
//! Pure functions over snapshots of the transcript and member state.
//! Both windows are bounded so prompt size stays flat no matter how long
//! the meeting runs.

use crate::member::MemberProfile;
use crate::transcript::TurnRecord;

/// Default window for both shared and per-member context.
pub const CONTEXT_WINDOW: usize = 10;

/// Render the most recent `window` turn records as `speaker: message`
/// lines, oldest first, under a fixed header.
pub fn shared_context(records: &[TurnRecord], window: usize) -> String {
    let start = records.len().saturating_sub(window);
    let lines: Vec<String> = records[start..]
        .iter()
        .map(|r| format!("{}: {}", r.speaker, r.message))
        .collect();
    format!("Recent conversation:\n{}", lines.join("\n"))
}

/// Render a member's identity plus the most recent `window` memory
/// entries, joined by a fixed separator.
pub fn member_context(profile: &MemberProfile, memory: &[String], window: usize) -> String {
    let start = memory.len().saturating_sub(window);
    format!(
        "Role: {}\nExpertise: {}\nPersonality: {}\nRecent Memory: {}",
        profile.role,
        profile.expertise,
        profile.personality,
        memory[start..].join(" | ")
    )
}
