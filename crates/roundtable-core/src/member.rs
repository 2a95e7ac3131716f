//! Team member personas and their mutable meeting state
//!
//! A member's identity is fixed at construction. Its memory (bounded) and
//! history (unbounded) grow as the member participates in turns. State is
//! guarded per member so concurrent generation calls for different members
//! never contend with each other.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// Maximum memory entries retained per member; oldest are dropped first.
pub const MEMORY_LIMIT: usize = 50;

/// Public identity of a team member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberProfile {
    /// Unique display name (primary key within the roster)
    pub name: String,
    /// Role title
    pub role: String,
    /// Personality description
    pub personality: String,
    /// Expertise description
    pub expertise: String,
}

/// One full input/output pair from a generation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// When the exchange happened
    pub timestamp: DateTime<Utc>,
    /// What the user said, untruncated
    pub user_message: String,
    /// What the member answered, untruncated
    pub response: String,
}

#[derive(Debug, Default)]
struct MemberState {
    memory: Vec<String>,
    history: Vec<HistoryRecord>,
}

/// A team member: fixed profile plus lock-guarded mutable state.
#[derive(Debug)]
pub struct TeamMember {
    profile: MemberProfile,
    state: RwLock<MemberState>,
}

impl TeamMember {
    /// Create a member with empty memory and history.
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        personality: impl Into<String>,
        expertise: impl Into<String>,
    ) -> Self {
        Self {
            profile: MemberProfile {
                name: name.into(),
                role: role.into(),
                personality: personality.into(),
                expertise: expertise.into(),
            },
            state: RwLock::new(MemberState::default()),
        }
    }

    /// The member's public identity.
    pub fn profile(&self) -> &MemberProfile {
        &self.profile
    }

    /// The member's name.
    pub fn name(&self) -> &str {
        &self.profile.name
    }

    /// Append a clock-tagged memory entry, dropping the oldest entries once
    /// the bound is exceeded.
    pub async fn append_memory(&self, entry: &str) {
        let tagged = format!("[{}] {}", Local::now().format("%H:%M:%S"), entry);
        let mut state = self.state.write().await;
        state.memory.push(tagged);
        if state.memory.len() > MEMORY_LIMIT {
            let excess = state.memory.len() - MEMORY_LIMIT;
            state.memory.drain(..excess);
        }
    }

    /// Append an untruncated history record with the current timestamp.
    pub async fn append_history(&self, user_message: &str, response: &str) {
        let mut state = self.state.write().await;
        state.history.push(HistoryRecord {
            timestamp: Utc::now(),
            user_message: user_message.to_string(),
            response: response.to_string(),
        });
    }

    /// The most recent `window` memory entries, oldest first.
    pub async fn recent_memory(&self, window: usize) -> Vec<String> {
        let state = self.state.read().await;
        let start = state.memory.len().saturating_sub(window);
        state.memory[start..].to_vec()
    }

    /// Full memory snapshot, oldest first.
    pub async fn memory_snapshot(&self) -> Vec<String> {
        self.state.read().await.memory.clone()
    }

    /// Full history snapshot, oldest first.
    pub async fn history_snapshot(&self) -> Vec<HistoryRecord> {
        self.state.read().await.history.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member() -> TeamMember {
        TeamMember::new("Alex Chen", "Senior Systems Administrator", "thorough", "servers")
    }

    #[tokio::test]
    async fn test_memory_is_clock_tagged() {
        let member = member();
        member.append_memory("User said: hello").await;

        let memory = member.memory_snapshot().await;
        assert_eq!(memory.len(), 1);
        assert!(memory[0].starts_with('['));
        assert!(memory[0].ends_with("User said: hello"));
    }

    #[tokio::test]
    async fn test_memory_bounded_to_limit() {
        let member = member();
        for i in 0..(MEMORY_LIMIT + 1) {
            member.append_memory(&format!("entry {i}")).await;
        }

        let memory = member.memory_snapshot().await;
        assert_eq!(memory.len(), MEMORY_LIMIT);
        // entry 0 dropped, entry 50 (the 51st append) retained
        assert!(!memory.iter().any(|m| m.ends_with("entry 0")));
        assert!(memory
            .last()
            .is_some_and(|m| m.ends_with(&format!("entry {MEMORY_LIMIT}"))));
    }

    #[tokio::test]
    async fn test_history_unbounded() {
        let member = member();
        for i in 0..(MEMORY_LIMIT + 10) {
            member.append_history(&format!("q{i}"), &format!("a{i}")).await;
        }

        let history = member.history_snapshot().await;
        assert_eq!(history.len(), MEMORY_LIMIT + 10);
        assert_eq!(history[0].user_message, "q0");
    }

    #[tokio::test]
    async fn test_recent_memory_window() {
        let member = member();
        for i in 0..15 {
            member.append_memory(&format!("entry {i}")).await;
        }

        let recent = member.recent_memory(10).await;
        assert_eq!(recent.len(), 10);
        assert!(recent[0].ends_with("entry 5"));
        assert!(recent[9].ends_with("entry 14"));

        // Window larger than memory returns everything
        let all = member.recent_memory(100).await;
        assert_eq!(all.len(), 15);
    }
}
