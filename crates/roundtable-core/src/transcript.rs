//! Append-only conversation log
//!
//! Every utterance across the process lifetime lands here: the user's
//! message first, then one record per participating member. Only the
//! meeting orchestrator writes; readers get snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// Speaker label for the human participant.
pub const USER_SPEAKER: &str = "User";

/// One utterance in the conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnRecord {
    /// When the utterance was logged
    pub timestamp: DateTime<Utc>,
    /// Either [`USER_SPEAKER`] or a member name
    pub speaker: String,
    /// The utterance text
    pub message: String,
}

impl TurnRecord {
    /// Record spoken by the user.
    pub fn user(message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            speaker: USER_SPEAKER.to_string(),
            message: message.into(),
        }
    }

    /// Record spoken by a team member.
    pub fn member(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            speaker: name.into(),
            message: message.into(),
        }
    }
}

/// In-memory append-only log of turn records.
#[derive(Debug, Default)]
pub struct Transcript {
    records: RwLock<Vec<TurnRecord>>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one record.
    pub async fn append(&self, record: TurnRecord) {
        self.records.write().await.push(record);
    }

    /// The last `n` records, oldest first.
    pub async fn tail(&self, n: usize) -> Vec<TurnRecord> {
        let records = self.records.read().await;
        let start = records.len().saturating_sub(n);
        records[start..].to_vec()
    }

    /// Every record since process start, oldest first.
    pub async fn all(&self) -> Vec<TurnRecord> {
        self.records.read().await.clone()
    }

    /// Number of records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the transcript is empty.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_append_preserves_order() {
        let transcript = Transcript::new();
        transcript.append(TurnRecord::user("first")).await;
        transcript.append(TurnRecord::member("Alex Chen", "second")).await;

        let all = transcript.all().await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].speaker, USER_SPEAKER);
        assert_eq!(all[1].speaker, "Alex Chen");
        assert_eq!(all[1].message, "second");
    }

    #[tokio::test]
    async fn test_tail_clamps_to_length() {
        let transcript = Transcript::new();
        for i in 0..5 {
            transcript.append(TurnRecord::user(format!("m{i}"))).await;
        }

        let tail = transcript.tail(3).await;
        assert_eq!(tail.len(), 3);
        assert_eq!(tail[0].message, "m2");

        assert_eq!(transcript.tail(50).await.len(), 5);
    }
}
