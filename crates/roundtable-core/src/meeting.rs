//! Meeting orchestration
//!
//! One user turn: select participants, fan out generation concurrently,
//! merge the replies into the transcript, and return the outcome. Each
//! participant is an isolated failure domain; a turn never fails because
//! one member's generation did.

use crate::context::{shared_context, CONTEXT_WINDOW};
use crate::error::{Error, Result};
use crate::member::{HistoryRecord, MemberProfile};
use crate::responder::Responder;
use crate::roster::Roster;
use crate::transcript::{Transcript, TurnRecord};
use futures::future::join_all;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{info, warn};

/// How many members join a turn alongside the supervisor when the caller
/// does not pick participants.
pub const DEFAULT_SAMPLE_SIZE: usize = 4;

/// Reply attributed to a requested participant that is not in the roster.
const UNKNOWN_PARTICIPANT_REPLY: &str = "I need a moment to process that.";

/// Outcome of one user turn.
#[derive(Debug, Clone, Serialize)]
pub struct TurnOutcome {
    /// Member name to reply text, one entry per distinct participant
    pub responses: HashMap<String, String>,
    /// Participants invited to the turn, in selection order
    pub participants: Vec<String>,
    /// Transcript length after this turn was logged
    pub turn: usize,
}

/// One member's memory and history, for the introspection endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct MemberIntrospection {
    /// Member name
    pub name: String,
    /// Bounded memory entries, oldest first
    pub memory: Vec<String>,
    /// Unbounded history records, oldest first
    pub history: Vec<HistoryRecord>,
}

/// A constructed meeting: owns the roster, the transcript, and the
/// responder. Multiple independent meetings can coexist in one process.
pub struct Meeting {
    roster: Roster,
    transcript: Transcript,
    responder: Responder,
    rng: Mutex<StdRng>,
}

impl Meeting {
    /// Create a meeting with an entropy-seeded participant sampler.
    pub fn new(roster: Roster, responder: Responder) -> Self {
        Self::with_rng(roster, responder, StdRng::from_entropy())
    }

    /// Create a meeting with a fixed sampler seed, for deterministic
    /// participant selection under test.
    pub fn with_seed(roster: Roster, responder: Responder, seed: u64) -> Self {
        Self::with_rng(roster, responder, StdRng::seed_from_u64(seed))
    }

    fn with_rng(roster: Roster, responder: Responder, rng: StdRng) -> Self {
        Self {
            roster,
            transcript: Transcript::new(),
            responder,
            rng: Mutex::new(rng),
        }
    }

    /// The roster backing this meeting.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Public identity of every member, in roster order.
    pub fn member_profiles(&self) -> Vec<MemberProfile> {
        self.roster
            .members()
            .iter()
            .map(|m| m.profile().clone())
            .collect()
    }

    /// Every turn record since process start.
    pub async fn conversation_log(&self) -> Vec<TurnRecord> {
        self.transcript.all().await
    }

    /// One member's memory and history.
    pub async fn member_introspection(&self, name: &str) -> Result<MemberIntrospection> {
        let member = self
            .roster
            .get(name)
            .ok_or_else(|| Error::UnknownMember(name.to_string()))?;
        Ok(MemberIntrospection {
            name: member.name().to_string(),
            memory: member.memory_snapshot().await,
            history: member.history_snapshot().await,
        })
    }

    /// Run one user turn: the user message plus every selected member's
    /// reply, appended to the transcript in that order.
    ///
    /// An explicit non-empty `requested` list is used verbatim; unknown
    /// names degrade to per-participant fallback text. Otherwise the
    /// supervisor plus a random sample of the roster joins.
    pub async fn run_turn(
        &self,
        user_message: &str,
        requested: Option<Vec<String>>,
    ) -> TurnOutcome {
        let participants = self.select_participants(requested);
        info!(participants = ?participants, "Running meeting turn");

        let log = self.transcript.all().await;
        let context = shared_context(&log, CONTEXT_WINDOW);

        // Independent failure domains: every future resolves to text.
        let replies = join_all(participants.iter().map(|name| {
            let context = context.clone();
            async move {
                let text = match self.roster.get(name) {
                    Some(member) => self.responder.respond(member, user_message, &context).await,
                    None => {
                        warn!(member = %name, "Requested participant not in roster");
                        UNKNOWN_PARTICIPANT_REPLY.to_string()
                    }
                };
                (name.clone(), text)
            }
        }))
        .await;

        // User record first, then members in selection order.
        self.transcript.append(TurnRecord::user(user_message)).await;
        let mut responses = HashMap::with_capacity(replies.len());
        for (name, text) in replies {
            self.transcript
                .append(TurnRecord::member(&name, &text))
                .await;
            responses.insert(name, text);
        }

        TurnOutcome {
            responses,
            participants,
            turn: self.transcript.len().await,
        }
    }

    /// The caller's list verbatim, or supervisor + random sample.
    fn select_participants(&self, requested: Option<Vec<String>>) -> Vec<String> {
        if let Some(names) = requested {
            if !names.is_empty() {
                return names;
            }
        }

        let supervisor = self.roster.supervisor().name().to_string();
        let others: Vec<String> = self
            .roster
            .members()
            .iter()
            .map(|m| m.name().to_string())
            .filter(|name| *name != supervisor)
            .collect();

        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        let mut selected = vec![supervisor];
        selected.extend(
            others
                .choose_multiple(&mut *rng, DEFAULT_SAMPLE_SIZE)
                .cloned(),
        );
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::SUPERVISOR;
    use roundtable_llm::MockProvider;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn live_meeting() -> (Meeting, Arc<MockProvider>) {
        let mock = Arc::new(MockProvider::new());
        let meeting = Meeting::with_seed(Roster::bank_it(), Responder::new(mock.clone()), 7);
        (meeting, mock)
    }

    #[tokio::test]
    async fn test_explicit_participants_used_verbatim() {
        let (meeting, _mock) = live_meeting();
        let requested = vec!["Sarah Mitchell".to_string(), "Maria Rodriguez".to_string()];

        let outcome = meeting
            .run_turn("We manually reconcile 500 invoices weekly", Some(requested.clone()))
            .await;

        assert_eq!(outcome.participants, requested);
        assert_eq!(outcome.responses.len(), 2);
        assert!(outcome.responses.contains_key("Sarah Mitchell"));
        assert!(outcome.responses.contains_key("Maria Rodriguez"));
    }

    #[tokio::test]
    async fn test_turn_logs_user_first_then_members_in_order() {
        let (meeting, _mock) = live_meeting();
        let requested = vec!["Sarah Mitchell".to_string(), "Maria Rodriguez".to_string()];

        let outcome = meeting
            .run_turn("We manually reconcile 500 invoices weekly", Some(requested))
            .await;

        let log = meeting.conversation_log().await;
        assert_eq!(log.len(), 3);
        assert_eq!(outcome.turn, 3);
        assert_eq!(log[0].speaker, "User");
        assert_eq!(log[0].message, "We manually reconcile 500 invoices weekly");
        assert_eq!(log[1].speaker, "Sarah Mitchell");
        assert_eq!(log[2].speaker, "Maria Rodriguez");
    }

    #[tokio::test]
    async fn test_default_selection_supervisor_plus_four_distinct() {
        let (meeting, _mock) = live_meeting();

        for _ in 0..10 {
            let outcome = meeting.run_turn("hello", None).await;
            assert_eq!(outcome.participants.len(), 1 + DEFAULT_SAMPLE_SIZE);
            assert_eq!(outcome.participants[0], SUPERVISOR);

            let distinct: HashSet<&String> = outcome.participants.iter().collect();
            assert_eq!(distinct.len(), outcome.participants.len());
            for name in &outcome.participants {
                assert!(meeting.roster().get(name).is_some());
            }
        }
    }

    #[tokio::test]
    async fn test_empty_requested_list_falls_back_to_sampling() {
        let (meeting, _mock) = live_meeting();
        let outcome = meeting.run_turn("hello", Some(vec![])).await;
        assert_eq!(outcome.participants.len(), 1 + DEFAULT_SAMPLE_SIZE);
    }

    #[tokio::test]
    async fn test_unknown_participant_degrades_not_aborts() {
        let (meeting, _mock) = live_meeting();
        let requested = vec!["Sarah Mitchell".to_string(), "Nobody Real".to_string()];

        let outcome = meeting.run_turn("hello", Some(requested)).await;

        assert_eq!(outcome.responses.len(), 2);
        assert_eq!(
            outcome.responses["Nobody Real"],
            UNKNOWN_PARTICIPANT_REPLY
        );
        assert_ne!(outcome.responses["Sarah Mitchell"], UNKNOWN_PARTICIPANT_REPLY);

        // The turn still logs all participants
        assert_eq!(meeting.conversation_log().await.len(), 3);
    }

    #[tokio::test]
    async fn test_one_failing_member_leaves_others_unaffected() {
        let (meeting, mock) = live_meeting();
        mock.fail_when_contains("Maria Rodriguez");
        let requested = vec![
            "Sarah Mitchell".to_string(),
            "Maria Rodriguez".to_string(),
            "Alex Chen".to_string(),
        ];

        let outcome = meeting.run_turn("hello", Some(requested)).await;

        assert_eq!(outcome.responses.len(), 3);
        assert_eq!(
            outcome.responses["Maria Rodriguez"],
            crate::responder::FALLBACK_REPLY
        );
        assert_eq!(outcome.responses["Sarah Mitchell"], "mock response");
        assert_eq!(outcome.responses["Alex Chen"], "mock response");
        assert_eq!(meeting.conversation_log().await.len(), 4);
    }

    #[tokio::test]
    async fn test_offline_meeting_still_answers_and_logs() {
        let meeting = Meeting::with_seed(Roster::bank_it(), Responder::offline(), 7);

        let outcome = meeting.run_turn("hello", None).await;

        for name in &outcome.participants {
            let text = &outcome.responses[name];
            assert!(!text.is_empty());
        }
        assert_eq!(
            meeting.conversation_log().await.len(),
            1 + outcome.participants.len()
        );
    }

    #[tokio::test]
    async fn test_member_introspection() {
        let (meeting, _mock) = live_meeting();
        meeting
            .run_turn("hello", Some(vec!["Alex Chen".to_string()]))
            .await;

        let view = meeting.member_introspection("Alex Chen").await.unwrap();
        assert_eq!(view.name, "Alex Chen");
        assert_eq!(view.memory.len(), 2);
        assert_eq!(view.history.len(), 1);

        assert!(matches!(
            meeting.member_introspection("Nobody").await,
            Err(Error::UnknownMember(_))
        ));
    }

    #[tokio::test]
    async fn test_second_turn_sees_prior_context() {
        let (meeting, mock) = live_meeting();
        meeting
            .run_turn("first message", Some(vec!["Alex Chen".to_string()]))
            .await;
        meeting
            .run_turn("second message", Some(vec!["Alex Chen".to_string()]))
            .await;

        let calls = mock.recorded_calls();
        assert_eq!(calls.len(), 2);
        let second_system = &calls[1].messages[0].content;
        assert!(second_system.contains("User: first message"));
        assert!(second_system.contains("Alex Chen: mock response"));
    }
}
