//! Roundtable Core - Meeting orchestration engine
//!
//! This crate simulates a meeting between a user and a roster of fictional
//! IT team members, each backed by an LLM call:
//! - Roster: fixed team member personas with bounded per-member memory
//! - Transcript: append-only conversation log for the process lifetime
//! - Context: shared and per-member prompt context rendering
//! - Responder: per-member generation with deterministic fallback
//! - Meeting: participant selection, concurrent fan-out, and merge

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod context;
pub mod error;
pub mod meeting;
pub mod member;
pub mod responder;
pub mod roster;
pub mod transcript;

pub use context::{member_context, shared_context, CONTEXT_WINDOW};
pub use error::{Error, Result};
pub use meeting::{Meeting, MemberIntrospection, TurnOutcome, DEFAULT_SAMPLE_SIZE};
pub use member::{HistoryRecord, MemberProfile, TeamMember, MEMORY_LIMIT};
pub use responder::{Responder, FALLBACK_REPLY, MAX_OUTPUT_TOKENS, TEMPERATURE};
pub use roster::{Roster, SUPERVISOR};
pub use transcript::{Transcript, TurnRecord, USER_SPEAKER};
