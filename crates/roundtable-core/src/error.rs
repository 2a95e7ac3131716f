//! Error types for roundtable-core

use thiserror::Error;

/// Core error type
///
/// Participant-level generation failures never surface here; the responder
/// degrades them to fallback text. Errors are limited to contract
/// violations visible at the boundary, such as introspecting a member that
/// does not exist.
#[derive(Debug, Error)]
pub enum Error {
    /// Requested team member is not in the roster
    #[error("unknown team member: {0}")]
    UnknownMember(String),

    /// Generation provider error
    #[error("llm error: {0}")]
    Llm(#[from] roundtable_llm::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
