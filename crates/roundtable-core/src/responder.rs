//! Per-member generation with deterministic fallback
//!
//! The responder is the only place that talks to the generation provider.
//! Nothing escapes it: every call resolves to text, either generated or
//! one of two fallbacks. The two degraded modes are independent:
//! - offline: no provider was configured at construction, every call gets
//!   a canned per-member line for the process lifetime
//! - per-call failure: the provider is configured but this call errored,
//!   the member answers with a short apologetic placeholder
//!
//! Both paths append the same truncated memory entries; only a real
//! generation appends a history record. There is no retry.

use crate::context::{member_context, CONTEXT_WINDOW};
use crate::member::{MemberProfile, TeamMember};
use roundtable_llm::{CompletionRequest, GenerationProvider, Message};
use std::sync::Arc;
use tracing::{error, warn};

/// Placeholder returned when an individual generation call fails.
pub const FALLBACK_REPLY: &str =
    "I'm having trouble processing that right now. Could you repeat the question?";

/// Sampling temperature for persona replies.
pub const TEMPERATURE: f32 = 0.7;

/// Output cap; persona replies target 2-3 sentences.
pub const MAX_OUTPUT_TOKENS: u32 = 200;

/// Memory entries store at most this many characters of either side.
const MEMORY_SNIPPET_CHARS: usize = 100;

/// Generates one member's reply to one user message.
pub struct Responder {
    provider: Option<Arc<dyn GenerationProvider>>,
    model: String,
}

impl Responder {
    /// Create a responder backed by a live provider.
    pub fn new(provider: Arc<dyn GenerationProvider>) -> Self {
        let model = provider.default_model().to_string();
        Self {
            provider: Some(provider),
            model,
        }
    }

    /// Create a permanently offline responder (no credential configured).
    pub fn offline() -> Self {
        Self {
            provider: None,
            model: String::new(),
        }
    }

    /// Whether this responder runs in offline mode.
    pub fn is_offline(&self) -> bool {
        self.provider.is_none()
    }

    /// Produce the member's reply to `user_message`, given the shared
    /// conversation context. Never fails; failures degrade to fallback
    /// text. Memory is appended on every path, history only when text was
    /// actually generated.
    pub async fn respond(
        &self,
        member: &TeamMember,
        user_message: &str,
        shared_context: &str,
    ) -> String {
        let (text, generated) = match &self.provider {
            None => (offline_reply(member.profile()), false),
            Some(provider) => {
                let memory = member.recent_memory(CONTEXT_WINDOW).await;
                let system_prompt = build_system_prompt(
                    member.profile(),
                    &member_context(member.profile(), &memory, CONTEXT_WINDOW),
                    shared_context,
                );
                let request = CompletionRequest::new(&self.model)
                    .with_message(Message::system(system_prompt))
                    .with_message(Message::user(user_message))
                    .with_temperature(TEMPERATURE)
                    .with_max_tokens(MAX_OUTPUT_TOKENS);

                match provider.complete(request).await {
                    Ok(response) => {
                        let content = response.content.trim().to_string();
                        if content.is_empty() {
                            warn!(member = %member.name(), "Provider returned empty content");
                            (FALLBACK_REPLY.to_string(), false)
                        } else {
                            (content, true)
                        }
                    }
                    Err(e) => {
                        error!(member = %member.name(), error = %e, "Generation failed");
                        (FALLBACK_REPLY.to_string(), false)
                    }
                }
            }
        };

        member
            .append_memory(&format!("User said: {}", snippet(user_message)))
            .await;
        member
            .append_memory(&format!("I responded: {}", snippet(&text)))
            .await;
        if generated {
            member.append_history(user_message, &text).await;
        }

        text
    }
}

/// Canned substitute line for offline mode, deterministic per member.
fn offline_reply(profile: &MemberProfile) -> String {
    format!(
        "Speaking as your {}, I'd start by walking through the current process \
         step by step and flagging anything repetitive as an automation candidate. \
         We can dig into specifics once the meeting assistant is back online.",
        profile.role
    )
}

/// Truncate to a bounded character count, marking the cut.
fn snippet(text: &str) -> String {
    if text.chars().count() <= MEMORY_SNIPPET_CHARS {
        text.to_string()
    } else {
        let cut: String = text.chars().take(MEMORY_SNIPPET_CHARS).collect();
        format!("{cut}...")
    }
}

/// The role-conditioned instruction sent as the system message.
fn build_system_prompt(
    profile: &MemberProfile,
    member_context: &str,
    shared_context: &str,
) -> String {
    format!(
        "You are {name}, {role} in a bank's IT department.\n\n\
         {member_context}\n\n\
         You are in a meeting to learn about a user's department processes so \
         your IT team can help automate their tasks.\n\n\
         Guidelines:\n\
         - Stay in character based on your role and personality\n\
         - Ask specific technical questions related to your expertise\n\
         - Suggest automation solutions that fit your specialty\n\
         - Reference your previous memories when relevant\n\
         - Be collaborative but maintain your unique perspective\n\
         - Keep responses concise (2-3 sentences max)\n\
         - Focus on understanding the user's processes to identify automation \
         opportunities\n\n\
         Current conversation context:\n{shared_context}\n\n\
         Respond as {name} would, considering your role and personality.",
        name = profile.name,
        role = profile.role,
    )
}
