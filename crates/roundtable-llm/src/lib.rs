//! Roundtable LLM - Generation provider abstraction
//!
//! This crate defines the boundary between Roundtable and external
//! text-generation services:
//! - Chat message and completion request/response types
//! - The [`GenerationProvider`] trait implemented by concrete backends
//! - A Groq backend (OpenAI-compatible chat completions API)
//! - A scriptable mock backend for tests

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod completion;
pub mod error;
pub mod groq;
pub mod message;
pub mod mock;
pub mod provider;

pub use completion::{CompletionRequest, CompletionResponse, TokenUsage};
pub use error::{Error, Result};
pub use groq::{GroqConfig, GroqProvider, DEFAULT_MODEL, GROQ_API_BASE, MODELS};
pub use message::{Message, MessageRole};
pub use mock::MockProvider;
pub use provider::GenerationProvider;
