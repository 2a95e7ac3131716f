//! Server assembly
//!
//! Builds the meeting (provider from environment, offline if no
//! credential), wires the API router with CORS, and serves it.

use anyhow::{Context, Result};
use axum::Router;
use roundtable_core::{Meeting, Responder, Roster};
use roundtable_llm::{GenerationProvider, GroqProvider};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

/// Bind `addr` and serve the meeting API until the process exits.
pub async fn run(addr: &str) -> Result<()> {
    let meeting = Arc::new(build_meeting());
    let app = router(meeting);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

/// Construct the meeting. A missing credential is tolerated: the service
/// starts in offline mode instead of failing.
fn build_meeting() -> Meeting {
    let responder = match GroqProvider::from_env() {
        Ok(provider) => {
            info!(model = provider.default_model(), "Groq provider configured");
            Responder::new(Arc::new(provider))
        }
        Err(e) => {
            warn!(error = %e, "No generation provider configured; running in offline mode");
            Responder::offline()
        }
    };
    Meeting::new(Roster::bank_it(), responder)
}

/// The full application router.
pub fn router(meeting: Arc<Meeting>) -> Router {
    crate::api::api_router(meeting).layer(CorsLayer::permissive())
}
