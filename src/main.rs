//! Roundtable - Simulated IT department meeting service
//!
//! CLI entry point for the Roundtable server.

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod server;

/// Roundtable server command line.
#[derive(Debug, Parser)]
#[command(name = "roundtable", version, about = "Simulated bank IT department meeting service")]
struct Cli {
    /// Address to bind (overrides ROUNDTABLE_ADDR)
    #[arg(long)]
    addr: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roundtable=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    info!("Starting Roundtable v{}", env!("CARGO_PKG_VERSION"));

    let addr = cli
        .addr
        .or_else(|| std::env::var("ROUNDTABLE_ADDR").ok())
        .unwrap_or_else(|| "0.0.0.0:5000".to_string());

    server::run(&addr).await
}
