//! Kalah game server binary.

use anyhow::Result;
use clap::Parser;
use kalah_server::{Cli, SessionManager, router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    info!("Starting Kalah game server");

    let sessions = SessionManager::new();
    let app = router(sessions);

    let listener = tokio::net::TcpListener::bind((cli.host.as_str(), cli.port)).await?;
    info!(host = %cli.host, port = cli.port, "Server ready");
    axum::serve(listener, app).await?;

    Ok(())
}
