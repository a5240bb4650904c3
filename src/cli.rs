//! Command-line interface for the game server.

use clap::Parser;

/// Two-player Kalah game server with a REST API.
#[derive(Parser, Debug)]
#[command(name = "kalah_server")]
#[command(about = "Kalah (Mancala) game server", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Port to bind to.
    #[arg(short, long, default_value = "8080", env = "PORT")]
    pub port: u16,

    /// Host to bind to.
    #[arg(long, default_value = "127.0.0.1", env = "HOST")]
    pub host: String,
}
