use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Podcast audio worker
#[derive(Debug, Parser)]
#[command(name = "podcaster", about = "Turn podcast scripts into audio and publish them to Supabase")]
pub struct Args {
    /// Path to configuration file; the built-in environment-driven
    /// configuration is used when omitted
    #[arg(short, long, env = "PODCASTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log filter used when `RUST_LOG` is not set
    #[arg(long, default_value = "info", env = "PODCASTER_LOG_LEVEL")]
    pub log_level: String,

    /// Run one event (JSON) through the handler, print the result and exit;
    /// takes precedence over the subcommand
    #[arg(long)]
    pub test_input: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Poll the serverless job endpoint (default)
    Worker,
    /// Serve the local HTTP API
    Serve {
        /// Override the listen address
        #[arg(long, env = "PODCASTER_LISTEN")]
        listen: Option<SocketAddr>,
    },
}
