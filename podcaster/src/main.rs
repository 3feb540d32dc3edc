#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;

use std::sync::Arc;

use args::{Args, Command};
use clap::Parser;
use podcaster_config::Config;
use podcaster_runtime::{JobRunner, Server, Worker};
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_env_file(dotenvy::dotenv())?;

    let args = Args::parse();

    // Load configuration
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };

    // Initialize telemetry
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| args.log_level.clone());
    let _telemetry_guard = podcaster_telemetry::init(config.telemetry.as_ref(), &log_filter)?;

    match &args.config {
        Some(path) => tracing::info!(config_path = %path.display(), "starting podcaster"),
        None => tracing::info!("starting podcaster with built-in configuration"),
    }

    let handler = Arc::new(podcaster_runtime::build_handler(&config)?);
    let runner = JobRunner::new(handler);

    if let Some(input) = &args.test_input {
        let podcast_id = podcaster_runtime::run_once(&runner, input).await?;
        println!("{podcast_id}");
        return Ok(());
    }

    // Set up graceful shutdown
    let shutdown = CancellationToken::new();
    let shutdown_clone = shutdown.clone();

    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown_clone.cancel();
    });

    match args.command.unwrap_or(Command::Worker) {
        Command::Worker => {
            Worker::new(&config.runtime, runner)?.run(shutdown).await;
        }
        Command::Serve { listen } => {
            if listen.is_some() {
                config.server.listen_address = listen;
            }
            Server::new(&config.server, runner).serve(shutdown).await?;
        }
    }

    tracing::info!("podcaster stopped");
    Ok(())
}

/// Accept a missing `.env` file, reject one that exists but cannot be read
fn load_env_file<T>(result: Result<T, dotenvy::Error>) -> anyhow::Result<()> {
    match result {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(anyhow::Error::new(e).context("failed to load .env file")),
    }
}

/// Wait for a shutdown signal (`SIGINT` or `SIGTERM`)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("shutdown signal received");
}
