use std::net::SocketAddr;

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use http::StatusCode;
use podcaster_config::ServerConfig;
use podcaster_core::PodcastError;
use serde::Serialize;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;

use crate::runner::JobRunner;

/// Local HTTP API mirroring the serverless synchronous run endpoint
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    pub fn new(config: &ServerConfig, runner: JobRunner) -> Self {
        let listen_address = config
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 8000)));

        Self {
            router: router(runner, &config.health_path),
            listen_address,
        }
    }

    /// Get the configured listen address
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Serve requests until the cancellation token is triggered
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}

/// Routes: `POST /runsync` and the health check
pub fn router(runner: JobRunner, health_path: &str) -> Router {
    Router::new()
        .route("/runsync", post(run_sync))
        .route(health_path, get(health))
        .with_state(runner)
        .layer(TraceLayer::new_for_http())
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

async fn run_sync(State(runner): State<JobRunner>, Json(event): Json<Value>) -> Response {
    let id = uuid::Uuid::new_v4().to_string();

    match runner.run(&event).await {
        Ok(output) => (
            StatusCode::OK,
            Json(RunResponse {
                id,
                status: RunStatus::Completed,
                output: Some(output),
                error: None,
            }),
        )
            .into_response(),
        Err(e) => {
            let status = status_code(&e);
            let body = RunResponse {
                id,
                status: RunStatus::Failed,
                output: None,
                error: Some(ErrorDetails {
                    message: e.to_string(),
                    r#type: e.error_type(),
                    stage: e.stage().as_str(),
                    code: status.as_u16(),
                }),
            };

            (status, Json(body)).into_response()
        }
    }
}

/// HTTP status for a failed request
///
/// Caller mistakes are `400`, failures of the model or Supabase are `502`,
/// local disk failures are `500`.
pub const fn status_code(error: &PodcastError) -> StatusCode {
    match error {
        PodcastError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        PodcastError::Synthesis(_) | PodcastError::Storage(_) | PodcastError::Database(_) => StatusCode::BAD_GATEWAY,
        PodcastError::Io { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
enum RunStatus {
    Completed,
    Failed,
}

#[derive(Debug, Serialize)]
struct RunResponse {
    id: String,
    status: RunStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorDetails>,
}

#[derive(Debug, Serialize)]
struct ErrorDetails {
    message: String,
    r#type: &'static str,
    stage: &'static str,
    code: u16,
}
