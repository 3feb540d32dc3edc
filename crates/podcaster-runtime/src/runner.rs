use std::sync::Arc;
use std::time::Instant;

use podcaster_core::RequestHandler;
use podcaster_telemetry::{JobMetrics, JobOutcome};
use serde_json::Value;

/// Shared entry point for every runtime mode
///
/// Runs an event through the handler and records job metrics.
#[derive(Debug, Clone)]
pub struct JobRunner {
    handler: Arc<RequestHandler>,
    metrics: JobMetrics,
}

impl JobRunner {
    pub fn new(handler: Arc<RequestHandler>) -> Self {
        Self {
            handler,
            metrics: JobMetrics::new(),
        }
    }

    /// Handle one event and return the podcast identifier
    ///
    /// # Errors
    ///
    /// Returns the handler error of the stage that failed
    pub async fn run(&self, event: &Value) -> podcaster_core::Result<String> {
        let start = Instant::now();
        let result = self.handler.handle(event).await;

        match &result {
            Ok(_) => self.metrics.record(start, JobOutcome::Success),
            Err(e) => self.metrics.record(
                start,
                JobOutcome::Failure {
                    stage: e.stage().as_str(),
                    error_type: e.error_type(),
                },
            ),
        }

        result
    }
}
