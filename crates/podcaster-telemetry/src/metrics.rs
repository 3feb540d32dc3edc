//! Metric name constants and recording helpers

use std::time::Instant;

use opentelemetry::KeyValue;
use opentelemetry::metrics::{Counter, Histogram};

// Job metric names
pub const JOB_DURATION: &str = "podcast.job.duration";
pub const JOB_COUNT: &str = "podcast.job.count";

// Attribute keys
pub const OUTCOME: &str = "outcome";
pub const STAGE: &str = "stage";
pub const ERROR_TYPE: &str = "error.type";

/// Record a duration measurement on a histogram
pub fn record_duration(histogram: &Histogram<f64>, start: Instant, attributes: &[KeyValue]) {
    let duration = start.elapsed().as_secs_f64();
    histogram.record(duration, attributes);
}

/// Outcome of a single podcast job
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobOutcome<'a> {
    Success,
    /// The job failed in `stage` with the given error type
    Failure { stage: &'a str, error_type: &'a str },
}

/// Instruments shared by every job loop
///
/// Backed by the global meter provider; without an exporter the instruments
/// are no-ops.
#[derive(Clone)]
pub struct JobMetrics {
    duration: Histogram<f64>,
    count: Counter<u64>,
}

impl JobMetrics {
    pub fn new() -> Self {
        let meter = opentelemetry::global::meter("podcaster");

        Self {
            duration: meter
                .f64_histogram(JOB_DURATION)
                .with_unit("s")
                .with_description("Time from accepting a job to its final stage")
                .build(),
            count: meter
                .u64_counter(JOB_COUNT)
                .with_description("Jobs processed, by outcome")
                .build(),
        }
    }

    /// Record one finished job
    pub fn record(&self, start: Instant, outcome: JobOutcome<'_>) {
        let attributes = outcome_attributes(outcome);

        record_duration(&self.duration, start, &attributes);
        self.count.add(1, &attributes);
    }
}

impl std::fmt::Debug for JobMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JobMetrics").finish_non_exhaustive()
    }
}

impl Default for JobMetrics {
    fn default() -> Self {
        Self::new()
    }
}

fn outcome_attributes(outcome: JobOutcome<'_>) -> Vec<KeyValue> {
    match outcome {
        JobOutcome::Success => vec![KeyValue::new(OUTCOME, "success"), KeyValue::new(STAGE, "done")],
        JobOutcome::Failure { stage, error_type } => vec![
            KeyValue::new(OUTCOME, "failure"),
            KeyValue::new(STAGE, stage.to_owned()),
            KeyValue::new(ERROR_TYPE, error_type.to_owned()),
        ],
    }
}
