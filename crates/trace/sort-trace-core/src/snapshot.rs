//! Snapshot contract and the shared emission helper.
//!
//! Producers mutate their working values and markers in place; every
//! snapshot takes its own copy at emission time so later mutation can never
//! reach an already recorded step.

use serde::{Deserialize, Serialize};

use crate::error::TraceError;
use crate::marker::Marker;
use crate::metrics::Metrics;

/// One point-in-time capture of a producer run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub values: Vec<f64>,
    pub markers: Vec<Marker>,
    pub metrics: Metrics,
    pub description: String,
}

/// Ordered snapshots of one generator invocation.
pub type Trace = Vec<Snapshot>;

impl Snapshot {
    /// Deep-copy the live working state into an immutable record.
    pub fn capture(
        values: &[f64],
        markers: &[Marker],
        metrics: Metrics,
        description: impl Into<String>,
    ) -> Self {
        Self {
            values: values.to_vec(),
            markers: markers.to_vec(),
            metrics,
            description: description.into(),
        }
    }
}

/// Append-only sink for the snapshots of a single producer run.
#[derive(Debug, Default)]
pub struct TraceRecorder {
    steps: Trace,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn emit(
        &mut self,
        values: &[f64],
        markers: &[Marker],
        metrics: Metrics,
        description: impl Into<String>,
    ) {
        self.steps
            .push(Snapshot::capture(values, markers, metrics, description));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn finish(self) -> Trace {
        self.steps
    }
}

/// Serialize a trace into the JSON array shape hosts receive over the wasm
/// boundary.
pub fn export_trace_json(trace: &[Snapshot]) -> Result<String, TraceError> {
    Ok(serde_json::to_string(trace)?)
}
