//! Sort Trace Core (engine-agnostic)
//!
//! Runs one of a fixed set of comparison sorts over a copy of the input and
//! records an immutable [`Snapshot`] after every observable event. The
//! resulting [`Trace`] can be replayed by any host without re-running the
//! algorithm.

pub mod algorithm;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod invariants;
pub mod marker;
pub mod metrics;
pub mod producers;
pub mod snapshot;

// Re-exports for consumers (adapters)
pub use algorithm::Algorithm;
pub use config::Config;
pub use dispatch::{generate_trace, generate_trace_by_name};
pub use error::TraceError;
pub use invariants::{verify_trace, InvariantViolation};
pub use marker::Marker;
pub use metrics::Metrics;
pub use snapshot::{export_trace_json, Snapshot, Trace, TraceRecorder};
