//! Algorithm-specific trace producers.
//!
//! Each producer copies the input into a [`Workspace`], drives its sort to
//! completion and emits one snapshot per observable event. Every trace opens
//! with the untouched input (all markers Default) and closes with the sorted
//! values (all markers Sorted).

pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

pub use bubble::bubble_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;
pub use selection::selection_sort;

use crate::marker::{self, Marker};
use crate::metrics::Metrics;
use crate::snapshot::{Trace, TraceRecorder};

pub(crate) const INITIAL_DESCRIPTION: &str = "Initial array";
pub(crate) const SORTED_DESCRIPTION: &str = "Array is sorted!";

/// Working state owned by one producer run.
#[derive(Debug)]
pub(crate) struct Workspace {
    pub values: Vec<f64>,
    pub markers: Vec<Marker>,
    pub metrics: Metrics,
    rec: TraceRecorder,
}

impl Workspace {
    /// Copy `input` and record the opening snapshot.
    pub fn start(input: &[f64]) -> Self {
        let mut ws = Self {
            values: input.to_vec(),
            markers: marker::cleared(input.len()),
            metrics: Metrics::default(),
            rec: TraceRecorder::new(),
        };
        ws.emit(INITIAL_DESCRIPTION);
        ws
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Emit with the workspace's own marker array.
    #[inline]
    pub fn emit(&mut self, description: impl Into<String>) {
        self.rec
            .emit(&self.values, &self.markers, self.metrics, description);
    }

    /// Emit with a marker array that lives outside the workspace (recursive
    /// producers fork their own copies).
    #[inline]
    pub fn emit_with(&mut self, markers: &[Marker], description: impl Into<String>) {
        self.rec.emit(&self.values, markers, self.metrics, description);
    }

    /// Force every marker to Sorted, record the closing snapshot and hand
    /// back the trace. The working arrays are dropped here.
    pub fn finish(mut self) -> Trace {
        self.markers.fill(Marker::Sorted);
        self.emit(SORTED_DESCRIPTION);
        self.rec.finish()
    }
}

/// Formats values the way descriptions show them: integral values without a
/// trailing `.0`.
pub(crate) fn fmt_value(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}
