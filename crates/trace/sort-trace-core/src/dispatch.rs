//! Algorithm selection.

use log::{debug, warn};

use crate::algorithm::Algorithm;
use crate::producers::{bubble_sort, insertion_sort, merge_sort, quick_sort, selection_sort};
use crate::snapshot::Trace;

/// Run `algorithm` over a private copy of `values` and return every recorded
/// step. The caller's slice is never touched.
pub fn generate_trace(values: &[f64], algorithm: Algorithm) -> Trace {
    let trace = match algorithm {
        Algorithm::BubbleSort => bubble_sort(values),
        Algorithm::SelectionSort => selection_sort(values),
        Algorithm::InsertionSort => insertion_sort(values),
        Algorithm::MergeSort => merge_sort(values),
        Algorithm::QuickSort => quick_sort(values),
    };
    if let Some(last) = trace.last() {
        debug!(
            "{algorithm}: {} values -> {} snapshots ({} comparisons, {} swaps)",
            values.len(),
            trace.len(),
            last.metrics.comparisons,
            last.metrics.swaps
        );
    }
    trace
}

/// String-selector entry point for hosts. An unrecognised name yields an
/// empty trace; callers treat that as "nothing to play".
pub fn generate_trace_by_name(values: &[f64], name: &str) -> Trace {
    match Algorithm::from_name(name) {
        Some(algorithm) => generate_trace(values, algorithm),
        None => {
            warn!("unknown sorting algorithm '{name}', returning empty trace");
            Trace::new()
        }
    }
}
