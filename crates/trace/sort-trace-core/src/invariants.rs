//! Structural checks a replaying host (or test harness) can run on a trace.

use thiserror::Error;

use crate::marker::Marker;
use crate::snapshot::Snapshot;

#[derive(Debug, Error, PartialEq)]
pub enum InvariantViolation {
    #[error("trace is empty")]
    Empty,
    #[error("first snapshot does not show the untouched input")]
    FirstNotInitial,
    #[error("last snapshot is not fully sorted and marked")]
    LastNotSorted,
    #[error("snapshot {step}: {markers} markers for {values} values")]
    MarkerLength {
        step: usize,
        values: usize,
        markers: usize,
    },
    #[error("snapshot {step}: values are not a permutation of the input")]
    NotPermutation { step: usize },
    #[error("snapshot {step}: metrics decreased")]
    MetricsDecreased { step: usize },
}

fn sorted_by_total_order(values: &[f64]) -> Vec<f64> {
    let mut v = values.to_vec();
    v.sort_by(f64::total_cmp);
    v
}

/// Check a trace produced from `input` against the snapshot contract.
pub fn verify_trace(input: &[f64], trace: &[Snapshot]) -> Result<(), InvariantViolation> {
    let (first, last) = match (trace.first(), trace.last()) {
        (Some(f), Some(l)) => (f, l),
        _ => return Err(InvariantViolation::Empty),
    };

    if first.values != input || first.markers.iter().any(|m| *m != Marker::Default) {
        return Err(InvariantViolation::FirstNotInitial);
    }

    let expected = sorted_by_total_order(input);
    for (step, snap) in trace.iter().enumerate() {
        if snap.markers.len() != snap.values.len() {
            return Err(InvariantViolation::MarkerLength {
                step,
                values: snap.values.len(),
                markers: snap.markers.len(),
            });
        }
        if sorted_by_total_order(&snap.values) != expected {
            return Err(InvariantViolation::NotPermutation { step });
        }
        if step > 0 && !snap.metrics.dominates(&trace[step - 1].metrics) {
            return Err(InvariantViolation::MetricsDecreased { step });
        }
    }

    if last.values != expected || last.markers.iter().any(|m| *m != Marker::Sorted) {
        return Err(InvariantViolation::LastNotSorted);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::Metrics;

    fn snap(values: &[f64], marker: Marker, comparisons: u64) -> Snapshot {
        Snapshot::capture(
            values,
            &vec![marker; values.len()],
            Metrics {
                comparisons,
                swaps: 0,
            },
            "",
        )
    }

    #[test]
    fn accepts_minimal_trace() {
        let trace = vec![
            snap(&[2.0, 1.0], Marker::Default, 0),
            snap(&[1.0, 2.0], Marker::Sorted, 1),
        ];
        assert_eq!(verify_trace(&[2.0, 1.0], &trace), Ok(()));
    }

    #[test]
    fn flags_each_violation() {
        assert_eq!(verify_trace(&[1.0], &[]), Err(InvariantViolation::Empty));

        let dup = vec![
            snap(&[2.0, 1.0], Marker::Default, 0),
            snap(&[2.0, 2.0], Marker::Default, 0),
            snap(&[1.0, 2.0], Marker::Sorted, 0),
        ];
        assert_eq!(
            verify_trace(&[2.0, 1.0], &dup),
            Err(InvariantViolation::NotPermutation { step: 1 })
        );

        let backwards = vec![
            snap(&[2.0, 1.0], Marker::Default, 2),
            snap(&[1.0, 2.0], Marker::Sorted, 1),
        ];
        assert_eq!(
            verify_trace(&[2.0, 1.0], &backwards),
            Err(InvariantViolation::MetricsDecreased { step: 1 })
        );

        let unmarked = vec![
            snap(&[2.0, 1.0], Marker::Default, 0),
            snap(&[1.0, 2.0], Marker::Default, 0),
        ];
        assert_eq!(
            verify_trace(&[2.0, 1.0], &unmarked),
            Err(InvariantViolation::LastNotSorted)
        );
    }
}
