//! Cumulative comparison/write counters for one run.

use serde::{Deserialize, Serialize};

/// Counters are monotonic within a run. `swaps` counts every data write the
/// algorithm reports as a move, which for insertion and merge sort includes
/// shifts and merge placements rather than two-element exchanges only.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Metrics {
    pub comparisons: u64,
    pub swaps: u64,
}

impl Metrics {
    #[inline]
    pub fn record_comparison(&mut self) -> u64 {
        self.comparisons += 1;
        self.comparisons
    }

    #[inline]
    pub fn record_swap(&mut self) -> u64 {
        self.swaps += 1;
        self.swaps
    }

    /// True when neither counter of `self` is below the matching one in `earlier`.
    #[inline]
    pub fn dominates(&self, earlier: &Metrics) -> bool {
        self.comparisons >= earlier.comparisons && self.swaps >= earlier.swaps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_are_monotonic() {
        let mut m = Metrics::default();
        assert_eq!(m.record_comparison(), 1);
        assert_eq!(m.record_comparison(), 2);
        assert_eq!(m.record_swap(), 1);
        assert_eq!(
            m,
            Metrics {
                comparisons: 2,
                swaps: 1
            }
        );
        assert!(m.dominates(&Metrics::default()));
        assert!(!Metrics::default().dominates(&m));
    }
}
