//! Insertion sort: grow a sorted prefix by walking each key left past every
//! larger neighbour.
//!
//! A shift is realised as an adjacent exchange with the key, so the key is
//! visible while it travels and every snapshot holds a permutation of the
//! input. Each shift counts as one write in [`Metrics::swaps`].
//!
//! [`Metrics::swaps`]: crate::metrics::Metrics::swaps

use super::{fmt_value, Workspace};
use crate::marker::Marker;
use crate::snapshot::Trace;

pub fn insertion_sort(input: &[f64]) -> Trace {
    let mut ws = Workspace::start(input);
    let n = ws.len();
    if n > 0 {
        ws.markers[0] = Marker::Sorted;
    }

    for i in 1..n {
        let key = ws.values[i];
        ws.markers[i] = Marker::Pivot;
        ws.emit(format!(
            "Selecting {} to insert into sorted part",
            fmt_value(key)
        ));

        // `hole` is the slot currently holding the key.
        let mut hole = i;
        while hole > 0 {
            let left = ws.values[hole - 1];
            if left <= key {
                // The comparison that ends the walk is still a comparison.
                let prior = ws.markers[hole - 1];
                ws.markers[hole - 1] = Marker::Comparing;
                ws.metrics.record_comparison();
                ws.emit(format!(
                    "{} <= {}, stopping shift",
                    fmt_value(left),
                    fmt_value(key)
                ));
                ws.markers[hole - 1] = prior;
                break;
            }

            ws.markers[hole - 1] = Marker::Comparing;
            ws.metrics.record_comparison();
            ws.emit(format!(
                "{} > {}, shifting {} right",
                fmt_value(left),
                fmt_value(key),
                fmt_value(left)
            ));

            ws.values.swap(hole - 1, hole);
            ws.metrics.record_swap();
            ws.markers[hole] = Marker::Swapping;
            ws.emit(format!("Shifting {}", fmt_value(left)));

            ws.markers[hole] = Marker::Sorted;
            ws.markers[hole - 1] = Marker::Default;
            hole -= 1;
        }
        ws.values[hole] = key;

        ws.markers[i] = Marker::Default;
        ws.markers[hole] = Marker::Swapping;
        ws.emit(format!(
            "Inserting {} at its correct position",
            fmt_value(key)
        ));

        ws.markers[..=i].fill(Marker::Sorted);
    }
    ws.finish()
}
