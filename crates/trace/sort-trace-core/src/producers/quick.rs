//! Quick sort with Lomuto partitioning (last element is the pivot).
//!
//! Markers flow down the recursion by value: each call derives its own copy
//! from the one it was handed, so sibling partitions only ever see the
//! Sorted flags carried forward by their parent.

use super::{fmt_value, Workspace};
use crate::marker::{self, Marker};
use crate::snapshot::Trace;

pub fn quick_sort(input: &[f64]) -> Trace {
    let mut ws = Workspace::start(input);
    let n = ws.len();
    if n > 0 {
        let root = marker::cleared(n);
        sort(&mut ws, 0, n - 1, &root);
    }
    ws.finish()
}

fn sort(ws: &mut Workspace, low: usize, high: usize, inherited: &[Marker]) {
    if low < high {
        let pi = partition(ws, low, high);

        let mut next = inherited.to_vec();
        next[pi] = Marker::Sorted;
        for m in next.iter_mut() {
            if *m != Marker::Sorted {
                *m = Marker::Default;
            }
        }
        let msg = format!(
            "Pivot {} is sorted. Recursively sorting partitions.",
            fmt_value(ws.values[pi])
        );
        ws.emit_with(&next, msg);

        if pi > low {
            sort(ws, low, pi - 1, &next);
        }
        if pi < high {
            sort(ws, pi + 1, high, &next);
        }
    } else if low == high {
        let mut next = inherited.to_vec();
        next[low] = Marker::Sorted;
        ws.emit_with(
            &next,
            format!("Single element partition at index {low} is sorted"),
        );
    }
}

/// Returns the pivot's final index.
fn partition(ws: &mut Workspace, low: usize, high: usize) -> usize {
    let pivot = ws.values[high];
    let mut markers = marker::cleared(ws.len());
    markers[high] = Marker::Pivot;
    ws.emit_with(
        &markers,
        format!(
            "Partitioning from index {low} to {high}. Pivot is {}",
            fmt_value(pivot)
        ),
    );

    // Next slot of the "< pivot" region.
    let mut store = low;
    for j in low..high {
        markers[j] = Marker::Comparing;
        ws.metrics.record_comparison();
        let msg = format!(
            "Comparing {} with pivot {}",
            fmt_value(ws.values[j]),
            fmt_value(pivot)
        );
        ws.emit_with(&markers, msg);

        if ws.values[j] < pivot {
            ws.values.swap(store, j);
            ws.metrics.record_swap();
            markers[store] = Marker::Swapping;
            markers[j] = Marker::Swapping;
            let msg = format!(
                "Swapping {} and {}",
                fmt_value(ws.values[j]),
                fmt_value(ws.values[store])
            );
            ws.emit_with(&markers, msg);
            markers[store] = Marker::Default;
            store += 1;
        }
        markers[j] = Marker::Default;
    }

    ws.values.swap(store, high);
    ws.metrics.record_swap();
    markers[store] = Marker::Swapping;
    markers[high] = Marker::Swapping;
    ws.emit_with(
        &markers,
        format!(
            "Placing pivot {} in its final sorted position",
            fmt_value(pivot)
        ),
    );
    store
}
