//! Bubble sort: adjacent pairs, largest remaining value settles at the tail
//! after each pass.

use super::{fmt_value, Workspace};
use crate::marker::Marker;
use crate::snapshot::Trace;

pub fn bubble_sort(input: &[f64]) -> Trace {
    let mut ws = Workspace::start(input);
    let n = ws.len();

    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            ws.markers[j] = Marker::Comparing;
            ws.markers[j + 1] = Marker::Comparing;
            ws.metrics.record_comparison();
            let msg = format!(
                "Comparing {} and {}",
                fmt_value(ws.values[j]),
                fmt_value(ws.values[j + 1])
            );
            ws.emit(msg);

            if ws.values[j] > ws.values[j + 1] {
                ws.values.swap(j, j + 1);
                ws.metrics.record_swap();
                ws.markers[j] = Marker::Swapping;
                ws.markers[j + 1] = Marker::Swapping;
                let msg = format!(
                    "Swapping {} and {}",
                    fmt_value(ws.values[j + 1]),
                    fmt_value(ws.values[j])
                );
                ws.emit(msg);
            }
            // Reset is folded into the next emitted snapshot.
            ws.markers[j] = Marker::Default;
            ws.markers[j + 1] = Marker::Default;
        }
        ws.markers[n - 1 - i] = Marker::Sorted;
    }
    if n > 0 {
        ws.markers[0] = Marker::Sorted;
    }
    ws.finish()
}
