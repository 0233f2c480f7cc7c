//! Selection sort: scan the unsorted suffix for its minimum and exchange it
//! into the next prefix slot.

use super::{fmt_value, Workspace};
use crate::marker::Marker;
use crate::snapshot::Trace;

pub fn selection_sort(input: &[f64]) -> Trace {
    let mut ws = Workspace::start(input);
    let n = ws.len();

    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;
        ws.markers[i] = Marker::Pivot;

        for j in (i + 1)..n {
            ws.markers[j] = Marker::Comparing;
            ws.metrics.record_comparison();
            let msg = format!(
                "Comparing minimum ({}) with {}",
                fmt_value(ws.values[min_idx]),
                fmt_value(ws.values[j])
            );
            ws.emit(msg);

            // Strictly less: ties keep the leftmost minimum.
            if ws.values[j] < ws.values[min_idx] {
                ws.markers[min_idx] = Marker::Default;
                min_idx = j;
                ws.markers[min_idx] = Marker::Pivot;
                let msg = format!("Found new minimum: {}", fmt_value(ws.values[min_idx]));
                ws.emit(msg);
            } else {
                ws.markers[j] = Marker::Default;
            }
        }

        if min_idx != i {
            ws.values.swap(i, min_idx);
            ws.metrics.record_swap();
            ws.markers[i] = Marker::Swapping;
            ws.markers[min_idx] = Marker::Swapping;
            let msg = format!(
                "Swapping {} with {}",
                fmt_value(ws.values[min_idx]),
                fmt_value(ws.values[i])
            );
            ws.emit(msg);
        }

        ws.markers[i + 1..].fill(Marker::Default);
        ws.markers[min_idx] = Marker::Default;
        ws.markers[i] = Marker::Sorted;
    }
    if n > 0 {
        ws.markers[n - 1] = Marker::Sorted;
    }
    ws.finish()
}
