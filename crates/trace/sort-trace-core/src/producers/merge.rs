//! Top-down merge sort.
//!
//! Runs are merged in place: when the right run's head wins it is rotated
//! into the write slot and the rest of the left run moves one step right.
//! The written value and emission points match an auxiliary-buffer merge,
//! while every snapshot stays a permutation of the input. Every placement,
//! drained ones included, counts as one write in the swap counter.

use super::{fmt_value, Workspace};
use crate::marker::{self, Marker};
use crate::snapshot::Trace;

pub fn merge_sort(input: &[f64]) -> Trace {
    let mut ws = Workspace::start(input);
    let n = ws.len();
    if n > 0 {
        sort(&mut ws, 0, n - 1);
    }
    ws.finish()
}

fn sort(ws: &mut Workspace, l: usize, r: usize) {
    if l >= r {
        return;
    }
    let m = l + (r - l) / 2;
    sort(ws, l, m);
    sort(ws, m + 1, r);
    merge(ws, l, m, r);
}

fn merge(ws: &mut Workspace, l: usize, m: usize, r: usize) {
    let n = ws.len();
    // Left run occupies [k, mid], right run [j, r].
    let mut k = l;
    let mut mid = m;
    let mut j = m + 1;

    while k <= mid && j <= r {
        let mut markers = marker::cleared(n);
        markers[l..=r].fill(Marker::Comparing);
        ws.metrics.record_comparison();
        let msg = format!(
            "Comparing {} and {}",
            fmt_value(ws.values[k]),
            fmt_value(ws.values[j])
        );
        ws.emit_with(&markers, msg);

        // Ties favour the left run.
        if ws.values[k] > ws.values[j] {
            ws.values[k..=j].rotate_right(1);
            mid += 1;
            j += 1;
        }

        markers[k] = Marker::Swapping;
        ws.metrics.record_swap();
        let msg = format!(
            "Placing {} into correct position",
            fmt_value(ws.values[k])
        );
        ws.emit_with(&markers, msg);
        k += 1;
    }

    // Whatever is left of either run already sits in order at [k, r].
    while k <= r {
        let mut markers = marker::cleared(n);
        markers[k] = Marker::Swapping;
        ws.metrics.record_swap();
        let msg = format!("Placing remaining {}", fmt_value(ws.values[k]));
        ws.emit_with(&markers, msg);
        k += 1;
    }
}
