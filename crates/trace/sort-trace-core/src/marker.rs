//! Per-index role tags consumed by renderers.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
    #[default]
    Default,
    Comparing,
    Swapping,
    Sorted,
    Pivot,
}

/// Fresh marker array of `len` entries, all [`Marker::Default`].
#[inline]
pub fn cleared(len: usize) -> Vec<Marker> {
    vec![Marker::Default; len]
}

/// Marker array of `len` entries, all [`Marker::Sorted`].
#[inline]
pub fn all_sorted(len: usize) -> Vec<Marker> {
    vec![Marker::Sorted; len]
}
