//! The closed set of algorithms the generator knows how to trace.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TraceError;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "Bubble Sort")]
    BubbleSort,
    #[serde(rename = "Selection Sort")]
    SelectionSort,
    #[serde(rename = "Insertion Sort")]
    InsertionSort,
    #[serde(rename = "Merge Sort")]
    MergeSort,
    #[serde(rename = "Quick Sort")]
    QuickSort,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::BubbleSort,
        Algorithm::SelectionSort,
        Algorithm::InsertionSort,
        Algorithm::MergeSort,
        Algorithm::QuickSort,
    ];

    /// Human-readable label, also used as the serde tag.
    pub fn display_name(self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "Bubble Sort",
            Algorithm::SelectionSort => "Selection Sort",
            Algorithm::InsertionSort => "Insertion Sort",
            Algorithm::MergeSort => "Merge Sort",
            Algorithm::QuickSort => "Quick Sort",
        }
    }

    fn stem(self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "bubble",
            Algorithm::SelectionSort => "selection",
            Algorithm::InsertionSort => "insertion",
            Algorithm::MergeSort => "merge",
            Algorithm::QuickSort => "quick",
        }
    }

    /// Lenient lookup: "Bubble Sort", "BubbleSort", "bubble_sort",
    /// "bubble-sort" and "bubble" all resolve to [`Algorithm::BubbleSort`].
    pub fn from_name(name: &str) -> Option<Self> {
        let folded: String = name
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();
        let stem = folded.strip_suffix("sort").unwrap_or(&folded);
        if stem.is_empty() {
            return None;
        }
        Self::ALL.into_iter().find(|a| a.stem() == stem)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Algorithm {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| TraceError::UnknownAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_spellings() {
        for name in ["Quick Sort", "QuickSort", "quick_sort", "quick-sort", "QUICK"] {
            assert_eq!(Algorithm::from_name(name), Some(Algorithm::QuickSort), "{name}");
        }
        assert_eq!(
            Algorithm::from_name("selection sort"),
            Some(Algorithm::SelectionSort)
        );
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(Algorithm::from_name("NotAnAlgorithm"), None);
        assert_eq!(Algorithm::from_name("sort"), None);
        assert_eq!(Algorithm::from_name(""), None);
        assert!(matches!(
            "heap".parse::<Algorithm>(),
            Err(TraceError::UnknownAlgorithm(name)) if name == "heap"
        ));
    }

    #[test]
    fn display_round_trips_through_from_name() {
        for algo in Algorithm::ALL {
            assert_eq!(Algorithm::from_name(&algo.to_string()), Some(algo));
        }
    }

    #[test]
    fn serde_uses_display_names() {
        let json = serde_json::to_string(&Algorithm::MergeSort).unwrap();
        assert_eq!(json, "\"Merge Sort\"");
        let back: Algorithm = serde_json::from_str("\"Insertion Sort\"").unwrap();
        assert_eq!(back, Algorithm::InsertionSort);
    }
}
