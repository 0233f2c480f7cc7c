use sort_trace_core::{generate_trace, generate_trace_by_name, Algorithm, Marker, Metrics};

#[test]
fn bubble_sort_three_elements() {
    let trace = generate_trace(&[3.0, 1.0, 2.0], Algorithm::BubbleSort);

    let first = &trace[0];
    assert_eq!(first.values, vec![3.0, 1.0, 2.0]);
    assert!(first.markers.iter().all(|m| *m == Marker::Default));

    assert!(trace.iter().any(|s| s.markers[0] == Marker::Comparing
        && s.markers[1] == Marker::Comparing
        && s.markers[2] != Marker::Comparing));
    assert!(trace
        .iter()
        .any(|s| s.values == vec![1.0, 3.0, 2.0] && s.markers[0] == Marker::Swapping));
    assert!(trace.iter().any(|s| s.values == vec![1.0, 2.0, 3.0]));

    let last = trace.last().unwrap();
    assert_eq!(last.values, vec![1.0, 2.0, 3.0]);
    assert!(last.markers.iter().all(|m| *m == Marker::Sorted));
    assert_eq!(
        last.metrics,
        Metrics {
            comparisons: 3,
            swaps: 2
        }
    );
}

#[test]
fn quick_sort_single_element() {
    let trace = generate_trace(&[5.0], Algorithm::QuickSort);
    assert_eq!(trace.len(), 3);
    assert_eq!(trace[0].description, "Initial array");
    assert_eq!(
        trace[1].description,
        "Single element partition at index 0 is sorted"
    );
    assert_eq!(trace[2].description, "Array is sorted!");
    assert_eq!(trace[2].metrics, Metrics::default());
}

#[test]
fn merge_sort_empty() {
    let trace = generate_trace(&[], Algorithm::MergeSort);
    assert_eq!(trace.len(), 2);
    for snap in &trace {
        assert!(snap.values.is_empty());
        assert!(snap.markers.is_empty());
        assert_eq!(snap.metrics, Metrics::default());
    }
}

#[test]
fn unknown_algorithm_tag() {
    assert!(generate_trace_by_name(&[1.0, 2.0, 3.0], "NotAnAlgorithm").is_empty());
}

#[test]
fn display_names_select_the_same_producer() {
    for algo in Algorithm::ALL {
        let by_name = generate_trace_by_name(&[2.0, 1.0], algo.display_name());
        assert_eq!(by_name, generate_trace(&[2.0, 1.0], algo), "{algo}");
    }
}
