use gpui_sortviz::analysis::{
    benchmark, compare_reports, estimate_complexity_class, PerformanceReport,
};
use gpui_sortviz::data_types::{AlgorithmId, StatisticsSnapshot};
use gpui_sortviz::data_generator::DataGenerator;
use gpui_sortviz::data_types::ArrayConfig;

fn snapshot(comparisons: u64, swaps: u64, elapsed: f64, n: usize) -> StatisticsSnapshot {
    StatisticsSnapshot {
        comparisons,
        swaps,
        elapsed_seconds: elapsed,
        array_size: n,
    }
}

#[test]
fn test_report_per_element_ratios() {
    let report = PerformanceReport::from_run(
        AlgorithmId::BubbleSort.descriptor(),
        &snapshot(45, 20, 0.5, 10),
    );
    assert_eq!(report.algorithm, "Bubble Sort");
    assert_eq!(report.comparisons_per_element, 4.5);
    assert_eq!(report.swaps_per_element, 2.0);
    assert_eq!(report.operations(), 65);
    assert!(report.stable);
    assert!(report.in_place);
}

#[test]
fn test_report_on_empty_array_has_zero_ratios() {
    let report =
        PerformanceReport::from_run(AlgorithmId::HeapSort.descriptor(), &snapshot(0, 0, 0.0, 0));
    assert_eq!(report.comparisons_per_element, 0.0);
    assert_eq!(report.swaps_per_element, 0.0);
}

#[test]
fn test_compare_reports_picks_leaders() {
    let reports = vec![
        PerformanceReport::from_run(AlgorithmId::BubbleSort.descriptor(), &snapshot(45, 30, 0.9, 10)),
        PerformanceReport::from_run(AlgorithmId::MergeSort.descriptor(), &snapshot(25, 0, 0.2, 10)),
        PerformanceReport::from_run(AlgorithmId::QuickSort.descriptor(), &snapshot(28, 9, 0.1, 10)),
    ];

    let comparison = compare_reports(&reports).unwrap();
    assert_eq!(comparison.fastest_time.algorithm, "Quick Sort");
    assert_eq!(comparison.fewest_comparisons.algorithm, "Merge Sort");
    assert_eq!(comparison.fewest_swaps.algorithm, "Merge Sort");
    assert_eq!(comparison.most_efficient_comparisons.algorithm, "Merge Sort");

    let stable: Vec<&str> = comparison.stable.iter().map(|r| r.algorithm).collect();
    assert_eq!(stable, vec!["Bubble Sort", "Merge Sort"]);
    let in_place: Vec<&str> = comparison.in_place.iter().map(|r| r.algorithm).collect();
    assert_eq!(in_place, vec!["Bubble Sort", "Quick Sort"]);

    assert!(compare_reports(&[]).is_none());
}

#[test]
fn test_complexity_buckets() {
    assert_eq!(estimate_complexity_class(1, 0), "O(1)");
    assert_eq!(estimate_complexity_class(100, 9_900), "O(n²)");
    // ops/n² = 3 is above the quadratic bucket, ops/(n log n) = 50.
    assert_eq!(estimate_complexity_class(100, 30_000), "O(n²) or higher");
}

#[test]
fn test_benchmark_reports_each_case_in_order() {
    let mut generator = DataGenerator::with_seed(ArrayConfig::default(), 11);
    let arrays = vec![
        generator.random(30),
        generator.sorted(30, true),
        generator.reversed(30),
        generator.duplicate_heavy(30, None),
    ];

    for id in AlgorithmId::ALL {
        let results = benchmark(id, &arrays);
        assert_eq!(results.len(), arrays.len());
        for (i, result) in results.iter().enumerate() {
            assert_eq!(result.test_case, i);
            assert!(result.sorted, "{id} case {i}");
            assert_eq!(result.report.array_size, 30);
            assert_eq!(result.report.algorithm, id.descriptor().name);
        }
    }
}

#[test]
fn test_benchmark_counts_match_sorted_input_best_case() {
    let arrays = vec![(1..=50).collect::<Vec<i64>>()];
    let results = benchmark(AlgorithmId::InsertionSort, &arrays);
    assert_eq!(results[0].report.comparisons, 49);
    assert_eq!(results[0].report.swaps, 0);
}
