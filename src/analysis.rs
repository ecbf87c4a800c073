//! Measured cost of runs against the theoretical complexity classes.

use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;

use crate::algorithms::sort_with;
use crate::consumer::NullConsumer;
use crate::data_types::{AlgorithmDescriptor, AlgorithmId, StatisticsSnapshot};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PerformanceReport {
    pub algorithm: &'static str,
    pub array_size: usize,
    pub comparisons: u64,
    pub swaps: u64,
    pub time_elapsed: f64,
    pub comparisons_per_element: f64,
    pub swaps_per_element: f64,
    pub time_best: &'static str,
    pub time_average: &'static str,
    pub time_worst: &'static str,
    pub space: &'static str,
    pub stable: bool,
    pub in_place: bool,
}

impl PerformanceReport {
    pub fn from_run(descriptor: &'static AlgorithmDescriptor, stats: &StatisticsSnapshot) -> Self {
        Self {
            algorithm: descriptor.name,
            array_size: stats.array_size,
            comparisons: stats.comparisons,
            swaps: stats.swaps,
            time_elapsed: stats.elapsed_seconds,
            comparisons_per_element: stats.comparisons_per_element(),
            swaps_per_element: stats.swaps_per_element(),
            time_best: descriptor.time_best,
            time_average: descriptor.time_average,
            time_worst: descriptor.time_worst,
            space: descriptor.space,
            stable: descriptor.stable,
            in_place: descriptor.in_place,
        }
    }

    pub fn operations(&self) -> u64 {
        self.comparisons + self.swaps
    }
}

/// Side by side summary of several reports.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Comparison<'a> {
    pub fastest_time: &'a PerformanceReport,
    pub fewest_comparisons: &'a PerformanceReport,
    pub fewest_swaps: &'a PerformanceReport,
    pub most_efficient_comparisons: &'a PerformanceReport,
    pub stable: Vec<&'a PerformanceReport>,
    pub in_place: Vec<&'a PerformanceReport>,
}

/// Returns `None` for an empty slice. Ties keep the earliest report.
pub fn compare_reports(reports: &[PerformanceReport]) -> Option<Comparison<'_>> {
    let min_by = |key: fn(&PerformanceReport) -> f64| {
        reports
            .iter()
            .reduce(|best, r| if key(r) < key(best) { r } else { best })
    };

    Some(Comparison {
        fastest_time: min_by(|r| r.time_elapsed)?,
        fewest_comparisons: min_by(|r| r.comparisons as f64)?,
        fewest_swaps: min_by(|r| r.swaps as f64)?,
        most_efficient_comparisons: min_by(|r| r.comparisons_per_element)?,
        stable: reports.iter().filter(|r| r.stable).collect(),
        in_place: reports.iter().filter(|r| r.in_place).collect(),
    })
}

/// Rough complexity class implied by an operation count.
pub fn estimate_complexity_class(n: usize, operations: u64) -> &'static str {
    if n <= 1 {
        return "O(1)";
    }

    let ops = operations as f64;
    let nf = n as f64;
    let linear_ratio = ops / nf;
    let nlogn_ratio = ops / (nf * n.ilog2() as f64);
    let quadratic_ratio = ops / (nf * nf);

    if quadratic_ratio <= 2.0 {
        "O(n²)"
    } else if nlogn_ratio <= 10.0 {
        "O(n log n)"
    } else if linear_ratio <= 5.0 {
        "O(n)"
    } else {
        "O(n²) or higher"
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BenchmarkResult {
    pub test_case: usize,
    pub report: PerformanceReport,
    pub estimated_complexity: &'static str,
    pub sorted: bool,
}

/// Runs `id` unpaced over every array and reports each case, in input order.
///
/// Cases are independent so they run on the rayon pool; this is measurement
/// only and never drives a visual run.
pub fn benchmark(id: AlgorithmId, arrays: &[Vec<i64>]) -> Vec<BenchmarkResult> {
    arrays
        .par_iter()
        .enumerate()
        .map(|(test_case, array)| {
            let started = Instant::now();
            let (sorted, comparisons, swaps) = sort_with(id, array.clone(), &mut NullConsumer);
            let stats = StatisticsSnapshot {
                comparisons,
                swaps,
                elapsed_seconds: started.elapsed().as_secs_f64(),
                array_size: array.len(),
            };
            let report = PerformanceReport::from_run(id.descriptor(), &stats);
            let estimated_complexity = estimate_complexity_class(array.len(), report.operations());
            BenchmarkResult {
                test_case,
                report,
                estimated_complexity,
                sorted: sorted.windows(2).all(|w| w[0] <= w[1]),
            }
        })
        .collect()
}
