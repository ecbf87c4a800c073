use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::event::EventKind;

/// Running totals for one sort.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStatistics {
    pub comparisons: u64,
    pub swaps: u64,
    pub elapsed: Duration,
    pub array_size: usize,
}

impl RunStatistics {
    pub fn new(array_size: usize) -> Self {
        Self {
            array_size,
            ..Default::default()
        }
    }

    /// Counts a step. Only compare and swap events move the totals.
    pub fn record(&mut self, kind: EventKind) {
        match kind {
            EventKind::Compare => self.comparisons += 1,
            EventKind::Swap => self.swaps += 1,
            _ => {}
        }
    }

    pub fn snapshot(&self) -> StatisticsSnapshot {
        StatisticsSnapshot {
            comparisons: self.comparisons,
            swaps: self.swaps,
            elapsed_seconds: self.elapsed.as_secs_f64(),
            array_size: self.array_size,
        }
    }
}

/// Serializable view of [`RunStatistics`] for reporting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSnapshot {
    pub comparisons: u64,
    pub swaps: u64,
    pub elapsed_seconds: f64,
    pub array_size: usize,
}

impl StatisticsSnapshot {
    pub fn comparisons_per_element(&self) -> f64 {
        per_element(self.comparisons, self.array_size)
    }

    pub fn swaps_per_element(&self) -> f64 {
        per_element(self.swaps, self.array_size)
    }
}

fn per_element(count: u64, n: usize) -> f64 {
    if n == 0 {
        0.0
    } else {
        count as f64 / n as f64
    }
}
