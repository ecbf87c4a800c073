//! Input arrays: random generation for demos and parsing of user supplied text.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::path::Path;

use crate::data_types::ArrayConfig;
use crate::error::{Result, SortError};

/// Parses comma separated or newline separated integers.
///
/// A text containing any comma is split on commas, otherwise on lines with
/// blank lines skipped. Every token must be an integer and the result must
/// not be empty.
pub fn parse_array(text: &str) -> Result<Vec<i64>> {
    let content = text.trim();

    let tokens: Vec<&str> = if content.contains(',') {
        content.split(',').map(str::trim).collect()
    } else {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    };

    let values = tokens
        .into_iter()
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| SortError::DataFormat(format!("not an integer: {token:?}")))
        })
        .collect::<Result<Vec<_>>>()?;

    if values.is_empty() {
        return Err(SortError::DataFormat("no values found".to_string()));
    }
    Ok(values)
}

pub fn load_from_file(path: impl AsRef<Path>) -> Result<Vec<i64>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|err| {
        SortError::DataFormat(format!("could not read {}: {err}", path.display()))
    })?;
    let values = parse_array(&text)?;
    tracing::debug!(path = %path.display(), len = values.len(), "array loaded");
    Ok(values)
}

/// Builds test arrays within the bounds of an [`ArrayConfig`].
pub struct DataGenerator {
    config: ArrayConfig,
    rng: StdRng,
}

impl DataGenerator {
    pub fn new(config: ArrayConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible generator.
    pub fn with_seed(config: ArrayConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &ArrayConfig {
        &self.config
    }

    pub fn random(&mut self, size: usize) -> Vec<i64> {
        let (lo, hi) = (self.config.value_min, self.config.value_max);
        (0..size).map(|_| self.rng.random_range(lo..=hi)).collect()
    }

    pub fn random_default(&mut self) -> Vec<i64> {
        self.random(self.config.size_default)
    }

    /// Evenly spread values between the configured bounds, rounded to the
    /// nearest integer.
    pub fn sorted(&self, size: usize, ascending: bool) -> Vec<i64> {
        let mut values = spread(self.config.value_min, self.config.value_max, size);
        if !ascending {
            values.reverse();
        }
        values
    }

    pub fn reversed(&self, size: usize) -> Vec<i64> {
        self.sorted(size, false)
    }

    /// Sorted array disturbed by `swaps` random swaps (default `max(1, n/10)`).
    pub fn nearly_sorted(&mut self, size: usize, swaps: Option<usize>) -> Vec<i64> {
        let mut values = self.sorted(size, true);
        if size == 0 {
            return values;
        }
        let swaps = swaps.unwrap_or_else(|| (size / 10).max(1));
        for _ in 0..swaps {
            let i = self.rng.random_range(0..size);
            let j = self.rng.random_range(0..size);
            values.swap(i, j);
        }
        values
    }

    /// Values drawn from a small pool (default `max(3, n/5)` distinct values).
    pub fn duplicate_heavy(&mut self, size: usize, unique: Option<usize>) -> Vec<i64> {
        let unique = unique.unwrap_or_else(|| (size / 5).max(3));
        let pool = spread(self.config.value_min, self.config.value_max, unique);
        (0..size)
            .filter_map(|_| pool.choose(&mut self.rng).copied())
            .collect()
    }
}

impl Default for DataGenerator {
    fn default() -> Self {
        Self::new(ArrayConfig::default())
    }
}

fn spread(min: i64, max: i64, count: usize) -> Vec<i64> {
    let step = if count > 1 {
        (max - min) as f64 / (count - 1) as f64
    } else {
        0.0
    };
    (0..count)
        .map(|i| (min as f64 + i as f64 * step).round() as i64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spread_endpoints() {
        assert_eq!(spread(10, 400, 4), vec![10, 140, 270, 400]);
        assert_eq!(spread(10, 400, 1), vec![10]);
        assert!(spread(10, 400, 0).is_empty());
    }

    #[test]
    fn test_spread_rounds_to_nearest() {
        assert_eq!(spread(0, 10, 4), vec![0, 3, 7, 10]);
    }
}
