//! Value frequency aggregation
//!
//! Counts occurrences of observed values over a single full scan, keeping
//! missing entries separate from every real value (including the empty
//! string). Reporting order is descending count with ties broken by first
//! appearance.

use std::collections::HashMap;

/// Frequency table over string-keyed values.
///
/// Built incrementally via [`observe`](Self::observe); `None` records a
/// missing entry rather than a value.
#[derive(Debug, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
    /// Distinct values in first-appearance order
    order: Vec<String>,
    missing: usize,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from an iterator of optional values.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for value in values {
            table.observe(value.as_ref().map(|s| s.as_ref()));
        }
        table
    }

    /// Record one observation; `None` counts as missing.
    pub fn observe(&mut self, value: Option<&str>) {
        let Some(value) = value else {
            self.missing += 1;
            return;
        };
        match self.counts.get_mut(value) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(value.to_string(), 1);
                self.order.push(value.to_string());
            }
        }
    }

    /// Number of non-missing observations.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of missing observations.
    pub fn missing(&self) -> usize {
        self.missing
    }

    /// Number of distinct non-missing values.
    pub fn distinct(&self) -> usize {
        self.order.len()
    }

    /// Up to the first `n` distinct values, in order of first appearance.
    pub fn first_distinct(&self, n: usize) -> Vec<&str> {
        self.order.iter().take(n).map(String::as_str).collect()
    }

    /// All (value, count) pairs sorted by descending count; ties keep
    /// first-appearance order.
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut pairs: Vec<(&str, usize)> = self
            .order
            .iter()
            .map(|value| (value.as_str(), self.counts[value]))
            .collect();
        // Stable sort over first-appearance order preserves tie ordering
        pairs.sort_by(|a, b| b.1.cmp(&a.1));
        pairs
    }
}

#[cfg(test)]
#[path = "freq_tests.rs"]
mod freq_tests;
