//! Single-column timestamped streamflow series.

use chrono::{DateTime, Datelike, Utc};

use crate::error::SeriesError;
use crate::monthly::MonthPartition;

/// A single column of flow values keyed by a strictly increasing UTC
/// timestamp index.
///
/// Invariants enforced at construction:
/// - timestamps and values have the same length,
/// - timestamps are strictly increasing (no duplicates).
///
/// Values may be NaN (missing observations); correction routines drop NaN
/// rows per month before building distributions.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    timestamps: Vec<DateTime<Utc>>,
    values: Vec<f64>,
    label: String,
}

impl TimeSeries {
    /// Creates a new series after validating the index.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::LengthMismatch`] if the slices differ in
    /// length, [`SeriesError::DuplicateTimestamp`] if a timestamp repeats,
    /// or [`SeriesError::UnsortedTimestamps`] if the index is out of order.
    pub fn new(
        timestamps: Vec<DateTime<Utc>>,
        values: Vec<f64>,
        label: impl Into<String>,
    ) -> Result<Self, SeriesError> {
        if timestamps.len() != values.len() {
            return Err(SeriesError::LengthMismatch {
                timestamps_len: timestamps.len(),
                values_len: values.len(),
            });
        }

        for (i, pair) in timestamps.windows(2).enumerate() {
            if pair[1] == pair[0] {
                return Err(SeriesError::DuplicateTimestamp { timestamp: pair[1] });
            }
            if pair[1] < pair[0] {
                return Err(SeriesError::UnsortedTimestamps { index: i + 1 });
            }
        }

        Ok(Self {
            timestamps,
            values,
            label: label.into(),
        })
    }

    /// Creates a series from unordered (timestamp, value) pairs, sorting
    /// by timestamp first.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::DuplicateTimestamp`] if two pairs share a
    /// timestamp.
    pub fn from_unsorted(
        mut pairs: Vec<(DateTime<Utc>, f64)>,
        label: impl Into<String>,
    ) -> Result<Self, SeriesError> {
        pairs.sort_by_key(|(ts, _)| *ts);
        let (timestamps, values) = pairs.into_iter().unzip();
        Self::new(timestamps, values, label)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the series has no rows.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The timestamp index.
    pub fn timestamps(&self) -> &[DateTime<Utc>] {
        &self.timestamps
    }

    /// The flow values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The column label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Iterates over (timestamp, value) pairs in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (DateTime<Utc>, f64)> + '_ {
        self.timestamps
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }

    /// Calendar months (1..=12) present in the series, ascending.
    pub fn unique_months(&self) -> Vec<u8> {
        let mut present = [false; 12];
        for ts in &self.timestamps {
            present[ts.month() as usize - 1] = true;
        }
        (1u8..=12).filter(|&m| present[m as usize - 1]).collect()
    }

    /// Restricts the series to rows whose calendar month equals `month`.
    ///
    /// Partitions for distinct months are disjoint and together cover the
    /// series exactly. Months with no rows yield an empty partition.
    ///
    /// # Panics
    ///
    /// Panics if `month` is 0 or greater than 12.
    pub fn month_partition(&self, month: u8) -> MonthPartition {
        assert!(
            (1..=12).contains(&month),
            "month must be in 1..=12, got {month}"
        );
        let (timestamps, values) = self
            .iter()
            .filter(|(ts, _)| ts.month() as u8 == month)
            .unzip();
        MonthPartition::new(month, timestamps, values)
    }
}
