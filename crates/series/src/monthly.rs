//! Calendar-month partition of a time series.

use chrono::{DateTime, Utc};

/// One calendar month's rows of a [`crate::TimeSeries`].
///
/// Keeps the original timestamps so corrected values can be reassembled
/// into a chronologically sorted series afterwards. Rows are in the same
/// (ascending) order as the parent series, but are generally not
/// contiguous in time because the partition spans multiple years.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthPartition {
    month: u8,
    timestamps: Vec<DateTime<Utc>>,
    values: Vec<f64>,
}

impl MonthPartition {
    pub(crate) fn new(month: u8, timestamps: Vec<DateTime<Utc>>, values: Vec<f64>) -> Self {
        Self {
            month,
            timestamps,
            values,
        }
    }

    /// The calendar month (1..=12) this partition was filtered to.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Number of rows in the partition.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the partition has no rows.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Timestamps of the partition rows.
    pub fn timestamps(&self) -> &[DateTime<Utc>] {
        &self.timestamps
    }

    /// Flow values of the partition rows.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns a copy of the partition with NaN rows removed.
    pub fn dropna(&self) -> MonthPartition {
        let (timestamps, values) = self
            .timestamps
            .iter()
            .copied()
            .zip(self.values.iter().copied())
            .filter(|(_, v)| !v.is_nan())
            .unzip();
        MonthPartition::new(self.month, timestamps, values)
    }
}
