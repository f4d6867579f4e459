//! Multi-column timestamped flow table.

use chrono::{DateTime, Utc};

use crate::error::SeriesError;

/// Any number of named flow columns over one shared, strictly increasing
/// UTC timestamp index.
///
/// Used for forecast ensembles, forecast summary statistics, and recorded
/// values: anything the forecast corrector must transform column by
/// column while preserving column identity and the row index.
///
/// Storage is column-major.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowTable {
    timestamps: Vec<DateTime<Utc>>,
    columns: Vec<String>,
    data: Vec<Vec<f64>>,
}

impl FlowTable {
    /// Creates a new table after validating the index and column shapes.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::NoColumns`] for an empty column set,
    /// [`SeriesError::ColumnLengthMismatch`] if any column's length
    /// differs from the index length, and the same index errors as
    /// [`crate::TimeSeries::new`] for an invalid timestamp index.
    pub fn new(
        timestamps: Vec<DateTime<Utc>>,
        columns: Vec<String>,
        data: Vec<Vec<f64>>,
    ) -> Result<Self, SeriesError> {
        if columns.is_empty() {
            return Err(SeriesError::NoColumns);
        }
        if columns.len() != data.len() {
            return Err(SeriesError::LengthMismatch {
                timestamps_len: columns.len(),
                values_len: data.len(),
            });
        }

        for (name, col) in columns.iter().zip(data.iter()) {
            if col.len() != timestamps.len() {
                return Err(SeriesError::ColumnLengthMismatch {
                    column: name.clone(),
                    expected: timestamps.len(),
                    got: col.len(),
                });
            }
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
            columns,
            data,
        })
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Number of columns.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// The timestamp index.
    pub fn timestamps(&self) -> &[DateTime<Utc>] {
        &self.timestamps
    }

    /// Column names in storage order.
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Values of the named column, if present.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .position(|c| c == name)
            .map(|i| self.data[i].as_slice())
    }

    /// Iterates over (name, values) pairs in storage order.
    pub fn iter_columns(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.data.iter().map(Vec::as_slice))
    }

    /// Returns a new table with each column replaced by `f(name, values)`,
    /// keeping the index and column names.
    ///
    /// The replacement must have the same length as the input column.
    pub fn map_columns<F, E>(&self, mut f: F) -> Result<FlowTable, E>
    where
        F: FnMut(&str, &[f64]) -> Result<Vec<f64>, E>,
    {
        let mut data = Vec::with_capacity(self.data.len());
        for (name, col) in self.iter_columns() {
            let mapped = f(name, col)?;
            debug_assert_eq!(mapped.len(), col.len());
            data.push(mapped);
        }
        Ok(FlowTable {
            timestamps: self.timestamps.clone(),
            columns: self.columns.clone(),
            data,
        })
    }
}
