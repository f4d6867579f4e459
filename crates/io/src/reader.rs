//! CSV readers for series, tables, and scalar-curve files.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use naiad_fdc::MonthlySfdc;
use naiad_series::{FlowTable, TimeSeries};

use crate::error::IoError;

/// One row of a monthly scalar flow-duration file.
#[derive(Debug, Deserialize)]
struct SfdcRecord {
    month: u8,
    exceedance_probability: f64,
    scalar: f64,
}

fn open(path: &Path) -> Result<csv::Reader<std::fs::File>, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?)
}

fn parse_timestamp(line: usize, cell: &str) -> Result<DateTime<Utc>, IoError> {
    DateTime::parse_from_rfc3339(cell)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| IoError::InvalidTimestamp {
            line,
            value: cell.to_string(),
        })
}

/// Parses a flow cell. An empty cell reads as NaN (missing observation).
fn parse_value(line: usize, cell: &str) -> Result<f64, IoError> {
    if cell.is_empty() {
        return Ok(f64::NAN);
    }
    cell.parse().map_err(|_| IoError::InvalidNumber {
        line,
        value: cell.to_string(),
    })
}

/// Reads a single-column time series.
///
/// Expected layout: a `datetime` column of RFC 3339 timestamps followed by
/// one value column whose header becomes the series label. Rows may appear
/// in any order; the series is sorted on load.
///
/// # Errors
///
/// Fails on a missing file, a malformed header or cell, or a duplicate
/// timestamp.
pub fn read_time_series(path: &Path) -> Result<TimeSeries, IoError> {
    let mut reader = open(path)?;

    let headers = reader.headers()?.clone();
    if headers.len() != 2 || &headers[0] != "datetime" {
        return Err(IoError::Header {
            reason: format!(
                "expected columns 'datetime,<label>', got '{}'",
                headers.iter().collect::<Vec<_>>().join(",")
            ),
        });
    }
    let label = headers[1].to_string();

    let mut pairs = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let line = i + 1;
        let ts = parse_timestamp(line, &record[0])?;
        let value = parse_value(line, &record[1])?;
        pairs.push((ts, value));
    }

    debug!(path = %path.display(), rows = pairs.len(), "read time series");
    Ok(TimeSeries::from_unsorted(pairs, label)?)
}

/// Reads a multi-column flow table (forecast ensembles or statistics).
///
/// Expected layout: a `datetime` column followed by one column per member.
///
/// # Errors
///
/// Fails on a missing file, a malformed header or cell, an unsorted or
/// duplicated timestamp index, or a file with no value columns.
pub fn read_flow_table(path: &Path) -> Result<FlowTable, IoError> {
    let mut reader = open(path)?;

    let headers = reader.headers()?.clone();
    if headers.is_empty() || &headers[0] != "datetime" {
        return Err(IoError::Header {
            reason: "expected first column 'datetime'".to_string(),
        });
    }
    let columns: Vec<String> = headers.iter().skip(1).map(str::to_string).collect();

    let mut timestamps = Vec::new();
    let mut data: Vec<Vec<f64>> = vec![Vec::new(); columns.len()];
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let line = i + 1;
        timestamps.push(parse_timestamp(line, &record[0])?);
        for (c, cell) in record.iter().skip(1).enumerate() {
            data[c].push(parse_value(line, cell)?);
        }
    }

    debug!(
        path = %path.display(),
        rows = timestamps.len(),
        columns = columns.len(),
        "read flow table"
    );
    Ok(FlowTable::new(timestamps, columns, data)?)
}

/// Reads a monthly scalar flow-duration table.
///
/// Expected layout: `month,exceedance_probability,scalar` rows in any
/// order.
///
/// # Errors
///
/// Fails on a missing file, a malformed row, a month outside 1..=12, or a
/// probability repeated within one month.
pub fn read_monthly_sfdc(path: &Path) -> Result<MonthlySfdc, IoError> {
    let mut reader = open(path)?;

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let record: SfdcRecord = record?;
        rows.push((record.month, record.exceedance_probability, record.scalar));
    }

    debug!(path = %path.display(), rows = rows.len(), "read scalar FDC table");
    Ok(MonthlySfdc::from_rows(&rows)?)
}
