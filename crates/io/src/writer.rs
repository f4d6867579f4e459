//! CSV writers for series, tables, and flow-duration outputs.

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use naiad_fdc::{FlowDurationCurve, MonthlyFdc, MonthlySfdc};
use naiad_series::{FlowTable, TimeSeries};

use crate::error::IoError;

/// One row of a monthly scalar flow-duration file.
#[derive(Debug, Serialize)]
struct SfdcRecord {
    month: u8,
    exceedance_probability: f64,
    scalar: f64,
}

/// Formats a flow cell; NaN becomes an empty cell so files round-trip.
fn cell(v: f64) -> String {
    if v.is_nan() {
        String::new()
    } else {
        v.to_string()
    }
}

/// Writes a single-column time series as `datetime,<label>` rows with
/// RFC 3339 timestamps.
pub fn write_time_series(path: &Path, series: &TimeSeries) -> Result<(), IoError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["datetime", series.label()])?;
    for (ts, value) in series.iter() {
        writer.write_record([ts.to_rfc3339(), cell(value)])?;
    }
    writer.flush().map_err(csv::Error::from)?;
    debug!(path = %path.display(), rows = series.len(), "wrote time series");
    Ok(())
}

/// Writes a multi-column flow table as `datetime,<col>,...` rows.
pub fn write_flow_table(path: &Path, table: &FlowTable) -> Result<(), IoError> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec!["datetime".to_string()];
    header.extend(table.column_names().iter().cloned());
    writer.write_record(&header)?;

    for (row, ts) in table.timestamps().iter().enumerate() {
        let mut record = vec![ts.to_rfc3339()];
        for (_, column) in table.iter_columns() {
            record.push(cell(column[row]));
        }
        writer.write_record(&record)?;
    }
    writer.flush().map_err(csv::Error::from)?;
    debug!(
        path = %path.display(),
        rows = table.len(),
        columns = table.n_columns(),
        "wrote flow table"
    );
    Ok(())
}

/// Writes a flow-duration curve as `exceedance_probability,<label>` rows.
pub fn write_fdc(path: &Path, fdc: &FlowDurationCurve) -> Result<(), IoError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["exceedance_probability", fdc.label()])?;
    for (p, flow) in fdc.iter() {
        writer.write_record([p.to_string(), cell(flow)])?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Writes a monthly flow-duration table as
/// `month,exceedance_probability,<label>` rows, months ascending.
pub fn write_monthly_fdc(path: &Path, monthly: &MonthlyFdc) -> Result<(), IoError> {
    let mut writer = csv::Writer::from_path(path)?;
    let label = monthly
        .iter()
        .next()
        .map(|(_, c)| c.label().to_string())
        .unwrap_or_else(|| "Q".to_string());
    writer.write_record(["month", "exceedance_probability", &label])?;
    for (month, curve) in monthly.iter() {
        for (p, flow) in curve.iter() {
            writer.write_record([month.to_string(), p.to_string(), cell(flow)])?;
        }
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Writes a monthly scalar flow-duration table as
/// `month,exceedance_probability,scalar` rows, months ascending.
pub fn write_monthly_sfdc(path: &Path, table: &MonthlySfdc) -> Result<(), IoError> {
    let mut writer = csv::Writer::from_path(path)?;
    for (month, curve) in table.iter() {
        for (exceedance_probability, scalar) in curve.iter() {
            writer.serialize(SfdcRecord {
                month,
                exceedance_probability,
                scalar,
            })?;
        }
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}
