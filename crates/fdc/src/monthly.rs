//! Per-calendar-month flow-duration curves.

use std::collections::BTreeMap;

use naiad_series::TimeSeries;

use crate::curve::{build_fdc, FlowDurationCurve};
use crate::error::FdcError;

/// One flow-duration curve per calendar month present in a series.
///
/// Months with no rows in the source series are absent from the table;
/// iteration order is (month, exceedance probability) ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyFdc {
    curves: BTreeMap<u8, FlowDurationCurve>,
}

impl MonthlyFdc {
    /// Months (1..=12) with a curve, ascending.
    pub fn months(&self) -> Vec<u8> {
        self.curves.keys().copied().collect()
    }

    /// The curve for a month, if the source series had rows in it.
    pub fn curve(&self, month: u8) -> Option<&FlowDurationCurve> {
        self.curves.get(&month)
    }

    /// Returns `true` if no month has a curve.
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Iterates over (month, curve) pairs in ascending month order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &FlowDurationCurve)> {
        self.curves.iter().map(|(&m, c)| (m, c))
    }
}

/// Builds one flow-duration curve for each calendar month present in
/// `series`, partitioning by the timestamp's month field.
///
/// # Errors
///
/// Returns [`FdcError::InvalidSteps`] if `steps < 2`.
pub fn build_monthly_fdc(
    series: &TimeSeries,
    steps: usize,
    label: impl Into<String>,
) -> Result<MonthlyFdc, FdcError> {
    let label = label.into();
    let mut curves = BTreeMap::new();
    for month in series.unique_months() {
        let partition = series.month_partition(month);
        let fdc = build_fdc(partition.values(), steps, label.clone())?;
        curves.insert(month, fdc);
    }
    Ok(MonthlyFdc { curves })
}
