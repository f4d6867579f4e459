//! Flow-duration curve type and builder.

use crate::error::FdcError;

/// Number of rows used when the caller does not choose: whole-percent
/// granularity from 0 to 100 inclusive.
pub const DEFAULT_STEPS: usize = 101;

/// A flow-duration curve: exceedance probability against flow.
///
/// Probabilities ascend 0..=100 in equal increments; flow is
/// non-increasing along that axis (the flow at probability 0 is the
/// sample maximum, at 100 the minimum). Deterministic given the sample
/// and step count.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowDurationCurve {
    probabilities: Vec<f64>,
    flows: Vec<f64>,
    label: String,
}

impl FlowDurationCurve {
    pub(crate) fn new(probabilities: Vec<f64>, flows: Vec<f64>, label: String) -> Self {
        debug_assert_eq!(probabilities.len(), flows.len());
        Self {
            probabilities,
            flows,
            label,
        }
    }

    /// Number of rows in the curve.
    pub fn len(&self) -> usize {
        self.flows.len()
    }

    /// Returns `true` if the curve has no rows.
    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    /// Exceedance probabilities (percent, ascending 0..=100).
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// Flow values aligned with [`Self::probabilities`], non-increasing.
    pub fn flows(&self) -> &[f64] {
        &self.flows
    }

    /// The flow column label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Iterates over (probability, flow) rows in ascending probability.
    ///
    /// Double-ended, so the curve can also be walked from the
    /// high-probability (low-flow) end with `rev()`.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (f64, f64)> + '_ {
        self.probabilities
            .iter()
            .copied()
            .zip(self.flows.iter().copied())
    }
}

/// Builds a flow-duration curve from a raw flow sample.
///
/// Computes `steps` percentiles of `flows` (NaN-ignoring, linear
/// interpolation) at probabilities linearly spaced from 0 to 100. An
/// empty or all-NaN sample yields a curve whose flows are all NaN.
///
/// # Errors
///
/// Returns [`FdcError::InvalidSteps`] if `steps < 2`.
pub fn build_fdc(
    flows: &[f64],
    steps: usize,
    label: impl Into<String>,
) -> Result<FlowDurationCurve, FdcError> {
    if steps < 2 {
        return Err(FdcError::InvalidSteps { steps });
    }

    let mut probabilities = Vec::with_capacity(steps);
    let mut curve_flows = Vec::with_capacity(steps);
    for i in 0..steps {
        let p = 100.0 * i as f64 / (steps - 1) as f64;
        probabilities.push(p);
        // exceedance probability p corresponds to the (100 - p)th percentile
        curve_flows.push(naiad_stats::percentile_nan(flows, 100.0 - p));
    }

    Ok(FlowDurationCurve::new(probabilities, curve_flows, label.into()))
}
