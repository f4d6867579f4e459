//! # naiad-fdc
//!
//! Flow-duration curve construction for streamflow series.
//!
//! A flow-duration curve (FDC) maps exceedance probability to flow: the
//! value at probability `p` is the flow equalled or exceeded `p` percent
//! of the time. Throughout this crate the probability axis ascends from
//! 0 to 100 and flow is therefore non-increasing along it. This is the
//! one orientation used everywhere; callers wanting the reverse read the
//! rows backwards.
//!
//! - [`build_fdc`] converts a raw flow sample into a fixed-length curve.
//! - [`build_monthly_fdc`] builds one curve per calendar month present in
//!   a series.
//! - [`build_sfdc`] divides a simulated curve by an observed curve at
//!   matching probabilities, producing the scalar ratio curve used to
//!   adjust ungauged reaches; [`MonthlySfdc`] is the per-month table of
//!   such curves.
//!
//! All builders are pure functions over caller-supplied data; outlier
//! filtering, when wanted, is applied by the caller beforehand (see
//! `naiad_stats::drop_outliers_zscore`).

mod curve;
mod error;
mod monthly;
mod scalar;

pub use curve::{build_fdc, FlowDurationCurve, DEFAULT_STEPS};
pub use error::FdcError;
pub use monthly::{build_monthly_fdc, MonthlyFdc};
pub use scalar::{build_sfdc, MonthlySfdc, ScalarFdc};
