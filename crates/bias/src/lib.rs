//! Empirical-distribution bias correction for simulated streamflow.
//!
//! This crate adjusts simulated flow toward observed behavior using
//! monthly empirical-CDF matching, or toward a precomputed scalar
//! flow-duration curve for reaches without observations.
//!
//! # Pipeline
//!
//! 1. **Partition** the simulated series by calendar month
//! 2. **Fit** an empirical CDF per month: histogram (Sturges bins) →
//!    normalize → cumulative sum
//! 3. **Map** each simulated value: simulated CDF → probability →
//!    observed inverse CDF
//! 4. **Reassemble** the corrected months sorted by timestamp
//!
//! Gauged reaches use [`correct_historical`] (paired simulated/observed
//! records) and [`correct_forecast`] (one reference month applied to every
//! forecast column, with mandatory extrapolation). Ungauged reaches use
//! [`correct_ungauged`] with a monthly scalar-FDC table.
//!
//! Calendar months are independent; the month loops run in parallel and
//! results are re-sorted by timestamp afterwards. A failing month aborts
//! the whole call: output months are always a deterministic function of
//! input months, never silently omitted.
//!
//! # Quick Start
//!
//! ```no_run
//! use naiad_bias::correct_historical;
//! use naiad_series::TimeSeries;
//!
//! # fn load() -> (TimeSeries, TimeSeries) { unimplemented!() }
//! let (simulated, observed) = load();
//! let corrected = correct_historical(&simulated, &observed)?;
//! # Ok::<(), naiad_bias::BiasError>(())
//! ```

mod cdf;
mod config;
mod error;
mod forecast;
mod historical;
mod interp;
mod ungauged;

pub use cdf::{CdfMapper, Direction};
pub use config::CorrectionConfig;
pub use error::BiasError;
pub use forecast::{correct_forecast, ReferenceMonth};
pub use historical::{correct_historical, correct_historical_with};
pub use interp::{make_interpolator, FillMode, Interp1d};
pub use ungauged::{correct_ungauged, correct_ungauged_with};
