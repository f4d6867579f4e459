//! Error types for the naiad-bias crate.

use naiad_fdc::FdcError;
use naiad_series::SeriesError;

/// Error type for all fallible operations in the naiad-bias crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BiasError {
    /// Returned when an argument combination is unsupported.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when an empirical CDF is requested for an empty sample.
    #[error("cannot build an empirical CDF from an empty sample")]
    EmptySample,

    /// Returned by a strict (non-extrapolating) interpolant for a query
    /// outside its domain.
    #[error("value {value} outside interpolation domain [{min}, {max}]")]
    OutOfDomain {
        /// The out-of-range query.
        value: f64,
        /// Lower end of the domain.
        min: f64,
        /// Upper end of the domain.
        max: f64,
    },

    /// Returned when a month present in the simulated series has no
    /// observed data to correct against.
    #[error("observed series has no data for month {month}")]
    MissingObservedMonth {
        /// The calendar month (1..=12) lacking observations.
        month: u8,
    },

    /// Returned when the forecast's reference month is absent from a
    /// paired historical series.
    #[error("{series} series has no data for reference month {month}")]
    MissingReferenceMonth {
        /// The reference calendar month (1..=12).
        month: u8,
        /// Which series lacked the month ("simulated" or "observed").
        series: &'static str,
    },

    /// Returned when the monthly SFDC table has no usable curve for a
    /// month present in the simulated series.
    #[error("scalar FDC table has no curve for month {month}")]
    MissingSfdcMonth {
        /// The calendar month (1..=12) lacking a curve.
        month: u8,
    },

    /// Returned when an ungauged correction would divide by a zero or
    /// non-finite scalar.
    #[error("correction scalar is zero for month {month} at percentile {percentile}")]
    ZeroScalar {
        /// The offending calendar month (1..=12).
        month: u8,
        /// The exceedance percentile at which the scalar was looked up.
        percentile: f64,
    },

    /// Wraps an error from the naiad-series crate.
    #[error(transparent)]
    Series(#[from] SeriesError),

    /// Wraps an error from the naiad-fdc crate.
    #[error(transparent)]
    Fdc(#[from] FdcError),
}
