//! Error types for the naiad-fdc crate.

/// Error type for all fallible operations in the naiad-fdc crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FdcError {
    /// Returned when a curve is requested with fewer than 2 steps.
    #[error("invalid step count: {steps} (must be >= 2)")]
    InvalidSteps {
        /// The invalid step count.
        steps: usize,
    },

    /// Returned when two curves do not share the same probability grid.
    #[error("probability grid mismatch: {reason}")]
    GridMismatch {
        /// Description of the mismatch.
        reason: String,
    },

    /// Returned when a month value is outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month value.
        month: u8,
    },

    /// Returned when a monthly SFDC table has two rows at the same
    /// probability for one month.
    #[error("duplicate probability {probability} for month {month}")]
    DuplicateProbability {
        /// The month containing the duplicate.
        month: u8,
        /// The repeated exceedance probability.
        probability: f64,
    },
}
