//! Configuration for bias-correction runs.

use crate::error::BiasError;
use naiad_fdc::DEFAULT_STEPS;

/// Configuration for the historical and ungauged correctors.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use naiad_bias::CorrectionConfig;
///
/// let config = CorrectionConfig::new()
///     .with_extrapolate(true)
///     .with_skip_missing_months(true);
/// ```
#[derive(Clone, Debug)]
pub struct CorrectionConfig {
    extrapolate: bool,
    skip_missing_months: bool,
    steps: usize,
}

impl CorrectionConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `extrapolate = false`, `skip_missing_months = false`,
    /// `steps = 101`.
    pub fn new() -> Self {
        Self {
            extrapolate: false,
            skip_missing_months: false,
            steps: DEFAULT_STEPS,
        }
    }

    // --- Builder methods ---

    /// Sets whether mappers may extrapolate beyond the historical range.
    pub fn with_extrapolate(mut self, b: bool) -> Self {
        self.extrapolate = b;
        self
    }

    /// Sets whether months absent from the observed series are skipped
    /// (left uncorrected and omitted) instead of failing the call.
    pub fn with_skip_missing_months(mut self, b: bool) -> Self {
        self.skip_missing_months = b;
        self
    }

    /// Sets the number of rows in internally built flow-duration curves.
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    // --- Accessors ---

    /// Returns whether mappers may extrapolate beyond the historical range.
    pub fn extrapolate(&self) -> bool {
        self.extrapolate
    }

    /// Returns whether missing observed months are skipped.
    pub fn skip_missing_months(&self) -> bool {
        self.skip_missing_months
    }

    /// Returns the number of rows in internally built FDCs.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), BiasError> {
        if self.steps < 2 {
            return Err(BiasError::InvalidConfig {
                reason: format!("steps must be >= 2, got {}", self.steps),
            });
        }
        Ok(())
    }
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        Self::new()
    }
}
