//! Correct-historical command: quantile-map a simulation onto observations.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use naiad_bias::{correct_historical_with, CorrectionConfig};
use naiad_io::{read_time_series, write_time_series};

use crate::cli::CorrectHistoricalArgs;

/// Run the historical correction pipeline.
pub fn run(args: CorrectHistoricalArgs) -> Result<()> {
    let _cmd = info_span!("correct_historical").entered();

    info!(path = %args.simulated.display(), "reading simulated series");
    let simulated = read_time_series(&args.simulated)
        .with_context(|| format!("failed to read simulated series: {}", args.simulated.display()))?;

    info!(path = %args.observed.display(), "reading observed series");
    let observed = read_time_series(&args.observed)
        .with_context(|| format!("failed to read observed series: {}", args.observed.display()))?;

    info!(
        n_sim = simulated.len(),
        n_obs = observed.len(),
        "running monthly bias correction"
    );
    let config = CorrectionConfig::new()
        .with_extrapolate(args.extrapolate)
        .with_skip_missing_months(args.skip_missing_months);
    let corrected =
        correct_historical_with(&simulated, &observed, &config).context("correction failed")?;

    write_time_series(&args.output, &corrected)
        .with_context(|| format!("failed to write corrected series: {}", args.output.display()))?;
    info!(path = %args.output.display(), rows = corrected.len(), "corrected series written");

    Ok(())
}
