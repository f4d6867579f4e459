//! Correct-ungauged command: apply a precomputed scalar curve table.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use naiad_bias::{correct_ungauged_with, CorrectionConfig};
use naiad_io::{read_monthly_sfdc, read_time_series, write_time_series};

use crate::cli::CorrectUngaugedArgs;

/// Run the ungauged correction pipeline.
pub fn run(args: CorrectUngaugedArgs) -> Result<()> {
    let _cmd = info_span!("correct_ungauged").entered();

    info!(path = %args.simulated.display(), "reading simulated series");
    let simulated = read_time_series(&args.simulated)
        .with_context(|| format!("failed to read simulated series: {}", args.simulated.display()))?;

    info!(path = %args.sfdc.display(), "reading scalar curve table");
    let sfdc = read_monthly_sfdc(&args.sfdc)
        .with_context(|| format!("failed to read scalar table: {}", args.sfdc.display()))?;

    info!(
        n_sim = simulated.len(),
        months = ?sfdc.months(),
        "running ungauged correction"
    );
    let config = CorrectionConfig::new().with_skip_missing_months(args.skip_missing_months);
    let corrected =
        correct_ungauged_with(&simulated, &sfdc, &config).context("correction failed")?;

    write_time_series(&args.output, &corrected)
        .with_context(|| format!("failed to write corrected series: {}", args.output.display()))?;
    info!(path = %args.output.display(), rows = corrected.len(), "corrected series written");

    Ok(())
}
