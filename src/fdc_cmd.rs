//! Fdc command: percentile curves from a flow series.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use naiad_fdc::{build_fdc, build_monthly_fdc};
use naiad_io::{read_time_series, write_fdc, write_monthly_fdc};

use crate::cli::FdcArgs;

/// Run the flow-duration-curve pipeline.
pub fn run(args: FdcArgs) -> Result<()> {
    let _cmd = info_span!("fdc").entered();

    let series = read_time_series(&args.input)
        .with_context(|| format!("failed to read series: {}", args.input.display()))?;
    info!(rows = series.len(), steps = args.steps, monthly = args.monthly, "building curve");

    if args.monthly {
        let monthly = build_monthly_fdc(&series, args.steps, series.label())
            .context("failed to build monthly curves")?;
        write_monthly_fdc(&args.output, &monthly)
            .with_context(|| format!("failed to write curves: {}", args.output.display()))?;
    } else {
        let fdc = build_fdc(series.values(), args.steps, series.label())
            .context("failed to build curve")?;
        write_fdc(&args.output, &fdc)
            .with_context(|| format!("failed to write curve: {}", args.output.display()))?;
    }
    info!(path = %args.output.display(), "curve written");

    Ok(())
}
