//! Return-periods command: Gumbel estimates from annual extremes.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use naiad_io::read_time_series;
use naiad_stats::{low_return_periods, return_periods, DEFAULT_RETURN_PERIODS};

use crate::cli::ReturnPeriodsArgs;

/// Run the return-period pipeline.
pub fn run(args: ReturnPeriodsArgs) -> Result<()> {
    let _cmd = info_span!("return_periods").entered();

    let series = read_time_series(&args.input)
        .with_context(|| format!("failed to read series: {}", args.input.display()))?;

    let periods = args
        .periods
        .unwrap_or_else(|| DEFAULT_RETURN_PERIODS.to_vec());
    info!(rows = series.len(), ?periods, low = args.low, "estimating return periods");

    let estimates = if args.low {
        low_return_periods(&series, &periods)
    } else {
        return_periods(&series, &periods)
    };

    let mut out = String::from("return_period,flow\n");
    for (rp, flow) in &estimates {
        out.push_str(&format!("{rp},{flow}\n"));
    }

    match args.output {
        Some(path) => {
            std::fs::write(&path, out)
                .with_context(|| format!("failed to write estimates: {}", path.display()))?;
            info!(path = %path.display(), "estimates written");
        }
        None => print!("{out}"),
    }

    Ok(())
}
