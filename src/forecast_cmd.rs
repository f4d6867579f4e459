//! Correct-forecast command: apply one reference month's mapping to a table.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use naiad_bias::{correct_forecast, ReferenceMonth};
use naiad_io::{read_flow_table, read_time_series, write_flow_table};

use crate::cli::{CorrectForecastArgs, ReferenceEnd};

/// Run the forecast correction pipeline.
pub fn run(args: CorrectForecastArgs) -> Result<()> {
    let _cmd = info_span!("correct_forecast").entered();

    info!(path = %args.forecast.display(), "reading forecast table");
    let forecast = read_flow_table(&args.forecast)
        .with_context(|| format!("failed to read forecast table: {}", args.forecast.display()))?;

    let simulated = read_time_series(&args.simulated)
        .with_context(|| format!("failed to read simulated series: {}", args.simulated.display()))?;
    let observed = read_time_series(&args.observed)
        .with_context(|| format!("failed to read observed series: {}", args.observed.display()))?;

    let reference = match args.reference {
        ReferenceEnd::First => ReferenceMonth::First,
        ReferenceEnd::Last => ReferenceMonth::Last,
    };

    info!(
        rows = forecast.len(),
        columns = forecast.n_columns(),
        ?reference,
        "correcting forecast columns"
    );
    let corrected = correct_forecast(&forecast, &simulated, &observed, reference)
        .context("correction failed")?;

    write_flow_table(&args.output, &corrected)
        .with_context(|| format!("failed to write corrected table: {}", args.output.display()))?;
    info!(path = %args.output.display(), "corrected table written");

    Ok(())
}
