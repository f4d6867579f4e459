use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Naiad streamflow bias-correction toolkit.
#[derive(Parser)]
#[command(
    name = "naiad",
    version,
    about = "Streamflow bias correction and flow-duration analysis"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Bias-correct a retrospective simulation against observations.
    CorrectHistorical(CorrectHistoricalArgs),
    /// Bias-correct every column of a forecast table.
    CorrectForecast(CorrectForecastArgs),
    /// Bias-correct an ungauged reach with a scalar flow-duration table.
    CorrectUngauged(CorrectUngaugedArgs),
    /// Compute a flow-duration curve (whole series or per month).
    Fdc(FdcArgs),
    /// Estimate Gumbel return-period flows from annual extremes.
    ReturnPeriods(ReturnPeriodsArgs),
}

/// Arguments for the `correct-historical` subcommand.
#[derive(clap::Args)]
pub struct CorrectHistoricalArgs {
    /// Path to the simulated series CSV.
    #[arg(short, long)]
    pub simulated: PathBuf,

    /// Path to the observed series CSV.
    #[arg(long)]
    pub observed: PathBuf,

    /// Path for the corrected series CSV.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Allow the monthly mappers to extrapolate past the historical range.
    #[arg(long)]
    pub extrapolate: bool,

    /// Drop months with no observed data instead of failing.
    #[arg(long = "skip-missing-months")]
    pub skip_missing_months: bool,
}

/// Arguments for the `correct-forecast` subcommand.
#[derive(clap::Args)]
pub struct CorrectForecastArgs {
    /// Path to the forecast table CSV (one column per member).
    #[arg(short, long)]
    pub forecast: PathBuf,

    /// Path to the historical simulated series CSV.
    #[arg(short, long)]
    pub simulated: PathBuf,

    /// Path to the historical observed series CSV.
    #[arg(long)]
    pub observed: PathBuf,

    /// Path for the corrected table CSV.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Which end of the horizon fixes the reference month.
    #[arg(long, value_enum, default_value_t = ReferenceEnd::First)]
    pub reference: ReferenceEnd,
}

/// CLI spelling of the reference-month choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReferenceEnd {
    /// The month of the first forecast timestamp.
    First,
    /// The month of the last forecast timestamp.
    Last,
}

/// Arguments for the `correct-ungauged` subcommand.
#[derive(clap::Args)]
pub struct CorrectUngaugedArgs {
    /// Path to the simulated series CSV.
    #[arg(short, long)]
    pub simulated: PathBuf,

    /// Path to the monthly scalar flow-duration table CSV.
    #[arg(long)]
    pub sfdc: PathBuf,

    /// Path for the corrected series CSV.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Drop months with no scalar curve instead of failing.
    #[arg(long = "skip-missing-months")]
    pub skip_missing_months: bool,
}

/// Arguments for the `fdc` subcommand.
#[derive(clap::Args)]
pub struct FdcArgs {
    /// Path to the flow series CSV.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path for the curve CSV.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Number of rows in the curve.
    #[arg(long, default_value_t = 101)]
    pub steps: usize,

    /// Build one curve per calendar month instead of one for the series.
    #[arg(long)]
    pub monthly: bool,
}

/// Arguments for the `return-periods` subcommand.
#[derive(clap::Args)]
pub struct ReturnPeriodsArgs {
    /// Path to the flow series CSV.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path for the estimates CSV (stdout if omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Return periods in years.
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    pub periods: Option<Vec<u32>>,

    /// Estimate low-flow return periods from annual minima instead.
    #[arg(long)]
    pub low: bool,
}
