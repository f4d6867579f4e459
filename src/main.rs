mod cli;
mod fdc_cmd;
mod forecast_cmd;
mod historical_cmd;
mod logging;
mod return_periods_cmd;
mod ungauged_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::CorrectHistorical(args) => historical_cmd::run(args),
        Command::CorrectForecast(args) => forecast_cmd::run(args),
        Command::CorrectUngauged(args) => ungauged_cmd::run(args),
        Command::Fdc(args) => fdc_cmd::run(args),
        Command::ReturnPeriods(args) => return_periods_cmd::run(args),
    }
}
