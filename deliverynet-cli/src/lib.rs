//! Command-line interface for DeliveryNet route reports and maps.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod map;
mod network;
mod report;

pub use error::CliError;

use map::{MapArgs, run_map};
use report::{ReportArgs, run_report};

const ARG_NETWORK: &str = "network";
const ARG_ROUTE: &str = "route";
const ARG_DEPOT: &str = "depot";
const ARG_AVG_SPEED: &str = "avg-speed";
const ARG_FUEL_EFFICIENCY: &str = "fuel-efficiency";
const ARG_FORMAT: &str = "format";
const ARG_NO_HIGHLIGHT: &str = "no-highlight";
const ARG_MAP_OUTPUT: &str = "output";
const ENV_MAP_OUTPUT: &str = "DELIVERYNET_CMDS_MAP_OUTPUT";

/// Run the DeliveryNet CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when arguments, configuration or input files are
/// invalid, or when output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Report(args) => run_report(args),
        Command::Map(args) => run_map(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "deliverynet",
    about = "Route metrics and maps for a small delivery network",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Report travel time, distance, fuel and deliveries for one route.
    Report(ReportArgs),
    /// Export the network, optionally with a highlighted route, as GeoJSON.
    Map(MapArgs),
}

#[cfg(test)]
mod tests;
