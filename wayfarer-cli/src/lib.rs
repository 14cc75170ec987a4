//! Command-line interface for querying Wayfarer maps.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod route;

pub use error::CliError;

use route::RouteArgs;

const ARG_MAP: &str = "map";
const ARG_FROM: &str = "from";
const ARG_TO: &str = "to";
const ARG_MAX_TOTAL: &str = "max-total";
const ARG_MAX_OUTDOOR: &str = "max-outdoor";
const ARG_STRATEGY: &str = "strategy";
const ARG_MAX_STEPS: &str = "max-steps";
const ENV_MAP: &str = "WAYFARER_CMDS_ROUTE_MAP";
const ENV_FROM: &str = "WAYFARER_CMDS_ROUTE_FROM";
const ENV_TO: &str = "WAYFARER_CMDS_ROUTE_TO";

/// Run the Wayfarer CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Route(args) => route::run_route(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "wayfarer",
    about = "Constrained shortest-path queries over walking maps",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Find the shortest route between two nodes within distance caps.
    Route(RouteArgs),
}

#[cfg(test)]
mod tests;
