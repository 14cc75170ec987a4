//! Route command implementation for the Wayfarer CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use wayfarer_core::{Budget, NodeId, SearchStrategy, SolveRequest, SolveResponse, Solver};
use wayfarer_data::load_edge_list;
use wayfarer_search::{DepthFirstSolver, SearchConfig};

use crate::{
    ARG_FROM, ARG_MAP, ARG_MAX_OUTDOOR, ARG_MAX_STEPS, ARG_MAX_TOTAL, ARG_STRATEGY, ARG_TO,
    CliError, ENV_FROM, ENV_MAP, ENV_TO,
};

/// CLI arguments for the `route` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Load an edge-list map and print the shortest route between \
                 two nodes whose total and outdoor distances stay within the \
                 given caps. Omitted caps are unbounded. Options can come from \
                 CLI flags, configuration files, or environment variables.",
    about = "Find a constrained shortest route"
)]
#[ortho_config(prefix = "WAYFARER")]
pub(crate) struct RouteArgs {
    /// Path to the edge-list map file.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) map: Option<Utf8PathBuf>,
    /// Node the route starts from.
    #[arg(long = ARG_FROM, value_name = "node")]
    #[serde(default)]
    pub(crate) from: Option<String>,
    /// Node the route ends at.
    #[arg(long = ARG_TO, value_name = "node")]
    #[serde(default)]
    pub(crate) to: Option<String>,
    /// Largest admissible total distance.
    #[arg(long = ARG_MAX_TOTAL, value_name = "distance", value_parser = parse_cap)]
    #[serde(default)]
    pub(crate) max_total: Option<f64>,
    /// Largest admissible outdoor distance.
    #[arg(long = ARG_MAX_OUTDOOR, value_name = "distance", value_parser = parse_cap)]
    #[serde(default)]
    pub(crate) max_outdoor: Option<f64>,
    /// Traversal strategy: exhaustive, pruned or cost-bounded.
    #[arg(long = ARG_STRATEGY, value_name = "name")]
    #[serde(default)]
    pub(crate) strategy: Option<SearchStrategy>,
    /// Abort the search after entering this many nodes.
    #[arg(long = ARG_MAX_STEPS, value_name = "count")]
    #[serde(default)]
    pub(crate) max_steps: Option<u64>,
}

impl RouteArgs {
    pub(crate) fn into_config(self) -> Result<RouteConfig, CliError> {
        // Merging round-trips through JSON, which turns NaN into null.
        self.check_caps()?;
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        merged.check_caps()?;
        RouteConfig::try_from(merged)
    }

    fn check_caps(&self) -> Result<(), CliError> {
        for (field, cap) in [
            (ARG_MAX_TOTAL, self.max_total),
            (ARG_MAX_OUTDOOR, self.max_outdoor),
        ] {
            if let Some(value) = cap
                && !is_valid_cap(value)
            {
                return Err(CliError::InvalidCap { field, value });
            }
        }
        Ok(())
    }
}

fn is_valid_cap(value: f64) -> bool {
    !value.is_nan() && value >= 0.0
}

/// Parse a distance cap, accepting `inf` but rejecting NaN and negatives.
fn parse_cap(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .parse()
        .map_err(|err| format!("'{raw}' is not a distance: {err}"))?;
    if is_valid_cap(value) {
        Ok(value)
    } else {
        Err(format!("'{raw}' must be a non-negative distance"))
    }
}

/// Resolved `route` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RouteConfig {
    /// Path to the map file.
    pub(crate) map: Utf8PathBuf,
    /// Query parameters for the solver.
    pub(crate) request: SolveRequest,
    /// Search limits.
    pub(crate) search: SearchConfig,
}

impl RouteConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.map, ARG_MAP)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match wayfarer_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<RouteArgs> for RouteConfig {
    type Error = CliError;

    fn try_from(args: RouteArgs) -> Result<Self, Self::Error> {
        let map = args.map.ok_or(CliError::MissingArgument {
            field: ARG_MAP,
            env: ENV_MAP,
        })?;
        let from = args.from.ok_or(CliError::MissingArgument {
            field: ARG_FROM,
            env: ENV_FROM,
        })?;
        let to = args.to.ok_or(CliError::MissingArgument {
            field: ARG_TO,
            env: ENV_TO,
        })?;

        let unbounded = Budget::unbounded();
        let budget = Budget::new(
            args.max_total.unwrap_or(unbounded.max_total_distance),
            args.max_outdoor.unwrap_or(unbounded.max_outdoor_distance),
        );
        let request = SolveRequest::new(NodeId::from(from), NodeId::from(to), budget)
            .with_strategy(args.strategy.unwrap_or_default());

        Ok(Self {
            map,
            request,
            search: SearchConfig {
                max_steps: args.max_steps,
            },
        })
    }
}

pub(super) fn run_route(args: RouteArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_route_with(args, &mut stdout)
}

pub(super) fn run_route_with(args: RouteArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_route_config(args)?;
    let response = execute_route(&config)?;
    write_route_response(writer, &response)
}

fn resolve_route_config(args: RouteArgs) -> Result<RouteConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

pub(super) fn execute_route(config: &RouteConfig) -> Result<SolveResponse, CliError> {
    let (graph, summary) = load_edge_list(&config.map)?;
    log::info!(
        "loaded {} nodes and {} edges from {} ({} lines skipped)",
        graph.node_count(),
        graph.edge_count(),
        config.map,
        summary.skipped
    );
    let solver = DepthFirstSolver::with_config(graph, config.search);
    solver
        .solve(&config.request)
        .map_err(|source| CliError::Solve { source })
}

fn write_route_response(writer: &mut dyn Write, response: &SolveResponse) -> Result<(), CliError> {
    let payload =
        serde_json::to_string_pretty(response).map_err(CliError::SerialiseRouteResponse)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteRouteOutput)?;
    writer
        .write_all(b"\n")
        .map_err(CliError::WriteRouteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RouteConfig, CliError> {
    let merged = RouteArgs::merge_from_layers(layers).map_err(CliError::from)?;
    merged.check_caps()?;
    RouteConfig::try_from(merged)
}
