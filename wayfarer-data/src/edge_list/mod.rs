//! Edge-list map format.
//!
//! Each record is `source destination total_distance outdoor_distance`,
//! separated by whitespace:
//!
//! ```text
//! # building map
//! 32 76 54 23
//! 76 68 40 0
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. Nodes are registered
//! on first mention, in file order.

use std::io::BufRead;
use std::num::ParseFloatError;

use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, info, warn};
use thiserror::Error;
use wayfarer_core::{GraphError, WeightedDigraph};

/// Errors returned when loading an edge-list map.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The map file could not be opened.
    #[error("failed to open map file at {path}")]
    Open {
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
        /// Path that failed to open.
        path: Utf8PathBuf,
    },
    /// Reading a line failed part way through the input.
    #[error("failed to read line {line}")]
    Read {
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
        /// One-based line number.
        line: usize,
    },
    /// A record did not have exactly four fields.
    #[error("line {line}: expected 4 fields, found {found}")]
    MalformedLine {
        /// One-based line number.
        line: usize,
        /// Number of whitespace-separated fields present.
        found: usize,
    },
    /// A distance field was not a number.
    #[error("line {line}: {field} '{value}' is not a number")]
    InvalidNumber {
        /// Underlying parse error.
        #[source]
        source: ParseFloatError,
        /// One-based line number.
        line: usize,
        /// Name of the offending field.
        field: &'static str,
        /// Raw text of the field.
        value: String,
    },
    /// The graph rejected the record, for example a repeated edge or a
    /// negative distance.
    #[error("line {line}: {source}")]
    Graph {
        /// Error raised by the graph store.
        #[source]
        source: GraphError,
        /// One-based line number.
        line: usize,
    },
}

/// Counts gathered while loading a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MapSummary {
    /// Lines read, including skipped ones.
    pub lines: usize,
    /// Blank and comment lines skipped.
    pub skipped: usize,
    /// Edge records added to the graph.
    pub edges: usize,
}

/// Parse an edge list from any buffered reader.
///
/// # Examples
/// ```
/// use wayfarer_data::parse_edge_list;
///
/// let input = "# campus\na b 15 10\na c 14 6\n\nb c 3 1\n";
/// let (graph, summary) = parse_edge_list(input.as_bytes())?;
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(summary.edges, 3);
/// assert_eq!(summary.skipped, 2);
/// # Ok::<(), wayfarer_data::LoadError>(())
/// ```
pub fn parse_edge_list<R: BufRead>(reader: R) -> Result<(WeightedDigraph, MapSummary), LoadError> {
    let mut graph = WeightedDigraph::new();
    let mut summary = MapSummary::default();
    for (position, line) in reader.lines().enumerate() {
        let number = position.saturating_add(1);
        let text = line.map_err(|source| LoadError::Read {
            source,
            line: number,
        })?;
        summary.lines = number;
        let record = text.trim();
        if record.is_empty() || record.starts_with('#') {
            summary.skipped = summary.skipped.saturating_add(1);
            continue;
        }
        add_record(&mut graph, record, number)?;
        summary.edges = summary.edges.saturating_add(1);
    }
    debug!(
        "parsed {} nodes and {} edges from {} lines",
        graph.node_count(),
        graph.edge_count(),
        summary.lines
    );
    Ok((graph, summary))
}

/// Load an edge-list map from `path`.
///
/// # Examples
/// ```no_run
/// use camino::Utf8Path;
/// use wayfarer_data::load_edge_list;
///
/// # fn main() -> Result<(), wayfarer_data::LoadError> {
/// let (graph, _) = load_edge_list(Utf8Path::new("campus.map"))?;
/// println!("Loaded {} buildings", graph.node_count());
/// # Ok(())
/// # }
/// ```
pub fn load_edge_list(path: &Utf8Path) -> Result<(WeightedDigraph, MapSummary), LoadError> {
    info!("loading map from {path}");
    let reader = wayfarer_fs::open_buffered(path).map_err(|source| LoadError::Open {
        source,
        path: path.to_path_buf(),
    })?;
    let (graph, summary) = parse_edge_list(reader)?;
    if summary.edges == 0 {
        warn!("map {path} contains no edges");
    }
    Ok((graph, summary))
}

fn add_record(graph: &mut WeightedDigraph, record: &str, line: usize) -> Result<(), LoadError> {
    let fields: Vec<&str> = record.split_whitespace().collect();
    let [source, destination, total, outdoor] = fields.as_slice() else {
        return Err(LoadError::MalformedLine {
            line,
            found: fields.len(),
        });
    };
    let total_distance = parse_distance(total, "total distance", line)?;
    let outdoor_distance = parse_distance(outdoor, "outdoor distance", line)?;
    graph.ensure_node(source);
    graph.ensure_node(destination);
    graph
        .add_weighted_edge(source, destination, total_distance, outdoor_distance)
        .map_err(|source_err| LoadError::Graph {
            source: source_err,
            line,
        })
}

fn parse_distance(raw: &str, field: &'static str, line: usize) -> Result<f64, LoadError> {
    raw.parse().map_err(|source| LoadError::InvalidNumber {
        source,
        line,
        field,
        value: raw.to_owned(),
    })
}

#[cfg(test)]
mod tests;
