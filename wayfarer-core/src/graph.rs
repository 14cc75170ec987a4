//! Directed graph store with per-node adjacency lists.
//!
//! Nodes are kept in insertion order and addressed either by label or by a
//! dense [`NodeIndex`]. Each node owns an ordered list of outgoing edges, and
//! every `(source, destination)` pair is indexed for constant-time lookup.
//! The store is generic over the edge payload; [`WeightedDigraph`] fixes the
//! payload to [`EdgeWeights`].

use std::collections::HashMap;
use std::fmt;

use crate::{GraphError, NodeId};

/// Dense position of a node in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(usize);

impl NodeIndex {
    /// Return the position as a `usize`, suitable for indexing side tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Outgoing edge as stored in a node's adjacency list.
#[derive(Debug, Clone, PartialEq)]
pub struct OutEdge<W> {
    /// Head of the edge.
    pub target: NodeIndex,
    /// Data carried by the edge.
    pub payload: W,
}

/// Borrowed view of an edge with both endpoints resolved to labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<'a, W> {
    /// Tail of the edge.
    pub source: &'a NodeId,
    /// Head of the edge.
    pub destination: &'a NodeId,
    /// Data carried by the edge.
    pub payload: &'a W,
}

/// Distances accumulated when walking a single edge.
///
/// Both components are finite and non-negative. The search relies on this to
/// treat partial path costs as monotone.
///
/// # Examples
/// ```
/// use wayfarer_core::EdgeWeights;
///
/// let weights = EdgeWeights::new(15.0, 10.0)?;
/// assert_eq!(weights.total_distance(), 15.0);
/// assert!(EdgeWeights::new(-1.0, 0.0).is_err());
/// # Ok::<(), wayfarer_core::GraphError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawWeights")
)]
pub struct EdgeWeights {
    total_distance: f64,
    outdoor_distance: f64,
}

/// Unchecked wire form of [`EdgeWeights`]; decoding goes through
/// [`EdgeWeights::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawWeights {
    total_distance: f64,
    outdoor_distance: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawWeights> for EdgeWeights {
    type Error = GraphError;

    fn try_from(raw: RawWeights) -> Result<Self, Self::Error> {
        Self::new(raw.total_distance, raw.outdoor_distance)
    }
}

impl EdgeWeights {
    /// Validate and construct edge weights.
    pub fn new(total_distance: f64, outdoor_distance: f64) -> Result<Self, GraphError> {
        let valid = |value: f64| value.is_finite() && value >= 0.0;
        if valid(total_distance) && valid(outdoor_distance) {
            Ok(Self {
                total_distance,
                outdoor_distance,
            })
        } else {
            Err(GraphError::InvalidWeight {
                total_distance,
                outdoor_distance,
            })
        }
    }

    /// Distance covered by the edge.
    #[must_use]
    pub const fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Portion of the distance spent outdoors.
    #[must_use]
    pub const fn outdoor_distance(&self) -> f64 {
        self.outdoor_distance
    }
}

impl fmt::Display for EdgeWeights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.total_distance, self.outdoor_distance)
    }
}

/// A directed graph whose edges carry a payload of type `W`.
///
/// # Examples
/// ```
/// use wayfarer_core::{Digraph, GraphError};
///
/// let mut graph: Digraph<u32> = Digraph::new();
/// graph.add_node("a")?;
/// graph.add_node("b")?;
/// graph.add_edge("a", "b", 7)?;
/// assert_eq!(graph.edge("a", "b")?, &7);
/// assert_eq!(graph.children_of("a")?, ["b"]);
/// # Ok::<(), GraphError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Digraph<W> {
    nodes: Vec<NodeId>,
    index: HashMap<NodeId, NodeIndex>,
    outgoing: Vec<Vec<OutEdge<W>>>,
    edge_index: HashMap<(NodeIndex, NodeIndex), usize>,
}

/// Graph whose edges carry total and outdoor distances.
pub type WeightedDigraph = Digraph<EdgeWeights>;

impl<W> Default for Digraph<W> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            outgoing: Vec::new(),
            edge_index: HashMap::new(),
        }
    }
}

impl<W> Digraph<W> {
    /// Construct an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for a known number of nodes.
    #[must_use]
    pub fn with_capacity(node_count: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(node_count),
            index: HashMap::with_capacity(node_count),
            outgoing: Vec::with_capacity(node_count),
            edge_index: HashMap::new(),
        }
    }

    /// Register a node with an empty outgoing edge list.
    ///
    /// Fails with [`GraphError::DuplicateNode`] if the label is taken.
    pub fn add_node(&mut self, id: impl Into<NodeId>) -> Result<NodeIndex, GraphError> {
        let node_id = id.into();
        if self.index.contains_key(&node_id) {
            return Err(GraphError::DuplicateNode { id: node_id });
        }
        Ok(self.insert_node(node_id))
    }

    /// Return the index for `id`, registering the node on first mention.
    pub fn ensure_node(&mut self, id: &str) -> NodeIndex {
        match self.index.get(id) {
            Some(&position) => position,
            None => self.insert_node(NodeId::from(id)),
        }
    }

    fn insert_node(&mut self, node_id: NodeId) -> NodeIndex {
        let position = NodeIndex(self.nodes.len());
        self.index.insert(node_id.clone(), position);
        self.nodes.push(node_id);
        self.outgoing.push(Vec::new());
        position
    }

    /// Add a directed edge between two registered nodes.
    ///
    /// Both endpoints must exist. A second edge for the same ordered pair is
    /// rejected with [`GraphError::DuplicateEdge`]. On error the graph is left
    /// untouched.
    pub fn add_edge(&mut self, source: &str, destination: &str, payload: W) -> Result<(), GraphError> {
        let from = self.index_of(source)?;
        let to = self.index_of(destination)?;
        if self.edge_index.contains_key(&(from, to)) {
            return Err(GraphError::DuplicateEdge {
                source_id: NodeId::from(source),
                destination: NodeId::from(destination),
            });
        }
        let Some(edges) = self.outgoing.get_mut(from.0) else {
            return Err(GraphError::unknown(source));
        };
        self.edge_index.insert((from, to), edges.len());
        edges.push(OutEdge { target: to, payload });
        Ok(())
    }

    /// Whether a node with this label exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Look up the stored identifier for a label.
    pub fn node(&self, id: &str) -> Result<&NodeId, GraphError> {
        self.index
            .get_key_value(id)
            .map(|(node_id, _)| node_id)
            .ok_or_else(|| GraphError::unknown(id))
    }

    /// Resolve a label to its dense index.
    pub fn index_of(&self, id: &str) -> Result<NodeIndex, GraphError> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::unknown(id))
    }

    /// Resolve a dense index back to its label.
    #[must_use]
    pub fn node_id(&self, position: NodeIndex) -> Option<&NodeId> {
        self.nodes.get(position.0)
    }

    /// Destinations reachable over one outgoing edge, in insertion order.
    pub fn children_of(&self, id: &str) -> Result<Vec<&NodeId>, GraphError> {
        let position = self.index_of(id)?;
        Ok(self
            .out_edges(position)
            .iter()
            .filter_map(|edge| self.node_id(edge.target))
            .collect())
    }

    /// Whether the node has at least one outgoing edge.
    pub fn has_children(&self, id: &str) -> Result<bool, GraphError> {
        let position = self.index_of(id)?;
        Ok(!self.out_edges(position).is_empty())
    }

    /// Outgoing edges of a node; empty for an index outside the graph.
    #[must_use]
    pub fn out_edges(&self, position: NodeIndex) -> &[OutEdge<W>] {
        self.outgoing.get(position.0).map_or(&[], Vec::as_slice)
    }

    /// Payload of the edge `from -> to`, if present.
    #[must_use]
    pub fn edge_between(&self, from: NodeIndex, to: NodeIndex) -> Option<&W> {
        let position = *self.edge_index.get(&(from, to))?;
        self.outgoing
            .get(from.0)?
            .get(position)
            .map(|edge| &edge.payload)
    }

    /// Payload of the edge `source -> destination`.
    ///
    /// Fails with [`GraphError::UnknownNode`] for an unregistered label and
    /// [`GraphError::NoSuchEdge`] when the nodes are not adjacent.
    pub fn edge(&self, source: &str, destination: &str) -> Result<&W, GraphError> {
        let from = self.index_of(source)?;
        let to = self.index_of(destination)?;
        self.edge_between(from, to).ok_or_else(|| {
            GraphError::no_edge(&NodeId::from(source), &NodeId::from(destination))
        })
    }

    /// Number of registered nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges across all adjacency lists.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_index.len()
    }

    /// Node labels in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.iter()
    }

    /// Every edge, grouped by source in node insertion order.
    pub fn edges(&self) -> impl Iterator<Item = Edge<'_, W>> {
        self.nodes
            .iter()
            .zip(&self.outgoing)
            .flat_map(move |(source, out)| {
                out.iter().filter_map(move |edge| {
                    let destination = self.node_id(edge.target)?;
                    Some(Edge {
                        source,
                        destination,
                        payload: &edge.payload,
                    })
                })
            })
    }
}

impl Digraph<EdgeWeights> {
    /// Validate the weights and add the edge `source -> destination`.
    ///
    /// # Examples
    /// ```
    /// use wayfarer_core::WeightedDigraph;
    ///
    /// let mut graph = WeightedDigraph::new();
    /// graph.add_node("a")?;
    /// graph.add_node("b")?;
    /// graph.add_weighted_edge("a", "b", 15.0, 10.0)?;
    /// assert_eq!(graph.edge_weights("a", "b")?.outdoor_distance(), 10.0);
    /// # Ok::<(), wayfarer_core::GraphError>(())
    /// ```
    pub fn add_weighted_edge(
        &mut self,
        source: &str,
        destination: &str,
        total_distance: f64,
        outdoor_distance: f64,
    ) -> Result<(), GraphError> {
        let weights = EdgeWeights::new(total_distance, outdoor_distance)?;
        self.add_edge(source, destination, weights)
    }
}

impl<W: fmt::Display> fmt::Display for Digraph<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, edge) in self.edges().enumerate() {
            if position > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}->{} {}", edge.source, edge.destination, edge.payload)?;
        }
        Ok(())
    }
}
