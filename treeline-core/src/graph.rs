//! Graph input types for spanning-tree computation.
//!
//! A graph is supplied as a node set plus an ordered edge sequence. The edge
//! order is significant: equal weights are tie-broken by input position, so
//! the same edges in a different order can produce a differently ordered
//! trace.

use std::{collections::HashSet, fmt, hash::Hash, sync::Arc};

/// Identifier for a graph node.
///
/// Blanket-implemented for every type that is cloneable, hashable, totally
/// ordered, and printable. Integers and strings, the two identifier shapes
/// callers use in practice, both qualify.
pub trait NodeId: Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display {}

impl<N> NodeId for N where N: Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display {}

/// Renders a node identifier for embedding in an error.
pub(crate) fn node_label<N: NodeId>(node: &N) -> Arc<str> {
    Arc::from(node.to_string())
}

/// An undirected weighted edge.
///
/// Endpoint order is preserved exactly as supplied so traces show edges the
/// way the caller wrote them; undirected comparisons go through
/// [`Self::connects`] and [`Self::same_endpoints`].
///
/// # Examples
/// ```
/// use treeline_core::WeightedEdge;
///
/// let edge = WeightedEdge::new("a", "b", 2.5);
/// assert!(edge.connects(&"b", &"a"));
/// assert!(!edge.connects(&"a", &"c"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedEdge<N> {
    source: N,
    target: N,
    weight: f64,
}

impl<N: NodeId> WeightedEdge<N> {
    /// Creates a new edge between `source` and `target`.
    #[must_use]
    pub const fn new(source: N, target: N, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the source endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> &N { &self.source }

    /// Returns the target endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> &N { &self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }

    /// Returns `true` when this edge joins `left` and `right` in either
    /// orientation.
    #[must_use]
    pub fn connects(&self, left: &N, right: &N) -> bool {
        (self.source == *left && self.target == *right)
            || (self.source == *right && self.target == *left)
    }

    /// Returns `true` when both edges join the same pair of nodes, ignoring
    /// endpoint order.
    #[must_use]
    pub fn same_endpoints(&self, other: &Self) -> bool {
        self.connects(&other.source, &other.target)
    }
}

/// A weighted undirected graph: a node set plus an ordered edge sequence.
///
/// # Examples
/// ```
/// use treeline_core::{EdgeGraph, WeightedEdge};
///
/// let graph = EdgeGraph::from_edges(vec![
///     WeightedEdge::new("a", "b", 1.0),
///     WeightedEdge::new("b", "c", 2.0),
/// ]);
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.total_weight(), 3.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EdgeGraph<N> {
    nodes: Vec<N>,
    edges: Vec<WeightedEdge<N>>,
}

impl<N: NodeId> EdgeGraph<N> {
    /// Creates a graph from an explicit node set and edge sequence.
    ///
    /// Membership and weight validation is deferred to the engine so a graph
    /// can be assembled incrementally; [`crate::Kruskal::run`] rejects
    /// malformed inputs before touching any state.
    #[must_use]
    pub const fn new(nodes: Vec<N>, edges: Vec<WeightedEdge<N>>) -> Self {
        Self { nodes, edges }
    }

    /// Builds a graph whose node set is derived from the edge endpoints, in
    /// first-seen order.
    ///
    /// Isolated nodes cannot be expressed this way; use [`Self::new`] when
    /// the node set is wider than the endpoints.
    #[must_use]
    pub fn from_edges(edges: Vec<WeightedEdge<N>>) -> Self {
        let mut seen = HashSet::with_capacity(edges.len());
        let mut nodes = Vec::new();
        for edge in &edges {
            for endpoint in [edge.source(), edge.target()] {
                if seen.insert(endpoint.clone()) {
                    nodes.push(endpoint.clone());
                }
            }
        }
        Self { nodes, edges }
    }

    /// Returns the node set in its defining order.
    #[must_use]
    #[rustfmt::skip]
    pub fn nodes(&self) -> &[N] { &self.nodes }

    /// Returns the edge sequence in input order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[WeightedEdge<N>] { &self.edges }

    /// Returns the number of nodes.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.nodes.len() }

    /// Returns the number of edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Sum of all input edge weights: the cost of the full network before
    /// spanning-tree reduction.
    ///
    /// Presentation layers subtract a run's
    /// [`total_weight`](crate::MstRun::total_weight) from this figure to
    /// report the saving the spanning tree achieves.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.edges.iter().map(WeightedEdge::weight).sum()
    }
}
