//! Type definitions for the spanning-tree property tests.
//!
//! Provides the fixture and weight-distribution types used by the graph
//! generation strategies and property runners.

use crate::{EdgeGraph, WeightedEdge};

/// Weight distribution strategy for generated graphs.
///
/// Controls how edge weights are assigned during graph generation, producing
/// inputs that stress different aspects of the engine.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Each edge has a unique weight.
    Unique,
    /// Large groups of edges share identical weights, stressing the
    /// input-order tie-break.
    ManyIdentical,
    /// Sparse graph with roughly `1.5n` edges.
    Sparse,
    /// Dense graph approaching a complete graph (edge probability 0.7-0.95).
    Dense,
    /// Multiple disconnected components with no cross-component edges.
    Disconnected,
}

/// Fixture for spanning-tree property tests.
///
/// Captures the node count, generated edges, and the weight distribution
/// used during generation, providing full context for failure diagnosis.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of nodes in the graph.
    pub node_count: usize,
    /// Generated weighted edges in input order.
    pub edges: Vec<WeightedEdge<usize>>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Materialises the fixture as an engine input graph.
    pub(super) fn graph(&self) -> EdgeGraph<usize> {
        EdgeGraph::new((0..self.node_count).collect(), self.edges.clone())
    }
}
