//! Synthetic graph sources for benchmarking.
//!
//! Generates seeded random graphs so benchmark runs are reproducible across
//! machines and commits.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use treeline_core::{EdgeGraph, WeightedEdge};

/// Configuration for synthetic graph generation.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticConfig {
    /// Number of nodes in the generated graph.
    pub node_count: usize,
    /// Number of redundant edges layered over the spanning backbone.
    pub extra_edges: usize,
    /// RNG seed for reproducible generation.
    pub seed: u64,
}

/// Generates a connected random graph: a spanning backbone plus a layer of
/// redundant links, with weights drawn uniformly from `1.0..1000.0`.
#[must_use]
pub fn synthetic_graph(config: &SyntheticConfig) -> EdgeGraph<usize> {
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut edges =
        Vec::with_capacity(config.node_count.saturating_sub(1) + config.extra_edges);

    for node in 1..config.node_count {
        let anchor = rng.gen_range(0..node);
        edges.push(WeightedEdge::new(anchor, node, rng.gen_range(1.0..1000.0)));
    }
    for _ in 0..config.extra_edges {
        let source = rng.gen_range(0..config.node_count);
        let target = rng.gen_range(0..config.node_count);
        edges.push(WeightedEdge::new(source, target, rng.gen_range(1.0..1000.0)));
    }

    EdgeGraph::new((0..config.node_count).collect(), edges)
}
