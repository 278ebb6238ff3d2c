//! Strategy builders for the spanning-tree property tests.
//!
//! Provides graph generators that produce varied weight distributions and
//! topologies designed to stress the sorted pass and the tie-break rule.
//! Each generator builds a list of [`WeightedEdge`] values whose input order
//! is itself part of the fixture.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::WeightedEdge;

use super::types::{MstFixture, WeightDistribution};

/// Minimum node count for most generated graphs.
const MIN_NODES: usize = 4;
/// Maximum node count for most generated graphs.
const MAX_NODES: usize = 48;
/// Maximum node count for dense graphs (kept smaller to avoid quadratic
/// edge explosion).
const DENSE_MAX_NODES: usize = 24;

/// Generates fixtures covering all five weight distributions.
///
/// Biases towards `ManyIdentical` (the most important stress case for the
/// input-order tie-break).
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (weight_distribution_strategy(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

fn weight_distribution_strategy() -> impl Strategy<Value = WeightDistribution> {
    prop_oneof![
        2 => Just(WeightDistribution::ManyIdentical),
        1 => Just(WeightDistribution::Unique),
        1 => Just(WeightDistribution::Sparse),
        1 => Just(WeightDistribution::Dense),
        1 => Just(WeightDistribution::Disconnected),
    ]
}

/// Generates a fixture for a specific weight distribution.
///
/// Useful for targeted rstest cases where the distribution is chosen
/// explicitly rather than sampled by proptest.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    match distribution {
        WeightDistribution::Unique => generate_unique_weights(rng),
        WeightDistribution::ManyIdentical => generate_identical_weights(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => generate_dense(rng),
        WeightDistribution::Disconnected => generate_disconnected(rng),
    }
}

fn generate_unique_weights(rng: &mut SmallRng) -> MstFixture {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut edges = Vec::new();
    for source in 0..node_count {
        for target in (source + 1)..node_count {
            if rng.gen_bool(0.4) {
                // A strictly increasing offset keeps every weight distinct
                // regardless of what the RNG produces.
                let jitter: f64 = rng.gen_range(0.0..0.4);
                let weight = (edges.len() as f64) + jitter;
                edges.push(WeightedEdge::new(source, target, weight));
            }
        }
    }
    MstFixture {
        node_count,
        edges,
        distribution: WeightDistribution::Unique,
    }
}

fn generate_identical_weights(rng: &mut SmallRng) -> MstFixture {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let palette = [1.0, 2.0, 3.0];
    let mut edges = Vec::new();
    for source in 0..node_count {
        for target in (source + 1)..node_count {
            if rng.gen_bool(0.5) {
                let weight = palette[rng.gen_range(0..palette.len())];
                edges.push(WeightedEdge::new(source, target, weight));
            }
        }
    }
    MstFixture {
        node_count,
        edges,
        distribution: WeightDistribution::ManyIdentical,
    }
}

fn generate_sparse(rng: &mut SmallRng) -> MstFixture {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut edges = Vec::new();
    // Random backbone keeps most of the graph reachable without making the
    // topology trivially a path.
    for node in 1..node_count {
        let anchor = rng.gen_range(0..node);
        edges.push(WeightedEdge::new(anchor, node, rng.gen_range(0.0..100.0)));
    }
    let extras = node_count / 2;
    for _ in 0..extras {
        let source = rng.gen_range(0..node_count);
        let target = rng.gen_range(0..node_count);
        edges.push(WeightedEdge::new(source, target, rng.gen_range(0.0..100.0)));
    }
    MstFixture {
        node_count,
        edges,
        distribution: WeightDistribution::Sparse,
    }
}

fn generate_dense(rng: &mut SmallRng) -> MstFixture {
    let node_count = rng.gen_range(MIN_NODES..=DENSE_MAX_NODES);
    let edge_probability = rng.gen_range(0.7..0.95);
    let mut edges = Vec::new();
    for source in 0..node_count {
        for target in (source + 1)..node_count {
            if rng.gen_bool(edge_probability) {
                edges.push(WeightedEdge::new(source, target, rng.gen_range(0.0..100.0)));
            }
        }
    }
    MstFixture {
        node_count,
        edges,
        distribution: WeightDistribution::Dense,
    }
}

fn generate_disconnected(rng: &mut SmallRng) -> MstFixture {
    let block_count = rng.gen_range(2..=4);
    let block_size = rng.gen_range(3..=8);
    let node_count = block_count * block_size;
    let mut edges = Vec::new();
    for block in 0..block_count {
        let base = block * block_size;
        for offset in 1..block_size {
            let anchor = base + rng.gen_range(0..offset);
            edges.push(WeightedEdge::new(
                anchor,
                base + offset,
                rng.gen_range(0.0..100.0),
            ));
        }
    }
    MstFixture {
        node_count,
        edges,
        distribution: WeightDistribution::Disconnected,
    }
}
