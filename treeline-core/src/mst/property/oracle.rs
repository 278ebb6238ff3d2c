//! Prim oracle for spanning-tree property verification.
//!
//! Provides a simple, trusted reference implementation of Prim's algorithm.
//! Because it grows components node-by-node rather than sorting edges, it
//! shares no code or structure with the engine under test, which makes
//! weight agreement between the two a meaningful check.

use crate::WeightedEdge;

/// Result of the Prim reference computation.
#[derive(Clone, Debug)]
pub(super) struct OracleMst {
    /// Total weight of the spanning forest.
    pub total_weight: f64,
    /// Number of edges in the spanning forest.
    pub edge_count: usize,
    /// Number of connected components in the input graph.
    pub component_count: usize,
}

/// Computes a minimum spanning forest with Prim's algorithm.
///
/// Runs one Prim pass per component: pick an unvisited start node, then
/// repeatedly absorb the cheapest edge crossing the visited frontier. The
/// scan is quadratic in the node count, which is fine at property-test
/// scale.
pub(super) fn prim_reference(node_count: usize, edges: &[WeightedEdge<usize>]) -> OracleMst {
    let mut adjacency: Vec<Vec<(usize, f64)>> = vec![Vec::new(); node_count];
    for edge in edges {
        let (source, target) = (*edge.source(), *edge.target());
        if source == target {
            continue;
        }
        adjacency[source].push((target, edge.weight()));
        adjacency[target].push((source, edge.weight()));
    }

    let mut visited = vec![false; node_count];
    let mut result = OracleMst {
        total_weight: 0.0,
        edge_count: 0,
        component_count: 0,
    };

    for start in 0..node_count {
        if visited[start] {
            continue;
        }
        result.component_count += 1;
        visited[start] = true;

        let mut best: Vec<Option<f64>> = vec![None; node_count];
        relax(&adjacency, start, &visited, &mut best);

        while let Some((next, weight)) = cheapest(&best, &visited) {
            visited[next] = true;
            best[next] = None;
            result.total_weight += weight;
            result.edge_count += 1;
            relax(&adjacency, next, &visited, &mut best);
        }
    }

    result
}

/// Offers `from`'s incident edges to the unvisited frontier.
fn relax(
    adjacency: &[Vec<(usize, f64)>],
    from: usize,
    visited: &[bool],
    best: &mut [Option<f64>],
) {
    for &(to, weight) in &adjacency[from] {
        if visited[to] {
            continue;
        }
        if best[to].map_or(true, |current| weight < current) {
            best[to] = Some(weight);
        }
    }
}

/// Picks the unvisited node with the cheapest frontier edge, breaking weight
/// ties by smaller index.
fn cheapest(best: &[Option<f64>], visited: &[bool]) -> Option<(usize, f64)> {
    let mut choice: Option<(usize, f64)> = None;
    for (node, entry) in best.iter().enumerate() {
        let Some(weight) = *entry else { continue };
        if visited[node] {
            continue;
        }
        if choice.map_or(true, |(_, current)| weight < current) {
            choice = Some((node, weight));
        }
    }
    choice
}
