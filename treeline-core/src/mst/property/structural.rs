//! Structural and trace invariants for the traced Kruskal engine.
//!
//! Checks that the accepted edges form a forest of the advertised size and
//! that the trace is complete, sequentially numbered, weight-ordered, and
//! consistent with the forest.

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

use crate::{DisjointSet, KruskalBuilder, MstRun};

use super::types::MstFixture;

pub(super) fn run_structural_invariants_property(
    fixture: &MstFixture,
) -> Result<(), TestCaseError> {
    let graph = fixture.graph();
    let run = KruskalBuilder::new()
        .build()
        .run(&graph)
        .map_err(|err| TestCaseError::fail(err.to_string()))?;

    check_forest_shape(fixture, &run)?;
    check_trace_consistency(fixture, &run)?;
    Ok(())
}

/// Replays the forest edges through a fresh disjoint-set: every edge must
/// merge two components (acyclicity) and the final component count must
/// match the run's.
fn check_forest_shape(fixture: &MstFixture, run: &MstRun<usize>) -> Result<(), TestCaseError> {
    prop_assert_eq!(
        run.edges().len(),
        fixture.node_count - run.component_count(),
        "forest size must be node count minus component count"
    );

    let nodes: Vec<usize> = (0..fixture.node_count).collect();
    let mut sets =
        DisjointSet::new(&nodes).map_err(|err| TestCaseError::fail(err.to_string()))?;
    for edge in run.edges() {
        let merged = sets
            .union(edge.source(), edge.target())
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert!(merged, "accepted edge closed a cycle: {:?}", edge);
    }
    prop_assert_eq!(sets.components(), run.component_count());
    Ok(())
}

/// Walks the trace once, asserting completeness, sequential steps,
/// non-decreasing weights, a faithful running count, and acceptance
/// consistency against the forest edges.
fn check_trace_consistency(fixture: &MstFixture, run: &MstRun<usize>) -> Result<(), TestCaseError> {
    prop_assert_eq!(
        run.trace().len(),
        fixture.edges.len(),
        "exhaustive trace must cover every input edge"
    );

    let mut forest_edges = run.edges().iter();
    let mut running_count = 0;
    let mut last_weight = f64::NEG_INFINITY;

    for (index, event) in run.trace().iter().enumerate() {
        prop_assert_eq!(event.step(), index + 1, "steps must be sequential from 1");
        prop_assert!(
            event.weight() >= last_weight,
            "trace weights must be non-decreasing"
        );
        last_weight = event.weight();

        if event.accepted() {
            running_count += 1;
            let forest_edge = forest_edges
                .next()
                .ok_or_else(|| TestCaseError::fail("more accepted events than forest edges"))?;
            prop_assert!(
                forest_edge.same_endpoints(event.edge()),
                "accepted events must match forest edges in order"
            );
        }
        prop_assert_eq!(
            event.mst_edge_count(),
            running_count,
            "running count must reflect decisions so far"
        );
    }

    prop_assert!(
        forest_edges.next().is_none(),
        "every forest edge must appear as an accepted event"
    );
    Ok(())
}
