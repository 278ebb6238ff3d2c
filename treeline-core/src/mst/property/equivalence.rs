//! Oracle equivalence property for the traced Kruskal engine.
//!
//! The engine and the Prim oracle must agree on forest size, component
//! count, and (up to summation order) total weight for every generated
//! input.

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

use crate::KruskalBuilder;

use super::oracle::prim_reference;
use super::types::MstFixture;

/// Relative tolerance for total-weight comparison; the two algorithms sum
/// the same weights in different orders.
const WEIGHT_TOLERANCE: f64 = 1e-9;

pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> Result<(), TestCaseError> {
    let graph = fixture.graph();
    let run = KruskalBuilder::new()
        .build()
        .run(&graph)
        .map_err(|err| TestCaseError::fail(err.to_string()))?;
    let oracle = prim_reference(fixture.node_count, &fixture.edges);

    prop_assert_eq!(
        run.edges().len(),
        oracle.edge_count,
        "forest size diverged from oracle ({:?})",
        fixture.distribution
    );
    prop_assert_eq!(
        run.component_count(),
        oracle.component_count,
        "component count diverged from oracle ({:?})",
        fixture.distribution
    );

    let difference = (run.total_weight() - oracle.total_weight).abs();
    let scale = run.total_weight().abs().max(1.0);
    prop_assert!(
        difference <= scale * WEIGHT_TOLERANCE,
        "total weight diverged from oracle: engine={}, oracle={}",
        run.total_weight(),
        oracle.total_weight
    );

    Ok(())
}
