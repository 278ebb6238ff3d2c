//! Engine orchestration for traced spanning-tree runs.
//!
//! Provides the [`Kruskal`] entry point, which validates inputs, spans a
//! tracing scope around the computation, and delegates the sorted pass to the
//! [`crate::mst`] module.

use tracing::{info, instrument, warn};

use crate::{
    builder::TraceMode,
    error::{MstError, Result},
    graph::{EdgeGraph, NodeId},
    mst::{self, MstRun},
};

/// Entry point for computing spanning trees with a decision trace.
///
/// Each [`run`](Self::run) is independent: a fresh disjoint-set is built per
/// invocation and no state is retained between calls, so one engine can serve
/// any number of graphs (or threads, each with its own graph).
///
/// # Examples
/// ```
/// use treeline_core::{EdgeGraph, KruskalBuilder, WeightedEdge};
///
/// let graph = EdgeGraph::from_edges(vec![
///     WeightedEdge::new("a", "b", 1.0),
///     WeightedEdge::new("b", "c", 2.0),
///     WeightedEdge::new("a", "c", 3.0),
/// ]);
/// let run = KruskalBuilder::new().build().run(&graph)?;
/// assert!(run.is_tree());
/// assert_eq!(run.total_weight(), 3.0);
/// assert_eq!(run.trace().len(), 3);
/// # Ok::<(), treeline_core::MstError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Kruskal {
    trace_mode: TraceMode,
}

impl Kruskal {
    pub(crate) const fn new(trace_mode: TraceMode) -> Self {
        Self { trace_mode }
    }

    /// Returns the trace mode this engine runs with.
    ///
    /// # Examples
    /// ```
    /// use treeline_core::{KruskalBuilder, TraceMode};
    ///
    /// let engine = KruskalBuilder::new().build();
    /// assert_eq!(engine.trace_mode(), TraceMode::Exhaustive);
    /// ```
    #[must_use]
    pub const fn trace_mode(&self) -> TraceMode {
        self.trace_mode
    }

    /// Computes the minimum spanning forest of `graph` along with the
    /// ordered decision trace.
    ///
    /// Edges are processed in ascending weight order, ties broken by input
    /// position. When the input is connected the result is a minimum
    /// spanning tree with exactly `node_count − 1` edges; disconnected
    /// inputs yield one tree per component.
    ///
    /// # Errors
    /// Returns [`MstError::EmptyNodeSet`] when the graph has no nodes,
    /// [`MstError::DuplicateNode`] when the node sequence repeats an
    /// identifier, [`MstError::UnknownEndpoint`] when an edge references a
    /// node outside the set, and [`MstError::NonFiniteWeight`] when a weight
    /// is NaN or infinite. Validation completes before any state is built,
    /// so errors never leave partial results.
    #[instrument(
        name = "kruskal.run",
        err,
        skip(self, graph),
        fields(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            mode = ?self.trace_mode,
        ),
    )]
    pub fn run<N: NodeId>(&self, graph: &EdgeGraph<N>) -> Result<MstRun<N>> {
        if graph.node_count() == 0 {
            warn!("graph has no nodes, returning error");
            return Err(MstError::EmptyNodeSet);
        }

        let run = mst::spanning_run(graph, self.trace_mode)?;
        info!(
            accepted = run.edges().len(),
            total_weight = run.total_weight(),
            components = run.component_count(),
            steps = run.trace().len(),
            "spanning run completed"
        );
        Ok(run)
    }
}
