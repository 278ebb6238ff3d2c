//! Decision-trace types emitted during spanning-tree construction.
//!
//! The trace is the replay surface for presentation layers: one immutable
//! event per considered edge, in the exact order the engine processed them.
//! Consumers that want faithful construction semantics must neither reorder
//! nor skip events.

use crate::graph::{NodeId, WeightedEdge};

/// One accept/reject decision for a single candidate edge.
///
/// # Examples
/// ```
/// use treeline_core::{EdgeGraph, KruskalBuilder, WeightedEdge};
///
/// let graph = EdgeGraph::from_edges(vec![WeightedEdge::new("a", "b", 1.0)]);
/// let run = KruskalBuilder::new().build().run(&graph)?;
/// let event = run.trace().iter().next().expect("one event per edge");
/// assert_eq!(event.step(), 1);
/// assert!(event.accepted());
/// assert_eq!(event.mst_edge_count(), 1);
/// # Ok::<(), treeline_core::MstError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TraceEvent<N> {
    step: usize,
    edge: WeightedEdge<N>,
    accepted: bool,
    mst_edge_count: usize,
}

impl<N: NodeId> TraceEvent<N> {
    pub(crate) const fn new(
        step: usize,
        edge: WeightedEdge<N>,
        accepted: bool,
        mst_edge_count: usize,
    ) -> Self {
        Self {
            step,
            edge,
            accepted,
            mst_edge_count,
        }
    }

    /// Returns the 1-based step number of this decision.
    #[must_use]
    #[rustfmt::skip]
    pub const fn step(&self) -> usize { self.step }

    /// Returns the edge examined at this step, endpoints as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge(&self) -> &WeightedEdge<N> { &self.edge }

    /// Returns the examined edge's source endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> &N { self.edge.source() }

    /// Returns the examined edge's target endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> &N { self.edge.target() }

    /// Returns the examined edge's weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.edge.weight() }

    /// Returns `true` when the edge was accepted into the spanning forest.
    #[must_use]
    #[rustfmt::skip]
    pub const fn accepted(&self) -> bool { self.accepted }

    /// Returns the number of accepted edges after this decision.
    #[must_use]
    #[rustfmt::skip]
    pub const fn mst_edge_count(&self) -> usize { self.mst_edge_count }
}

/// Ordered sequence of [`TraceEvent`]s, one per considered edge.
///
/// Wraps a `Vec<TraceEvent<N>>` so the representation can evolve without
/// breaking consumers. Events carry strictly sequential step numbers starting
/// at 1 and appear in non-decreasing weight order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trace<N>(Vec<TraceEvent<N>>);

impl<N: NodeId> Trace<N> {
    pub(crate) const fn new(events: Vec<TraceEvent<N>>) -> Self {
        Self(events)
    }

    /// Returns the number of recorded decisions.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.0.len() }

    /// Returns whether the trace contains no decisions.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Returns an iterator over the decisions in processing order.
    #[rustfmt::skip]
    pub fn iter(&self) -> impl Iterator<Item = &TraceEvent<N>> { self.0.iter() }

    /// Returns the decision at `index` (0-based), if present.
    #[must_use]
    #[rustfmt::skip]
    pub fn get(&self, index: usize) -> Option<&TraceEvent<N>> { self.0.get(index) }

    /// Consumes the trace and returns the underlying events.
    #[must_use]
    #[rustfmt::skip]
    pub fn into_inner(self) -> Vec<TraceEvent<N>> { self.0 }
}

impl<'a, N: NodeId> IntoIterator for &'a Trace<N> {
    type Item = &'a TraceEvent<N>;
    type IntoIter = std::slice::Iter<'a, TraceEvent<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
