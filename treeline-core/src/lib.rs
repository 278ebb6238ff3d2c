//! Treeline core library.
//!
//! Computes minimum spanning trees and forests with Kruskal's algorithm and
//! records an ordered trace of every accept/reject decision. Presentation
//! layers (CLI renderers, GUIs, test harnesses) replay the trace in order to
//! show the construction without re-running the algorithm.
//!
//! A run is configured through [`KruskalBuilder`] and executed by
//! [`Kruskal::run`], which returns an [`MstRun`] holding the accepted edges,
//! the total weight, and the full [`Trace`]. Trace step ordering is
//! deterministic: edges are processed in ascending weight order with ties
//! broken by their position in the input sequence.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod engine;
mod error;
mod graph;
mod mst;
mod trace;

pub use crate::{
    builder::{KruskalBuilder, TraceMode},
    engine::Kruskal,
    error::{MstError, MstErrorCode, Result},
    graph::{EdgeGraph, NodeId, WeightedEdge},
    mst::{DisjointSet, MstRun},
    trace::{Trace, TraceEvent},
};
