//! Builder utilities for configuring spanning-tree runs.
//!
//! Exposes the trace-mode selection surface used before constructing
//! [`Kruskal`] engines.

use crate::engine::Kruskal;

/// Controls how much of the edge sequence a run processes and traces.
///
/// `Exhaustive` is the reference behaviour: every edge is evaluated and
/// traced, even after the spanning tree is already complete, so the trace
/// shows the full decision process. `StopAtSpanning` is a distinct
/// performance mode that halts once a single spanning component exists; its
/// trace is correspondingly shorter and the two modes are never substituted
/// for one another.
///
/// # Examples
/// ```
/// use treeline_core::TraceMode;
///
/// let mode = TraceMode::Exhaustive;
/// assert!(matches!(mode, TraceMode::Exhaustive));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceMode {
    /// Evaluate and trace every edge in the input.
    Exhaustive,
    /// Stop once the accepted edges span a single connected component.
    StopAtSpanning,
}

/// Configures and constructs [`Kruskal`] engines.
///
/// # Examples
/// ```
/// use treeline_core::{KruskalBuilder, TraceMode};
///
/// let engine = KruskalBuilder::new()
///     .with_trace_mode(TraceMode::StopAtSpanning)
///     .build();
/// assert_eq!(engine.trace_mode(), TraceMode::StopAtSpanning);
/// ```
#[derive(Debug, Clone)]
pub struct KruskalBuilder {
    trace_mode: TraceMode,
}

impl Default for KruskalBuilder {
    fn default() -> Self {
        Self {
            trace_mode: TraceMode::Exhaustive,
        }
    }
}

impl KruskalBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use treeline_core::{KruskalBuilder, TraceMode};
    ///
    /// let builder = KruskalBuilder::new();
    /// assert_eq!(builder.trace_mode(), TraceMode::Exhaustive);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the trace mode to use when running the algorithm.
    ///
    /// # Examples
    /// ```
    /// use treeline_core::{KruskalBuilder, TraceMode};
    ///
    /// let builder = KruskalBuilder::new().with_trace_mode(TraceMode::StopAtSpanning);
    /// assert_eq!(builder.trace_mode(), TraceMode::StopAtSpanning);
    /// ```
    #[must_use]
    pub const fn with_trace_mode(mut self, mode: TraceMode) -> Self {
        self.trace_mode = mode;
        self
    }

    /// Returns the currently configured trace mode.
    ///
    /// # Examples
    /// ```
    /// use treeline_core::{KruskalBuilder, TraceMode};
    ///
    /// let builder = KruskalBuilder::new();
    /// assert_eq!(builder.trace_mode(), TraceMode::Exhaustive);
    /// ```
    #[must_use]
    pub const fn trace_mode(&self) -> TraceMode {
        self.trace_mode
    }

    /// Constructs a [`Kruskal`] engine from the configuration.
    ///
    /// Construction is infallible: every mode combination is valid.
    ///
    /// # Examples
    /// ```
    /// use treeline_core::KruskalBuilder;
    ///
    /// let engine = KruskalBuilder::new().build();
    /// assert_eq!(engine.trace_mode(), treeline_core::TraceMode::Exhaustive);
    /// ```
    #[must_use]
    pub const fn build(self) -> Kruskal {
        Kruskal::new(self.trace_mode)
    }
}
