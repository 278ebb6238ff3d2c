//! Edge-list ingestion for the treeline CLI.
//!
//! Parses whitespace-separated `source target weight` lines into an
//! [`EdgeGraph`], one edge per line. Blank lines and `#` comments are
//! skipped. The node set is derived from the edge endpoints in first-seen
//! order, so the file fully determines the graph.

use std::io::{self, BufRead};
use std::num::ParseFloatError;

use thiserror::Error;
use treeline_core::{EdgeGraph, WeightedEdge};

/// Errors surfaced while parsing an edge list.
#[derive(Debug, Error)]
pub enum EdgeListError {
    /// Reading from the underlying source failed.
    #[error("failed to read edge list")]
    Io(#[from] io::Error),
    /// A line did not match the `source target weight` shape.
    #[error("line {line}: expected `source target weight`, got `{content}`")]
    MalformedLine {
        /// 1-based line number of the offending line.
        line: usize,
        /// The offending line, trimmed.
        content: String,
    },
    /// A weight field failed to parse as a number.
    #[error("line {line}: invalid weight `{weight}`")]
    InvalidWeight {
        /// 1-based line number of the offending line.
        line: usize,
        /// The raw weight token.
        weight: String,
        /// Underlying parse failure.
        #[source]
        source: ParseFloatError,
    },
    /// The edge list contained no edges after skipping blanks and comments.
    #[error("edge list contains no edges")]
    Empty,
}

/// A named graph loaded from an edge-list source.
#[derive(Debug, Clone)]
pub struct EdgeListGraph {
    name: String,
    graph: EdgeGraph<String>,
}

impl EdgeListGraph {
    /// Parses an edge list from `reader`.
    ///
    /// # Errors
    /// Returns [`EdgeListError`] when reading fails, a line is malformed, a
    /// weight does not parse, or the list holds no edges.
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    /// use treeline_cli::edgelist::EdgeListGraph;
    ///
    /// let listing = EdgeListGraph::try_from_reader(
    ///     "demo".to_owned(),
    ///     Cursor::new("# comment\na b 1.5\nb c 2\n"),
    /// )?;
    /// assert_eq!(listing.graph().edge_count(), 2);
    /// assert_eq!(listing.graph().node_count(), 3);
    /// # Ok::<(), treeline_cli::edgelist::EdgeListError>(())
    /// ```
    pub fn try_from_reader(name: String, reader: impl BufRead) -> Result<Self, EdgeListError> {
        let mut edges = Vec::new();

        for (index, raw) in reader.lines().enumerate() {
            let raw = raw?;
            let line = index + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let mut fields = trimmed.split_whitespace();
            let (Some(source), Some(target), Some(weight)) =
                (fields.next(), fields.next(), fields.next())
            else {
                return Err(EdgeListError::MalformedLine {
                    line,
                    content: trimmed.to_owned(),
                });
            };
            if fields.next().is_some() {
                return Err(EdgeListError::MalformedLine {
                    line,
                    content: trimmed.to_owned(),
                });
            }

            let weight = weight
                .parse()
                .map_err(|source_err| EdgeListError::InvalidWeight {
                    line,
                    weight: weight.to_owned(),
                    source: source_err,
                })?;
            edges.push(WeightedEdge::new(source.to_owned(), target.to_owned(), weight));
        }

        if edges.is_empty() {
            return Err(EdgeListError::Empty);
        }

        Ok(Self {
            name,
            graph: EdgeGraph::from_edges(edges),
        })
    }

    /// Returns the display name for the loaded graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn name(&self) -> &str { &self.name }

    /// Returns the parsed graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn graph(&self) -> &EdgeGraph<String> { &self.graph }

    /// Consumes the listing and returns the parsed graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn into_graph(self) -> EdgeGraph<String> { self.graph }
}
