//! Disjoint-set (union-find) tracking of connected components.
//!
//! The engine consults this structure once per candidate edge to decide
//! whether the edge would close a cycle. The parent mapping is keyed by the
//! caller's node type; a node that is its own parent is a component root.
//! Union only ever attaches one root beneath another, so the mapping stays
//! acyclic and `find` always terminates.

use std::collections::HashMap;

use crate::{
    error::MstError,
    graph::{NodeId, node_label},
};

/// Partition of a node set into connected components.
///
/// `find` uses an iterative walk with full path compression: after locating
/// the root, every node visited on the way is re-pointed directly at it, so
/// repeated lookups stay near-constant even on adversarial union chains.
///
/// # Examples
/// ```
/// use treeline_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(&["a", "b", "c"])?;
/// assert_eq!(sets.components(), 3);
/// assert!(sets.union(&"a", &"b")?);
/// assert!(!sets.union(&"b", &"a")?);
/// assert!(sets.connected(&"a", &"b")?);
/// assert_eq!(sets.components(), 2);
/// # Ok::<(), treeline_core::MstError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet<N> {
    parent: HashMap<N, N>,
    components: usize,
}

impl<N: NodeId> DisjointSet<N> {
    /// Creates a partition with every node in its own singleton component.
    ///
    /// # Errors
    /// Returns [`MstError::EmptyNodeSet`] when `nodes` is empty and
    /// [`MstError::DuplicateNode`] when the same identifier appears twice;
    /// callers must supply set semantics.
    pub fn new(nodes: &[N]) -> Result<Self, MstError> {
        if nodes.is_empty() {
            return Err(MstError::EmptyNodeSet);
        }

        let mut parent = HashMap::with_capacity(nodes.len());
        for node in nodes {
            if parent.insert(node.clone(), node.clone()).is_some() {
                return Err(MstError::DuplicateNode {
                    node: node_label(node),
                });
            }
        }

        Ok(Self {
            components: parent.len(),
            parent,
        })
    }

    /// Returns the number of nodes in the partition.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.parent.len() }

    /// Returns whether the partition tracks no nodes.
    ///
    /// Construction rejects empty node sets, so this is only `false` in
    /// practice; it exists to complete the collection surface.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.parent.is_empty() }

    /// Returns the number of remaining components.
    #[must_use]
    #[rustfmt::skip]
    pub const fn components(&self) -> usize { self.components }

    /// Returns whether `node` is a member of the initialised set.
    #[must_use]
    pub fn contains(&self, node: &N) -> bool {
        self.parent.contains_key(node)
    }

    /// Returns the root representative of `node`'s component.
    ///
    /// Applies path compression: every node visited during the walk is
    /// re-pointed directly at the discovered root.
    ///
    /// # Errors
    /// Returns [`MstError::UnknownNode`] when `node` was not part of the
    /// initialised set.
    pub fn find(&mut self, node: &N) -> Result<N, MstError> {
        if !self.parent.contains_key(node) {
            return Err(MstError::UnknownNode {
                node: node_label(node),
            });
        }

        let mut root = node.clone();
        while let Some(next) = self.parent.get(&root) {
            if *next == root {
                break;
            }
            root = next.clone();
        }

        // Second pass: re-point everything on the walked chain at the root.
        // `insert` hands back the node's previous parent, which is the next
        // link in the chain.
        let mut current = node.clone();
        while current != root {
            match self.parent.insert(current, root.clone()) {
                Some(previous) => current = previous,
                None => break,
            }
        }

        Ok(root)
    }

    /// Merges the components containing `left` and `right`.
    ///
    /// Returns `false` when both endpoints already share a root (the merge
    /// would close a cycle) and `true` when `right`'s root was attached
    /// beneath `left`'s root. The attachment direction is fixed, so traces
    /// built on top of this structure replay identically across runs.
    ///
    /// # Errors
    /// Returns [`MstError::UnknownNode`] when either endpoint is outside the
    /// initialised set.
    pub fn union(&mut self, left: &N, right: &N) -> Result<bool, MstError> {
        let left_root = self.find(left)?;
        let right_root = self.find(right)?;

        if left_root == right_root {
            return Ok(false);
        }

        self.parent.insert(right_root, left_root);
        self.components = self.components.saturating_sub(1);
        Ok(true)
    }

    /// Returns whether both nodes currently share a component.
    ///
    /// # Errors
    /// Returns [`MstError::UnknownNode`] when either node is outside the
    /// initialised set.
    pub fn connected(&mut self, left: &N, right: &N) -> Result<bool, MstError> {
        Ok(self.find(left)? == self.find(right)?)
    }
}
