//! Directed multi-edge graph stored as adjacency lists
//!
//! The edge store deliberately permits duplicates so training can append
//! observations without checking for priors; deduplication happens at query
//! time. This keeps `train` a pure accumulation step and makes repeated
//! training over the same grid idempotent at the query level.

use std::collections::HashMap;

use crate::graph::Flag;

/// Exported edge representation: one entry per source node with its raw
/// neighbor list
pub type EdgeList = Vec<(Flag, Vec<Flag>)>;

/// Directed multi-edge graph over flags
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Relation {
    edges: HashMap<Flag, Vec<Flag>>,
}

impl Relation {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a directed edge from `a` to `b`
    ///
    /// Duplicate edges are stored as-is and collapsed by [`Self::neighbors`].
    pub fn add_edge(&mut self, a: Flag, b: Flag) {
        self.edges.entry(a).or_default().push(b);
    }

    /// Append a pair of edges `a -> b` and `b -> a`
    ///
    /// Used for alias declarations, which are symmetric by definition.
    pub fn add_symmetric(&mut self, a: Flag, b: Flag) {
        self.add_edge(a, b);
        self.add_edge(b, a);
    }

    /// Direct neighbors of `node`, deduplicated in first-insertion order
    pub fn neighbors(&self, node: Flag) -> Vec<Flag> {
        let Some(raw) = self.edges.get(&node) else {
            return Vec::new();
        };
        let mut seen = Vec::with_capacity(raw.len());
        for &neighbor in raw {
            if !seen.contains(&neighbor) {
                seen.push(neighbor);
            }
        }
        seen
    }

    /// Whether any edge leaves `node`
    pub fn has_edges(&self, node: Flag) -> bool {
        self.edges.get(&node).is_some_and(|raw| !raw.is_empty())
    }

    /// Bulk-append edges from an exported edge list
    pub fn merge_edges(&mut self, list: &EdgeList) {
        for (node, neighbors) in list {
            self.edges
                .entry(*node)
                .or_default()
                .extend_from_slice(neighbors);
        }
    }

    /// Export the raw edge store, sorted by source node
    ///
    /// Duplicates are preserved so a re-imported graph is edge-identical,
    /// not merely query-equivalent.
    pub fn export_edges(&self) -> EdgeList {
        let mut list: EdgeList = self
            .edges
            .iter()
            .map(|(node, neighbors)| (*node, neighbors.clone()))
            .collect();
        list.sort_unstable_by_key(|(node, _)| *node);
        list
    }

    /// Rebuild a graph from an exported edge list
    pub fn from_edges(list: &EdgeList) -> Self {
        let mut relation = Self::new();
        relation.merge_edges(list);
        relation
    }

    /// Number of nodes with at least one outgoing edge entry
    pub fn node_count(&self) -> usize {
        self.edges.len()
    }
}
