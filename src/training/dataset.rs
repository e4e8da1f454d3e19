//! Serialized trained state
//!
//! The dataset is the only durable representation the core defines: plain
//! data with no file-format opinion. A persistence collaborator decides how
//! it reaches disk; loading it back must reproduce query-equivalent state.

use crate::graph::Flag;
use crate::graph::relation::EdgeList;

/// The full trained state as a plain-data 4-tuple
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dataset<E> {
    /// Registered (element, flag) pairs in flag order
    pub entries: Vec<(E, Flag)>,
    /// Rightward adjacency edges
    pub x_edges: EdgeList,
    /// Downward adjacency edges
    pub y_edges: EdgeList,
    /// Symmetric alias edges
    pub alias_edges: EdgeList,
}
