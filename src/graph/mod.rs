//! Flag identifiers and the adjacency graph primitive
//!
//! Adjacency learned from training grids is stored per axis: one directed
//! graph for "what appears to the right of what" and one for "what appears
//! below what". A third, symmetric instance records declared alias
//! equivalences.

/// Directed multi-edge adjacency-list graph over flags
pub mod relation;

pub use relation::Relation;

/// Dense integer identifier assigned to a distinct element in first-seen order
pub type Flag = u32;

/// Sentinel flag meaning "no known mapping"
///
/// Real flags start at 1; a grid cell holding `NO_FLAG` is unresolved.
pub const NO_FLAG: Flag = 0;

/// Adjacency axis selector
///
/// `Right` queries the x graph (left neighbor → right neighbor), `Down`
/// queries the y graph (top neighbor → bottom neighbor).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Rightward adjacency: edge (a, b) means b was observed right of a
    Right,
    /// Downward adjacency: edge (a, b) means b was observed below a
    Down,
}
