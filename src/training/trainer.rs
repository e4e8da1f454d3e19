//! Adjacency and alias accumulation over example grids
//!
//! Training is existence-only: an edge records that one flag was observed
//! next to another on some axis, with no weighting. Flags and edges grow
//! monotonically across `train`/`ally` calls; only `load` replaces state,
//! and it replaces all of it atomically.

use std::hash::Hash;

use crate::graph::relation::Relation;
use crate::graph::{Axis, Flag};
use crate::spatial::Grid;
use crate::training::dataset::Dataset;
use crate::training::registry::ElementRegistry;

/// One declared equivalence group: a representative and the elements an
/// external similarity metric judged interchangeable with it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AliasGroup<E> {
    /// The group's canonical element
    pub representative: E,
    /// Elements declared interchangeable with the representative
    pub similar: Vec<E>,
}

/// Accumulated adjacency state: registry plus three graphs
#[derive(Clone, Debug)]
pub struct Trainer<E> {
    registry: ElementRegistry<E>,
    x_graph: Relation,
    y_graph: Relation,
    alias_graph: Relation,
}

impl<E> Default for Trainer<E> {
    fn default() -> Self {
        Self {
            registry: ElementRegistry::default(),
            x_graph: Relation::new(),
            y_graph: Relation::new(),
            alias_graph: Relation::new(),
        }
    }
}

impl<E: Clone + Eq + Hash> Trainer<E> {
    /// Create an empty trainer
    pub fn new() -> Self {
        Self {
            registry: ElementRegistry::new(),
            x_graph: Relation::new(),
            y_graph: Relation::new(),
            alias_graph: Relation::new(),
        }
    }

    /// Borrow the element registry
    pub fn registry(&self) -> &ElementRegistry<E> {
        &self.registry
    }

    /// Accumulate adjacency edges from one example grid
    ///
    /// Every cell is registered; each cell with a cell above contributes a
    /// downward edge (above -> current), each cell with a cell to the left a
    /// rightward edge (left -> current). Repeatable over many grids, and
    /// idempotent at the query level when repeated on the same grid.
    pub fn train(&mut self, grid: &Grid<E>) {
        let flags = self.registry.embed(grid);
        for row in 0..flags.rows() {
            for col in 0..flags.cols() {
                let Ok(&current) = flags.get(row, col) else {
                    continue;
                };
                if row > 0 {
                    if let Ok(&above) = flags.get(row - 1, col) {
                        self.y_graph.add_edge(above, current);
                    }
                }
                if col > 0 {
                    if let Ok(&left) = flags.get(row, col - 1) {
                        self.x_graph.add_edge(left, current);
                    }
                }
            }
        }
    }

    /// Declare alias equivalence groups
    ///
    /// Registers every element's flag and adds a symmetric alias edge between
    /// the representative and each similar element. Duplicate declarations
    /// collapse at query time.
    pub fn ally(&mut self, groups: &[AliasGroup<E>]) {
        for group in groups {
            let representative = self.registry.ensure_flag(&group.representative);
            for element in &group.similar {
                let similar = self.registry.ensure_flag(element);
                self.alias_graph.add_symmetric(representative, similar);
            }
        }
    }

    /// Export the full trained state
    pub fn dataset(&self) -> Dataset<E> {
        Dataset {
            entries: self.registry.entries(),
            x_edges: self.x_graph.export_edges(),
            y_edges: self.y_graph.export_edges(),
            alias_edges: self.alias_graph.export_edges(),
        }
    }

    /// Replace all trained state with a previously exported dataset
    ///
    /// Full replacement, never a merge: registry and all three graphs are
    /// rebuilt from the dataset in one step.
    pub fn load(&mut self, dataset: &Dataset<E>) {
        self.registry = ElementRegistry::from_entries(&dataset.entries);
        self.x_graph = Relation::from_edges(&dataset.x_edges);
        self.y_graph = Relation::from_edges(&dataset.y_edges);
        self.alias_graph = Relation::from_edges(&dataset.alias_edges);
    }

    /// Borrow the adjacency graph for an axis
    pub const fn graph(&self, axis: Axis) -> &Relation {
        match axis {
            Axis::Right => &self.x_graph,
            Axis::Down => &self.y_graph,
        }
    }

    /// Direct deduplicated neighbors of `flag` on the given axis
    pub fn neighbors(&self, axis: Axis, flag: Flag) -> Vec<Flag> {
        self.graph(axis).neighbors(flag)
    }

    /// All aliases of `flag`, including the flag itself
    pub fn aliases(&self, flag: Flag) -> Vec<Flag> {
        let mut result = vec![flag];
        for alias in self.alias_graph.neighbors(flag) {
            if !result.contains(&alias) {
                result.push(alias);
            }
        }
        result
    }

    /// Alias-expanded neighbors of `flag` on the given axis
    ///
    /// The union over every alias of `flag` of that alias's direct neighbors,
    /// with each resulting flag expanded again to its own aliases. The
    /// returned set therefore already contains "alias of a direct neighbor of
    /// an alias". Deduplicated, ascending flag order.
    pub fn expanded_neighbors(&self, axis: Axis, flag: Flag) -> Vec<Flag> {
        let mut result: Vec<Flag> = Vec::new();
        for alias in self.aliases(flag) {
            for neighbor in self.neighbors(axis, alias) {
                for expanded in self.aliases(neighbor) {
                    if !result.contains(&expanded) {
                        result.push(expanded);
                    }
                }
            }
        }
        result.sort_unstable();
        result
    }
}
