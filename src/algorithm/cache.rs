//! Memoization cache for alias and neighbor expansion queries
//!
//! The generator's inner scan is O(rows * cols * candidates), and the same
//! flags are expanded over and over; caching turns each repeat into a map
//! hit. [`crate::Trainer::generate`] scopes a fresh cache per call. A caller
//! may instead keep a persistent cache across calls via
//! [`crate::Trainer::generate_with_cache`]; that cache is not invalidated
//! automatically, so after any further `train`/`ally`/`load` on the trainer
//! the caller must [`QueryCache::clear`] it or stale expansions will be
//! served.

use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;

use crate::algorithm::flagset::FlagSet;
use crate::graph::{Axis, Flag};
use crate::training::trainer::Trainer;

/// Performance metrics for cache effectiveness
#[derive(Clone, Copy, Debug, Default)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

/// Memoizes alias, neighbor, and expanded-neighbor queries keyed by
/// (graph identity, flag)
#[derive(Debug, Default)]
pub struct QueryCache {
    alias_map: HashMap<Flag, Rc<Vec<Flag>>>,
    neighbor_map: HashMap<(Axis, Flag), Rc<Vec<Flag>>>,
    expansion_map: HashMap<(Axis, Flag), Rc<FlagSet>>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

impl QueryCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every memoized entry
    ///
    /// Required after `train`/`ally`/`load` mutate the graphs a persistent
    /// cache was built against. Statistics are preserved.
    pub fn clear(&mut self) {
        self.alias_map.clear();
        self.neighbor_map.clear();
        self.expansion_map.clear();
    }

    /// Memoized [`Trainer::aliases`]
    pub fn aliases<E: Clone + Eq + Hash>(
        &mut self,
        trainer: &Trainer<E>,
        flag: Flag,
    ) -> Rc<Vec<Flag>> {
        if let Some(cached) = self.alias_map.get(&flag) {
            self.stats.hits += 1;
            return Rc::clone(cached);
        }
        self.stats.misses += 1;
        let computed = Rc::new(trainer.aliases(flag));
        self.alias_map.insert(flag, Rc::clone(&computed));
        computed
    }

    /// Memoized [`Trainer::neighbors`]
    pub fn neighbors<E: Clone + Eq + Hash>(
        &mut self,
        trainer: &Trainer<E>,
        axis: Axis,
        flag: Flag,
    ) -> Rc<Vec<Flag>> {
        if let Some(cached) = self.neighbor_map.get(&(axis, flag)) {
            self.stats.hits += 1;
            return Rc::clone(cached);
        }
        self.stats.misses += 1;
        let computed = Rc::new(trainer.neighbors(axis, flag));
        self.neighbor_map.insert((axis, flag), Rc::clone(&computed));
        computed
    }

    /// Memoized [`Trainer::expanded_neighbors`], as a set
    ///
    /// Built from the memoized alias and neighbor queries, so a cold
    /// expansion still warms the smaller caches it touches.
    pub fn expanded_neighbors<E: Clone + Eq + Hash>(
        &mut self,
        trainer: &Trainer<E>,
        axis: Axis,
        flag: Flag,
    ) -> Rc<FlagSet> {
        if let Some(cached) = self.expansion_map.get(&(axis, flag)) {
            self.stats.hits += 1;
            return Rc::clone(cached);
        }
        self.stats.misses += 1;

        let capacity = trainer.registry().len();
        let mut set = FlagSet::new(capacity);
        let sources = self.aliases(trainer, flag);
        for &alias in sources.iter() {
            let direct = self.neighbors(trainer, axis, alias);
            for &neighbor in direct.iter() {
                let expanded = self.aliases(trainer, neighbor);
                for &result in expanded.iter() {
                    set.insert(result);
                }
            }
        }

        let computed = Rc::new(set);
        self.expansion_map
            .insert((axis, flag), Rc::clone(&computed));
        computed
    }
}
