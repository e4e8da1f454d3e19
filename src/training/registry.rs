//! Bidirectional element-to-flag table
//!
//! Flags are dense positive integers handed out in first-seen order and
//! never reused; 0 is reserved as the "no known mapping" sentinel. The
//! registry keeps a flag-ordered reverse index alongside the forward map, so
//! both directions are O(1).

use std::collections::HashMap;
use std::hash::Hash;

use crate::graph::{Flag, NO_FLAG};
use crate::spatial::Grid;

/// Element-to-flag registry
#[derive(Clone, Debug)]
pub struct ElementRegistry<E> {
    flags: HashMap<E, Flag>,
    elements: Vec<E>,
}

impl<E> Default for ElementRegistry<E> {
    fn default() -> Self {
        Self {
            flags: HashMap::new(),
            elements: Vec::new(),
        }
    }
}

impl<E: Clone + Eq + Hash> ElementRegistry<E> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            flags: HashMap::new(),
            elements: Vec::new(),
        }
    }

    /// Number of registered elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether no elements are registered
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Return the element's flag, assigning the next one on first encounter
    pub fn ensure_flag(&mut self, element: &E) -> Flag {
        if let Some(&flag) = self.flags.get(element) {
            return flag;
        }
        let flag = (self.elements.len() + 1) as Flag;
        self.flags.insert(element.clone(), flag);
        self.elements.push(element.clone());
        flag
    }

    /// Read-only lookup; [`NO_FLAG`] when the element is unknown
    pub fn flag_of(&self, element: &E) -> Flag {
        self.flags.get(element).copied().unwrap_or(NO_FLAG)
    }

    /// Reverse lookup; `None` for [`NO_FLAG`] or unassigned flags
    pub fn element_of(&self, flag: Flag) -> Option<&E> {
        if flag == NO_FLAG {
            return None;
        }
        self.elements.get(flag as usize - 1)
    }

    /// Map every cell through [`Self::ensure_flag`]
    ///
    /// Registers any elements not seen before as a side effect and returns a
    /// same-shaped flag grid.
    pub fn embed(&mut self, grid: &Grid<E>) -> Grid<Flag> {
        let flags = grid.iter().map(|cell| self.ensure_flag(cell)).collect();
        // Same cell count by construction, so this cannot fail
        Grid::new(grid.rows(), grid.cols(), flags)
            .unwrap_or_else(|_| Grid::zeros(grid.rows(), grid.cols()))
    }

    /// Reverse-map a flag grid back to elements
    ///
    /// Cells holding [`NO_FLAG`] or any unassigned flag become
    /// `unknown_fill`.
    pub fn restore(&self, flags: &Grid<Flag>, unknown_fill: &E) -> Grid<E> {
        let elements = flags
            .iter()
            .map(|&flag| {
                self.element_of(flag)
                    .cloned()
                    .unwrap_or_else(|| unknown_fill.clone())
            })
            .collect();
        Grid::new(flags.rows(), flags.cols(), elements)
            .unwrap_or_else(|_| Grid::filled(flags.rows(), flags.cols(), unknown_fill.clone()))
    }

    /// Export (element, flag) pairs in flag order
    pub fn entries(&self) -> Vec<(E, Flag)> {
        self.elements
            .iter()
            .enumerate()
            .map(|(index, element)| (element.clone(), (index + 1) as Flag))
            .collect()
    }

    /// Rebuild a registry from exported entries
    ///
    /// Entries may arrive in any order; flags are expected to be the dense
    /// `1..=n` range produced by [`Self::entries`].
    pub fn from_entries(entries: &[(E, Flag)]) -> Self {
        let mut ordered: Vec<(E, Flag)> = entries.to_vec();
        ordered.sort_unstable_by_key(|(_, flag)| *flag);

        let mut registry = Self::new();
        for (element, _) in ordered {
            registry.ensure_flag(&element);
        }
        registry
    }
}
